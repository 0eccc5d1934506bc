mod completions;
mod generate;
mod inspect;

use clap::{Parser, Subcommand, error::ErrorKind};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use inspect::InspectCommand;

/// Extension trait for exiting on diagnostics with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for crate::error::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => exit_with(*e),
        }
    }
}

impl<T> UnwrapOrExit<T> for jsonclass_codegen::schema::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => exit_with(e),
        }
    }
}

fn exit_with<E>(error: E) -> !
where
    E: miette::Diagnostic + Send + Sync + 'static,
{
    eprintln!("{:?}", miette::Report::new(error));
    std::process::exit(1);
}

#[derive(Parser)]
#[command(name = "jsonclass")]
#[command(version)]
#[command(about = "Generate C++ classes for nlohmann::json from an example JSON document")]
pub(crate) struct Cli {
    /// Raise log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Parse process arguments. Help and version exit with 0, every other
    /// usage error with 1.
    pub fn parse_or_exit() -> Self {
        match Self::try_parse() {
            Ok(cli) => cli,
            Err(e) => {
                let _ = e.print();
                std::process::exit(usage_exit_code(&e));
            }
        }
    }

    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Inspect(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

fn usage_exit_code(error: &clap::Error) -> i32 {
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a C++ header from an example file
    Generate(GenerateCommand),

    /// Show the schema inferred from an example file
    Inspect(InspectCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
