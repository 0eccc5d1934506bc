use std::{io::Write, path::PathBuf};

use clap::Args;
use eyre::{Context, Result};
use jsonclass_codegen::GenerationMode;
use jsonclass_codegen_cpp::{ClassEmitter, EmitOptions};
use jsonclass_core::{GeneratedFile, WriteResult};

use super::UnwrapOrExit;
use crate::{config::Config, input::ExampleInput};

#[derive(Args)]
pub struct GenerateCommand {
    /// Example file: a '#<name>' line followed by a JSON document
    pub file: PathBuf,

    /// Materialize fields on first access instead of on load
    #[arg(long)]
    pub lazy: bool,

    /// Output directory (defaults to `output_dir` from the config, then `.`)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Only print the generated header, do not write it
    #[arg(long)]
    pub stdout: bool,

    /// Leave an existing header untouched
    #[arg(long)]
    pub no_clobber: bool,

    /// Path to a config file (defaults to ./jsonclass.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let config = Config::load(self.config.as_deref()).unwrap_or_exit();
        let input = ExampleInput::open(&self.file).unwrap_or_exit();

        let emitter = ClassEmitter::new(self.options(&config));
        let header = emitter
            .header_file(&input.name, &input.document, config.extension())
            .unwrap_or_exit();
        let header = if self.no_clobber {
            header.keep_existing()
        } else {
            header
        };

        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(header.content().as_bytes())
            .wrap_err("Failed to write to stdout")?;
        stdout.flush().wrap_err("Failed to write to stdout")?;

        if self.stdout {
            return Ok(());
        }

        let dir = self
            .output
            .clone()
            .or_else(|| config.output_dir.clone())
            .unwrap_or_else(|| PathBuf::from("."));
        std::fs::create_dir_all(&dir)
            .wrap_err_with(|| format!("Failed to create {}", dir.display()))?;

        match header.write(&dir).wrap_err("Failed to write header")? {
            WriteResult::Written(path) => eprintln!("Generated: {}", path.display()),
            WriteResult::Skipped(path) => eprintln!("Kept existing: {}", path.display()),
        }
        Ok(())
    }

    fn options(&self, config: &Config) -> EmitOptions {
        let mode = if self.lazy {
            GenerationMode::Lazy
        } else {
            config.mode()
        };
        EmitOptions::new(mode).with_indent(config.indent())
    }
}
