use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Map the `-v` count to the default log level.
fn default_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    }
}

/// Install the stderr subscriber. `RUST_LOG` directives take precedence
/// over the verbosity flag.
pub fn init(verbose: u8) {
    let filter = EnvFilter::builder()
        .with_default_directive(default_level(verbose).into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}
