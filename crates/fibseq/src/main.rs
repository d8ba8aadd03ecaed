//! fibonacci — print F(n), or stream the sequence when no index is given.

use fibseq_lib::{app, config, errors};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() {
    // Logs go to stderr; stdout carries only terms and messages.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .init();

    let config = config::AppConfig::parse();
    let result = app::run(&config);
    if let Err(e) = &result {
        eprintln!("Error: {e:#}");
    }
    std::process::exit(errors::exit_code(&result));
}
