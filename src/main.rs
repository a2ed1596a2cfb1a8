use std::env;
use std::process::ExitCode;

use mhrb::cli;
use mhrb::config::AppConfig;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::from_env();
    let args: Vec<String> = env::args().collect();
    let code = cli::run_with_args(&args, &config);
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
