//! CLI entrypoint for `login-screen`.

use clap::Parser;
use login_screen::{Cli, LoginScreenError};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), LoginScreenError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let stdout = std::io::stdout();
    login_screen::run(&cli, &mut stdout.lock())
}
