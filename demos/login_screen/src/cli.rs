//! Command-line interface definitions for `login-screen`.

use camino::Utf8PathBuf;
use clap::Parser;

/// Parsed CLI arguments for `login-screen`.
#[derive(Debug, Clone, Parser)]
#[command(name = "login-screen")]
#[command(about = "Render a localised login screen")]
#[command(version)]
pub struct Cli {
    /// Locale to render the screen in.
    #[arg(long, env = "LOGIN_SCREEN_LOCALE", default_value = "en-US")]
    pub locale: String,
    /// Directory holding one sub-directory of `.ftl` tables per locale.
    #[arg(long, value_name = "path")]
    pub strings_dir: Option<Utf8PathBuf>,
    /// Tap the second button, selecting the first.
    #[arg(long = "select")]
    pub should_select: bool,
    /// Hold the second button down.
    #[arg(long = "highlight")]
    pub should_highlight: bool,
}
