// cli.rs - Command-line interface configuration
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "dev-portfolio")]
#[command(about = "Single-page developer portfolio with a decorative 3D scene", long_about = None)]
pub struct Cli {
    /// TOML configuration file
    #[arg(long, default_value = "conf/config.toml")]
    pub config: PathBuf,

    /// Content document path or http(s) URL (overrides the config file)
    #[arg(long)]
    pub content: Option<String>,

    /// User-agent string used for device-class detection
    #[arg(long = "user-agent")]
    pub user_agent: Option<String>,

    /// Disable the background scene
    #[arg(long = "no-scene", default_value = "false")]
    pub no_scene: bool,

    /// Initial window width in logical pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Initial window height in logical pixels
    #[arg(long)]
    pub height: Option<u32>,
}
