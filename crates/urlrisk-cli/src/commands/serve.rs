//! Web server command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;
use urlrisk_web::ServerConfig;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value = "3000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Also write logs to a file
    #[arg(long)]
    pub log: bool,

    /// Log file used with --log
    #[arg(long, default_value = "urlrisk-serve.log")]
    pub log_file: PathBuf,
}

pub async fn execute(args: ServeArgs) -> Result<()> {
    let config = ServerConfig {
        host: args.host,
        port: args.port,
    };

    println!();
    println!("  {} {}", "urlrisk".cyan().bold(), "API Server".bold());
    println!();
    println!(
        "  {}  POST http://{}/api/scan",
        "Scan".green(),
        config.addr()
    );
    if args.log {
        println!("  {}   {}", "Log".green(), args.log_file.display());
    }
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    urlrisk_web::run_server(config).await?;

    Ok(())
}
