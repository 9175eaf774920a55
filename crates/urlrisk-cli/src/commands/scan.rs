//! Offline scan command.

use anyhow::Result;
use clap::Args;
use urlrisk_core::scan_url;

use crate::output;

#[derive(Args)]
pub struct ScanArgs {
    /// URL to score
    pub url: String,

    /// Print the result as JSON, as the API would return it
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: ScanArgs) -> Result<()> {
    let result = scan_url(&args.url)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        output::print_scan_result(&result);
    }

    Ok(())
}
