use std::error::Error;

use clap::Args;
use serde_json::json;

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Emit version metadata as JSON.
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &VersionArgs) -> Result<(), Box<dyn Error>> {
    if !args.json {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }
    let info = json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    });
    println!("{}", serde_json::to_string_pretty(&info)?);
    Ok(())
}
