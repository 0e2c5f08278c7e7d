use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use rune_code::to_json;
use rune_store::CodeCache;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Bit length of the table to print.
    #[arg(long)]
    pub bits: usize,
    /// Cache directory holding the persisted tables.
    #[arg(long)]
    pub store: PathBuf,
    /// Print only the row stored under this code id.
    #[arg(long)]
    pub index: Option<usize>,
    /// Emit the full serialized table as JSON.
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &ShowArgs) -> Result<(), Box<dyn Error>> {
    let cache = CodeCache::new(&args.store);
    let table = cache.fetch(args.bits)?;
    if args.json {
        println!("{}", to_json(&table)?);
        return Ok(());
    }
    if let Some(index) = args.index {
        let row = table
            .get(index)
            .ok_or_else(|| format!("code id {index} out of range (table holds {})", table.len()))?;
        println!("{index:>4} {row}");
        return Ok(());
    }
    for (code_id, row) in table.rows().iter().enumerate() {
        println!("{code_id:>4} {row}");
    }
    Ok(())
}
