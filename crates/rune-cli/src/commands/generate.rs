use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use rune_store::{CodeCache, TableSource};

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Bit length of the table to generate.
    #[arg(long)]
    pub bits: usize,
    /// Cache directory holding the persisted tables.
    #[arg(long)]
    pub store: PathBuf,
}

pub fn run(args: &GenerateArgs) -> Result<(), Box<dyn Error>> {
    let cache = CodeCache::new(&args.store);
    let (table, outcome) = cache.fetch_with_outcome(args.bits)?;
    let source = match outcome.source {
        TableSource::Cache => "cache",
        TableSource::Computed => "computed",
    };
    println!(
        "{} codes of width {} ({source})",
        table.len(),
        table.bit_length()
    );
    println!("table hash {}", table.canonical_hash());
    if let Some(persist_error) = &outcome.persist_error {
        println!("warning: table not persisted: {persist_error}");
    }
    Ok(())
}
