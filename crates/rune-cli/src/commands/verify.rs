use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use rune_code::enumerate_patterns;
use rune_store::CodeCache;

#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Bit length of the table to verify.
    #[arg(long)]
    pub bits: usize,
    /// Cache directory holding the persisted tables.
    #[arg(long)]
    pub store: PathBuf,
}

pub fn run(args: &VerifyArgs) -> Result<(), Box<dyn Error>> {
    let cache = CodeCache::new(&args.store);
    let table = cache.fetch(args.bits)?;
    let rows = table.rows();

    for (i, left) in rows.iter().enumerate() {
        for (j, right) in rows.iter().enumerate().skip(i + 1) {
            if left.is_rotation_of(right) {
                return Err(format!(
                    "rows {i} and {j} ({left} and {right}) share a rotation class"
                )
                .into());
            }
        }
    }

    for candidate in enumerate_patterns(args.bits)? {
        let owners = rows
            .iter()
            .filter(|row| row.is_rotation_of(&candidate))
            .count();
        if owners != 1 {
            return Err(format!(
                "pattern {candidate} is covered by {owners} rows, expected exactly 1"
            )
            .into());
        }
    }

    println!(
        "table verified: {} codes of width {}, hash {}",
        table.len(),
        table.bit_length(),
        table.canonical_hash()
    );
    Ok(())
}
