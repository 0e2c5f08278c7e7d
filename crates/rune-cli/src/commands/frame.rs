use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use rune_glyph::{GlyphMapper, GlyphSpec};
use rune_store::CodeCache;

#[derive(Args, Debug)]
pub struct FrameArgs {
    /// Comma separated attribute ranks, one per attribute.
    #[arg(long)]
    pub ranks: String,
    /// Cache directory holding the persisted tables.
    #[arg(long)]
    pub store: PathBuf,
    /// Set the concentration marker flag on the frame.
    #[arg(long)]
    pub concentration: bool,
    /// Set the ritual marker flag on the frame.
    #[arg(long)]
    pub ritual: bool,
    /// Emit the frame as JSON instead of one row per line.
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &FrameArgs) -> Result<(), Box<dyn Error>> {
    let attribute_ranks = parse_ranks(&args.ranks)?;
    let mapper = GlyphMapper::new(CodeCache::new(&args.store));
    let spec = GlyphSpec {
        attribute_ranks,
        concentration: args.concentration,
        ritual: args.ritual,
    };
    let frame = mapper.frame(&spec)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&frame)?);
        return Ok(());
    }
    println!("frame of width {}", frame.bit_length);
    for (position, pattern) in frame.patterns.iter().enumerate() {
        println!("{position:>4} {pattern}");
    }
    if frame.concentration {
        println!("marker: concentration");
    }
    if frame.ritual {
        println!("marker: ritual");
    }
    Ok(())
}

fn parse_ranks(raw: &str) -> Result<Vec<usize>, Box<dyn Error>> {
    raw.split(',')
        .map(|part| {
            part.trim()
                .parse::<usize>()
                .map_err(|err| format!("invalid rank {part:?}: {err}").into())
        })
        .collect()
}
