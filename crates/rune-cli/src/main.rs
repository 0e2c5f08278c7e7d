use std::error::Error;

use clap::{Parser, Subcommand};
use commands::{
    frame::{self, FrameArgs},
    generate::{self, GenerateArgs},
    show::{self, ShowArgs},
    verify::{self, VerifyArgs},
    version::{self, VersionArgs},
};

mod commands;

#[derive(Parser, Debug)]
#[command(name = "rune", about = "Necklace code table generator CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Populate or read the cached code table for a bit length.
    Generate(GenerateArgs),
    /// Print rows of a cached code table.
    Show(ShowArgs),
    /// Exhaustively check a cached table against a fresh enumeration.
    Verify(VerifyArgs),
    /// Resolve attribute ranks to a glyph pattern frame.
    Frame(FrameArgs),
    /// Print version information.
    Version(VersionArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    match cli.command {
        Command::Generate(args) => generate::run(&args),
        Command::Show(args) => show::run(&args),
        Command::Verify(args) => verify::run(&args),
        Command::Frame(args) => frame::run(&args),
        Command::Version(args) => version::run(&args),
    }
}
