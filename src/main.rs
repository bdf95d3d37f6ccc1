//! binder - assemble a book from scene files

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use binder::{assemble_markdown, AssemblyConfig};

#[derive(Parser)]
#[command(name = "binder")]
#[command(version, about = "Assemble a book", long_about = None)]
#[command(after_help = "EXAMPLES:
    binder -i book.yaml markdown -o build       Assemble chapters into build/
    binder -i book.yaml md -o build -w          Also print per-scene word counts")]
struct Cli {
    /// Path to the book YAML file
    #[arg(short, long, value_name = "PATH")]
    input: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Assemble the book in Markdown format
    #[command(visible_aliases = ["md", "m"])]
    Markdown {
        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        outdir: PathBuf,

        /// Print word count for each scene
        #[arg(short, long)]
        wordcount: bool,

        /// Write a sub-heading for each scene
        #[arg(short, long)]
        scene_headings: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> binder::Result<()> {
    match cli.command {
        Command::Markdown {
            outdir,
            wordcount,
            scene_headings,
        } => {
            let config = AssemblyConfig {
                input_file: cli.input,
                output_dir: outdir,
                word_count: wordcount,
                scene_headings,
            };
            let (_, counts) = assemble_markdown(&config)?;
            for wc in &counts {
                println!("{wc}");
            }
            Ok(())
        }
    }
}
