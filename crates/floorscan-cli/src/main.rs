mod commands;
mod output;
mod render;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "floorscan",
    version,
    about = "Extract room, dimension and fixture data from architectural floorplan PDFs"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract structured floorplan data from a PDF
    Extract {
        /// Path to the floorplan PDF
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write extracted data to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Write a copy of the PDF with recognized blocks outlined
    Annotate {
        /// Path to the floorplan PDF
        input_file: PathBuf,

        /// Path for the annotated copy (default: <input>-annotated.pdf)
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        /// Also write extracted data to a JSON file
        #[arg(short = 'd', long = "data", value_name = "FILE")]
        data: Option<PathBuf>,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract {
            input_file,
            output,
            out,
        } => commands::extract::run(input_file, &output, out),
        Commands::Annotate {
            input_file,
            out,
            data,
        } => commands::annotate::run(input_file, out, data),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
