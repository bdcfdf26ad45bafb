use std::fs;
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "diagmark")]
#[command(about = "Render diagnostic analysis text as HTML")]
struct Cli {
    /// Input analysis text file
    input: PathBuf,

    /// Output HTML file (defaults to input name with .html extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Render config file
    #[arg(short, long, default_value = "diagmark.toml")]
    config: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    // Read input file
    let analysis = match fs::read_to_string(&cli.input) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading {}: {}", cli.input.display(), e);
            std::process::exit(1);
        }
    };

    // Missing config falls back to the stock classes
    let config = diagmark::Config::load(&cli.config);
    let html = diagmark::analysis_to_html_with_config(&analysis, &config);

    // Determine output path
    let output = cli
        .output
        .unwrap_or_else(|| cli.input.with_extension("html"));

    if let Err(e) = fs::write(&output, html) {
        eprintln!("Error writing {}: {}", output.display(), e);
        std::process::exit(1);
    }

    println!("Created {}", output.display());
}
