//! Prismatism CLI - procedural polygon scene generator.
//!
//! Generate Feininger-inspired layered polygon compositions and write
//! them as JSON scene documents for a rendering backend.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;

use prismatism::export::{JsonExportOptions, write_document_json};
use prismatism::strategy::{GenerateOptions, Strategy, generate_with};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Procedural Feininger-inspired scene generator.
#[derive(Parser)]
#[command(name = "prismatism")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate scene documents and write them as JSON.
    Generate {
        /// Generation strategy (sails, figures, generative-sea, reference).
        #[arg(short, long, default_value = "figures")]
        strategy: Strategy,

        /// Canvas width in pixels.
        #[arg(long, default_value = "800")]
        width: u32,

        /// Canvas height in pixels.
        #[arg(long, default_value = "600")]
        height: u32,

        /// Random seed for reproducible generation.
        #[arg(long)]
        seed: Option<u64>,

        /// Number of documents to generate.
        #[arg(short, long, default_value = "1")]
        count: u32,

        /// Always include the easter-egg figure (figures strategy).
        #[arg(long)]
        force_special: bool,

        /// Pretty-print the JSON output.
        #[arg(long)]
        pretty: bool,

        /// Output directory for generated files.
        #[arg(short, long, default_value = "./output")]
        output: PathBuf,

        /// Base name for output files.
        #[arg(short, long, default_value = "scene")]
        name: String,
    },

    /// List the available strategies.
    Strategies,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            strategy,
            width,
            height,
            seed,
            count,
            force_special,
            pretty,
            output,
            name,
        } => {
            run_generate(
                strategy,
                width,
                height,
                seed,
                count,
                force_special,
                pretty,
                output,
                name,
            );
        }
        Commands::Strategies => {
            run_strategies();
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn run_generate(
    strategy: Strategy,
    width: u32,
    height: u32,
    seed: Option<u64>,
    count: u32,
    force_special: bool,
    pretty: bool,
    output: PathBuf,
    name: String,
) {
    // Validate parameters
    if !(16..=8192).contains(&width) || !(16..=8192).contains(&height) {
        eprintln!("Error: Width and height must be between 16 and 8192");
        std::process::exit(1);
    }

    if count == 0 {
        eprintln!("Error: Count must be at least 1");
        std::process::exit(1);
    }

    let seed = seed.unwrap_or_else(|| {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    });

    println!("Prismatism - Procedural Scene Generator");
    println!("=======================================");
    println!("Strategy: {} ({})", strategy, strategy.description());
    println!("Canvas: {}x{}", width, height);
    println!("Seed: {}", seed);
    println!("Output: {}", output.display());

    if let Err(e) = std::fs::create_dir_all(&output) {
        eprintln!("Error creating output directory: {}", e);
        std::process::exit(1);
    }

    let start = Instant::now();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let options = GenerateOptions {
        force_special_figure: force_special,
        ..Default::default()
    };
    let export_options = JsonExportOptions { pretty };

    for i in 0..count {
        let doc = generate_with(strategy, width, height, &options, &mut rng);
        let filename = if count == 1 {
            format!("{}.json", name)
        } else {
            format!("{}_{}.json", name, i)
        };
        let path = output.join(&filename);

        if let Err(e) = write_document_json(&doc, &path, &export_options) {
            eprintln!("Error writing {}: {}", path.display(), e);
            std::process::exit(1);
        }
        println!(
            "  [{}/{}] {} - {} shapes, edition {}",
            i + 1,
            count,
            filename,
            doc.shape_count(),
            doc.seed
        );
    }

    println!("\nDone in {:.2?}", start.elapsed());
}

fn run_strategies() {
    println!("Available strategies:");
    for strategy in Strategy::all() {
        println!(
            "  {:<16} {:<24} {}",
            strategy.name(),
            format!("({})", strategy.kind()),
            strategy.description()
        );
    }
}
