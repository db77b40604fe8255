//! facecrop CLI — crop detected faces out of an image.
//!
//! Usage:
//!   facecrop crop-faces --input photo.jpg [OPTIONS]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(
    name = "facecrop",
    about = "Create cropped images of faces",
    version
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create one numbered crop per detected face
    CropFaces {
        /// Input image file
        #[arg(long)]
        input: PathBuf,

        /// Output directory for the numbered crops
        #[arg(long, default_value = "out")]
        output: PathBuf,

        /// Face detection model file ('internal' for the built-in default)
        #[arg(long, default_value = "internal")]
        model: String,

        /// Zoom factor (0.5 = half size, 2 = double size)
        #[arg(long, default_value = "2.0")]
        zoom: f32,

        /// Minimum face size (0.05 = 5% of image size, 0.5 = 50% of image size)
        #[arg(long, default_value = "0.05")]
        min_size: f32,

        /// Center crops on the face instead of the historical offset placement
        #[arg(long)]
        centered: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .init();

    match cli.command {
        Commands::CropFaces {
            input,
            output,
            model,
            zoom,
            min_size,
            centered,
        } => commands::crop_faces::run(input, output, model, zoom, min_size, centered),
    }
}
