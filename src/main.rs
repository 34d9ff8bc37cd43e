// SPDX-License-Identifier: GPL-3.0-only

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use depth_viewer::RenderMode;

mod cli;

#[derive(Parser)]
#[command(name = "depth-viewer")]
#[command(about = "Examine raw headerless depth texture dumps")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the sample value at a pixel coordinate
    Lookup {
        /// Path to the raw dump
        file: PathBuf,

        /// Texture width in pixels
        width: u32,

        /// Texture height in pixels
        height: u32,

        /// Declared bits per pixel (8, 16, 24 or 32)
        bpp: u32,

        /// Pixel x coordinate
        x: u32,

        /// Pixel y coordinate
        y: u32,
    },

    /// Render the dump to an image file
    Render {
        /// Path to the raw dump
        file: PathBuf,

        /// Texture width in pixels
        #[arg(long, default_value = "640")]
        width: u32,

        /// Texture height in pixels
        #[arg(long, default_value = "480")]
        height: u32,

        /// Declared bits per pixel (8, 16, 24 or 32)
        #[arg(short = 'd', long, default_value = "16")]
        bpp: u32,

        /// How samples map to output pixels
        #[arg(short, long, value_enum, default_value_t = RenderMode::Rgb)]
        mode: RenderMode,

        /// Integer upscale factor (nearest neighbor)
        #[arg(short, long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..=4))]
        zoom: u32,

        /// Output image path (format from extension, e.g. .png)
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Print shape-derived facts about a dump
    Info {
        /// Path to the raw dump
        file: PathBuf,

        /// Texture width in pixels
        width: u32,

        /// Texture height in pixels
        height: u32,

        /// Declared bits per pixel (8, 16, 24 or 32)
        bpp: u32,
    },
}

fn main() -> ExitCode {
    // Initialize logging
    // Set RUST_LOG environment variable to control log level
    // Examples: RUST_LOG=debug, RUST_LOG=depth_viewer=debug, RUST_LOG=info
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(true)
        .with_level(true)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Lookup {
            file,
            width,
            height,
            bpp,
            x,
            y,
        } => cli::lookup(&file, width, height, bpp, x, y),
        Commands::Render {
            file,
            width,
            height,
            bpp,
            mode,
            zoom,
            output,
        } => cli::render_to_file(&file, width, height, bpp, mode, zoom, &output),
        Commands::Info {
            file,
            width,
            height,
            bpp,
        } => cli::print_info(&file, width, height, bpp),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
