//! Wobble CLI - Command-line host for the Wobble blob engine

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{config, path, render, run};

#[derive(Parser)]
#[command(name = "wobble")]
#[command(about = "Animated spring-mass blob renderer", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render frames headlessly to PNG files
    Render {
        /// Path to a TOML config file
        #[arg(long)]
        config: Option<String>,

        /// Output directory for frames
        #[arg(short, long, default_value = "frames")]
        out: String,

        /// Number of frames to simulate
        #[arg(long, default_value = "120")]
        frames: u64,

        /// Write every Nth frame (the last frame is always written)
        #[arg(long, default_value = "10")]
        every: u64,

        /// Surface width in pixels (overrides config)
        #[arg(long)]
        width: Option<u32>,

        /// Surface height in pixels (overrides config)
        #[arg(long)]
        height: Option<u32>,

        /// Background color as hex (default: transparent)
        #[arg(long)]
        background: Option<String>,

        /// Drive a scripted pointer through the blob
        #[arg(long)]
        pointer_sweep: bool,
    },

    /// Print the blob outline after N ticks
    Path {
        /// Path to a TOML config file
        #[arg(long)]
        config: Option<String>,

        /// Number of ticks to simulate first
        #[arg(long, default_value = "0")]
        ticks: u64,

        /// Output format (text, svg or json)
        #[arg(long, default_value = "text", value_parser = parse_format)]
        format: String,
    },

    /// Print the effective configuration as TOML
    Config {
        /// Path to a TOML config file (defaults when omitted)
        #[arg(long)]
        config: Option<String>,
    },

    /// Run in real time for a while and report frame statistics
    Run {
        /// Path to a TOML config file
        #[arg(long)]
        config: Option<String>,

        /// Wall-clock duration in seconds
        #[arg(long, default_value = "5")]
        seconds: f64,

        /// Target frame rate
        #[arg(long, default_value = "60")]
        fps: f64,

        /// Write the last frame to this PNG
        #[arg(short, long)]
        output: Option<String>,

        /// Drive a scripted pointer through the blob
        #[arg(long)]
        pointer_sweep: bool,
    },
}

fn parse_format(s: &str) -> Result<String, String> {
    match s {
        "text" | "svg" | "json" => Ok(s.to_string()),
        _ => Err(format!(
            "unknown format '{}'; valid values: text, svg, json",
            s
        )),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            config,
            out,
            frames,
            every,
            width,
            height,
            background,
            pointer_sweep,
        } => render::run(render::RenderArgs {
            config,
            out,
            frames,
            every,
            width,
            height,
            background,
            pointer_sweep,
        }),
        Commands::Path {
            config,
            ticks,
            format,
        } => path::run(path::PathArgs {
            config,
            ticks,
            format,
        }),
        Commands::Config { config } => config::run(config.as_deref()),
        Commands::Run {
            config,
            seconds,
            fps,
            output,
            pointer_sweep,
        } => run::run(run::RunArgs {
            config,
            seconds,
            fps,
            output,
            pointer_sweep,
        }),
    }
}
