//! Print the blob outline after a number of ticks

use anyhow::{Context, Result};
use wobble_render::{svg_document, PathRecorder};
use wobble_runtime::BlobEngine;

pub struct PathArgs {
    pub config: Option<String>,
    pub ticks: u64,
    pub format: String,
}

pub fn run(args: PathArgs) -> Result<()> {
    let config = super::load_config(args.config.as_deref())?;
    let (width, height) = (config.width, config.height);
    let mut engine = BlobEngine::new(config).context("Invalid blob config")?;
    engine.init();

    let mut surface = PathRecorder::new(width, height);
    for _ in 0..args.ticks {
        engine.tick(Some(&mut surface));
    }

    let path = engine.current_path();
    match args.format.as_str() {
        "svg" => println!("{}", svg_document(&path, width, height, engine.color())),
        "json" => {
            let value = serde_json::json!({
                "ticks": engine.ticks(),
                "color": engine.color().to_hex_string(),
                "energy": engine.simulation().energy(),
                "path": path.to_svg_path_data(),
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        _ => {
            println!("fill: {}", engine.color());
            println!("{}", path.to_svg_path_data());
        }
    }
    Ok(())
}
