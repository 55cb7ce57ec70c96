//! Headless blob-to-PNG render command

use super::PointerSweep;
use anyhow::{bail, Context, Result};
use std::path::PathBuf;
use wobble_core::Color;
use wobble_render::RasterSurface;
use wobble_runtime::{AnimationDriver, BlobEngine, BlobEvent, ManualScheduler};

pub struct RenderArgs {
    pub config: Option<String>,
    pub out: String,
    pub frames: u64,
    pub every: u64,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub background: Option<String>,
    pub pointer_sweep: bool,
}

pub fn run(args: RenderArgs) -> Result<()> {
    if args.every == 0 {
        bail!("--every must be at least 1");
    }

    let mut config = super::load_config(args.config.as_deref())?;
    if let Some(w) = args.width {
        config.width = w;
    }
    if let Some(h) = args.height {
        config.height = h;
    }
    let background = match &args.background {
        Some(hex) => Color::parse_hex(hex).context("Invalid --background color")?,
        None => Color::TRANSPARENT,
    };

    let out_dir = PathBuf::from(&args.out);
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("Failed to create output directory {}", out_dir.display()))?;

    let sweep = PointerSweep::new(&config);
    let mut surface = RasterSurface::with_background(config.width, config.height, background);
    let engine = BlobEngine::new(config).context("Invalid blob config")?;
    let mut driver = AnimationDriver::new(engine, ManualScheduler::new());
    let pointer = driver.start();

    let mut written = 0;
    for frame in 0..args.frames {
        if args.pointer_sweep {
            if let Some((x, y)) = sweep.sample(frame) {
                pointer.send(x, y)?;
            }
        }

        let Some(handle) = driver.scheduler_mut().fire() else {
            break;
        };
        driver.on_frame(handle, Some(&mut surface));

        for event in driver.engine_mut().drain_events() {
            match event {
                BlobEvent::PointerEntered { point, impulse }
                | BlobEvent::PointerExited { point, impulse } => {
                    println!("[frame {}] pointer impulse {:+.3} on point {}", frame, impulse, point);
                }
                BlobEvent::PaletteAdvanced { index } => {
                    println!("[frame {}] palette entry {}", frame, index);
                }
                BlobEvent::RenderingResumed { skipped, .. } => {
                    println!("[frame {}] drawing resumed after {} skipped frame(s)", frame, skipped);
                }
                _ => {}
            }
        }

        if frame % args.every == 0 || frame + 1 == args.frames {
            let path = out_dir.join(format!("frame_{:05}.png", frame));
            surface
                .save_png(&path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            written += 1;
        }
    }

    driver.stop();
    println!("Wrote {} frame(s) to {}", written, out_dir.display());
    Ok(())
}
