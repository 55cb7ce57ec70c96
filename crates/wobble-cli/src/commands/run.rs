//! Real-time paced run

use super::PointerSweep;
use anyhow::{Context, Result};
use log::info;
use std::time::Instant;
use wobble_render::RasterSurface;
use wobble_runtime::{AnimationDriver, BlobEngine, IntervalScheduler};

pub struct RunArgs {
    pub config: Option<String>,
    pub seconds: f64,
    pub fps: f64,
    pub output: Option<String>,
    pub pointer_sweep: bool,
}

pub fn run(args: RunArgs) -> Result<()> {
    let config = super::load_config(args.config.as_deref())?;
    let sweep = PointerSweep::new(&config);
    let mut surface = RasterSurface::new(config.width, config.height);
    let engine = BlobEngine::new(config).context("Invalid blob config")?;
    let mut driver = AnimationDriver::new(engine, IntervalScheduler::new(args.fps.max(1.0)));
    let pointer = driver.start();

    let started = Instant::now();
    let mut drawn = 0u64;
    while started.elapsed().as_secs_f64() < args.seconds {
        match driver.scheduler_mut().poll() {
            Some(handle) => {
                if args.pointer_sweep {
                    if let Some((x, y)) = sweep.sample(driver.frames()) {
                        pointer.send(x, y)?;
                    }
                }
                if driver.on_frame(handle, Some(&mut surface)) {
                    drawn += 1;
                }
                driver.engine_mut().drain_events();
            }
            None => std::thread::sleep(driver.scheduler().time_until_due()),
        }
    }

    let elapsed = started.elapsed().as_secs_f64();
    info!(
        "{} frames in {:.2}s ({:.1} fps), energy {:.4}",
        driver.frames(),
        elapsed,
        driver.frames() as f64 / elapsed.max(f64::EPSILON),
        driver.engine().simulation().energy()
    );
    println!("Ran {} frames ({} drawn) in {:.2}s", driver.frames(), drawn, elapsed);
    driver.stop();

    if let Some(output) = args.output {
        surface
            .save_png(&output)
            .with_context(|| format!("Failed to write {}", output))?;
        println!("Last frame written to {}", output);
    }
    Ok(())
}
