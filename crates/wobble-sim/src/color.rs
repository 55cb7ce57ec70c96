//! Continuous palette cycling for the blob fill

use wobble_core::{Color, Result, WobbleError};

/// Walks a fixed palette, blending each entry into the next.
#[derive(Clone, Debug)]
pub struct ColorCycler {
    palette: Vec<Color>,
    index: usize,
    phase: f64,
    step: f64,
    from: Color,
    to: Color,
}

impl ColorCycler {
    pub fn new(palette: Vec<Color>, step: f64) -> Result<Self> {
        if palette.is_empty() {
            return Err(WobbleError::InvalidConfig("palette must not be empty".into()));
        }
        if !(step > 0.0 && step <= 1.0) {
            return Err(WobbleError::ValueOutOfRange {
                field: "color_step".into(),
                min: 0.0,
                max: 1.0,
                value: step,
            });
        }
        let mut cycler = Self {
            palette,
            index: 0,
            phase: 0.0,
            step,
            from: Color::WHITE,
            to: Color::WHITE,
        };
        cycler.refresh_endpoints();
        Ok(cycler)
    }

    fn refresh_endpoints(&mut self) {
        let len = self.palette.len();
        self.from = self.palette[self.index];
        self.to = self.palette[(self.index + 1) % len];
    }

    /// Move one tick along the palette. Returns true when the palette index
    /// advanced on this tick.
    pub fn advance(&mut self) -> bool {
        self.phase += self.step;
        if self.phase >= 1.0 {
            self.phase = 0.0;
            self.index = (self.index + 1) % self.palette.len();
            self.refresh_endpoints();
            return true;
        }
        false
    }

    pub fn current(&self) -> Color {
        self.from.lerp(&self.to, self.phase as f32)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn palette(&self) -> &[Color] {
        &self.palette
    }

    /// Ticks needed for one palette entry to hand over to the next
    pub fn ticks_per_entry(&self) -> usize {
        let mut phase = 0.0;
        let mut ticks = 0;
        while phase < 1.0 {
            phase += self.step;
            ticks += 1;
        }
        ticks
    }

    pub fn reset(&mut self) {
        self.index = 0;
        self.phase = 0.0;
        self.refresh_endpoints();
    }
}
