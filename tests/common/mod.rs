#![allow(unused)]

use pps_drill::error::surface_failed;
use pps_drill::{Align, ClickBinding, DisplayList, Point, Result, Surface, TrainerConfig};

pub fn seeded_config(seed: u64) -> TrainerConfig {
    TrainerConfig::builder().seed(seed).build()
}

/// Display list whose `fail_on`-th line stroke (1 based) fails once.
#[derive(Default)]
pub struct FailingSurface {
    pub inner: DisplayList,
    pub fail_on: Option<usize>,
    pub strokes: usize,
}

impl FailingSurface {
    pub fn failing_on(stroke: usize) -> Self {
        Self {
            fail_on: Some(stroke),
            ..Self::default()
        }
    }
}

impl Surface for FailingSurface {
    fn clear(&mut self) -> Result<()> {
        self.inner.clear()
    }

    fn line(&mut self, from: Point, to: Point) -> Result<()> {
        self.strokes += 1;
        if self.fail_on == Some(self.strokes) {
            self.fail_on = None;
            return Err(surface_failed(format!("stroke {} rejected", self.strokes)));
        }
        self.inner.line(from, to)
    }

    fn circle(&mut self, center: Point, radius: f64) -> Result<()> {
        self.inner.circle(center, radius)
    }

    fn text(&mut self, at: Point, text: &str, align: Align) -> Result<()> {
        self.inner.text(at, text, align)
    }
}

/// Simulates a click arriving on every stroke while a redraw is running and
/// records whether the click trigger let it through.
#[derive(Default)]
pub struct ClickingSurface {
    pub inner: DisplayList,
    pub binding: Option<ClickBinding>,
    pub clicks_accepted: Vec<bool>,
}

impl Surface for ClickingSurface {
    fn clear(&mut self) -> Result<()> {
        self.inner.clear()
    }

    fn line(&mut self, from: Point, to: Point) -> Result<()> {
        if let Some(binding) = &self.binding {
            let accepted = binding.try_acquire().is_some();
            self.clicks_accepted.push(accepted);
        }
        self.inner.line(from, to)
    }

    fn circle(&mut self, center: Point, radius: f64) -> Result<()> {
        self.inner.circle(center, radius)
    }

    fn text(&mut self, at: Point, text: &str, align: Align) -> Result<()> {
        self.inner.text(at, text, align)
    }
}
