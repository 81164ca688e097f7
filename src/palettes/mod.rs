//! Palette collection for automatic colormap selection.
//!
//! This module provides the [`Palette`] handle plus a set of ocean-science
//! color ramps inspired by the cmocean collection, built on `colorgrad`
//! gradients.

pub mod diverging;
pub mod sequential;

use std::fmt;
use std::sync::Arc;

use colorgrad::{Color, CustomGradient, Gradient};

// Re-export commonly used palettes
pub use diverging::{balance, curl, delta, diff, tarn, topo};
pub use sequential::{amp, deep, dense, haline, matter, rain, speed, tempo, thermal, viridis};

/// A named, shared color ramp.
///
/// A `Palette` is a cheap handle: clones share the underlying gradient.
/// Identity is the name, so two palettes compare equal iff their names do.
/// The gradient itself is opaque beyond color sampling.
#[derive(Clone)]
pub struct Palette {
    name: Arc<str>,
    gradient: Arc<Gradient>,
}

impl Palette {
    /// Wrap a gradient under the given name
    pub fn new(name: impl Into<Arc<str>>, gradient: Gradient) -> Self {
        Self {
            name: name.into(),
            gradient: Arc::new(gradient),
        }
    }

    /// The palette name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The underlying gradient
    pub fn gradient(&self) -> &Gradient {
        &self.gradient
    }

    /// Sample the ramp at a position in [0.0, 1.0]
    pub fn at(&self, t: f64) -> Color {
        self.gradient.at(t)
    }

    /// Map a value to an RGBA color given the data range.
    ///
    /// Values outside the range clamp to the ramp ends; a degenerate range
    /// maps everything to the ramp midpoint.
    pub fn rgba8(&self, value: f32, min: f32, max: f32) -> [u8; 4] {
        let normalized = if max > min {
            ((value - min) / (max - min)).clamp(0.0, 1.0)
        } else {
            0.5
        };
        self.gradient.at(normalized as f64).to_rgba8()
    }
}

impl PartialEq for Palette {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Palette {}

impl fmt::Debug for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Palette").field(&self.name).finish()
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Build a palette from evenly spaced RGB stops.
pub(crate) fn ramp(name: &'static str, stops: &[[u8; 3]]) -> Palette {
    let colors: Vec<Color> = stops
        .iter()
        .map(|&[r, g, b]| Color::from_rgba8(r, g, b, 255))
        .collect();
    let gradient = CustomGradient::new()
        .colors(&colors)
        .build()
        .expect("built-in palette stops are valid");
    Palette::new(name, gradient)
}
