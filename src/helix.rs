use std::f64::consts::TAU;

use nalgebra::{Matrix3x2, Vector2};
use serde::{Deserialize, Serialize};

use super::{color::*, error::*, palette::*};

pub const DEFAULT_SAMPLES: usize = 256;

/// Parameters of Dave Green's cubehelix scheme (BASI 39, 289, 2011).
///
/// Only `samples` is validated. Every other value is accepted as is; odd
/// choices give clipped or washed out palettes rather than errors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "self::_serde::CubehelixSource", into = "self::_serde::CubehelixSource")]
pub struct Cubehelix {
    /// Starting hue: 0 = blue, 1 = red, 2 = green.
    pub start: f64,
    /// Rotations through the rainbow. Negative runs blue to red.
    pub rot: f64,
    /// Exponent applied to the intensity fraction.
    pub gamma: f64,
    /// Saturation scale. Zero gives a plain grayscale ramp.
    pub hue: f64,
    /// Run from white to black instead.
    pub reverse: bool,
    /// Number of table entries.
    pub samples: usize,
}

impl Default for Cubehelix {
    fn default() -> Cubehelix {
        Cubehelix {
            start: 0.5,
            rot: -1.5,
            gamma: 1.0,
            hue: 1.2,
            reverse: false,
            samples: DEFAULT_SAMPLES,
        }
    }
}

/// RGB response to the `(cos, sin)` components of the helix angle.
fn basis() -> Matrix3x2<f64> {
    Matrix3x2::new(
        -0.14861, 1.78277,
        -0.29227, -0.90649,
         1.97294, 0.0,
    )
}

impl Cubehelix {
    pub fn new(start: f64, rot: f64, gamma: f64, hue: f64, reverse: bool) -> Self {
        Cubehelix { start, rot, gamma, hue, reverse, samples: DEFAULT_SAMPLES }
    }

    pub fn start(self, start: f64) -> Self {
        Cubehelix { start, ..self }
    }

    pub fn rot(self, rot: f64) -> Self {
        Cubehelix { rot, ..self }
    }

    pub fn gamma(self, gamma: f64) -> Self {
        Cubehelix { gamma, ..self }
    }

    pub fn hue(self, hue: f64) -> Self {
        Cubehelix { hue, ..self }
    }

    pub fn reverse(self, reverse: bool) -> Self {
        Cubehelix { reverse, ..self }
    }

    pub fn samples(self, samples: usize) -> Self {
        Cubehelix { samples, ..self }
    }

    /// Clamped color of the helix at fraction `t`, ignoring `reverse`.
    ///
    /// A negative `gamma` blows up at `t = 0`; channels that come out as NaN
    /// clamp to 0.
    pub fn color_at(&self, t: f64) -> Rgb {
        // the +1 phase offset is part of the reference curve
        let angle = TAU * (self.start / 3. + 1. + self.rot * t);
        let f = t.powf(self.gamma);
        let amp = self.hue * f * (1. - f) / 2.;

        let c = basis() * Vector2::new(angle.cos(), angle.sin());
        Rgb::new(f + amp * c.x, f + amp * c.y, f + amp * c.z).clamp()
    }

    pub fn generate(&self) -> Result<Palette, PaletteError> {
        if self.samples <= 1 {
            return Err(PaletteError::InvalidSampleCount(self.samples));
        }

        let last = (self.samples - 1) as f64;
        let mut colors: Vec<Rgb> = (0 .. self.samples)
            .map(|k| self.color_at(k as f64 / last))
            .collect();

        if self.reverse {
            colors.reverse();
        }

        tracing::debug!(
            start = self.start,
            rot = self.rot,
            gamma = self.gamma,
            hue = self.hue,
            reverse = self.reverse,
            samples = self.samples,
            "generated cubehelix palette"
        );

        Ok(Palette::from_colors(colors))
    }
}

pub fn generate_cubehelix_palette(
    start: f64, rot: f64, gamma: f64, hue: f64,
    reverse: bool, samples: usize,
) -> Result<Palette, PaletteError> {
    Cubehelix::new(start, rot, gamma, hue, reverse)
        .samples(samples)
        .generate()
}

mod _serde {
    use super::*;

    const fn default_start() -> f64 { 0.5 }
    const fn default_rot() -> f64 { -1.5 }
    const fn default_gamma() -> f64 { 1.0 }
    const fn default_hue() -> f64 { 1.2 }
    const fn default_samples() -> usize { DEFAULT_SAMPLES }

    #[derive(Serialize, Deserialize)]
    #[serde(rename = "Cubehelix")]
    pub struct CubehelixSource {
        #[serde(default = "default_start")]
        start: f64,
        #[serde(default = "default_rot")]
        rot: f64,
        #[serde(default = "default_gamma")]
        gamma: f64,
        #[serde(default = "default_hue")]
        hue: f64,
        #[serde(default)]
        reverse: bool,
        #[serde(default = "default_samples")]
        samples: usize,
    }

    impl TryFrom<CubehelixSource> for Cubehelix {
        type Error = PaletteError;

        fn try_from(src: CubehelixSource) -> Result<Self, Self::Error> {
            if src.samples <= 1 {
                return Err(PaletteError::InvalidSampleCount(src.samples));
            }

            Ok(Cubehelix::new(src.start, src.rot, src.gamma, src.hue, src.reverse)
                .samples(src.samples))
        }
    }

    impl From<Cubehelix> for CubehelixSource {
        fn from(helix: Cubehelix) -> Self {
            CubehelixSource {
                start: helix.start,
                rot: helix.rot,
                gamma: helix.gamma,
                hue: helix.hue,
                reverse: helix.reverse,
                samples: helix.samples,
            }
        }
    }
}
