use super::color::Rgb;

/// One row of a palette table: a position `t` in `[0, 1]` and its color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub t: f64,
    pub color: Rgb,
}

/// Anchor `(x, y0, y1)` of a piecewise-linear channel. `y0` is the value
/// approaching `x` from below and `y1` the value leaving it.
pub type Anchor = (f64, f64, f64);

/// Per-channel anchor lists describing a palette as a piecewise-linear
/// colormap.
#[derive(Debug, Clone, PartialEq)]
pub struct Segments {
    pub red: Vec<Anchor>,
    pub green: Vec<Anchor>,
    pub blue: Vec<Anchor>,
}

/// An immutable lookup table of evenly spaced samples.
///
/// Positions are strictly increasing and span exactly `[0, 1]`. Lookups
/// between positions blend the two bracketing samples linearly.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    samples: Vec<Sample>,
}

impl Palette {
    /// Pairs evenly spaced positions with `colors`. Callers guarantee at
    /// least two colors.
    pub(crate) fn from_colors(colors: Vec<Rgb>) -> Palette {
        let last = (colors.len() - 1) as f64;
        let samples = colors
            .into_iter()
            .enumerate()
            .map(|(k, color)| Sample { t: k as f64 / last, color })
            .collect();
        Palette { samples }
    }

    pub fn name(&self) -> &'static str {
        "cubehelix"
    }

    pub fn size(&self) -> usize {
        self.samples.len()
    }

    pub fn sample_at(&self, index: usize) -> Option<Sample> {
        self.samples.get(index).copied()
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    pub fn colors(&self) -> impl Iterator<Item = Rgb> + '_ {
        self.samples.iter().map(|s| s.color)
    }

    /// Continuous lookup. `t` is clamped to `[0, 1]` first and NaN reads as 0.
    pub fn interpolate(&self, t: f64) -> Rgb {
        let t = if t.is_nan() { 0. } else { t.clamp(0., 1.) };

        // index of the last sample at or below `t`
        let i = self.samples.partition_point(|s| s.t <= t).saturating_sub(1);
        let before = self.samples[i];
        if before.t == t || i + 1 == self.samples.len() {
            return before.color;
        }

        let after = self.samples[i + 1];
        let frac = (t - before.t) / (after.t - before.t);
        Rgb::lerp(before.color, after.color, frac)
    }

    /// Map a data value against the range `[min, max]`. A degenerate range
    /// maps everything to the middle of the palette.
    pub fn map(&self, value: f64, min: f64, max: f64) -> Rgb {
        let t = if max > min { (value - min) / (max - min) } else { 0.5 };
        self.interpolate(t)
    }

    /// Same positions, colors in opposite order.
    pub fn reversed(&self) -> Palette {
        let samples = self
            .samples
            .iter()
            .zip(self.samples.iter().rev())
            .map(|(pos, src)| Sample { t: pos.t, color: src.color })
            .collect();
        Palette { samples }
    }

    pub fn to_rgb8(&self) -> Vec<[u8; 3]> {
        self.colors().map(Rgb::to_rgb8).collect()
    }

    pub fn segments(&self) -> Segments {
        Segments {
            red: self.anchors(|c| c.red),
            green: self.anchors(|c| c.green),
            blue: self.anchors(|c| c.blue),
        }
    }

    fn anchors(&self, channel: impl Fn(&Rgb) -> f64) -> Vec<Anchor> {
        self.samples
            .iter()
            .map(|s| (s.t, channel(&s.color), channel(&s.color)))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
