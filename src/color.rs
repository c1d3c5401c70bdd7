use num_traits::clamp;

/// An RGB color with floating point channels, nominally in `[0, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rgb {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1. - t) + b * t
}

fn unit(c: f64) -> f64 {
    if c.is_nan() { 0. } else { clamp(c, 0., 1.) }
}

fn quantize(c: f64) -> u8 {
    (unit(c) * 255.).round() as u8
}

impl Rgb {
    pub fn new(red: f64, green: f64, blue: f64) -> Self {
        Rgb { red, green, blue }
    }

    pub fn gray(value: f64) -> Self {
        Rgb::new(value, value, value)
    }

    /// Clamp each channel to `[0, 1]` on its own. The triple is not
    /// renormalized, so channels saturate independently. NaN becomes 0.
    pub fn clamp(self) -> Self {
        Rgb {
            red: unit(self.red),
            green: unit(self.green),
            blue: unit(self.blue),
        }
    }

    pub fn lerp(start: Self, end: Self, t: f64) -> Self {
        Rgb {
            red: lerp(start.red, end.red, t),
            green: lerp(start.green, end.green, t),
            blue: lerp(start.blue, end.blue, t),
        }
    }

    pub fn to_rgb8(self) -> [u8; 3] {
        [quantize(self.red), quantize(self.green), quantize(self.blue)]
    }

    pub fn is_gray(&self) -> bool {
        self.red == self.green && self.green == self.blue
    }
}

impl From<Rgb> for [f64; 3] {
    fn from(c: Rgb) -> [f64; 3] {
        [c.red, c.green, c.blue]
    }
}
