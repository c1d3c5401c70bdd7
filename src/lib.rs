//! Dave Green's "cubehelix" color palettes.
//!
//! A cubehelix palette climbs monotonically in brightness from black to
//! white while its hue spirals around the gray diagonal of the RGB cube,
//! which keeps intensity readable in print and for color-blind viewers.
//!
//! ```
//! use cubehelix::Cubehelix;
//!
//! let palette = Cubehelix::default().rot(-0.5).generate()?;
//! let mid = palette.interpolate(0.5);
//! assert!(mid.red > 0.0 && mid.red < 1.0);
//! # Ok::<(), cubehelix::PaletteError>(())
//! ```

mod color;
pub use color::*;

mod error;
pub use error::*;

mod helix;
pub use helix::*;

mod palette;
pub use palette::*;

mod file;

mod render;
pub use render::*;
