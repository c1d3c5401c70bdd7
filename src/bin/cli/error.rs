use thiserror::Error;

use cubehelix::{ConfigError, PaletteError};

#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    ConfigError(#[from] ConfigError),
    #[error("invalid palette, {0}")]
    PaletteError(#[from] PaletteError),
    #[error("failed to save image\n{0}")]
    ImageSaveError(#[from] image::ImageError),
}
