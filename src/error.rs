use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteError {
    #[error("palette needs at least two samples (got {0})")]
    InvalidSampleCount(usize),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not parse JSON palette file\n{0}")]
    JsonError(#[from] serde_json::Error),
    #[error("could not parse RON palette file\n{0}")]
    RonError(#[from] ron::error::SpannedError),
    #[error("could not parse YAML palette file\n{0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("failed to read input file\n{0}")]
    FileReadError(#[from] std::io::Error),
    #[error("input file does not have valid extension (must be .json, .ron, .yaml or .yml)")]
    ExtensionError,
}
