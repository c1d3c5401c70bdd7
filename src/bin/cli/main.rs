use clap::Parser;
use clap_num::si_number;
use std::path::PathBuf;

use cubehelix::*;

mod error;
use error::CliError;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Path to output preview image (format follows the file extension).
    #[arg(default_value = "cubehelix.png")]
    output: PathBuf,
    /// Palette descriptor file (.json, .ron, .yaml). Flags override its values.
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Starting hue (0 = blue, 1 = red, 2 = green).
    #[arg(long, allow_negative_numbers = true)]
    start: Option<f64>,
    /// Rotations through the rainbow. Negative values run blue to red.
    #[arg(long, allow_negative_numbers = true)]
    rot: Option<f64>,
    /// Gamma correction applied to intensity.
    #[arg(long)]
    gamma: Option<f64>,
    /// Hue intensity. Zero gives a grayscale ramp.
    #[arg(long)]
    hue: Option<f64>,
    /// Run from white to black.
    #[arg(short, long, overrides_with = "no_reverse")]
    reverse: bool,
    /// Run from black to white, even if the descriptor asks for reversal.
    #[arg(long, overrides_with = "reverse")]
    no_reverse: bool,
    /// Number of palette samples (accepts SI postfixes).
    #[arg(short = 'n', long, value_parser = si_number::<usize>)]
    samples: Option<usize>,
    /// Dimensions (in pixels) of the preview image.
    #[arg(short, long, number_of_values = 2, default_values_t = [512, 64])]
    #[arg(value_names = ["WIDTH", "HEIGHT"])]
    dims: Vec<u32>,
}

impl Cli {
    fn helix(&self) -> Result<Cubehelix, CliError> {
        let mut helix = match &self.config {
            Some(path) => Cubehelix::from_file(path)?,
            None => Cubehelix::default(),
        };

        if let Some(start) = self.start { helix.start = start; }
        if let Some(rot) = self.rot { helix.rot = rot; }
        if let Some(gamma) = self.gamma { helix.gamma = gamma; }
        if let Some(hue) = self.hue { helix.hue = hue; }
        if let Some(samples) = self.samples { helix.samples = samples; }
        if self.reverse { helix.reverse = true; }
        if self.no_reverse { helix.reverse = false; }

        Ok(helix)
    }

    fn render_config(&self) -> RenderConfig {
        RenderConfig {
            width: self.dims[0],
            height: self.dims[1],
        }
    }
}

fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    let helix = cli.helix()?;

    let palette = helix.generate()?;
    palette.render_image(cli.render_config()).save(&cli.output)?;

    println!(
        "Wrote {}-sample cubehelix (start {}, rot {}, gamma {}, hue {}{}) to '{}'",
        palette.size(),
        helix.start,
        helix.rot,
        helix.gamma,
        helix.hue,
        if helix.reverse { ", reversed" } else { "" },
        cli.output.display()
    );

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cubehelix=warn".into()),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
