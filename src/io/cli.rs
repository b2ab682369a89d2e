//! Command-line interface for generating textures from sample files

use crate::bitmap::Bitmap;
use crate::io::configuration::{
    DEFAULT_OUTPUT_SIZE, DEFAULT_PREFIX, DEFAULT_SEED, OUTPUT_EXTENSION, OUTPUT_SEPARATOR,
    RANDOM_INVERT_MASK_FILE, RANDOM_MASK_FILE, SNAPSHOT_ROOT,
};
use crate::io::diagnostics::{Diagnostics, TracingDiagnostics};
use crate::io::error::{Result, TextureError};
use crate::io::image::{export_bitmap, is_supported_image};
use crate::io::progress::ProgressManager;
use crate::noise::{CoherentNoise, NoiseKind};
use crate::strategy::{
    BigTile, CreatorConfig, MaskSource, NoiseComposite, RandomTexture, TextureCreator,
    TextureStrategy, TilableBlend,
};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Texture generation mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyKind {
    /// Mirrored 2x2 mosaic of one sample, tiled
    BigTile,
    /// Sample blended with its quadrant-swapped copy, tiled
    Tilable,
    /// Two samples mixed through `random.png` and `random_invert.png`
    NoiseComposite,
    /// Coherent noise field, no samples
    Random,
    /// Write `random.png` and `random_invert.png` into the mask directory
    Masks,
}

impl StrategyKind {
    /// Name used in default output file names
    pub const fn label(self) -> &'static str {
        match self {
            Self::BigTile => "big_tile",
            Self::Tilable => "tilable",
            Self::NoiseComposite => "noise_composite",
            Self::Random => "random",
            Self::Masks => "masks",
        }
    }

    /// Whether this mode reads sample images
    pub const fn uses_samples(self) -> bool {
        matches!(self, Self::BigTile | Self::Tilable | Self::NoiseComposite)
    }
}

#[derive(Parser)]
#[command(name = "tilesmith")]
#[command(
    author,
    version,
    about = "Generate tileable textures from image samples"
)]
/// Command-line arguments for the texture generation tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Generation mode
    #[arg(value_enum, value_name = "STRATEGY")]
    pub strategy: StrategyKind,

    /// Sample images or directories of sample images
    #[arg(value_name = "SAMPLES")]
    pub samples: Vec<PathBuf>,

    /// Output file (defaults to <first sample>_<strategy>.png)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output width in pixels (implies square if height not specified)
    #[arg(short = 'w', long, default_value_t = DEFAULT_OUTPUT_SIZE)]
    pub width: u32,

    /// Output height in pixels
    #[arg(short = 'H', long)]
    pub height: Option<u32>,

    /// Label for this run's snapshot directory
    #[arg(short, long, default_value = DEFAULT_PREFIX)]
    pub prefix: String,

    /// Save intermediate bitmaps under <snapshot-root>/<prefix>/
    #[arg(short, long)]
    pub debug_snapshots: bool,

    /// Root directory for debug snapshots
    #[arg(long, default_value = SNAPSHOT_ROOT)]
    pub snapshot_root: PathBuf,

    /// Directory holding `random.png` and `random_invert.png`
    #[arg(short, long, default_value = ".")]
    pub mask_dir: PathBuf,

    /// Noise algorithm for random textures and masks
    #[arg(short, long, value_enum, default_value_t = NoiseKind::Simplex)]
    pub noise: NoiseKind,

    /// Seed for the noise generator
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Suppress progress output and warnings
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Show debug diagnostics such as per-group timings
    #[arg(short, long)]
    pub verbose: bool,

    /// Overwrite outputs that already exist
    #[arg(long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Output canvas size, square when no height is given
    pub fn output_size(&self) -> (u32, u32) {
        (self.width, self.height.unwrap_or(self.width))
    }

    /// Maximum log level matching the verbosity flags
    pub const fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        }
    }
}

/// Runs one generation job described by the command line
pub struct TextureJob {
    cli: Cli,
    diagnostics: Arc<dyn Diagnostics>,
}

impl TextureJob {
    /// Create a job reporting through `tracing`
    pub fn new(cli: Cli) -> Self {
        Self {
            cli,
            diagnostics: Arc::new(TracingDiagnostics),
        }
    }

    /// Report through a different diagnostics sink
    #[must_use]
    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn Diagnostics>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Generate and write the requested output
    ///
    /// Returns the written paths; empty when the output already existed and
    /// was skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if a sample target is invalid or an output cannot
    /// be written
    pub fn run(&self) -> Result<Vec<PathBuf>> {
        if self.cli.width == 0 || self.cli.height == Some(0) {
            return Err(crate::io::error::invalid_parameter(
                "size",
                &format!("{}x{}", self.cli.width, self.cli.height.unwrap_or(0)),
                &"output dimensions must be positive",
            ));
        }

        if self.cli.strategy == StrategyKind::Masks {
            return self.write_masks();
        }

        let samples = self.collect_samples()?;
        let output_path = self.output_path(&samples);
        if self.cli.skip_existing() && output_path.exists() {
            tracing::info!("Skipping: {} (output exists)", output_path.display());
            return Ok(Vec::new());
        }

        let texture = self.create(samples)?;
        export_bitmap(&texture, &output_path)?;
        Ok(vec![output_path])
    }

    fn create(&self, samples: Vec<PathBuf>) -> Result<Bitmap> {
        let (width, height) = self.output_size();
        let mut config = CreatorConfig::default()
            .with_size(width, height)
            .with_prefix(self.cli.prefix.clone());
        if self.cli.debug_snapshots {
            config = config.with_snapshots(self.cli.snapshot_root.clone());
        }

        let mut strategy = self.strategy()?;
        let mut creator = TextureCreator::new(samples, config)
            .with_diagnostics(Arc::clone(&self.diagnostics));

        let groups = creator.group_count(strategy.as_ref());
        let progress = if self.cli.should_show_progress() {
            ProgressManager::new(groups, strategy.name())
        } else {
            ProgressManager::hidden(groups)
        };
        creator = creator.with_progress(progress.bar());

        let texture = creator.create_texture(strategy.as_mut());
        progress.finish("done");
        Ok(texture)
    }

    fn strategy(&self) -> Result<Box<dyn TextureStrategy>> {
        let strategy: Box<dyn TextureStrategy> = match self.cli.strategy {
            StrategyKind::BigTile => Box::new(BigTile::new()),
            StrategyKind::Tilable => Box::new(TilableBlend::new()),
            StrategyKind::NoiseComposite => Box::new(NoiseComposite::new(
                MaskSource::in_directory(&self.cli.mask_dir),
            )),
            StrategyKind::Random => Box::new(RandomTexture::new(self.noise())),
            StrategyKind::Masks => {
                return Err(crate::io::error::invalid_parameter(
                    "strategy",
                    &self.cli.strategy.label(),
                    &"mask generation does not compose a texture",
                ));
            }
        };
        Ok(strategy)
    }

    fn noise(&self) -> CoherentNoise {
        CoherentNoise::new(self.cli.noise, self.cli.seed)
    }

    fn output_size(&self) -> (u32, u32) {
        self.cli.output_size()
    }

    fn write_masks(&self) -> Result<Vec<PathBuf>> {
        let mask_path = self.cli.mask_dir.join(RANDOM_MASK_FILE);
        let inverse_path = self.cli.mask_dir.join(RANDOM_INVERT_MASK_FILE);
        if self.cli.skip_existing() && mask_path.exists() && inverse_path.exists() {
            tracing::info!("Skipping: {} (masks exist)", self.cli.mask_dir.display());
            return Ok(Vec::new());
        }

        let (mask, inverse) = RandomTexture::new(self.noise()).mask_pair(self.output_size());
        export_bitmap(&mask, &mask_path)?;
        export_bitmap(&inverse, &inverse_path)?;
        Ok(vec![mask_path, inverse_path])
    }

    /// Expand the sample arguments into an ordered list of image files
    ///
    /// Directories contribute their decodable images in name order; files
    /// are kept in the order given.
    ///
    /// # Errors
    ///
    /// Returns an error if a target is neither a readable image file nor a
    /// directory
    pub fn collect_samples(&self) -> Result<Vec<PathBuf>> {
        if !self.cli.strategy.uses_samples() {
            return Ok(Vec::new());
        }

        let mut samples = Vec::new();
        for target in &self.cli.samples {
            if target.is_file() {
                if !is_supported_image(target) {
                    return Err(crate::io::error::invalid_parameter(
                        "sample",
                        &target.display(),
                        &"not a supported image format",
                    ));
                }
                samples.push(target.clone());
            } else if target.is_dir() {
                samples.extend(Self::images_in(target)?);
            } else {
                return Err(crate::io::error::invalid_parameter(
                    "sample",
                    &target.display(),
                    &"must be an image file or directory",
                ));
            }
        }
        Ok(samples)
    }

    fn images_in(directory: &Path) -> Result<Vec<PathBuf>> {
        let entries = std::fs::read_dir(directory).map_err(|e| TextureError::FileSystem {
            path: directory.to_path_buf(),
            operation: "read directory",
            source: e,
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.is_file() && is_supported_image(&path) {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    /// Output path for a run over `samples`
    pub fn output_path(&self, samples: &[PathBuf]) -> PathBuf {
        if let Some(output) = &self.cli.output {
            return output.clone();
        }
        Self::default_output_path(samples.first().map(PathBuf::as_path), self.cli.strategy)
    }

    /// `<stem>_<strategy>.png` next to the first sample, or
    /// `<strategy>.png` in the working directory without samples
    pub fn default_output_path(first_sample: Option<&Path>, strategy: StrategyKind) -> PathBuf {
        let Some(sample) = first_sample else {
            return PathBuf::from(format!("{}.{OUTPUT_EXTENSION}", strategy.label()));
        };

        let stem = sample.file_stem().unwrap_or_default();
        let name = format!(
            "{}{OUTPUT_SEPARATOR}{}.{OUTPUT_EXTENSION}",
            stem.to_string_lossy(),
            strategy.label()
        );
        sample
            .parent()
            .map_or_else(|| PathBuf::from(&name), |parent| parent.join(&name))
    }
}
