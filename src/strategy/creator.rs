//! Drives a texture strategy over an ordered list of samples

use crate::bitmap::Bitmap;
use crate::io::configuration::{DEFAULT_OUTPUT_SIZE, DEFAULT_PREFIX};
use crate::io::diagnostics::{Diagnostics, NullDiagnostics};
use crate::io::error::{Result, TextureError};
use crate::io::image::load_bitmap;
use crate::io::snapshot::SnapshotStore;
use crate::strategy::{StrategyContext, TextureStrategy};
use indicatif::ProgressBar;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

/// An input sample, either on disk or already decoded
#[derive(Debug, Clone)]
pub enum Sample {
    /// Image file decoded when its turn comes
    Path(PathBuf),
    /// Bitmap used as-is
    Image(Bitmap),
}

impl Sample {
    /// Decode (or copy) the sample into a bitmap
    ///
    /// # Errors
    ///
    /// Returns `ImageLoad` if a path sample cannot be decoded
    pub fn load(&self) -> Result<Bitmap> {
        match self {
            Self::Path(path) => load_bitmap(path),
            Self::Image(bitmap) => Ok(bitmap.clone()),
        }
    }
}

impl From<PathBuf> for Sample {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}

impl From<&Path> for Sample {
    fn from(path: &Path) -> Self {
        Self::Path(path.to_path_buf())
    }
}

impl From<&str> for Sample {
    fn from(path: &str) -> Self {
        Self::Path(PathBuf::from(path))
    }
}

impl From<Bitmap> for Sample {
    fn from(bitmap: Bitmap) -> Self {
        Self::Image(bitmap)
    }
}

/// Output and debugging parameters shared by every strategy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatorConfig {
    /// Output canvas size (width, height)
    pub size: (u32, u32),
    /// Label naming this run's snapshot directory
    pub prefix: String,
    /// Root directory for debug snapshots; `None` disables them
    pub snapshot_root: Option<PathBuf>,
}

impl Default for CreatorConfig {
    fn default() -> Self {
        Self {
            size: (DEFAULT_OUTPUT_SIZE, DEFAULT_OUTPUT_SIZE),
            prefix: DEFAULT_PREFIX.to_string(),
            snapshot_root: None,
        }
    }
}

impl CreatorConfig {
    /// Set the output canvas size
    #[must_use]
    pub const fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    /// Set the snapshot prefix label
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Enable debug snapshots under `root`
    #[must_use]
    pub fn with_snapshots(mut self, root: impl Into<PathBuf>) -> Self {
        self.snapshot_root = Some(root.into());
        self
    }

    /// Snapshot store for this configuration
    pub fn snapshot_store(&self) -> SnapshotStore {
        self.snapshot_root
            .as_ref()
            .map_or_else(SnapshotStore::disabled, |root| {
                SnapshotStore::new(root, &self.prefix)
            })
    }
}

/// Where the creator is in its accumulate/process cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreatorState {
    /// Nothing accumulated
    Idle,
    /// Samples collected towards the next group
    Accumulating(usize),
    /// A strategy is composing a group
    Processing,
    /// Every sample has been consumed
    Done,
}

/// Groups samples, runs a strategy per group and contains its failures
///
/// Whatever goes wrong inside a strategy (wrong sample count, mismatched
/// bitmaps, unreadable masks) is reported as one warning and replaced by a
/// blank transparent canvas. Callers always get a bitmap back.
pub struct TextureCreator {
    samples: Vec<Sample>,
    config: CreatorConfig,
    snapshots: SnapshotStore,
    diagnostics: Arc<dyn Diagnostics>,
    progress: Option<ProgressBar>,
    state: CreatorState,
    texture: Bitmap,
}

impl TextureCreator {
    /// Create a creator over an ordered list of samples
    pub fn new<I, S>(samples: I, config: CreatorConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Sample>,
    {
        let snapshots = config.snapshot_store();
        let texture = Bitmap::blank(config.size);
        Self {
            samples: samples.into_iter().map(Into::into).collect(),
            config,
            snapshots,
            diagnostics: Arc::new(NullDiagnostics),
            progress: None,
            state: CreatorState::Idle,
            texture,
        }
    }

    /// Route warnings and debug output to `diagnostics`
    #[must_use]
    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn Diagnostics>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Advance `bar` once per processed group
    #[must_use]
    pub fn with_progress(mut self, bar: ProgressBar) -> Self {
        self.progress = Some(bar);
        self
    }

    /// Current position in the accumulate/process cycle
    pub const fn state(&self) -> CreatorState {
        self.state
    }

    /// Configuration in use
    pub const fn config(&self) -> &CreatorConfig {
        &self.config
    }

    /// Samples queued for processing
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Number of processing steps `strategy` will run over these samples
    pub fn group_count(&self, strategy: &dyn TextureStrategy) -> usize {
        match strategy.samples_per_group() {
            0 => 1,
            per_group => self.samples.len().div_ceil(per_group),
        }
    }

    /// Run `strategy` over every sample and return the final texture
    ///
    /// Samples are decoded in order and accumulated until the strategy's
    /// group size is reached; each full group is processed and replaces the
    /// running texture. A trailing partial group is still handed over so
    /// the strategy reports the shortfall itself. With no samples at all a
    /// warning is emitted and a blank canvas returned.
    pub fn create_texture(&mut self, strategy: &mut dyn TextureStrategy) -> Bitmap {
        self.texture = Bitmap::blank(self.config.size);
        let per_group = strategy.samples_per_group();

        if per_group == 0 {
            self.run_group(strategy, &[]);
            self.state = CreatorState::Done;
            return self.texture.clone();
        }

        if self.samples.is_empty() {
            self.diagnostics.warn_error(&TextureError::EmptyInput {
                context: "sample list",
            });
            self.state = CreatorState::Done;
            return self.texture.clone();
        }

        let samples = std::mem::take(&mut self.samples);
        let mut group = Vec::with_capacity(per_group);
        for sample in &samples {
            match sample.load() {
                Ok(bitmap) => group.push(bitmap),
                Err(error) => {
                    self.diagnostics.warn_error(&error);
                    continue;
                }
            }

            self.state = CreatorState::Accumulating(group.len());
            if group.len() >= per_group {
                let full = std::mem::take(&mut group);
                self.run_group(strategy, &full);
            }
        }

        if !group.is_empty() {
            self.run_group(strategy, &group);
        }
        self.samples = samples;

        self.state = CreatorState::Done;
        self.texture.clone()
    }

    /// Process one group of samples and return the resulting texture
    ///
    /// Errors never escape: they are reported as a warning and the result
    /// is a blank canvas of the configured size.
    pub fn process_sample(
        &mut self,
        strategy: &mut dyn TextureStrategy,
        samples: &[Bitmap],
    ) -> Bitmap {
        self.run_group(strategy, samples);
        self.texture.clone()
    }

    fn run_group(&mut self, strategy: &mut dyn TextureStrategy, samples: &[Bitmap]) {
        self.state = CreatorState::Processing;
        let started = Instant::now();

        let mut context = StrategyContext {
            canvas: self.config.size,
            texture: &mut self.texture,
            snapshots: &self.snapshots,
            diagnostics: self.diagnostics.as_ref(),
        };
        let result = strategy.process_sample(&mut context, samples);

        self.texture = result.unwrap_or_else(|error| {
            self.diagnostics.warn_error(&error);
            Bitmap::blank(self.config.size)
        });

        self.diagnostics.debug(&format!(
            "Time taken to process {} sample(s) with {}: {:.3} s",
            samples.len(),
            strategy.name(),
            started.elapsed().as_secs_f64()
        ));

        if let Some(bar) = &self.progress {
            bar.inc(1);
        }
        self.state = CreatorState::Idle;
    }
}
