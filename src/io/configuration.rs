//! Texture generation constants and runtime configuration defaults

/// Default output canvas edge length in pixels
pub const DEFAULT_OUTPUT_SIZE: u32 = 2048;

// Fixed frequency scaling applied to pixel coordinates before sampling noise
/// Noise frequency along the x axis
pub const NOISE_FREQUENCY_X: f64 = 0.45;
/// Noise frequency along the y axis
pub const NOISE_FREQUENCY_Y: f64 = 0.67;

/// Default seed for the coherent noise generators
pub const DEFAULT_SEED: u64 = 0;

// Debug snapshot layout: <root>/<prefix>/<label>.png
/// Directory debug snapshots are written under
pub const SNAPSHOT_ROOT: &str = "image_testing";
/// Default label naming the snapshot directory
pub const DEFAULT_PREFIX: &str = "testing";

/// Mask weighting the first `NoiseComposite` sample
pub const RANDOM_MASK_FILE: &str = "random.png";
/// Inverse mask weighting the second `NoiseComposite` sample
pub const RANDOM_INVERT_MASK_FILE: &str = "random_invert.png";

// Output settings
/// Extension used for every file the tool writes
pub const OUTPUT_EXTENSION: &str = "png";
/// Joins the sample stem and strategy name in default output names
pub const OUTPUT_SEPARATOR: &str = "_";

/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
