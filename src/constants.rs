// Defaults and caps shared by the session, the generators and the CLI

/// Smallest value produced by the random array generator
pub const MIN_GENERATED_VALUE: i64 = 10;

/// Largest value produced by the random array generator (inclusive)
pub const MAX_GENERATED_VALUE: i64 = 499;

/// Array size used when none is given on the command line
pub const DEFAULT_ARRAY_SIZE: usize = 30;

/// Array sizes are clamped to this range
pub const MIN_ARRAY_SIZE: usize = 1;
pub const MAX_ARRAY_SIZE: usize = 200;

/// Playback speed bounds; the step interval is `max(10, 200 - speed)` ms
pub const DEFAULT_SPEED: u16 = 50;
pub const MIN_SPEED: u16 = 1;
pub const MAX_SPEED: u16 = 190;

/// Shortest step interval in milliseconds
pub const MIN_STEP_INTERVAL_MS: u64 = 10;

/// Interval base in milliseconds, before the speed is subtracted
pub const STEP_INTERVAL_BASE_MS: u64 = 200;

/// Bogo sort gives up after this many shuffles
pub const SHUFFLE_ATTEMPT_CAP: u32 = 10_000;

/// Miracle sort gives up after this many inspections
pub const MIRACLE_ATTEMPT_CAP: u32 = 64;

/// Memory budget for one step sequence (512 MB)
pub const STEP_MEMORY_LIMIT: usize = 512 * 1024 * 1024;

/// Steps between two stored frames of the lazy projection
pub const FRAME_CHECKPOINT_INTERVAL: usize = 64;
