use std::time::Duration;

// Shared timeline and smoothing tuning constants used by the web and simulator hosts.

// Image 1 grows from a framed size to full bleed
pub const IMG1_START: f32 = 0.0;
pub const IMG1_END: f32 = 0.30;
pub const IMG1_START_SIZE: f32 = 60.0; // percent of the sticky frame
pub const IMG1_END_SIZE: f32 = 100.0;

// Image 2 slides in over image 1
pub const IMG2_START: f32 = 0.30;
pub const IMG2_END: f32 = 0.60;
pub const IMG2_OFFSET: f32 = 100.0; // percent, fully off-screen

// Text overlay fades and rises into place
pub const TEXT_START: f32 = 0.60;
pub const TEXT_END: f32 = 0.80;
pub const TEXT_OFFSET_PX: f32 = 30.0;

// Convergence loop
pub const BASE_RATE: f32 = 0.12; // fraction of the remaining distance covered per tick
pub const REVEAL_RATE_MULTIPLIER: f32 = 1.5; // opacity/text settle faster than size/position
pub const SETTLE_TOLERANCE: f32 = 0.01; // in each field's native unit

// Resize notifications are coalesced over this quiet period
pub const RESIZE_QUIET: Duration = Duration::from_millis(100);
