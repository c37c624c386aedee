// Shared tuning constants for the streak fire effect, used by both the
// engine and the web frontend.

// Pool sizing
pub const PARTICLES_PER_LEVEL: usize = 15; // pool grows by this per intensity level
pub const MAX_INTENSITY: u32 = 7; // streak values saturate here

// Spawn shape
pub const SPAWN_ALPHA: f32 = 0.8; // opacity at spawn and after recycle
pub const ALPHA_DECAY_PER_FRAME: f32 = 0.01;
pub const SPAWN_JITTER: f32 = 10.0; // horizontal spread around the container center
pub const PARTICLE_RADIUS: f32 = 2.0;

// Velocity shape: vx in [-intensity, intensity], vy always upward
pub const DRIFT_SPEED_MAX: f32 = 1.0; // scaled by intensity
pub const RISE_SPEED_SPAN: f32 = 3.0; // scaled by intensity
pub const RISE_SPEED_MIN: f32 = 1.0;

// Tier thresholds on the raw (unsaturated) streak value
pub const INTENSE_TIER_MIN_STREAK: u32 = 7;
pub const MEDIUM_TIER_MIN_STREAK: u32 = 5;

// Tier palette
pub const TIER_LOW_RGB: [f32; 3] = [1.0, 0.60, 0.0]; // amber
pub const TIER_MEDIUM_RGB: [f32; 3] = [1.0, 0.34, 0.13]; // deep orange
pub const TIER_INTENSE_RGB: [f32; 3] = [1.0, 0.17, 0.0]; // red-hot
