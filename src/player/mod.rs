pub mod cursor;

/// Default seconds between timed chord changes
pub const DEFAULT_TEMPO_SECONDS: f32 = 3.0;
