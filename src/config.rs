use log::Level;

/// Fraction of a section that has to be inside the viewport before it
/// becomes the active one.
pub const VISIBILITY_THRESHOLD: f64 = 0.8;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose while running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
