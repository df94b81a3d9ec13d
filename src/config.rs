use log::Level;

pub const BRAND_NAME: &str = "Upsurge Capital";

// Any visible pixel counts as entering, with no margin around the viewport
pub const VIEWPORT_THRESHOLD: f64 = 0.0;
pub const VIEWPORT_ROOT_MARGIN: &str = "0px";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
