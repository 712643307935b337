use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Cuidara";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default tracing filter when RUST_LOG is not set.
pub fn default_log_filter() -> &'static str {
    "info"
}

/// Get the application data directory
/// ~/Cuidara/ on all platforms (user-visible, per design requirement)
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join("Cuidara")
}

/// Get the reports directory (daily CSV reports, JSON exports)
pub fn reports_dir() -> PathBuf {
    app_data_dir().join("reports")
}
