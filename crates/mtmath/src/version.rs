//! Version information.

/// Crate version.
#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Version plus target platform, logged at startup.
#[must_use]
pub fn full_version() -> String {
    format!(
        "mtmath {} ({}-{})",
        version(),
        std::env::consts::ARCH,
        std::env::consts::OS
    )
}
