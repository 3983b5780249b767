//! Logging facilities for Font Catalogue.
//!
//! Font Catalogue uses the `tracing` crate for instrumentation. The library
//! crates never install a subscriber; to see logs, install one in your
//! application:
//!
//! ```ignore
//! use tracing_subscriber::EnvFilter;
//!
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter(EnvFilter::new("font_catalogue=debug"))
//!         .init();
//! }
//! ```

/// Span names used throughout Font Catalogue for tracing.
pub mod span_names {
    /// Signal emission span.
    pub const SIGNAL: &str = "font_catalogue::signal";
    /// List model sort span.
    pub const SORT: &str = "font_catalogue::sort";
    /// Font enumeration span.
    pub const ENUMERATE: &str = "font_catalogue::enumerate";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "font_catalogue_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "font_catalogue_core::signal";
    /// List model target.
    pub const MODEL: &str = "font_catalogue::model";
    /// Settings target.
    pub const SETTINGS: &str = "font_catalogue::settings";
    /// Label source target.
    pub const SOURCE: &str = "font_catalogue::source";
    /// Font database target.
    pub const TEXT: &str = "font_catalogue_text";
}

/// Builds an `EnvFilter`-style directive enabling `level` for every
/// catalogue target.
///
/// ```
/// use font_catalogue_core::logging::filter_directive;
///
/// let directive = filter_directive("debug");
/// assert!(directive.contains("font_catalogue_core=debug"));
/// ```
pub fn filter_directive(level: &str) -> String {
    [targets::CORE, "font_catalogue", targets::TEXT]
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}
