//! folio-core: Content model for the folio terminal portfolio
//!
//! This crate provides the headless part of folio, including:
//! - Experience records for the timeline
//! - Profile, skills and project content with built-in sample data
//! - Configuration loading and saving

pub mod config;
pub mod experience;
pub mod portfolio;

// Re-export commonly used types
pub use config::{Config, ConfigError, IconStyle, ThemeName};
pub use experience::ExperienceRecord;
pub use portfolio::{ContactLink, ContentError, LinkKind, Portfolio, Profile, Project};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_version() {
        let version = core_version();
        assert!(!version.is_empty());
        assert!(version.starts_with("0."));
    }
}
