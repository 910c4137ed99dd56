//! Service layer for business logic.
//!
//! This module contains services that encapsulate file I/O and coordinate
//! between the models, the accessibility engine and the exporters.

pub mod themes;

// Re-export commonly used types and functions
pub use themes::ThemeService;
