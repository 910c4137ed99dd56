//! Data models for colors, themes and preview widgets.
//!
//! Models are independent of UI and business logic.

pub mod color;
pub mod theme;
pub mod widget;

// Re-export all model types
pub use color::{Color, ColorError};
pub use theme::{
    FontSpec, ThemeColorMap, ThemeDocument, ThemeVariant, ROLE_ACCENT, ROLE_BACKGROUND,
    ROLE_PRIMARY, ROLE_TEXT,
};
pub use widget::WidgetCategory;
