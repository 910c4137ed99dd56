//! Live preview propagator.
//!
//! Coalesces theme edits with a debounce timer and applies per-category
//! stylesheets to a registry of host-owned widgets.

pub mod debounce;
pub mod propagator;
pub mod registry;
pub mod stylesheet;

pub use debounce::{DebounceConfig, Debouncer, Phase};
pub use propagator::{ApplyReport, ContrastValidation, LivePreview, PreviewOptions, RemoteScheduler};
pub use registry::{WidgetEntry, WidgetError, WidgetHandle, WidgetRegistry};
pub use stylesheet::{
    generate_stylesheet, generate_window_stylesheet, CategoryStyle, StyleMetrics, StyleSheetSet,
    WidgetColors,
};
