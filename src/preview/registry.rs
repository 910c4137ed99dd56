//! Live widget registry shared between the host UI and the preview.
//!
//! The host owns its widgets; the registry only keeps [`Weak`] handles, so a
//! widget dropped by the host simply becomes a stale entry that the apply
//! pass reports and skips.

use std::rc::{Rc, Weak};
use thiserror::Error;
use tracing::debug;

use crate::models::{Color, WidgetCategory};

/// Failure of a single styling call on a widget.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WidgetError {
    /// The widget no longer exists.
    #[error("widget was destroyed")]
    Destroyed,
    /// The widget refused the update.
    #[error("widget rejected the update: {0}")]
    Rejected(String),
    /// The widget kind does not support this styling call.
    #[error("operation not supported by this widget")]
    Unsupported,
}

/// Styling capabilities the preview needs from a toolkit widget.
///
/// Methods take `&self`: handles are shared with the host, which is expected
/// to use interior mutability the way toolkit widgets do.
pub trait WidgetHandle {
    /// Assigns stylesheet text.
    fn set_stylesheet(&self, stylesheet: &str) -> Result<(), WidgetError>;

    /// Sets background and foreground colors directly.
    fn set_colors(&self, background: Color, foreground: Color) -> Result<(), WidgetError>;

    /// Requests a repaint.
    fn request_repaint(&self) -> Result<(), WidgetError>;
}

/// A registered widget.
#[derive(Clone)]
pub struct WidgetEntry {
    name: String,
    category: WidgetCategory,
    handle: Weak<dyn WidgetHandle>,
}

impl WidgetEntry {
    /// Unique registration name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Category assigned at registration.
    #[must_use]
    pub const fn category(&self) -> WidgetCategory {
        self.category
    }

    /// Strong handle, or `None` if the host dropped the widget.
    #[must_use]
    pub fn upgrade(&self) -> Option<Rc<dyn WidgetHandle>> {
        self.handle.upgrade()
    }

    /// Whether the widget is still alive.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.handle.strong_count() > 0
    }
}

impl std::fmt::Debug for WidgetEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetEntry")
            .field("name", &self.name)
            .field("category", &self.category)
            .field("live", &self.is_live())
            .finish()
    }
}

/// Registered widgets in registration order, keyed by unique name.
#[derive(Debug, Default)]
pub struct WidgetRegistry {
    entries: Vec<WidgetEntry>,
}

impl WidgetRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a widget under `name` with an explicit category.
    ///
    /// Re-registering a name replaces the previous entry in place.
    pub fn register<H>(&mut self, name: impl Into<String>, category: WidgetCategory, handle: &Rc<H>)
    where
        H: WidgetHandle + 'static,
    {
        let handle: Weak<H> = Rc::downgrade(handle);
        let handle: Weak<dyn WidgetHandle> = handle;
        let entry = WidgetEntry {
            name: name.into(),
            category,
            handle,
        };

        debug!("Registered widget '{}' as {}", entry.name, entry.category);
        if let Some(existing) = self.entries.iter_mut().find(|e| e.name == entry.name) {
            *existing = entry;
        } else {
            self.entries.push(entry);
        }
    }

    /// Registers a widget, classifying its category from `name`.
    pub fn register_named<H>(&mut self, name: impl Into<String>, handle: &Rc<H>) -> WidgetCategory
    where
        H: WidgetHandle + 'static,
    {
        let name = name.into();
        let category = WidgetCategory::classify(&name);
        self.register(name, category, handle);
        category
    }

    /// Removes a widget. Returns whether it was registered.
    pub fn unregister(&mut self, name: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.name != name);
        before != self.entries.len()
    }

    /// Drops entries whose widget no longer exists. Returns how many were removed.
    pub fn prune_stale(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(WidgetEntry::is_live);
        let removed = before - self.entries.len();
        if removed > 0 {
            debug!("Pruned {} stale widget entries", removed);
        }
        removed
    }

    /// Current entries, including stale ones.
    pub fn entries(&self) -> impl Iterator<Item = &WidgetEntry> {
        self.entries.iter()
    }

    /// Looks up an entry by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&WidgetEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Inert;

    impl WidgetHandle for Inert {
        fn set_stylesheet(&self, _: &str) -> Result<(), WidgetError> {
            Ok(())
        }
        fn set_colors(&self, _: Color, _: Color) -> Result<(), WidgetError> {
            Ok(())
        }
        fn request_repaint(&self) -> Result<(), WidgetError> {
            Ok(())
        }
    }

    #[test]
    fn test_register_named_classifies() {
        let mut registry = WidgetRegistry::new();
        let widget = Rc::new(Inert);

        assert_eq!(registry.register_named("push_button", &widget), WidgetCategory::Button);
        assert_eq!(registry.register_named("line_edit", &widget), WidgetCategory::Input);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("line_edit").map(WidgetEntry::category), Some(WidgetCategory::Input));
    }

    #[test]
    fn test_reregister_replaces_in_place() {
        let mut registry = WidgetRegistry::new();
        let widget = Rc::new(Inert);
        registry.register("a", WidgetCategory::Button, &widget);
        registry.register("b", WidgetCategory::Input, &widget);
        registry.register("a", WidgetCategory::Display, &widget);

        let names: Vec<_> = registry.entries().map(WidgetEntry::name).collect();
        assert_eq!(names, ["a", "b"]);
        assert_eq!(registry.get("a").map(WidgetEntry::category), Some(WidgetCategory::Display));
    }

    #[test]
    fn test_dropped_widget_becomes_stale() {
        let mut registry = WidgetRegistry::new();
        let kept = Rc::new(Inert);
        let dropped = Rc::new(Inert);
        registry.register("kept", WidgetCategory::Container, &kept);
        registry.register("dropped", WidgetCategory::Container, &dropped);
        drop(dropped);

        assert!(registry.get("kept").is_some_and(WidgetEntry::is_live));
        assert!(registry.get("dropped").is_some_and(|e| e.upgrade().is_none()));

        assert_eq!(registry.prune_stale(), 1);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_unregister() {
        let mut registry = WidgetRegistry::new();
        let widget = Rc::new(Inert);
        registry.register("label", WidgetCategory::Display, &widget);

        assert!(registry.unregister("label"));
        assert!(!registry.unregister("label"));
        assert!(registry.is_empty());
    }
}
