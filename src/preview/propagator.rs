//! Live preview propagation.
//!
//! [`LivePreview`] turns a burst of theme edits into one debounced styling
//! pass over the widget registry. Each widget gets three tiers of styling:
//! stylesheet text, then direct colors, then a repaint request. Tiers two
//! and three always run. A failing widget is logged and reported but never
//! stops the rest of the batch.

use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

use super::debounce::{DebounceConfig, Debouncer, Phase};
use super::registry::{WidgetEntry, WidgetError, WidgetRegistry};
use super::stylesheet::{CategoryStyle, StyleMetrics, StyleSheetSet};
use crate::accessibility::{contrast_ratio, suggest_improved_color, WcagLevel};
use crate::models::ThemeColorMap;

/// Passes slower than this are logged as warnings.
pub const SLOW_PASS_THRESHOLD: Duration = Duration::from_millis(500);

/// Text roles checked when contrast validation is on, with the background
/// chain each one is read against.
const VALIDATED_PAIRS: &[(&str, &[&str])] = &[
    ("text", &["background"]),
    ("button_text", &["button_background", "primary"]),
    ("input_text", &["input_background", "background"]),
    ("selection_text", &["selection_background", "primary"]),
];

/// Outcome of one apply pass.
///
/// Every registry entry present when the pass starts counts as attempted.
/// An entry whose widget has already been dropped is skipped for styling
/// but reported in `failed_widget_names`, so hosts notice leaked
/// registrations; [`WidgetRegistry::prune_stale`] removes such entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ApplyReport {
    /// Widgets the pass tried to style
    pub attempted: usize,
    /// Widgets styled without error
    pub succeeded: usize,
    /// Names of widgets that failed, in registry order
    pub failed_widget_names: Vec<String>,
}

impl ApplyReport {
    /// Whether every attempted widget succeeded.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failed_widget_names.is_empty()
    }
}

/// Contrast check applied to each snapshot before stylesheets are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContrastValidation {
    /// Level text roles must reach
    pub target: WcagLevel,
    /// Use large-text thresholds
    pub large_text: bool,
}

/// Propagator settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewOptions {
    /// Debounce timing
    pub debounce: DebounceConfig,
    /// Optional contrast fixing of text roles
    pub validation: Option<ContrastValidation>,
    /// Geometry and font used by the generators
    pub metrics: StyleMetrics,
}

/// Schedules updates on a [`LivePreview`] from another thread.
///
/// Messages are queued and picked up on the owning thread at the next
/// [`LivePreview::tick`].
#[derive(Debug, Clone)]
pub struct RemoteScheduler {
    sender: Sender<ThemeColorMap>,
}

impl RemoteScheduler {
    /// Queues a snapshot. Returns `false` if the preview has been dropped.
    pub fn schedule_update(&self, colors: ThemeColorMap) -> bool {
        self.sender.send(colors).is_ok()
    }
}

type AppliedCallback = Box<dyn FnMut(&ThemeColorMap, &ApplyReport)>;

/// Debounced, failure-isolating theme propagator.
///
/// Single-threaded: the host calls [`tick`](Self::tick) from its event loop
/// and may use [`next_deadline`](Self::next_deadline) to size its timer.
pub struct LivePreview {
    registry: Rc<RefCell<WidgetRegistry>>,
    debouncer: Debouncer,
    pending: Option<ThemeColorMap>,
    current: ThemeColorMap,
    options: PreviewOptions,
    inbox: Receiver<ThemeColorMap>,
    sender: Sender<ThemeColorMap>,
    on_applied: Option<AppliedCallback>,
}

impl LivePreview {
    /// Creates an idle propagator over a host-owned registry.
    #[must_use]
    pub fn new(registry: Rc<RefCell<WidgetRegistry>>, options: PreviewOptions) -> Self {
        let (sender, inbox) = mpsc::channel();
        Self {
            registry,
            debouncer: Debouncer::new(options.debounce),
            pending: None,
            current: ThemeColorMap::new(),
            options,
            inbox,
            sender,
            on_applied: None,
        }
    }

    /// Records the latest color map and arms the debounce timer.
    ///
    /// The map is taken by value so later edits by the caller cannot leak
    /// into the pass. Any previously pending map is discarded.
    pub fn schedule_update(&mut self, colors: ThemeColorMap) {
        self.schedule_update_at(colors, Instant::now());
    }

    /// [`schedule_update`](Self::schedule_update) with an explicit clock.
    pub fn schedule_update_at(&mut self, colors: ThemeColorMap, now: Instant) {
        if self.pending.replace(colors).is_some() {
            debug!("Superseded pending preview update");
        }
        self.debouncer.schedule(now);
    }

    /// Drains remote updates and runs a pass if the debounce timer is due.
    pub fn tick(&mut self, now: Instant) -> Option<ApplyReport> {
        self.drain_inbox(now);
        let burst_started = self.debouncer.burst_started();
        if self.debouncer.poll(now) {
            if let Some(started) = burst_started {
                debug!(
                    "Debounce fired {}ms after first change",
                    now.saturating_duration_since(started).as_millis()
                );
            }
            return Some(self.run_pass(now));
        }
        None
    }

    /// Applies immediately, bypassing the debounce timer.
    ///
    /// Uses the pending map if there is one, otherwise re-applies the
    /// current map. Returns an empty report if a pass is already running.
    pub fn apply_now(&mut self) -> ApplyReport {
        if !self.debouncer.begin() {
            warn!("Apply requested while a pass is running; ignored");
            return ApplyReport::default();
        }
        self.run_pass(Instant::now())
    }

    /// When the host should call [`tick`](Self::tick) next.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    /// Current debounce phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.debouncer.phase()
    }

    /// The snapshot used by the most recent pass.
    #[must_use]
    pub const fn current_colors(&self) -> &ThemeColorMap {
        &self.current
    }

    /// Handle for scheduling from other threads.
    #[must_use]
    pub fn remote(&self) -> RemoteScheduler {
        RemoteScheduler {
            sender: self.sender.clone(),
        }
    }

    /// Registers a callback run after every completed pass.
    pub fn set_applied_callback(&mut self, callback: impl FnMut(&ThemeColorMap, &ApplyReport) + 'static) {
        self.on_applied = Some(Box::new(callback));
    }

    /// Replaces geometry and font settings used from the next pass on.
    pub fn set_metrics(&mut self, metrics: StyleMetrics) {
        self.options.metrics = metrics;
    }

    /// Enables or disables contrast validation from the next pass on.
    pub fn set_validation(&mut self, validation: Option<ContrastValidation>) {
        self.options.validation = validation;
    }

    fn drain_inbox(&mut self, now: Instant) {
        while let Ok(colors) = self.inbox.try_recv() {
            debug!("Received remote preview update");
            self.schedule_update_at(colors, now);
        }
    }

    /// Runs one pass. The debouncer must already be in Applying.
    ///
    /// `now` is the caller's clock; updates that arrive during the pass are
    /// re-armed against it.
    fn run_pass(&mut self, now: Instant) -> ApplyReport {
        let started = Instant::now();

        if let Some(colors) = self.pending.take() {
            self.current = match self.options.validation {
                Some(validation) => validate_contrast(colors, validation),
                None => colors,
            };
        }

        let styles = StyleSheetSet::generate(&self.current, &self.options.metrics);

        // Re-read the registry now; release the borrow before touching
        // widgets so handles may unregister themselves.
        let entries: Vec<WidgetEntry> = self.registry.borrow().entries().cloned().collect();

        let mut report = ApplyReport::default();
        for entry in &entries {
            report.attempted += 1;
            match apply_to_widget(entry, styles.get(entry.category())) {
                Ok(()) => report.succeeded += 1,
                Err(e) => {
                    error!(
                        "Failed to apply theme to widget '{}' ({}): {}",
                        entry.name(),
                        entry.category(),
                        e
                    );
                    report.failed_widget_names.push(entry.name().to_string());
                }
            }
        }

        if let Some(callback) = self.on_applied.as_mut() {
            callback(&self.current, &report);
        }

        // Updates queued while the pass ran re-arm the timer on finish
        self.drain_inbox(now);

        let elapsed = started.elapsed();
        if elapsed > SLOW_PASS_THRESHOLD {
            warn!("Preview pass took {}ms", elapsed.as_millis());
        }
        info!(
            "Applied preview to {}/{} widgets in {}ms",
            report.succeeded,
            report.attempted,
            elapsed.as_millis()
        );

        self.debouncer.finish(now);
        report
    }
}

/// Styles one widget with all three tiers.
///
/// Fails when the widget is gone, when any tier reports an error other than
/// [`WidgetError::Unsupported`], or when neither the stylesheet nor the
/// direct colors could be applied.
fn apply_to_widget(entry: &WidgetEntry, style: &CategoryStyle) -> Result<(), WidgetError> {
    let handle = entry.upgrade().ok_or(WidgetError::Destroyed)?;
    let mut first_error = None;
    let mut record = |result: Result<(), WidgetError>| match result {
        Ok(()) => true,
        Err(WidgetError::Unsupported) => false,
        Err(e) => {
            first_error.get_or_insert(e);
            false
        }
    };

    let styled = record(handle.set_stylesheet(&style.stylesheet));
    let colored = record(handle.set_colors(style.colors.background, style.colors.foreground));
    let repainted = record(handle.request_repaint());

    if !repainted {
        debug!("Widget '{}' did not accept a repaint request", entry.name());
    }

    match first_error {
        Some(e) => Err(e),
        None if !styled && !colored => Err(WidgetError::Unsupported),
        None => Ok(()),
    }
}

/// Replaces text roles that miss the target contrast with adjusted colors.
///
/// Only roles the theme sets explicitly are touched; derived colors already
/// pick the better of black and white.
fn validate_contrast(mut colors: ThemeColorMap, validation: ContrastValidation) -> ThemeColorMap {
    let target = validation.target.min_ratio(validation.large_text);

    for (text_role, background_chain) in VALIDATED_PAIRS {
        let (Some(fg), Some(bg)) = (colors.get(text_role), colors.first_of(background_chain)) else {
            continue;
        };
        if contrast_ratio(fg, bg) >= target {
            continue;
        }
        let adjusted = suggest_improved_color(fg, bg, target);
        info!(
            "Adjusted '{}' from {} to {} for {:.1}:1 contrast on {}",
            text_role, fg, adjusted, target, bg
        );
        colors.insert(*text_role, adjusted);
    }
    colors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Color;

    #[test]
    fn test_validate_contrast_fixes_only_failing_roles() {
        let colors = ThemeColorMap::from_pairs(&[
            ("text", "#aaaaaa"),
            ("background", "#ffffff"),
            ("button_text", "#ffffff"),
            ("primary", "#000000"),
        ])
        .unwrap();

        let validated = validate_contrast(
            colors,
            ContrastValidation {
                target: WcagLevel::Aa,
                large_text: false,
            },
        );

        let text = validated.get("text").unwrap();
        assert_ne!(text, Color::new(0xaa, 0xaa, 0xaa));
        assert!(contrast_ratio(text, Color::WHITE) >= 4.5);
        assert_eq!(validated.get("button_text"), Some(Color::WHITE));
    }

    #[test]
    fn test_validate_contrast_leaves_unset_roles_alone() {
        let colors = ThemeColorMap::from_pairs(&[("background", "#ffffff")]).unwrap();
        let validated = validate_contrast(
            colors.clone(),
            ContrastValidation {
                target: WcagLevel::Aaa,
                large_text: false,
            },
        );
        assert_eq!(validated, colors);
    }

    #[test]
    fn test_report_is_clean() {
        let mut report = ApplyReport::default();
        assert!(report.is_clean());
        report.failed_widget_names.push("x".to_string());
        assert!(!report.is_clean());
    }
}
