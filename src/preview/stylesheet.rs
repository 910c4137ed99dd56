//! Per-category Qt stylesheet generation.
//!
//! Every role used by a generator resolves through an explicit fallback
//! chain that ends in one of the base roles (`primary`, `accent`,
//! `background`, `text`) and finally in a literal default, so any color map,
//! including an empty one, yields complete stylesheets.

use std::fmt::Write as _;

use crate::accessibility::best_text_color;
use crate::models::{Color, FontSpec, ThemeColorMap, ThemeDocument, WidgetCategory};

/// Default for `primary` when the theme does not set it.
pub const DEFAULT_PRIMARY: Color = Color::new(0x00, 0x7a, 0xcc);
/// Default for `background`.
pub const DEFAULT_BACKGROUND: Color = Color::new(0xff, 0xff, 0xff);
/// Default for `text`.
pub const DEFAULT_TEXT: Color = Color::new(0x33, 0x33, 0x33);

const DEFAULT_DISABLED_BACKGROUND: Color = Color::new(0xcc, 0xcc, 0xcc);
const DEFAULT_DISABLED_TEXT: Color = Color::new(0x66, 0x66, 0x66);

/// Largest pixel metric read from a theme file.
pub const MAX_METRIC_PX: u32 = 256;

/// Geometry and font settings shared by all generators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleMetrics {
    /// Corner radius in pixels
    pub border_radius: u32,
    /// Inner padding in pixels
    pub padding: u32,
    /// Border width in pixels
    pub border_width: u32,
    /// Default widget font
    pub font: Option<FontSpec>,
}

impl Default for StyleMetrics {
    fn default() -> Self {
        Self {
            border_radius: 4,
            padding: 8,
            border_width: 2,
            font: None,
        }
    }
}

impl StyleMetrics {
    /// Reads `border_radius`, `padding`, `border_width` and the `default`
    /// font from a theme, keeping defaults for anything missing.
    ///
    /// Pixel values are clamped to [`MAX_METRIC_PX`].
    #[must_use]
    pub fn from_document(doc: &ThemeDocument) -> Self {
        let defaults = Self::default();
        let size = |key: &str, fallback: u32| {
            doc.sizes.get(key).copied().unwrap_or(fallback).min(MAX_METRIC_PX)
        };
        Self {
            border_radius: size("border_radius", defaults.border_radius),
            padding: size("padding", defaults.padding),
            border_width: size("border_width", defaults.border_width),
            font: doc.fonts.get("default").cloned(),
        }
    }
}

/// Background/foreground pair used when a widget is colored directly
/// instead of through a stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetColors {
    /// Widget background
    pub background: Color,
    /// Widget text
    pub foreground: Color,
}

/// Every role a generator may emit, resolved once per pass.
#[derive(Debug, Clone)]
struct ResolvedRoles {
    background: Color,
    text: Color,
    border: Color,

    button_background: Color,
    button_text: Color,
    button_hover: Color,
    button_pressed: Color,
    disabled_background: Color,
    disabled_text: Color,
    disabled_border: Color,

    input_background: Color,
    input_text: Color,
    input_border: Color,
    focus_border: Color,
    selection_background: Color,
    selection_text: Color,

    scrollbar_background: Color,
    scrollbar_handle: Color,
    scrollbar_handle_hover: Color,

    progress_background: Color,
    progress_fill: Color,
    slider_groove: Color,
    slider_handle: Color,
    slider_handle_border: Color,
}

impl ResolvedRoles {
    fn resolve(colors: &ThemeColorMap) -> Self {
        let or = |chain: &[&str], fallback: Color| colors.first_of(chain).unwrap_or(fallback);

        let primary = or(&["primary"], DEFAULT_PRIMARY);
        let accent = or(&["accent"], primary);
        let background = or(&["background"], DEFAULT_BACKGROUND);
        let text = or(&["text"], DEFAULT_TEXT);
        let border = or(&["border"], primary);

        let button_background = or(&["button_background"], primary);
        let button_hover = or(&["button_hover"], accent);
        let input_border = or(&["input_border"], primary);
        let selection_background = or(&["selection_background"], primary);
        let disabled_background = or(
            &["button_disabled_background", "disabled_background"],
            DEFAULT_DISABLED_BACKGROUND,
        );

        Self {
            background,
            text,
            border,

            button_background,
            button_text: or(&["button_text"], best_text_color(button_background)),
            button_hover,
            button_pressed: or(&["button_pressed"], button_hover),
            disabled_background,
            disabled_text: or(
                &["button_disabled_text", "disabled_text"],
                DEFAULT_DISABLED_TEXT,
            ),
            disabled_border: or(&["disabled_border"], disabled_background),

            input_background: or(&["input_background"], background),
            input_text: or(&["input_text"], text),
            input_border,
            focus_border: or(&["focus_border", "accent"], input_border),
            selection_background,
            selection_text: or(&["selection_text"], best_text_color(selection_background)),

            scrollbar_background: or(&["scrollbar_background"], background),
            scrollbar_handle: or(&["scrollbar_handle"], primary),
            scrollbar_handle_hover: or(&["scrollbar_handle_hover"], accent),

            progress_background: or(&["progress_background"], background),
            progress_fill: or(&["progress_fill"], primary),
            slider_groove: or(&["slider_groove"], background),
            slider_handle: or(&["slider_handle"], primary),
            slider_handle_border: or(&["slider_handle_border"], primary),
        }
    }

    fn widget_colors(&self, category: WidgetCategory) -> WidgetColors {
        let (background, foreground) = match category {
            WidgetCategory::Button => (self.button_background, self.button_text),
            WidgetCategory::Input | WidgetCategory::Selection => {
                (self.input_background, self.input_text)
            }
            WidgetCategory::Display | WidgetCategory::Container => (self.background, self.text),
            WidgetCategory::Progress => (self.progress_background, self.text),
        };
        WidgetColors {
            background,
            foreground,
        }
    }
}

/// Stylesheet and direct colors for one widget category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryStyle {
    /// Category this style targets
    pub category: WidgetCategory,
    /// Qt stylesheet text
    pub stylesheet: String,
    /// Colors for direct (non-stylesheet) application
    pub colors: WidgetColors,
}

/// Styles for all six categories, generated from one color-map snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSheetSet {
    styles: [CategoryStyle; 6],
}

impl StyleSheetSet {
    /// Generates every category style from `colors`.
    #[must_use]
    pub fn generate(colors: &ThemeColorMap, metrics: &StyleMetrics) -> Self {
        let roles = ResolvedRoles::resolve(colors);
        Self {
            styles: WidgetCategory::ALL.map(|category| CategoryStyle {
                category,
                stylesheet: render(category, &roles, metrics),
                colors: roles.widget_colors(category),
            }),
        }
    }

    /// Style for one category.
    #[must_use]
    pub fn get(&self, category: WidgetCategory) -> &CategoryStyle {
        &self.styles[category.index()]
    }

    /// Iterates styles in category order.
    pub fn iter(&self) -> impl Iterator<Item = &CategoryStyle> {
        self.styles.iter()
    }
}

/// Generates the stylesheet for a single category.
///
/// ```
/// use theme_studio::models::{ThemeColorMap, WidgetCategory};
/// use theme_studio::preview::{generate_stylesheet, StyleMetrics};
///
/// let colors = ThemeColorMap::from_pairs(&[("primary", "#007acc")]).unwrap();
/// let qss = generate_stylesheet(&colors, WidgetCategory::Button, &StyleMetrics::default());
/// assert!(qss.contains("background-color: #007acc;"));
/// ```
#[must_use]
pub fn generate_stylesheet(
    colors: &ThemeColorMap,
    category: WidgetCategory,
    metrics: &StyleMetrics,
) -> String {
    render(category, &ResolvedRoles::resolve(colors), metrics)
}

/// Window-level stylesheet covering menus, tool bars and the status bar.
#[must_use]
pub fn generate_window_stylesheet(colors: &ThemeColorMap, metrics: &StyleMetrics) -> String {
    let r = ResolvedRoles::resolve(colors);
    let radius = metrics.border_radius;
    let mut out = String::new();

    let _ = write!(
        out,
        "QWidget {{\n    background-color: {bg};\n    color: {fg};\n",
        bg = r.background,
        fg = r.text
    );
    if let Some(font) = &metrics.font {
        let _ = writeln!(out, "    font-family: \"{}\";", font.family);
        let _ = writeln!(out, "    font-size: {}pt;", font.size);
        if font.bold {
            out.push_str("    font-weight: bold;\n");
        }
    }
    out.push_str("}\n");

    let _ = write!(
        out,
        "\
QMainWindow {{
    background-color: {bg};
    color: {fg};
}}
QMenuBar {{
    background-color: {bg};
    color: {fg};
    border-bottom: 1px solid {border};
}}
QMenuBar::item {{
    background-color: transparent;
    color: {fg};
    padding: 4px 8px;
}}
QMenuBar::item:selected, QMenu::item:selected {{
    background-color: {sel_bg};
    color: {sel_fg};
}}
QMenu {{
    background-color: {bg};
    color: {fg};
    border: 1px solid {border};
    border-radius: {radius}px;
}}
QMenu::item {{
    background-color: transparent;
    color: {fg};
    padding: 6px 20px;
}}
QToolBar {{
    background-color: {bg};
    color: {fg};
    border: 1px solid {border};
    border-radius: {radius}px;
    spacing: 2px;
}}
QStatusBar {{
    background-color: {bg};
    color: {fg};
    border-top: 1px solid {border};
}}
",
        bg = r.background,
        fg = r.text,
        border = r.border,
        sel_bg = r.selection_background,
        sel_fg = r.selection_text,
    );
    out
}

fn render(category: WidgetCategory, roles: &ResolvedRoles, metrics: &StyleMetrics) -> String {
    match category {
        WidgetCategory::Button => button(roles, metrics),
        WidgetCategory::Input => input(roles, metrics),
        WidgetCategory::Selection => selection(roles, metrics),
        WidgetCategory::Display => display(roles, metrics),
        WidgetCategory::Container => container(roles, metrics),
        WidgetCategory::Progress => progress(roles, metrics),
    }
}

fn button(r: &ResolvedRoles, m: &StyleMetrics) -> String {
    format!(
        "\
QPushButton, QToolButton {{
    background-color: {bg};
    color: {fg};
    border: {bw}px solid {bg};
    border-radius: {radius}px;
    padding: {pad}px {pad2}px;
    font-weight: bold;
    min-height: 20px;
}}
QPushButton:hover, QToolButton:hover {{
    background-color: {hover};
    border-color: {hover};
}}
QPushButton:pressed, QToolButton:pressed {{
    background-color: {pressed};
}}
QPushButton:disabled, QToolButton:disabled {{
    background-color: {dis_bg};
    color: {dis_fg};
    border-color: {dis_border};
}}
",
        bg = r.button_background,
        fg = r.button_text,
        hover = r.button_hover,
        pressed = r.button_pressed,
        dis_bg = r.disabled_background,
        dis_fg = r.disabled_text,
        dis_border = r.disabled_border,
        bw = m.border_width,
        radius = m.border_radius,
        pad = m.padding,
        pad2 = m.padding.saturating_mul(2),
    )
}

fn input(r: &ResolvedRoles, m: &StyleMetrics) -> String {
    format!(
        "\
QLineEdit, QTextEdit, QPlainTextEdit, QSpinBox {{
    background-color: {bg};
    color: {fg};
    border: {bw}px solid {border};
    border-radius: {radius}px;
    padding: {pad}px;
    selection-background-color: {sel_bg};
    selection-color: {sel_fg};
}}
QLineEdit:focus, QTextEdit:focus, QPlainTextEdit:focus, QSpinBox:focus {{
    border-color: {focus};
    border-width: {bw_focus}px;
}}
",
        bg = r.input_background,
        fg = r.input_text,
        border = r.input_border,
        sel_bg = r.selection_background,
        sel_fg = r.selection_text,
        focus = r.focus_border,
        bw = m.border_width,
        bw_focus = m.border_width.saturating_add(1),
        radius = m.border_radius,
        pad = m.padding.saturating_sub(2),
    )
}

fn selection(r: &ResolvedRoles, m: &StyleMetrics) -> String {
    format!(
        "\
QComboBox, QListWidget, QTableWidget, QCheckBox, QRadioButton {{
    background-color: {bg};
    color: {fg};
    border: {bw}px solid {border};
    border-radius: {radius}px;
    padding: {pad}px;
}}
QComboBox::drop-down {{
    border: none;
    width: 20px;
}}
QComboBox::down-arrow {{
    image: none;
    border-left: 5px solid transparent;
    border-right: 5px solid transparent;
    border-top: 5px solid {text};
}}
QComboBox QAbstractItemView, QListWidget::item:selected, QTableWidget::item:selected {{
    background-color: {bg};
    color: {fg};
    selection-background-color: {sel_bg};
    selection-color: {sel_fg};
}}
",
        bg = r.input_background,
        fg = r.input_text,
        border = r.input_border,
        text = r.text,
        sel_bg = r.selection_background,
        sel_fg = r.selection_text,
        bw = m.border_width,
        radius = m.border_radius,
        pad = m.padding / 2,
    )
}

fn display(r: &ResolvedRoles, m: &StyleMetrics) -> String {
    format!(
        "\
QLabel, QGroupBox {{
    color: {fg};
    background-color: transparent;
}}
QGroupBox {{
    font-weight: bold;
    border: {bw}px solid {border};
    border-radius: {radius}px;
    margin-top: 10px;
    padding-top: 10px;
}}
QGroupBox::title {{
    subcontrol-origin: margin;
    left: 10px;
    padding: 0 5px 0 5px;
    background-color: {bg};
    color: {fg};
}}
",
        fg = r.text,
        bg = r.background,
        border = r.border,
        bw = m.border_width,
        radius = m.border_radius.saturating_add(2),
    )
}

fn container(r: &ResolvedRoles, m: &StyleMetrics) -> String {
    format!(
        "\
QFrame, QScrollArea, QTabWidget {{
    background-color: {bg};
    color: {fg};
}}
QScrollArea {{
    border: 1px solid {border};
    border-radius: {radius}px;
}}
QTabWidget::pane {{
    border: 1px solid {border};
    background-color: {bg};
}}
QTabBar::tab {{
    background-color: {tab_bg};
    color: {fg};
    border: 1px solid {border};
    border-bottom: none;
    border-top-left-radius: {radius}px;
    border-top-right-radius: {radius}px;
    padding: {pad}px {pad2}px;
    margin-right: 2px;
}}
QTabBar::tab:selected {{
    background-color: {bg};
    border-bottom: 1px solid {bg};
}}
QScrollBar:vertical {{
    background-color: {sb_bg};
    width: 12px;
    border-radius: 6px;
}}
QScrollBar::handle:vertical {{
    background-color: {handle};
    border-radius: 6px;
    min-height: 20px;
}}
QScrollBar::handle:vertical:hover {{
    background-color: {handle_hover};
}}
",
        bg = r.background,
        fg = r.text,
        border = r.border,
        tab_bg = r.input_background,
        sb_bg = r.scrollbar_background,
        handle = r.scrollbar_handle,
        handle_hover = r.scrollbar_handle_hover,
        radius = m.border_radius,
        pad = m.padding,
        pad2 = m.padding.saturating_mul(2),
    )
}

fn progress(r: &ResolvedRoles, m: &StyleMetrics) -> String {
    format!(
        "\
QProgressBar, QSlider {{
    background-color: {bg};
    color: {fg};
    border: 1px solid {border};
    border-radius: {radius}px;
}}
QProgressBar::chunk {{
    background-color: {fill};
    border-radius: {chunk_radius}px;
}}
QSlider::groove:horizontal {{
    background-color: {groove};
    border: 1px solid {border};
    border-radius: 2px;
    height: 8px;
}}
QSlider::handle:horizontal {{
    background-color: {handle};
    border: 2px solid {handle_border};
    border-radius: 8px;
    width: 16px;
    margin: -4px 0;
}}
",
        bg = r.progress_background,
        fg = r.text,
        border = r.border,
        fill = r.progress_fill,
        groove = r.slider_groove,
        handle = r.slider_handle,
        handle_border = r.slider_handle_border,
        radius = m.border_radius,
        chunk_radius = m.border_radius.saturating_sub(1),
    )
}
