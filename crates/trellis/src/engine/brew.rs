//! The built-in BREW engine.

use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use trellis_core::PerfSpan;
use trellis_render::{
    Color, Drawable, RecordingRenderer, Rect, RenderTarget, Renderer, Stroke,
};
use trellis_style::{PropertyValue, StyleEngine, StylePriority, StyleSheet, WidgetMatchContext};

use super::{keys, Engine, EngineExt};
use crate::error::{WidgetError, WidgetResult};
use crate::logging::targets;
use crate::widget::Widget;
use crate::widget::widgets::{Orientation, Scale};

/// Environment variable naming a user theme file.
pub const THEME_ENV_VAR: &str = "TRELLIS_THEME";

/// The BREW theme: flat grey controls with a one pixel outline.
const BREW_THEME: &str = r#"
* {
    BorderColor: #2e2e2e;
    BorderWidth: 1px;
}

Scale {
    Slider.Length: 20px;
    Slider.Width: 10px;
    Slider.Color: #666666;
    Trough.Width: 4px;
    Trough.Color: #404040;
}

Scale:hover {
    Slider.Color: #7a7a7a;
}

Scale:pressed {
    Slider.Color: #8c8c8c;
}

Scale:disabled {
    Slider.Color: #4a4a4a;
    BorderColor: #3a3a3a;
}
"#;

/// BREW: Bob's Rendering Engine for Widgets.
///
/// Metrics and colours come from stylesheets: the built-in BREW theme at
/// [`StylePriority::Theme`], and any user themes at
/// [`StylePriority::Application`], which override it.
///
/// # Example
///
/// ```
/// use trellis::engine::BrewEngine;
///
/// let engine = BrewEngine::new();
/// engine.load_theme("Scale { Slider.Length: 32px; }").unwrap();
/// ```
pub struct BrewEngine {
    styles: RwLock<StyleEngine>,
}

impl BrewEngine {
    /// Create an engine with only the built-in theme.
    pub fn new() -> Self {
        let mut styles = StyleEngine::new();
        match StyleSheet::from_css(BREW_THEME, StylePriority::Theme) {
            Ok(sheet) => styles.add_stylesheet(sheet),
            Err(err) => tracing::error!(target: targets::ENGINE, %err, "built-in theme failed to parse"),
        }
        Self {
            styles: RwLock::new(styles),
        }
    }

    /// Create an engine and apply the user theme, if there is one.
    ///
    /// The theme file is the one named by `TRELLIS_THEME`, or else
    /// `<config dir>/trellis/theme.css` when that file exists. A theme that
    /// fails to load is logged and skipped.
    pub fn from_environment() -> Self {
        let engine = Self::new();
        if let Some(path) = Self::environment_theme_path() {
            match engine.load_theme_file(&path) {
                Ok(()) => tracing::info!(
                    target: targets::ENGINE,
                    path = %path.display(),
                    "loaded user theme"
                ),
                Err(err) => tracing::warn!(
                    target: targets::ENGINE,
                    path = %path.display(),
                    %err,
                    "ignoring user theme"
                ),
            }
        }
        engine
    }

    /// The user theme path from the environment, if any.
    pub fn environment_theme_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(THEME_ENV_VAR).filter(|p| !p.is_empty()) {
            return Some(PathBuf::from(path));
        }
        let path = dirs::config_dir()?.join("trellis").join("theme.css");
        path.is_file().then_some(path)
    }

    /// Apply a theme given as CSS text, on top of the built-in theme.
    pub fn load_theme(&self, css: &str) -> WidgetResult<()> {
        let sheet = StyleSheet::from_css(css, StylePriority::Application)?;
        tracing::debug!(target: targets::ENGINE, rules = sheet.len(), "applied theme");
        self.styles.write().add_stylesheet(sheet);
        Ok(())
    }

    /// Apply a theme file. Loading the same file again replaces it.
    pub fn load_theme_file(&self, path: impl AsRef<Path>) -> WidgetResult<()> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(WidgetError::ThemeNotFound {
                path: path.to_path_buf(),
            });
        }
        let sheet = StyleSheet::from_file(path, StylePriority::Application)?;

        let mut styles = self.styles.write();
        styles.remove_stylesheet_by_path(path);
        styles.add_stylesheet(sheet);
        Ok(())
    }

    /// Drop every user theme, leaving the built-in one.
    pub fn reset_theme(&self) {
        self.styles.write().clear_priority(StylePriority::Application);
    }

    /// Number of stylesheets in effect, including the built-in theme.
    pub fn stylesheet_count(&self) -> usize {
        self.styles.read().stylesheet_count()
    }
}

impl Default for BrewEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for BrewEngine {
    fn property_value(&self, key: &str, target: &WidgetMatchContext<'_>) -> Option<PropertyValue> {
        self.styles.read().property(key, target)
    }

    fn create_scale_drawable(&self, scale: &Scale, target: &RenderTarget) -> Drawable {
        let _span = PerfSpan::new("create_scale_drawable");

        let allocation = scale.allocation();
        let slider = scale.widget_base().map_rect_to_window(scale.slider_rect());

        let across = match scale.orientation() {
            Orientation::Horizontal => allocation.height(),
            Orientation::Vertical => allocation.width(),
        };
        let trough_width = self
            .property::<f32>(keys::SCALE_TROUGH_WIDTH, scale)
            .unwrap_or(0.0)
            .clamp(0.0, across.max(0.0));
        let trough = match scale.orientation() {
            Orientation::Horizontal => Rect::new(
                allocation.left(),
                allocation.top() + (allocation.height() - trough_width) / 2.0,
                allocation.width(),
                trough_width,
            ),
            Orientation::Vertical => Rect::new(
                allocation.left() + (allocation.width() - trough_width) / 2.0,
                allocation.top(),
                trough_width,
                allocation.height(),
            ),
        };

        let trough_color = self
            .property::<Color>(keys::SCALE_TROUGH_COLOR, scale)
            .unwrap_or(Color::DARK_GRAY);
        let slider_color = self
            .property::<Color>(keys::SCALE_SLIDER_COLOR, scale)
            .unwrap_or(Color::GRAY);
        let border = Stroke::new(
            self.property::<Color>(keys::SCALE_BORDER_COLOR, scale)
                .unwrap_or(Color::BLACK),
            self.property::<f32>(keys::SCALE_BORDER_WIDTH, scale)
                .unwrap_or(0.0),
        );

        let slider = target.snap_rect(slider);
        let mut renderer = RecordingRenderer::new();
        renderer.fill_rect(target.snap_rect(trough), trough_color);
        renderer.fill_rect(slider, slider_color);
        renderer.stroke_rect(slider, &border);

        let drawable = renderer.finish();
        tracing::trace!(
            target: targets::ENGINE,
            commands = drawable.len(),
            ?slider,
            "built scale drawable"
        );
        drawable
    }
}

static_assertions::assert_impl_all!(BrewEngine: Send, Sync);
