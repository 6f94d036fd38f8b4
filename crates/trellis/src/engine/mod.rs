//! Rendering engines.
//!
//! An [`Engine`] answers two questions for widgets: what a style property is
//! for a given widget (metrics and colours), and what a widget looks like
//! (its [`Drawable`]). [`BrewEngine`] is the built-in implementation; the
//! process-wide active engine lives in [`Context`](crate::Context).

mod brew;

pub use brew::{BrewEngine, THEME_ENV_VAR};

use trellis_render::{Drawable, RenderTarget};
use trellis_style::{FromPropertyValue, PropertyValue, WidgetMatchContext};

use crate::logging::targets;
use crate::widget::Widget;
use crate::widget::widgets::Scale;

/// Property keys the built-in widgets look up.
pub mod keys {
    /// Handle extent along the scale's axis.
    pub const SCALE_SLIDER_LENGTH: &str = "Scale.Slider.Length";
    /// Handle extent across the scale's axis.
    pub const SCALE_SLIDER_WIDTH: &str = "Scale.Slider.Width";
    /// Handle fill colour.
    pub const SCALE_SLIDER_COLOR: &str = "Scale.Slider.Color";
    /// Trough thickness across the scale's axis.
    pub const SCALE_TROUGH_WIDTH: &str = "Scale.Trough.Width";
    /// Trough fill colour.
    pub const SCALE_TROUGH_COLOR: &str = "Scale.Trough.Color";
    /// Handle outline colour.
    pub const SCALE_BORDER_COLOR: &str = "Scale.BorderColor";
    /// Handle outline width.
    pub const SCALE_BORDER_WIDTH: &str = "Scale.BorderWidth";
}

/// A style and drawable provider.
pub trait Engine: Send + Sync {
    /// Look up a raw property value for a widget.
    ///
    /// `key` has the form `Class.Property.Path`.
    fn property_value(&self, key: &str, target: &WidgetMatchContext<'_>) -> Option<PropertyValue>;

    /// Build the drawable for a scale, in window coordinates.
    fn create_scale_drawable(&self, scale: &Scale, target: &RenderTarget) -> Drawable;
}

/// Typed property access for any [`Engine`].
pub trait EngineExt {
    /// Look up a property for `widget` and convert it to `T`.
    ///
    /// The widget's class, name and state pseudo-classes select the rules.
    /// Returns `None` when no rule declares the property or the declared
    /// value has the wrong kind.
    fn property<T: FromPropertyValue>(&self, key: &str, widget: &dyn Widget) -> Option<T>;
}

impl<E: Engine + ?Sized> EngineExt for E {
    fn property<T: FromPropertyValue>(&self, key: &str, widget: &dyn Widget) -> Option<T> {
        let name = widget.widget_base().name();
        let context = WidgetMatchContext::new(widget.style_class())
            .with_name(&name)
            .with_state(widget.style_state());

        let value = self.property_value(key, &context)?;
        let converted = T::from_property_value(&value);
        if converted.is_none() {
            tracing::warn!(target: targets::ENGINE, key, %value, "engine property has the wrong kind");
        }
        converted
    }
}
