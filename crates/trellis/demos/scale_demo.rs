//! Drives a Scale through a scripted drag and prints what it would draw.
//!
//! Run with: cargo run -p trellis --example scale_demo
//!
//! Set `TRELLIS_THEME` to a CSS file to try a custom theme, and `RUST_LOG`
//! (e.g. `trellis=trace`) to watch the widget's log output.

use trellis::prelude::*;

fn pointer(x: f32, y: f32) -> Point {
    Point::new(x, y)
}

fn main() -> WidgetResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "trellis=info".into()),
        )
        .init();

    let mut scale = Scale::with_range(0.0, 100.0, 5.0, Orientation::Horizontal)?.with_value(50.0);
    scale.set_allocation(Rect::new(20.0, 20.0, 220.0, 24.0));

    scale.adjustment().value_changed.connect(|value| {
        tracing::info!(value, "value changed");
    });
    scale.slider_pressed.connect(|_| tracing::info!("slider pressed"));
    scale.slider_released.connect(|_| tracing::info!("slider released"));

    let handle = scale.widget_base().map_rect_to_window(scale.slider_rect());
    let grab = handle.center();
    println!("handle at {handle:?}, value {}", scale.value());

    let mods = KeyboardModifiers::NONE;
    scale.handle_mouse_press(&MousePressEvent::new(MouseButton::Left, grab, grab, mods));
    for x in [grab.x + 30.0, grab.x + 80.0, grab.x - 200.0, grab.x + 40.0] {
        let at = pointer(x, grab.y + 60.0);
        scale.handle_mouse_move(&MouseMoveEvent::new(at, at, 1, mods));
        println!("pointer x {x:>6.1} -> value {}", scale.value());
    }
    let end = pointer(grab.x + 40.0, grab.y);
    scale.handle_mouse_release(&MouseReleaseEvent::new(MouseButton::Left, end, end, mods));

    let target = RenderTarget::new(260, 64)?;
    let drawable = scale.invalidate(&target);
    println!("drawable ({} commands, bounds {:?}):", drawable.len(), drawable.bounds());
    for command in drawable.commands() {
        println!("  {command:?}");
    }

    Ok(())
}
