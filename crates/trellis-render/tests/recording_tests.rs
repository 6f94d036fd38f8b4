//! Integration tests for recorded drawables.

use trellis_render::{
    Color, DrawCommand, Point, RecordingRenderer, Rect, RenderTarget, Renderer, Stroke,
};

#[test]
fn test_nested_save_restore_offsets() {
    let mut renderer = RecordingRenderer::new();
    renderer.translate(100.0, 0.0);
    renderer.save();
    renderer.translate(0.0, 50.0);
    renderer.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::RED);
    renderer.restore();
    renderer.draw_line(
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        &Stroke::new(Color::BLACK, 1.0),
    );

    let drawable = renderer.finish();
    assert_eq!(drawable.len(), 2);
    assert_eq!(
        drawable.commands()[0],
        DrawCommand::FillRect {
            rect: Rect::new(100.0, 50.0, 10.0, 10.0),
            color: Color::RED,
        }
    );
    match drawable.commands()[1] {
        DrawCommand::Line { from, to, .. } => {
            assert_eq!(from, Point::new(100.0, 0.0));
            assert_eq!(to, Point::new(110.0, 0.0));
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn test_snapped_geometry_stays_on_pixel_grid() {
    let target = RenderTarget::new(300, 300)
        .unwrap()
        .with_scale_factor(1.5)
        .unwrap();

    let snapped = target.snap_rect(Rect::new(10.1, 20.2, 33.3, 7.7));
    for edge in [snapped.left(), snapped.top(), snapped.right(), snapped.bottom()] {
        let physical = edge * target.scale_factor();
        assert!((physical - physical.round()).abs() < 1e-4, "edge {edge} is off-grid");
    }
}

#[test]
fn test_replay_preserves_order() {
    let mut first = RecordingRenderer::new();
    first.fill_rect(Rect::new(0.0, 0.0, 5.0, 5.0), Color::BLUE);
    first.stroke_rect(Rect::new(0.0, 0.0, 5.0, 5.0), &Stroke::default());
    let drawable = first.finish();

    let mut second = RecordingRenderer::new();
    drawable.replay(&mut second);
    assert_eq!(second.finish(), drawable);
}
