use pixel_paint::{
    ActiveSelection, Button, ButtonSpec, Canvas, Clickable, Color, ColorButton, InteractionController,
    PaintConfig, PaintError, PixelRect, PointerEvent, RasterCanvas, ToolButton, ToolKind, Toolbox,
};

const RED: Color = Color::new(200, 0, 0);
const BLUE: Color = Color::new(0, 0, 255);
const GREEN: Color = Color::new(0, 128, 0);

fn layout() -> Vec<Button> {
    vec![
        ColorButton::new(PixelRect::new(0, 0, 20, 20), RED).into(),
        ColorButton::new(PixelRect::new(20, 0, 20, 20), BLUE).into(),
        ToolButton::new(PixelRect::new(45, 0, 40, 20), ToolKind::Bucket).into(),
        ToolButton::new(PixelRect::new(0, 25, 40, 20), ToolKind::Pencil).into(),
        ToolButton::new(PixelRect::new(45, 25, 40, 20), ToolKind::Eraser).into(),
    ]
}

fn blank() -> RasterCanvas {
    RasterCanvas::new(120, 120, Color::WHITE).unwrap()
}

fn controller(initial: Color) -> InteractionController {
    let mut controller =
        InteractionController::new(blank(), layout(), Toolbox::new(Color::WHITE)).unwrap();
    controller.initialize(ToolKind::Brush, initial);
    controller
}

fn click(controller: &mut InteractionController, x: i32, y: i32) {
    controller.on_pointer_event(PointerEvent::pressed(x, y));
    controller.on_pointer_event(PointerEvent::released(x, y));
}

fn in_any_button(buttons: &[Button], x: i32, y: i32) -> bool {
    buttons.iter().any(|button| button.rect().contains(x, y))
}

/// A canvas filled with `fill` and the layout drawn idle on top.
fn reference(fill: Color) -> RasterCanvas {
    let mut canvas = blank();
    canvas.draw_rectangle(0, 0, 120, 120, fill);
    for button in layout() {
        button.draw(&mut canvas);
    }
    canvas
}

#[test]
fn test_initialize_draws_buttons() {
    let controller = controller(GREEN);
    assert_eq!(controller.canvas().image(), reference(Color::WHITE).image());
    assert_eq!(
        controller.selection(),
        ActiveSelection { tool: ToolKind::Brush, color: GREEN }
    );
}

#[test]
fn test_bucket_fill_through_buttons() {
    let mut controller = controller(GREEN);

    click(&mut controller, 50, 10);
    assert_eq!(controller.selection().tool, ToolKind::Bucket);
    click(&mut controller, 10, 10);
    assert_eq!(controller.selection().color, RED);

    // Clicking buttons never paints outside them
    let canvas = controller.canvas();
    for y in 0..120 {
        for x in 0..120 {
            if !in_any_button(controller.buttons(), x, y) {
                assert_eq!(canvas.pixel(x, y), Some(Color::WHITE), "({x}, {y})");
            }
        }
    }

    controller.on_pointer_event(PointerEvent::pressed(100, 100));
    controller.on_pointer_event(PointerEvent::released(100, 100));

    assert_eq!(controller.canvas().image(), reference(RED).image());
}

#[test]
fn test_stroke_across_button_leaves_it_intact() {
    let mut controller = controller(GREEN);
    click(&mut controller, 10, 30);
    assert_eq!(controller.selection().tool, ToolKind::Pencil);

    controller.on_pointer_event(PointerEvent::pressed(10, 60));
    controller.on_pointer_event(PointerEvent::dragged(10, 10));
    controller.on_pointer_event(PointerEvent::released(10, 10));

    // Releasing over a button that was never pressed fires nothing
    assert_eq!(controller.selection().color, GREEN);

    let expected = reference(Color::WHITE);
    let canvas = controller.canvas();
    for y in 0..120 {
        for x in 0..120 {
            if in_any_button(controller.buttons(), x, y) {
                assert_eq!(canvas.pixel(x, y), expected.pixel(x, y), "({x}, {y})");
            }
        }
    }
    for y in 45..=60 {
        assert_eq!(canvas.pixel(10, y), Some(GREEN));
    }
    assert_eq!(canvas.pixel(10, 22), Some(GREEN));
}

#[test]
fn test_press_on_button_does_not_reach_tool() {
    let mut controller = controller(GREEN);
    click(&mut controller, 10, 30);

    controller.on_pointer_event(PointerEvent::pressed(30, 10));
    assert!(controller.buttons()[1].is_pressed());
    // Dragging off the pressed button stays with the button
    controller.on_pointer_event(PointerEvent::dragged(30, 80));
    controller.on_pointer_event(PointerEvent::released(30, 80));

    assert_eq!(controller.selection().color, GREEN);
    assert!(!controller.context().active_tool().is_stroking());
    assert_eq!(controller.canvas().image(), reference(Color::WHITE).image());
}

#[test]
fn test_eraser_button_selects_background_painter() {
    let mut controller = controller(GREEN);
    controller.on_pointer_event(PointerEvent::pressed(100, 100));
    controller.on_pointer_event(PointerEvent::released(100, 100));
    assert_eq!(controller.canvas().pixel(100, 100), Some(GREEN));

    click(&mut controller, 50, 30);
    click(&mut controller, 30, 10);
    assert_eq!(
        controller.selection(),
        ActiveSelection { tool: ToolKind::Eraser, color: BLUE }
    );

    controller.on_pointer_event(PointerEvent::pressed(100, 100));
    controller.on_pointer_event(PointerEvent::released(100, 100));
    assert_eq!(controller.canvas().image(), reference(Color::WHITE).image());
}

#[test]
fn test_hover_does_nothing() {
    let mut controller = controller(GREEN);
    let before = controller.canvas().image().clone();
    controller.on_pointer_event(PointerEvent::moved(100, 100));
    controller.on_pointer_event(PointerEvent::moved(10, 10));
    assert_eq!(controller.canvas().image(), &before);
}

#[test]
fn test_overlapping_layout_is_rejected() {
    let buttons = vec![
        ColorButton::new(PixelRect::new(0, 0, 20, 20), RED).into(),
        ToolButton::new(PixelRect::new(10, 10, 40, 20), ToolKind::Pencil).into(),
    ];
    let result = InteractionController::new(blank(), buttons, Toolbox::default());
    assert!(matches!(
        result,
        Err(PaintError::OverlappingButtons { first: 0, second: 1 })
    ));
}

#[test]
fn test_empty_button_is_rejected() {
    let buttons = vec![ColorButton::new(PixelRect::new(0, 0, 0, 20), RED).into()];
    let result = InteractionController::new(blank(), buttons, Toolbox::default());
    assert!(matches!(result, Err(PaintError::InvalidButtonGeometry { index: 0 })));
}

#[test]
fn test_default_config_builds() {
    let config = PaintConfig::default();
    let controller = InteractionController::from_config(&config).unwrap();

    assert_eq!(controller.canvas().width(), 500);
    assert_eq!(controller.buttons().len(), 9);
    assert_eq!(
        controller.selection(),
        ActiveSelection { tool: ToolKind::Brush, color: config.initial_color }
    );
}

#[test]
fn test_config_widths_reach_tools() {
    let config = PaintConfig {
        brush_width: 6,
        buttons: Vec::new(),
        ..PaintConfig::default()
    };
    let mut controller = InteractionController::from_config(&config).unwrap();
    controller.on_pointer_event(PointerEvent::pressed(100, 100));

    let canvas = controller.canvas();
    assert_eq!(canvas.pixel(103, 100), Some(config.initial_color));
    assert_eq!(canvas.pixel(104, 100), Some(Color::WHITE));
}

#[test]
fn test_config_with_bad_canvas_fails() {
    let config = PaintConfig {
        canvas_width: 0,
        ..PaintConfig::default()
    };
    assert!(matches!(
        InteractionController::from_config(&config),
        Err(PaintError::InvalidCanvasSize { width: 0, .. })
    ));
}

/// Strokes that stay far outside the canvas, around the corners of the
/// coordinate space.
fn stroke_around_extremes(controller: &mut InteractionController) {
    controller.on_pointer_event(PointerEvent::pressed(i32::MIN, 0));
    controller.on_pointer_event(PointerEvent::dragged(i32::MIN, i32::MAX));
    controller.on_pointer_event(PointerEvent::dragged(i32::MAX, i32::MAX));
    controller.on_pointer_event(PointerEvent::dragged(i32::MAX, i32::MIN));
    controller.on_pointer_event(PointerEvent::dragged(i32::MIN, i32::MIN));
    controller.on_pointer_event(PointerEvent::released(i32::MIN, i32::MIN));

    controller.on_pointer_event(PointerEvent::pressed(i32::MAX, 60));
    controller.on_pointer_event(PointerEvent::dragged(0, 1_000_000_000));
    controller.on_pointer_event(PointerEvent::dragged(0, 2_000_000_000));
    controller.on_pointer_event(PointerEvent::released(0, 2_000_000_000));

    controller.on_pointer_event(PointerEvent::pressed(60, i32::MIN));
    controller.on_pointer_event(PointerEvent::released(60, i32::MIN));
}

#[test]
fn test_extreme_coordinates_leave_canvas_unchanged() {
    let mut controller = controller(GREEN);
    let untouched = reference(Color::WHITE);

    // Brush, then each tool reachable through a button
    stroke_around_extremes(&mut controller);
    assert_eq!(controller.canvas().image(), untouched.image());

    for (x, y, tool) in [
        (10, 30, ToolKind::Pencil),
        (50, 30, ToolKind::Eraser),
        (50, 10, ToolKind::Bucket),
    ] {
        click(&mut controller, x, y);
        assert_eq!(controller.selection().tool, tool);
        stroke_around_extremes(&mut controller);
        assert_eq!(controller.canvas().image(), untouched.image(), "{tool:?}");
    }
}

#[test]
fn test_stroke_from_far_away_crosses_canvas() {
    let mut controller = controller(GREEN);
    click(&mut controller, 10, 30);

    controller.on_pointer_event(PointerEvent::pressed(-1_000_000_000, 80));
    controller.on_pointer_event(PointerEvent::dragged(1_000_000_000, 80));
    controller.on_pointer_event(PointerEvent::released(1_000_000_000, 80));

    let canvas = controller.canvas();
    for x in 0..120 {
        assert_eq!(canvas.pixel(x, 80), Some(GREEN), "x = {x}");
        assert_eq!(canvas.pixel(x, 79), Some(Color::WHITE));
    }
}

#[test]
fn test_selection_changes_only_on_completed_clicks() {
    let mut controller = controller(GREEN);
    let initial = controller.selection();

    controller.on_pointer_event(PointerEvent::pressed(100, 100));
    controller.on_pointer_event(PointerEvent::dragged(10, 10));
    controller.on_pointer_event(PointerEvent::released(50, 10));
    controller.on_pointer_event(PointerEvent::moved(10, 30));
    controller.on_pointer_event(PointerEvent::pressed(10, 10));
    controller.on_pointer_event(PointerEvent::released(100, 10));
    assert_eq!(controller.selection(), initial);

    click(&mut controller, 30, 10);
    assert_eq!(
        controller.selection(),
        ActiveSelection { tool: ToolKind::Brush, color: BLUE }
    );
}

#[test]
fn test_buttons_near_coordinate_limit_are_harmless() {
    let far = i32::MAX - 10;
    let config = PaintConfig {
        canvas_width: 64,
        canvas_height: 64,
        buttons: vec![
            ButtonSpec::Color { rect: PixelRect::new(far, 0, 30, 30), color: RED },
            ButtonSpec::Tool { rect: PixelRect::new(far, 40, 70, 50), tool: ToolKind::Pencil },
        ],
        ..PaintConfig::default()
    };
    let mut controller = InteractionController::from_config(&config).unwrap();
    click(&mut controller, far + 5, 5);
    assert_eq!(controller.selection().color, RED);

    let canvas = controller.canvas();
    for y in 0..64 {
        for x in 0..64 {
            assert_eq!(canvas.pixel(x, y), Some(Color::WHITE));
        }
    }
}
