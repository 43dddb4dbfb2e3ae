use dialclock::geometry::Transform;
use dialclock::{
    render_frame, Canvas, ClockConfig, ClockError, ClockFace, Color, DrawCommand, PaintMode, Scene,
    SizeConstraint, Style, TimeSample, Typeface,
};
use pretty_assertions::assert_eq;

fn measured_face(size: u32) -> ClockFace {
    let mut face = ClockFace::new(ClockConfig::default());
    face.measure(SizeConstraint::Exact(size), SizeConstraint::Exact(size))
        .unwrap();
    face
}

fn rotations(scene: &Scene) -> Vec<f32> {
    scene
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::RoundRect { transform, .. } => Some(transform.rotation_degrees()),
            _ => None,
        })
        .collect()
}

#[test]
fn quarter_past_three_end_to_end() {
    let mut face = ClockFace::new(ClockConfig::default());
    let dims = face
        .measure(SizeConstraint::Exact(620), SizeConstraint::Exact(620))
        .unwrap();
    assert_eq!(dims, (628, 628));
    assert_eq!(face.geometry().radius, 310.0);

    let typeface = Typeface::estimated(35.0);
    let mut scene = Scene::new(&typeface);
    face.paint(&mut scene, "03:15:45".parse().unwrap()).unwrap();

    assert_eq!(rotations(&scene), vec![97.5, 94.5, 270.0]);
}

#[test]
fn frame_is_dial_then_scale_then_pointers() {
    let face = measured_face(620);
    let typeface = Typeface::estimated(35.0);
    let mut scene = Scene::new(&typeface);
    face.paint(&mut scene, TimeSample::new(10, 10, 30).unwrap())
        .unwrap();

    let commands = scene.commands();
    // outline + 60 ticks + 12 numerals + 3 shafts + cap
    assert_eq!(commands.len(), 1 + 60 + 12 + 3 + 1);
    assert_eq!(
        commands[0],
        DrawCommand::Circle {
            transform: Transform::IDENTITY.translate(314.0, 314.0),
            radius: 310.0,
            style: Style::stroke(Color::BLACK, 4.0),
        }
    );
    assert!(commands[1..73]
        .iter()
        .all(|c| matches!(c, DrawCommand::Line { .. } | DrawCommand::Text { .. })));
    assert!(commands[73..76]
        .iter()
        .all(|c| matches!(c, DrawCommand::RoundRect { .. })));
    assert!(matches!(
        commands[76],
        DrawCommand::Circle {
            style: Style {
                mode: PaintMode::Fill,
                ..
            },
            ..
        }
    ));
}

#[test]
fn repaint_is_a_pure_function_of_time() {
    let face = measured_face(400);
    let typeface = Typeface::estimated(35.0);
    let time = TimeSample::new(7, 42, 9).unwrap();

    let mut first = Scene::new(&typeface);
    let mut second = Scene::new(&typeface);
    face.paint(&mut first, time).unwrap();
    face.paint(&mut second, time).unwrap();
    assert_eq!(first.commands(), second.commands());
}

#[test]
fn hands_sweep_between_seconds() {
    let face = measured_face(400);
    let typeface = Typeface::estimated(35.0);

    let mut before = Scene::new(&typeface);
    let mut after = Scene::new(&typeface);
    face.paint(&mut before, TimeSample::new(4, 20, 10).unwrap())
        .unwrap();
    face.paint(&mut after, TimeSample::new(4, 20, 11).unwrap())
        .unwrap();

    let before = rotations(&before);
    let after = rotations(&after);
    assert_eq!(before[0], after[0]);
    assert!((after[1] - before[1] - 0.1).abs() < 1e-4);
    assert_eq!(after[2] - before[2], 6.0);
}

#[test]
fn degenerate_dial_paints_nothing() {
    let mut face = ClockFace::new(ClockConfig::default());
    face.measure(SizeConstraint::AtMost(0), SizeConstraint::AtMost(0))
        .unwrap();

    let typeface = Typeface::estimated(35.0);
    let mut scene = Scene::new(&typeface);
    let err = face
        .paint(&mut scene, TimeSample::new(1, 2, 3).unwrap())
        .unwrap_err();
    assert!(matches!(err, ClockError::DegenerateGeometry { .. }));
    assert!(scene.commands().is_empty());
}

#[test]
fn rasterized_frame_shows_hands_and_dial() {
    let face = measured_face(620);
    let typeface = Typeface::estimated(35.0);
    let mut frame = vec![0u8; 628 * 628 * 4];
    let mut canvas = Canvas::new(&mut frame, 628, 628);

    render_frame(
        &mut canvas,
        &face,
        &typeface,
        TimeSample::new(0, 0, 0).unwrap(),
        Color::WHITE,
    )
    .unwrap();

    // centre cap
    assert_eq!(canvas.pixel(314, 314), Some(Color::RED));
    // second hand lies on top of the others at noon
    assert_eq!(canvas.pixel(314, 114), Some(Color::RED));
    // outline at nine o'clock
    assert_eq!(canvas.pixel(4, 314), Some(Color::BLACK));
    // corners are outside the dial
    assert_eq!(canvas.pixel(1, 1), Some(Color::WHITE));
    assert_eq!(canvas.pixel(626, 626), Some(Color::WHITE));
}

/// Pixels that differ from the background inside the "12" label box.
fn inked_under_twelve(typeface: &Typeface) -> usize {
    let face = measured_face(620);
    let mut frame = vec![0u8; 628 * 628 * 4];
    let mut canvas = Canvas::new(&mut frame, 628, 628);
    // every hand points away from twelve
    render_frame(
        &mut canvas,
        &face,
        typeface,
        TimeSample::new(4, 40, 20).unwrap(),
        Color::WHITE,
    )
    .unwrap();

    // ticks end at y = 54; the label is centred on x = 314 below them
    (60..100)
        .flat_map(|y| (290..338).map(move |x| (x, y)))
        .filter(|&(x, y)| canvas.pixel(x, y) != Some(Color::WHITE))
        .count()
}

#[test]
fn numerals_are_inked_with_a_system_font() {
    let typeface = Typeface::discover(None, 35.0).unwrap();
    if !typeface.is_loaded() {
        eprintln!("no system font installed, skipping glyph check");
        return;
    }
    assert!(inked_under_twelve(&typeface) > 20);
    assert_eq!(inked_under_twelve(&Typeface::estimated(35.0)), 0);
}

#[test]
fn degenerate_frame_is_cleared() {
    let mut face = ClockFace::new(ClockConfig::default());
    face.measure(SizeConstraint::AtMost(0), SizeConstraint::AtMost(0))
        .unwrap();
    let typeface = Typeface::estimated(35.0);
    let mut frame = vec![0u8; 8 * 8 * 4];
    let mut canvas = Canvas::new(&mut frame, 8, 8);

    let result = render_frame(
        &mut canvas,
        &face,
        &typeface,
        TimeSample::new(0, 0, 0).unwrap(),
        Color::WHITE,
    );
    assert!(result.is_err());
    assert_eq!(canvas.pixel(4, 4), Some(Color::WHITE));
}
