use super::*;
use crate::draw::{
    BLACK, Color, ExternalImage, ImageFormat, LineCap, PaintState, PixelSurface, ROSE,
    SurfaceError, TEAL, WHITE,
};
use crate::input::{PointerEvent, PointerOutcome, Tool, ToolSelection};
use crate::util::Point;

fn create_test_board() -> BoardState {
    BoardState::new(120, 120).unwrap()
}

fn selection(tool: Tool) -> ToolSelection {
    ToolSelection {
        tool,
        color: ROSE,
        size: 4.0,
        opacity: 1.0,
        brush_cap: LineCap::Round,
    }
}

fn drag(board: &mut BoardState, selection: &ToolSelection, from: (f64, f64), to: (f64, f64)) {
    let from = Point::new(from.0, from.1);
    let to = Point::new(to.0, to.1);
    assert_eq!(
        board.handle_pointer(PointerEvent::Down(from), selection),
        PointerOutcome::Started
    );
    board.handle_pointer(PointerEvent::Move(to), selection);
    assert_eq!(
        board.handle_pointer(PointerEvent::Up(to), selection),
        PointerOutcome::Committed
    );
}

fn pixels(board: &BoardState) -> Vec<u8> {
    board.surface().raw_pixels().unwrap()
}

fn alpha_at(board: &BoardState, x: i32, y: i32) -> u8 {
    board.surface().pixel(x, y).unwrap()[3]
}

/// Scaled content goes through Cairo's resampling filter; allow rounding slack.
fn assert_pixel_near(actual: Option<[u8; 4]>, expected: [u8; 4]) {
    let actual = actual.expect("pixel inside surface");
    let close = actual
        .iter()
        .zip(expected.iter())
        .all(|(a, e)| a.abs_diff(*e) <= 2);
    assert!(close, "expected ~{expected:?}, got {actual:?}");
}

fn png_filled_with(color: Color, width: i32, height: i32) -> ExternalImage {
    let mut surface = PixelSurface::new(width, height).unwrap();
    surface.apply_paint_state(PaintState::solid(color, 1000.0, 1.0, LineCap::Butt));
    surface
        .stroke_path(
            &[
                Point::new(0.0, height as f64 / 2.0),
                Point::new(width as f64, height as f64 / 2.0),
            ],
            false,
        )
        .unwrap();
    ExternalImage::from_png(&surface.encode(ImageFormat::Png).unwrap()).unwrap()
}

#[test]
fn test_move_without_down_is_ignored() {
    let mut board = create_test_board();
    let brush = selection(Tool::Brush);
    let blank = pixels(&board);

    let outcome = board.handle_pointer(PointerEvent::Move(Point::new(50.0, 50.0)), &brush);

    assert_eq!(outcome, PointerOutcome::Ignored);
    assert!(board.is_idle());
    assert_eq!(pixels(&board), blank);
}

#[test]
fn test_up_without_down_is_ignored() {
    let mut board = create_test_board();
    let outcome = board.handle_pointer(
        PointerEvent::Up(Point::new(5.0, 5.0)),
        &selection(Tool::Line),
    );
    assert_eq!(outcome, PointerOutcome::Ignored);
    assert!(!board.history().can_undo());
}

#[test]
fn test_brush_gesture_paints_and_records_history() {
    let mut board = create_test_board();
    drag(&mut board, &selection(Tool::Brush), (10.0, 60.0), (110.0, 60.0));

    assert!(board.is_idle());
    assert_eq!(alpha_at(&board, 60, 60), 255);
    assert_eq!(board.history().undo_depth(), 1);
    assert_eq!(board.history().redo_depth(), 0);
}

#[test]
fn test_leave_finalizes_like_release() {
    let mut board = create_test_board();
    let brush = selection(Tool::Brush);

    board.handle_pointer(PointerEvent::Down(Point::new(10.0, 10.0)), &brush);
    board.handle_pointer(PointerEvent::Move(Point::new(100.0, 10.0)), &brush);
    let outcome = board.handle_pointer(PointerEvent::Leave, &brush);

    assert_eq!(outcome, PointerOutcome::Committed);
    assert!(board.is_idle());
    assert_eq!(board.history().undo_depth(), 1);

    // Moves after leaving no longer draw
    let after_leave = pixels(&board);
    board.handle_pointer(PointerEvent::Move(Point::new(10.0, 100.0)), &brush);
    assert_eq!(pixels(&board), after_leave);
}

#[test]
fn test_second_down_restarts_without_recording() {
    let mut board = create_test_board();
    let line = selection(Tool::Line);

    board.handle_pointer(PointerEvent::Down(Point::new(10.0, 10.0)), &line);
    board.handle_pointer(PointerEvent::Move(Point::new(110.0, 10.0)), &line);
    board.handle_pointer(PointerEvent::Down(Point::new(10.0, 90.0)), &line);

    match &board.state {
        DrawingState::Drawing { gesture, .. } => {
            assert_eq!(gesture.start, Point::new(10.0, 90.0));
            assert_eq!(gesture.tool, Tool::Line);
        }
        other => panic!("expected Drawing, got {other:?}"),
    }
    assert_eq!(board.history().undo_depth(), 0);
}

#[test]
fn test_undo_redo_round_trip_restores_identical_pixels() {
    let mut board = create_test_board();

    drag(&mut board, &selection(Tool::Brush), (10.0, 10.0), (110.0, 30.0));
    let first_edit = pixels(&board);
    drag(&mut board, &selection(Tool::Rectangle), (20.0, 40.0), (90.0, 80.0));
    drag(&mut board, &selection(Tool::Circle), (60.0, 60.0), (60.0, 100.0));
    drag(&mut board, &selection(Tool::Eraser), (0.0, 60.0), (120.0, 60.0));
    let finished = pixels(&board);

    for _ in 0..4 {
        assert!(board.undo().unwrap());
    }
    // Entries hold post-edit states, so four undos land on the first edit
    assert_eq!(pixels(&board), first_edit);

    for _ in 0..4 {
        assert!(board.redo().unwrap());
    }
    assert_eq!(pixels(&board), finished);
}

#[test]
fn test_first_undo_restores_latest_recorded_state() {
    let mut board = create_test_board();
    drag(&mut board, &selection(Tool::Brush), (10.0, 60.0), (110.0, 60.0));
    drag(&mut board, &selection(Tool::Line), (10.0, 20.0), (110.0, 20.0));
    let after_line = pixels(&board);

    // The top entry is the current surface, so the first undo shows no change
    assert!(board.undo().unwrap());
    assert_eq!(pixels(&board), after_line);
    assert_eq!(board.history().undo_depth(), 1);

    // The second undo returns to the brush-only state
    assert!(board.undo().unwrap());
    assert_eq!(alpha_at(&board, 60, 60), 255);
    assert_eq!(alpha_at(&board, 60, 20), 0);
}

#[test]
fn test_undo_on_empty_history_changes_nothing() {
    let mut board = create_test_board();
    let blank = pixels(&board);

    assert!(!board.undo().unwrap());
    assert!(!board.redo().unwrap());
    assert_eq!(pixels(&board), blank);
    assert_eq!(board.history().undo_depth(), 0);
    assert_eq!(board.history().redo_depth(), 0);
}

#[test]
fn test_edit_after_undo_invalidates_redo() {
    let mut board = create_test_board();
    drag(&mut board, &selection(Tool::Line), (10.0, 10.0), (110.0, 10.0));
    drag(&mut board, &selection(Tool::Line), (10.0, 50.0), (110.0, 50.0));

    board.undo().unwrap();
    drag(&mut board, &selection(Tool::Star), (60.0, 80.0), (60.0, 60.0));
    let after_edit = pixels(&board);

    assert!(!board.redo().unwrap());
    assert_eq!(pixels(&board), after_edit);
}

#[test]
fn test_rectangle_same_for_all_drag_directions() {
    let corners = [
        ((20.0, 30.0), (90.0, 70.0)),
        ((90.0, 70.0), (20.0, 30.0)),
        ((20.0, 70.0), (90.0, 30.0)),
        ((90.0, 30.0), (20.0, 70.0)),
    ];

    let rendered: Vec<Vec<u8>> = corners
        .iter()
        .map(|(from, to)| {
            let mut board = create_test_board();
            drag(&mut board, &selection(Tool::Rectangle), *from, *to);
            pixels(&board)
        })
        .collect();

    assert!(rendered.windows(2).all(|pair| pair[0] == pair[1]));
    // Left edge at x=20 is painted, interior is not
    let mut board = create_test_board();
    drag(&mut board, &selection(Tool::Rectangle), (90.0, 70.0), (20.0, 30.0));
    assert_eq!(alpha_at(&board, 20, 50), 255);
    assert_eq!(alpha_at(&board, 55, 50), 0);
}

#[test]
fn test_star_tip_at_drag_point() {
    let mut board = BoardState::new(200, 200).unwrap();
    drag(&mut board, &selection(Tool::Star), (100.0, 100.0), (100.0, 50.0));

    assert_eq!(alpha_at(&board, 100, 50), 255);
    assert_eq!(alpha_at(&board, 100, 100), 0);
}

#[test]
fn test_shape_preview_leaves_only_final_shape() {
    let mut board = create_test_board();
    let circle = selection(Tool::Circle);

    board.handle_pointer(PointerEvent::Down(Point::new(60.0, 60.0)), &circle);
    board.handle_pointer(PointerEvent::Move(Point::new(60.0, 10.0)), &circle);
    board.handle_pointer(PointerEvent::Move(Point::new(60.0, 40.0)), &circle);
    board.handle_pointer(PointerEvent::Up(Point::new(60.0, 40.0)), &circle);

    // Radius 50 preview erased, radius 20 kept
    assert_eq!(alpha_at(&board, 60, 10), 0);
    assert_eq!(alpha_at(&board, 60, 40), 255);
}

#[test]
fn test_zero_length_shape_drags_do_not_fail() {
    let mut board = create_test_board();
    for tool in [Tool::Line, Tool::Rectangle, Tool::Circle, Tool::Star] {
        drag(&mut board, &selection(tool), (30.0, 30.0), (30.0, 30.0));
    }
    assert!(board.is_idle());
    assert_eq!(board.history().undo_depth(), 4);
}

#[test]
fn test_eraser_clears_regardless_of_color() {
    for color in [WHITE, ROSE, BLACK] {
        let mut board = create_test_board();
        let mut brush = selection(Tool::Brush);
        brush.size = 30.0;
        drag(&mut board, &brush, (0.0, 60.0), (120.0, 60.0));
        assert_eq!(alpha_at(&board, 60, 60), 255);

        let eraser = ToolSelection {
            tool: Tool::Eraser,
            color,
            size: 10.0,
            ..brush
        };
        drag(&mut board, &eraser, (0.0, 60.0), (120.0, 60.0));

        assert_eq!(board.surface().pixel(60, 60), Some([0, 0, 0, 0]));
        assert_eq!(board.surface().paint_state().mode, crate::draw::CompositeMode::Normal);
    }
}

#[test]
fn test_selection_is_read_on_every_step() {
    let mut board = create_test_board();
    let mut brush = selection(Tool::Brush);

    board.handle_pointer(PointerEvent::Down(Point::new(10.0, 20.0)), &brush);
    board.handle_pointer(PointerEvent::Move(Point::new(50.0, 20.0)), &brush);
    brush.color = TEAL;
    board.handle_pointer(PointerEvent::Move(Point::new(110.0, 20.0)), &brush);
    board.handle_pointer(PointerEvent::Up(Point::new(110.0, 20.0)), &brush);

    assert_eq!(board.surface().pixel(30, 20), Some([255, 77, 109, 255]));
    assert_eq!(board.surface().pixel(90, 20), Some([20, 184, 166, 255]));
}

#[test]
fn test_text_tool_suspends_until_submitted() {
    let mut board = create_test_board();
    let text = selection(Tool::Text);

    let outcome = board.handle_pointer(PointerEvent::Down(Point::new(20.0, 60.0)), &text);
    assert_eq!(outcome, PointerOutcome::TextRequested);
    assert!(board.awaiting_text());
    assert_eq!(board.active_tool(), Some(Tool::Text));

    // No drag phase: moves and releases are ignored while the prompt is open
    assert_eq!(
        board.handle_pointer(PointerEvent::Move(Point::new(80.0, 80.0)), &text),
        PointerOutcome::Ignored
    );
    assert_eq!(
        board.handle_pointer(PointerEvent::Up(Point::new(80.0, 80.0)), &text),
        PointerOutcome::Ignored
    );
    assert!(board.awaiting_text());

    assert_eq!(board.submit_text(Some("Hi")), PointerOutcome::Committed);
    assert!(board.is_idle());
    assert_eq!(board.history().undo_depth(), 1);
}

#[test]
fn test_text_prompt_cancel_records_nothing() {
    let mut board = create_test_board();
    let text = selection(Tool::Text);
    let blank = pixels(&board);

    board.handle_pointer(PointerEvent::Down(Point::new(20.0, 60.0)), &text);
    assert_eq!(board.submit_text(None), PointerOutcome::Cancelled);

    board.handle_pointer(PointerEvent::Down(Point::new(20.0, 60.0)), &text);
    assert_eq!(board.submit_text(Some("")), PointerOutcome::Cancelled);

    assert!(board.is_idle());
    assert!(!board.history().can_undo());
    assert_eq!(pixels(&board), blank);
    assert_eq!(board.submit_text(Some("late")), PointerOutcome::Ignored);
}

#[test]
fn test_resize_during_gesture_cancels_preview() {
    let mut board = create_test_board();
    let line = selection(Tool::Line);

    board.handle_pointer(PointerEvent::Down(Point::new(10.0, 10.0)), &line);
    board.handle_pointer(PointerEvent::Move(Point::new(110.0, 10.0)), &line);
    board.resize(240, 60).unwrap();

    assert!(board.is_idle());
    assert_eq!(board.surface().width(), 240);
    assert_eq!(board.surface().height(), 60);
    assert!(pixels(&board).iter().all(|b| *b == 0));
    assert!(!board.history().can_undo());

    // Stray move from the cancelled drag is ignored
    assert_eq!(
        board.handle_pointer(PointerEvent::Move(Point::new(50.0, 50.0)), &line),
        PointerOutcome::Ignored
    );
}

#[test]
fn test_resize_then_encode_has_new_dimensions() {
    let mut board = create_test_board();
    drag(&mut board, &selection(Tool::Brush), (0.0, 60.0), (120.0, 60.0));
    board.resize(300, 90).unwrap();

    let decoded = ExternalImage::from_png(&board.encode(ImageFormat::Png).unwrap()).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (300, 90));
    // Stroke at the vertical middle stays at the vertical middle
    assert!(alpha_at(&board, 150, 45) > 200);
}

#[test]
fn test_encode_refused_mid_gesture() {
    let mut board = create_test_board();
    let brush = selection(Tool::Brush);
    board.handle_pointer(PointerEvent::Down(Point::new(10.0, 10.0)), &brush);

    assert!(matches!(
        board.encode(ImageFormat::Png),
        Err(SurfaceError::GestureInProgress)
    ));

    board.handle_pointer(PointerEvent::Up(Point::new(10.0, 10.0)), &brush);
    assert!(board.encode(ImageFormat::Png).is_ok());
}

#[test]
fn test_reset_clears_surface_and_history() {
    let mut board = create_test_board();
    drag(&mut board, &selection(Tool::Brush), (10.0, 10.0), (110.0, 110.0));
    drag(&mut board, &selection(Tool::Line), (10.0, 110.0), (110.0, 10.0));
    board.undo().unwrap();

    board.reset().unwrap();

    assert!(pixels(&board).iter().all(|b| *b == 0));
    assert!(!board.history().can_undo());
    assert!(!board.history().can_redo());
    assert!(!board.undo().unwrap());
    assert!(!board.redo().unwrap());
}

#[test]
fn test_load_image_discarding_history_becomes_base() {
    let mut board = create_test_board();
    drag(&mut board, &selection(Tool::Brush), (10.0, 10.0), (110.0, 110.0));

    board.undo().unwrap();
    assert!(board.history().can_redo());

    board
        .load_external_image(&png_filled_with(TEAL, 10, 10), true)
        .unwrap();
    let loaded = pixels(&board);

    // Old entries are gone; the loaded image is the only entry
    assert_eq!(board.history().undo_depth(), 1);
    assert!(!board.history().can_redo());
    assert_pixel_near(board.surface().pixel(119, 119), [20, 184, 166, 255]);

    assert!(board.undo().unwrap());
    assert_eq!(pixels(&board), loaded);
    assert!(!board.undo().unwrap());
}

#[test]
fn test_load_image_on_top_is_undoable() {
    let mut board = create_test_board();
    board
        .load_external_image(&png_filled_with(TEAL, 10, 10), true)
        .unwrap();
    let base = pixels(&board);

    drag(&mut board, &selection(Tool::Brush), (0.0, 5.0), (120.0, 5.0));
    board
        .load_external_image(&png_filled_with(ROSE, 4, 4), false)
        .unwrap();

    assert_pixel_near(board.surface().pixel(60, 60), [255, 77, 109, 255]);
    assert_eq!(board.history().undo_depth(), 3);
    let loaded = pixels(&board);

    board.undo().unwrap();
    assert_eq!(pixels(&board), loaded);
    board.undo().unwrap();
    board.undo().unwrap();
    assert_eq!(pixels(&board), base);
}

#[test]
fn test_load_image_after_undo_invalidates_redo() {
    let mut board = create_test_board();
    drag(&mut board, &selection(Tool::Line), (10.0, 10.0), (110.0, 10.0));
    drag(&mut board, &selection(Tool::Line), (10.0, 50.0), (110.0, 50.0));
    board.undo().unwrap();
    board.undo().unwrap();
    assert!(board.history().can_redo());

    board
        .load_external_image(&png_filled_with(ROSE, 4, 4), false)
        .unwrap();
    let loaded = pixels(&board);

    assert!(!board.history().can_redo());
    assert!(!board.redo().unwrap());
    assert_eq!(pixels(&board), loaded);
}

#[test]
fn test_needs_redraw_tracks_surface_changes() {
    let mut board = create_test_board();
    let brush = selection(Tool::Brush);
    assert!(board.needs_redraw);

    // Host presented the frame
    board.needs_redraw = false;
    board.handle_pointer(PointerEvent::Move(Point::new(50.0, 50.0)), &brush);
    assert!(!board.undo().unwrap());
    assert!(!board.needs_redraw);

    drag(&mut board, &brush, (10.0, 10.0), (110.0, 10.0));
    assert!(board.needs_redraw);

    board.needs_redraw = false;
    board.undo().unwrap();
    assert!(board.needs_redraw);
}
