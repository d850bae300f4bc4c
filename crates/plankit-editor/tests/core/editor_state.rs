use plankit_core::constants::{BEARING_THICKNESS, PARTITION_THICKNESS, WALL_HEIGHT};
use plankit_core::{CatalogItem, Point};
use plankit_editor::{EditorKey, EditorState, Tool};

const SOFA: CatalogItem = CatalogItem {
    name: "Sofa",
    width: 200.0,
    height: 90.0,
    depth: 85.0,
    color: "#7a7a7a",
};

fn editor() -> EditorState {
    EditorState::new()
}

#[test]
fn chained_wall_drawing_shares_the_midpoint() {
    let mut ed = editor();
    ed.set_tool(Tool::DrawWall);

    ed.pointer_down(Point::new(0.0, 0.0));
    ed.pointer_down(Point::new(200.0, 0.0));
    ed.pointer_down(Point::new(200.0, 150.0));

    assert_eq!(ed.document.walls.len(), 2);
    let first = &ed.document.walls[0];
    let second = &ed.document.walls[1];
    assert_eq!(first.start, Point::new(0.0, 0.0));
    assert_eq!(first.end, Point::new(200.0, 0.0));
    assert_eq!(second.start, Point::new(200.0, 0.0));
    assert_eq!(second.end, Point::new(200.0, 150.0));
}

#[test]
fn wall_endpoints_are_snapped_to_the_grid() {
    let mut ed = editor();
    ed.set_tool(Tool::DrawWall);

    ed.pointer_down(Point::new(13.0, 27.0));
    ed.pointer_down(Point::new(212.0, 160.0));

    let wall = &ed.document.walls[0];
    assert_eq!(wall.start, Point::new(0.0, 50.0));
    assert_eq!(wall.end, Point::new(200.0, 150.0));
    assert_eq!(wall.height, WALL_HEIGHT);
}

#[test]
fn each_wall_segment_commits_one_history_entry() {
    let mut ed = editor();
    ed.set_tool(Tool::DrawWall);

    ed.pointer_down(Point::new(0.0, 0.0));
    assert!(!ed.can_undo(), "arming the start point is not a commit");

    ed.pointer_down(Point::new(200.0, 0.0));
    ed.pointer_down(Point::new(200.0, 150.0));

    assert!(ed.undo());
    assert_eq!(ed.document.walls.len(), 1);
    assert!(ed.undo());
    assert_eq!(ed.document.walls.len(), 0);
}

#[test]
fn zero_length_segments_never_reach_the_document() {
    let mut ed = editor();
    ed.set_tool(Tool::DrawWall);

    ed.pointer_down(Point::new(0.0, 0.0));
    // Snaps to the same lattice point as the start.
    ed.pointer_down(Point::new(10.0, 10.0));

    assert!(ed.document.walls.is_empty());
    assert!(!ed.can_undo());
    // The chain stays armed; the next distinct click commits.
    ed.pointer_down(Point::new(100.0, 0.0));
    assert_eq!(ed.document.walls.len(), 1);
}

#[test]
fn pointer_move_updates_the_preview_without_committing() {
    let mut ed = editor();
    ed.set_tool(Tool::DrawWall);

    ed.pointer_down(Point::new(0.0, 0.0));
    ed.pointer_move(Point::new(340.0, 20.0));

    let draft = ed.wall_draft().expect("draft armed");
    assert_eq!(draft.preview_end, Point::new(350.0, 0.0));
    assert!(ed.document.walls.is_empty());
}

#[test]
fn double_click_finishes_the_chain() {
    let mut ed = editor();
    ed.set_tool(Tool::DrawWall);

    ed.pointer_down(Point::new(0.0, 0.0));
    ed.pointer_down(Point::new(200.0, 0.0));
    ed.double_click();

    assert!(ed.wall_draft().is_none());
    assert_eq!(ed.document.walls.len(), 1);
}

#[test]
fn switching_tools_discards_partial_gestures() {
    let mut ed = editor();
    ed.set_tool(Tool::DrawWall);
    ed.pointer_down(Point::new(0.0, 0.0));

    ed.set_tool(Tool::Select);
    assert!(ed.wall_draft().is_none());
    assert!(ed.document.walls.is_empty());

    ed.set_tool(Tool::Measure);
    ed.pointer_down(Point::new(0.0, 0.0));
    ed.set_tool(Tool::Select);
    assert!(ed.measurement().is_none());
}

#[test]
fn select_prefers_objects_over_walls() {
    let mut ed = editor();
    ed.set_tool(Tool::DrawWall);
    ed.pointer_down(Point::new(100.0, 100.0));
    ed.pointer_down(Point::new(400.0, 100.0));

    // The sofa lands at (100, 100)-(300, 190), overlapping the wall.
    ed.set_tool(Tool::Select);
    let object_id = ed.add_object(&SOFA);

    ed.pointer_down(Point::new(150.0, 110.0));
    assert_eq!(ed.selected_object(), Some(object_id));
    assert_eq!(ed.selected_wall(), None);

    // Outside the sofa but on the wall centerline.
    ed.pointer_down(Point::new(350.0, 100.0));
    assert!(ed.selected_object().is_none());
    assert!(ed.selected_wall().is_some());

    // Empty space clears both.
    ed.pointer_down(Point::new(900.0, 700.0));
    assert!(ed.selected_object().is_none());
    assert!(ed.selected_wall().is_none());
}

#[test]
fn drag_preserves_the_grab_point_and_commits_once() {
    let mut ed = editor();
    let id = ed.add_object(&SOFA);

    ed.set_tool(Tool::Move);
    // Grab the sofa 30/20 inside its corner.
    ed.pointer_down(Point::new(130.0, 120.0));
    assert!(ed.is_dragging());

    ed.pointer_move(Point::new(430.0, 320.0));
    ed.pointer_move(Point::new(530.0, 420.0));
    ed.pointer_up();
    assert!(!ed.is_dragging());

    let obj = ed.document.object(id).unwrap();
    assert_eq!(obj.x, 500.0);
    assert_eq!(obj.y, 400.0);

    // One undo covers the whole drag, not one per move event.
    assert!(ed.undo());
    let obj = ed.document.object(id).unwrap();
    assert_eq!((obj.x, obj.y), (100.0, 100.0));
}

#[test]
fn move_tool_ignores_empty_space() {
    let mut ed = editor();
    ed.set_tool(Tool::Move);
    ed.pointer_down(Point::new(600.0, 600.0));
    assert!(!ed.is_dragging());
    ed.pointer_up();
    assert!(!ed.can_undo());
}

#[test]
fn rotate_steps_by_fifteen_degrees_and_wraps() {
    let mut ed = editor();
    let id = ed.add_object(&SOFA);

    ed.set_tool(Tool::Rotate);
    ed.pointer_down(Point::new(0.0, 0.0));
    ed.pointer_down(Point::new(0.0, 0.0));
    assert_eq!(ed.document.object(id).unwrap().rotation, 30.0);

    for _ in 0..22 {
        ed.pointer_down(Point::new(0.0, 0.0));
    }
    assert_eq!(ed.document.object(id).unwrap().rotation, 0.0);
}

#[test]
fn rotate_without_selection_is_a_noop() {
    let mut ed = editor();
    ed.set_tool(Tool::Rotate);
    ed.pointer_down(Point::new(0.0, 0.0));
    assert!(!ed.can_undo());
}

#[test]
fn measure_is_a_transient_toggle() {
    let mut ed = editor();
    ed.set_tool(Tool::Measure);

    ed.pointer_down(Point::new(0.0, 0.0));
    ed.pointer_move(Point::new(300.0, 400.0));
    let m = ed.measurement().expect("measurement active");
    assert_eq!(m.distance(), 500.0);

    // Second click clears the overlay; nothing entered history.
    ed.pointer_down(Point::new(10.0, 10.0));
    assert!(ed.measurement().is_none());
    assert!(!ed.can_undo());
}

#[test]
fn delete_prefers_the_object_selection() {
    let mut ed = editor();
    ed.set_tool(Tool::DrawWall);
    ed.pointer_down(Point::new(0.0, 0.0));
    ed.pointer_down(Point::new(200.0, 0.0));

    ed.add_object(&SOFA);
    ed.handle_key(EditorKey::Delete);
    assert!(ed.document.objects.is_empty());
    assert_eq!(ed.document.walls.len(), 1);
    assert!(ed.selected_object().is_none());

    // Now delete the wall.
    ed.set_tool(Tool::Select);
    ed.pointer_down(Point::new(100.0, 0.0));
    assert!(ed.selected_wall().is_some());
    ed.handle_key(EditorKey::Delete);
    assert!(ed.document.walls.is_empty());
}

#[test]
fn delete_without_selection_is_a_noop() {
    let mut ed = editor();
    let commits_before = ed.can_undo();
    ed.delete_selection();
    assert_eq!(ed.can_undo(), commits_before);
}

#[test]
fn duplicate_offsets_the_copy_and_selects_it() {
    let mut ed = editor();
    let original = ed.add_object(&SOFA);

    let copy = ed.duplicate_selected().expect("copy created");
    assert_ne!(copy, original);
    assert_eq!(ed.selected_object(), Some(copy));

    let copy_obj = ed.document.object(copy).unwrap();
    assert_eq!((copy_obj.x, copy_obj.y), (120.0, 120.0));
    assert_eq!(ed.document.objects.len(), 2);
}

#[test]
fn toggle_wall_type_resets_thickness() {
    let mut ed = editor();
    ed.set_tool(Tool::DrawWall);
    ed.pointer_down(Point::new(0.0, 0.0));
    ed.pointer_down(Point::new(200.0, 0.0));

    ed.set_tool(Tool::Select);
    ed.pointer_down(Point::new(100.0, 0.0));
    ed.toggle_selected_wall_type();

    let wall = &ed.document.walls[0];
    assert!(wall.is_bearing);
    assert_eq!(wall.thickness, BEARING_THICKNESS);

    ed.pointer_down(Point::new(100.0, 0.0));
    ed.toggle_selected_wall_type();
    let wall = &ed.document.walls[0];
    assert!(!wall.is_bearing);
    assert_eq!(wall.thickness, PARTITION_THICKNESS);
}

#[test]
fn bearing_flag_applies_to_newly_drawn_walls() {
    let mut ed = editor();
    ed.set_new_wall_bearing(true);
    ed.set_tool(Tool::DrawWall);
    ed.pointer_down(Point::new(0.0, 0.0));
    ed.pointer_down(Point::new(200.0, 0.0));

    let wall = &ed.document.walls[0];
    assert!(wall.is_bearing);
    assert_eq!(wall.thickness, BEARING_THICKNESS);
}

#[test]
fn undo_and_redo_clear_the_selection() {
    let mut ed = editor();
    ed.add_object(&SOFA);
    assert!(ed.selected_object().is_some());

    ed.handle_key(EditorKey::Undo);
    assert!(ed.selected_object().is_none());
    assert!(ed.document.objects.is_empty());

    ed.handle_key(EditorKey::Redo);
    assert!(ed.selected_object().is_none());
    assert_eq!(ed.document.objects.len(), 1);
}

#[test]
fn cancel_key_discards_the_wall_draft() {
    let mut ed = editor();
    ed.set_tool(Tool::DrawWall);
    ed.pointer_down(Point::new(0.0, 0.0));

    ed.handle_key(EditorKey::Cancel);
    assert!(ed.wall_draft().is_none());

    // The next click starts a fresh chain instead of committing.
    ed.pointer_down(Point::new(200.0, 0.0));
    assert!(ed.document.walls.is_empty());
}

#[test]
fn tool_hotkeys_switch_tools() {
    let mut ed = editor();
    ed.handle_key(EditorKey::WallTool);
    assert_eq!(ed.tool(), Tool::DrawWall);
    ed.handle_key(EditorKey::MeasureTool);
    assert_eq!(ed.tool(), Tool::Measure);
    ed.handle_key(EditorKey::SelectTool);
    assert_eq!(ed.tool(), Tool::Select);
}

#[test]
fn zoom_is_clamped() {
    let mut ed = editor();
    for _ in 0..20 {
        ed.zoom_in();
    }
    assert_eq!(ed.zoom(), 2.0);
    for _ in 0..40 {
        ed.zoom_out();
    }
    assert_eq!(ed.zoom(), 0.5);
}
