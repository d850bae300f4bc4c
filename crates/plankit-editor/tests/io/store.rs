use plankit_core::{CatalogItem, Point};
use plankit_editor::{EditorState, ProjectStore, Tool};

const FRIDGE: CatalogItem = CatalogItem {
    name: "Fridge",
    width: 70.0,
    height: 70.0,
    depth: 180.0,
    color: "#cfcfcf",
};

#[test]
fn save_and_load_round_trip_with_view_state() {
    let dir = tempfile::tempdir().unwrap();
    let store = ProjectStore::new(dir.path());

    let mut editor = EditorState::new();
    editor.set_tool(Tool::DrawWall);
    editor.pointer_down(Point::new(0.0, 0.0));
    editor.pointer_down(Point::new(300.0, 0.0));
    editor.add_object(&FRIDGE);
    editor.zoom_in();
    editor.toggle_grid();
    editor.save_to(&store).unwrap();

    let mut restored = EditorState::new();
    assert!(restored.load_from(&store).unwrap());
    assert_eq!(restored.document.walls.len(), 1);
    assert_eq!(restored.document.objects.len(), 1);
    assert_eq!(restored.zoom(), editor.zoom());
    assert!(!restored.show_grid());
}

#[test]
fn empty_store_loads_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let store = ProjectStore::new(dir.path());

    let mut editor = EditorState::new();
    assert!(!editor.load_from(&store).unwrap());
    assert!(editor.document.walls.is_empty());
}

#[test]
fn stored_file_lives_under_the_fixed_project_key() {
    let dir = tempfile::tempdir().unwrap();
    let store = ProjectStore::new(dir.path());

    EditorState::new().save_to(&store).unwrap();
    assert!(dir.path().join("plankit-project.json").exists());
}

#[test]
fn corrupt_store_file_is_a_recoverable_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = ProjectStore::new(dir.path());
    std::fs::write(store.project_path(), "{ not json").unwrap();

    let mut editor = EditorState::new();
    assert!(editor.load_from(&store).is_err());
}
