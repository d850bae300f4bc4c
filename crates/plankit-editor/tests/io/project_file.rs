use plankit_core::{CatalogItem, Point, ProjectDocument, Wall};
use plankit_editor::{EditorState, ProjectFile, Tool};

const BED: CatalogItem = CatalogItem {
    name: "Bed 160",
    width: 200.0,
    height: 170.0,
    depth: 45.0,
    color: "#8B7355",
};

fn sample_document() -> ProjectDocument {
    let mut doc = ProjectDocument::default();
    doc.walls.push(Wall::new(
        Point::new(0.0, 0.0),
        Point::new(400.0, 0.0),
        280.0,
        true,
    ));
    doc.walls.push(Wall::new(
        Point::new(400.0, 0.0),
        Point::new(400.0, 300.0),
        280.0,
        false,
    ));
    let mut editor = EditorState::with_document(doc);
    editor.add_object(&BED);
    let mut obj = editor.document.objects[0].clone();
    obj.rotation = 45.0;
    editor.document.objects[0] = obj;
    editor.document
}

#[test]
fn export_import_round_trip_is_lossless() {
    let doc = sample_document();
    let json = ProjectFile::from_document(&doc).to_json().unwrap();
    let restored = ProjectFile::from_json(&json).unwrap().into_document();
    assert_eq!(restored, doc);
}

#[test]
fn export_uses_the_contract_field_names() {
    let json = ProjectFile::from_document(&sample_document()).to_json().unwrap();
    assert!(json.contains("\"walls\""));
    assert!(json.contains("\"objects\""));
    assert!(json.contains("\"canvasWidth\""));
    assert!(json.contains("\"canvasHeight\""));
    assert!(json.contains("\"isBearing\""));
}

#[test]
fn missing_collections_default_to_empty() {
    let file = ProjectFile::from_json(r#"{"canvasWidth": 1000, "canvasHeight": 600}"#).unwrap();
    assert!(file.walls.is_empty());
    assert!(file.objects.is_empty());
    assert_eq!(file.canvas_width, 1000.0);

    // A fully empty record falls back to the default plan size.
    let file = ProjectFile::from_json("{}").unwrap();
    assert_eq!(file.canvas_width, 1200.0);
    assert_eq!(file.canvas_height, 800.0);
}

#[test]
fn malformed_payload_is_rejected_and_the_document_kept() {
    let mut editor = EditorState::with_document(sample_document());
    let before = editor.document.clone();

    assert!(editor.import_project("definitely not json").is_err());
    assert!(editor.import_project(r#"{"walls": 42}"#).is_err());
    assert_eq!(editor.document, before);
}

#[test]
fn import_replaces_state_and_commits_once() {
    let mut editor = EditorState::new();
    editor.set_tool(Tool::DrawWall);
    editor.pointer_down(Point::new(0.0, 0.0));

    let json = ProjectFile::from_document(&sample_document()).to_json().unwrap();
    editor.import_project(&json).unwrap();

    assert_eq!(editor.document.walls.len(), 2);
    assert_eq!(editor.document.objects.len(), 1);
    assert!(editor.wall_draft().is_none(), "import clears gesture state");
    assert!(editor.selected_object().is_none());

    // One undo returns to the pre-import document.
    assert!(editor.undo());
    assert!(editor.document.walls.is_empty());
}
