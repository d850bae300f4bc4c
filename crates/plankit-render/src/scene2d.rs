//! 2D display-list renderer.
//!
//! Produces drawing primitives in plan-space coordinates; the consumer
//! applies its own zoom/viewport transform. Walls are stroked at their
//! real thickness with a visually distinct treatment for bearing walls
//! (darker stroke plus hatching) and carry a rounded length label at
//! the midpoint. Selected objects get dimension labels.

use plankit_core::constants::GRID_SIZE;
use plankit_core::{PlacedObject, Point, ProjectDocument, Wall};
use serde::Serialize;
use uuid::Uuid;

const BACKGROUND_COLOR: &str = "#fafbfc";
const MINOR_GRID_COLOR: &str = "#e8eaed";
const MAJOR_GRID_COLOR: &str = "#d0d4d9";
const BEARING_WALL_COLOR: &str = "#1a1a1a";
const PARTITION_WALL_COLOR: &str = "#4a4a4a";
const PREVIEW_BEARING_COLOR: &str = "#333333";
const SELECTION_COLOR: &str = "#FFD028";
const OBJECT_STROKE_COLOR: &str = "#d9d9d9";
const MEASURE_COLOR: &str = "#FF5722";
const LABEL_COLOR: &str = "#1a1a1a";
const HATCH_SPACING: f64 = 8.0;

/// A single drawing primitive, in plan-space units.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Primitive {
    Line {
        from: Point,
        to: Point,
        width: f64,
        color: String,
        /// Dash/gap lengths for dashed strokes, `None` for solid.
        dash: Option<[f64; 2]>,
    },
    Rect {
        center: Point,
        width: f64,
        height: f64,
        rotation_deg: f64,
        fill: String,
        stroke: String,
        stroke_width: f64,
    },
    Label {
        anchor: Point,
        text: String,
        angle_deg: f64,
        color: String,
    },
}

/// The ordered display list for one frame.
#[derive(Debug, Clone, Serialize)]
pub struct Scene2d {
    pub width: f64,
    pub height: f64,
    pub background: String,
    pub primitives: Vec<Primitive>,
}

/// An in-progress wall segment to preview.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallPreview {
    pub start: Point,
    pub end: Point,
    pub is_bearing: bool,
    pub thickness: f64,
}

/// Transient view state supplied by the shell alongside the document.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub show_grid: bool,
    pub selected_object: Option<Uuid>,
    pub selected_wall: Option<Uuid>,
    pub wall_preview: Option<WallPreview>,
    pub measurement: Option<(Point, Point)>,
}

impl ViewState {
    pub fn with_grid() -> Self {
        Self {
            show_grid: true,
            ..Self::default()
        }
    }
}

/// Renders the document plus view state into a display list.
pub fn render_scene(doc: &ProjectDocument, view: &ViewState) -> Scene2d {
    let mut primitives = Vec::new();

    if view.show_grid {
        push_grid(&mut primitives, doc.plan_width, doc.plan_height);
    }

    for wall in &doc.walls {
        push_wall(&mut primitives, wall, view.selected_wall == Some(wall.id));
    }

    if let Some(preview) = &view.wall_preview {
        push_wall_preview(&mut primitives, preview);
    }

    for obj in &doc.objects {
        push_object(&mut primitives, obj, view.selected_object == Some(obj.id));
    }

    if let Some((start, end)) = &view.measurement {
        push_measurement(&mut primitives, start, end);
    }

    Scene2d {
        width: doc.plan_width,
        height: doc.plan_height,
        background: BACKGROUND_COLOR.to_string(),
        primitives,
    }
}

fn push_grid(primitives: &mut Vec<Primitive>, width: f64, height: f64) {
    // Minor lines at half pitch, major lines on the snap lattice.
    for (step, color, stroke) in [
        (GRID_SIZE / 2.0, MINOR_GRID_COLOR, 0.5),
        (GRID_SIZE, MAJOR_GRID_COLOR, 1.0),
    ] {
        let columns = (width / step) as usize;
        for i in 0..=columns {
            let x = i as f64 * step;
            primitives.push(Primitive::Line {
                from: Point::new(x, 0.0),
                to: Point::new(x, height),
                width: stroke,
                color: color.to_string(),
                dash: None,
            });
        }
        let rows = (height / step) as usize;
        for i in 0..=rows {
            let y = i as f64 * step;
            primitives.push(Primitive::Line {
                from: Point::new(0.0, y),
                to: Point::new(width, y),
                width: stroke,
                color: color.to_string(),
                dash: None,
            });
        }
    }
}

fn push_wall(primitives: &mut Vec<Primitive>, wall: &Wall, selected: bool) {
    let color = if wall.is_bearing {
        BEARING_WALL_COLOR
    } else {
        PARTITION_WALL_COLOR
    };

    primitives.push(Primitive::Line {
        from: wall.start,
        to: wall.end,
        width: wall.thickness,
        color: color.to_string(),
        dash: None,
    });

    if wall.is_bearing {
        push_hatching(primitives, wall);
    }

    if selected {
        primitives.push(Primitive::Line {
            from: wall.start,
            to: wall.end,
            width: wall.thickness + 6.0,
            color: SELECTION_COLOR.to_string(),
            dash: None,
        });
    }

    primitives.push(Primitive::Label {
        anchor: wall.midpoint(),
        text: format!("{} cm", wall.length().round()),
        angle_deg: wall.angle().to_degrees(),
        color: LABEL_COLOR.to_string(),
    });
}

/// Short white strokes across a bearing wall, the architectural hatch.
fn push_hatching(primitives: &mut Vec<Primitive>, wall: &Wall) {
    let length = wall.length();
    let hatches = (length / HATCH_SPACING) as usize;
    if hatches < 2 {
        return;
    }

    let angle = wall.angle();
    let perp = angle + std::f64::consts::FRAC_PI_2;
    let half_thick = (wall.thickness / 2.0 - 2.0).max(0.0);

    for i in 1..hatches {
        let t = i as f64 / hatches as f64;
        let px = wall.start.x + (wall.end.x - wall.start.x) * t;
        let py = wall.start.y + (wall.end.y - wall.start.y) * t;
        primitives.push(Primitive::Line {
            from: Point::new(px + perp.cos() * half_thick, py + perp.sin() * half_thick),
            to: Point::new(px - perp.cos() * half_thick, py - perp.sin() * half_thick),
            width: 1.0,
            color: "#ffffff".to_string(),
            dash: None,
        });
    }
}

fn push_wall_preview(primitives: &mut Vec<Primitive>, preview: &WallPreview) {
    let color = if preview.is_bearing {
        PREVIEW_BEARING_COLOR
    } else {
        SELECTION_COLOR
    };

    primitives.push(Primitive::Line {
        from: preview.start,
        to: preview.end,
        width: preview.thickness,
        color: color.to_string(),
        dash: Some([10.0, 5.0]),
    });

    let length = preview.start.distance_to(&preview.end);
    primitives.push(Primitive::Label {
        anchor: preview.start.midpoint(&preview.end),
        text: format!("{} cm", length.round()),
        angle_deg: 0.0,
        color: color.to_string(),
    });
}

fn push_object(primitives: &mut Vec<Primitive>, obj: &PlacedObject, selected: bool) {
    let stroke = if selected { SELECTION_COLOR } else { OBJECT_STROKE_COLOR };
    primitives.push(Primitive::Rect {
        center: obj.center(),
        width: obj.width,
        height: obj.height,
        rotation_deg: obj.rotation,
        fill: obj.color.clone(),
        stroke: stroke.to_string(),
        stroke_width: if selected { 3.0 } else { 1.0 },
    });

    if selected {
        primitives.push(Primitive::Label {
            anchor: Point::new(obj.x + obj.width / 2.0, obj.y - 8.0),
            text: format!("{} cm", obj.width),
            angle_deg: 0.0,
            color: LABEL_COLOR.to_string(),
        });
        primitives.push(Primitive::Label {
            anchor: Point::new(obj.x - 8.0, obj.y + obj.height / 2.0),
            text: format!("{} cm", obj.height),
            angle_deg: -90.0,
            color: LABEL_COLOR.to_string(),
        });
    }
}

fn push_measurement(primitives: &mut Vec<Primitive>, start: &Point, end: &Point) {
    primitives.push(Primitive::Line {
        from: *start,
        to: *end,
        width: 2.0,
        color: MEASURE_COLOR.to_string(),
        dash: Some([5.0, 5.0]),
    });

    let mid = start.midpoint(end);
    primitives.push(Primitive::Label {
        anchor: Point::new(mid.x, mid.y - 10.0),
        text: format!("{} cm", start.distance_to(end).round()),
        angle_deg: 0.0,
        color: MEASURE_COLOR.to_string(),
    });
}
