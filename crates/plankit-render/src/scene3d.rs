//! 3D projection of the floor plan.
//!
//! Turns the document into a scene of axis-defined boxes: the floor
//! slab, every wall as an extruded volume standing on the floor, and
//! every object as a box elevated to half its depth. Coordinates use a
//! Y-up frame (plan x → scene x, plan y → scene z) and the whole plan
//! is centered on the origin. Walls and objects go through the same
//! conversion so the two always line up.

use plankit_core::ProjectDocument;
use serde::Serialize;

/// Linear scale from plan centimeters to scene units (1 cm = 0.01).
pub const DEFAULT_SCALE: f64 = 0.01;

const FLOOR_COLOR: &str = "#f0f0f0";
const BEARING_WALL_COLOR: &str = "#555555";
const PARTITION_WALL_COLOR: &str = "#888888";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SolidKind {
    Floor,
    BearingWall,
    PartitionWall,
    Furniture,
}

/// One box in the scene: center position, extents, and yaw about the
/// vertical axis (radians). The floor has zero vertical extent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Solid {
    pub kind: SolidKind,
    pub center: [f64; 3],
    pub size: [f64; 3],
    pub yaw: f64,
    pub color: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Scene3d {
    pub solids: Vec<Solid>,
}

/// Projects the document into a 3D box scene at the given scale.
pub fn project_scene(doc: &ProjectDocument, scale: f64) -> Scene3d {
    // Offsets that put the plan center at the scene origin.
    let offset_x = doc.plan_width * scale / 2.0;
    let offset_z = doc.plan_height * scale / 2.0;

    let mut solids = Vec::with_capacity(1 + doc.walls.len() + doc.objects.len());

    solids.push(Solid {
        kind: SolidKind::Floor,
        center: [0.0, 0.0, 0.0],
        size: [doc.plan_width * scale, 0.0, doc.plan_height * scale],
        yaw: 0.0,
        color: FLOOR_COLOR.to_string(),
    });

    for wall in &doc.walls {
        let mid = wall.midpoint();
        let (kind, color) = if wall.is_bearing {
            (SolidKind::BearingWall, BEARING_WALL_COLOR)
        } else {
            (SolidKind::PartitionWall, PARTITION_WALL_COLOR)
        };
        solids.push(Solid {
            kind,
            center: [
                mid.x * scale - offset_x,
                wall.height * scale / 2.0,
                mid.y * scale - offset_z,
            ],
            size: [
                wall.length() * scale,
                wall.height * scale,
                wall.thickness * scale,
            ],
            yaw: -wall.angle(),
            color: color.to_string(),
        });
    }

    for obj in &doc.objects {
        let center = obj.center();
        solids.push(Solid {
            kind: SolidKind::Furniture,
            center: [
                center.x * scale - offset_x,
                obj.depth * scale / 2.0,
                center.y * scale - offset_z,
            ],
            size: [obj.width * scale, obj.depth * scale, obj.height * scale],
            yaw: -obj.rotation.to_radians(),
            color: obj.color.clone(),
        });
    }

    Scene3d { solids }
}
