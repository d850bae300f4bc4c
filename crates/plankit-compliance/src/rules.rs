//! The rule set. Rules are independent predicates evaluated in a fixed
//! order against the document; each contributes zero or more findings,
//! and a single pass can emit findings in all three severities.
//!
//! Object classification (bed, wet fixture, kitchen equipment) is
//! case-insensitive substring matching on object names, since placed
//! objects may carry descriptive names beyond the bare keyword.

use plankit_core::{PlacedObject, Point, ProjectDocument, Wall};
use tracing::debug;

use crate::issue::{ComplianceIssue, Severity};

/// Bearing walls shorter than this break structural integrity.
const MIN_BEARING_WALL_LENGTH: f64 = 50.0;
/// Minimum habitable ceiling height.
const MIN_WALL_HEIGHT: f64 = 250.0;
/// Required clear passage between furniture objects.
const PASSAGE_CLEARANCE: f64 = 70.0;
/// Wet fixtures closer than this to a bed warrant extra soundproofing.
const WET_TO_BED_DISTANCE: f64 = 200.0;
/// Partitions thinner than this give poor sound insulation.
const MIN_PARTITION_THICKNESS: f64 = 10.0;
/// Minimum thickness for a bearing wall.
const MIN_BEARING_THICKNESS: f64 = 20.0;
/// Minimum habitable room area in square meters.
const MIN_LIVING_AREA_M2: f64 = 8.0;
/// Wall count treated as "probably an enclosed room".
const ENCLOSED_WALL_COUNT: usize = 4;

const WET_FIXTURE_KEYWORDS: &[&str] = &["toilet", "bathtub", "shower"];
const BED_KEYWORDS: &[&str] = &["bed"];
const KITCHEN_KEYWORDS: &[&str] = &["stove", "fridge"];

/// Evaluates the full rule set against a document.
///
/// Pure and deterministic: the same document always yields the same
/// issue list, in the same order (errors, then warnings, then
/// satisfied checks, each in rule order).
pub fn evaluate(doc: &ProjectDocument) -> Vec<ComplianceIssue> {
    let mut issues = Vec::new();

    let bearing_walls: Vec<&Wall> = doc.walls.iter().filter(|w| w.is_bearing).collect();
    let wet_fixtures: Vec<&PlacedObject> = classify(&doc.objects, WET_FIXTURE_KEYWORDS);
    let beds: Vec<&PlacedObject> = classify(&doc.objects, BED_KEYWORDS);
    let too_close = too_close_pair_count(&doc.objects);

    // Errors.

    if bearing_walls.iter().any(|w| w.length() < MIN_BEARING_WALL_LENGTH) {
        issues.push(ComplianceIssue {
            id: "bearing-wall-short",
            title: "Bearing wall too short",
            description: "Bearing walls under 50 cm can compromise the structural \
                          integrity of the building."
                .to_string(),
            severity: Severity::Error,
            code: Some("SP 70.13330.2012"),
        });
    }

    if doc.walls.iter().any(|w| w.height < MIN_WALL_HEIGHT) {
        issues.push(ComplianceIssue {
            id: "low-ceiling",
            title: "Ceiling height below standard",
            description: "Habitable rooms must be at least 2.5 m high.".to_string(),
            severity: Severity::Error,
            code: Some("SP 54.13330.2016 5.8"),
        });
    }

    if too_close > 0 {
        issues.push(ComplianceIssue {
            id: "narrow-passage",
            title: "Narrow passage between objects",
            description: format!(
                "Passages between objects must be at least 70 cm wide. Found {} violation(s).",
                too_close
            ),
            severity: Severity::Error,
            code: Some("SP 59.13330.2020"),
        });
    }

    if !doc.walls.is_empty() && bearing_walls.is_empty() {
        issues.push(ComplianceIssue {
            id: "no-bearing-walls",
            title: "No bearing walls",
            description: "The plan contains no bearing walls. Make sure load-bearing \
                          structures are marked correctly."
                .to_string(),
            severity: Severity::Error,
            code: Some("SP 70.13330.2012"),
        });
    }

    // Warnings.

    if doc
        .walls
        .iter()
        .any(|w| !w.is_bearing && w.thickness < MIN_PARTITION_THICKNESS)
    {
        issues.push(ComplianceIssue {
            id: "thin-partition",
            title: "Thin partitions",
            description: "Partitions under 10 cm may not provide adequate sound \
                          insulation. Consult a specialist."
                .to_string(),
            severity: Severity::Warning,
            code: Some("SP 51.13330.2011"),
        });
    }

    if wet_fixture_near_bed(&wet_fixtures, &beds) {
        issues.push(ComplianceIssue {
            id: "bath-near-bed",
            title: "Wet zone next to a sleeping area",
            description: "Placing a bathroom fixture next to a bed may require \
                          additional soundproofing."
                .to_string(),
            severity: Severity::Warning,
            code: Some("SNiP 31-01-2003"),
        });
    }

    if doc
        .objects
        .iter()
        .any(|o| name_matches(&o.name, KITCHEN_KEYWORDS))
    {
        issues.push(ComplianceIssue {
            id: "kitchen-ventilation",
            title: "Check kitchen ventilation",
            description: "Gas-fired equipment requires natural ventilation and a \
                          window. Verify with a specialist."
                .to_string(),
            severity: Severity::Warning,
            code: Some("SP 402.1325800.2018"),
        });
    }

    if !wet_fixtures.is_empty() {
        issues.push(ComplianceIssue {
            id: "bathroom-electrical",
            title: "Electrical safety in the wet zone",
            description: "Electrical appliances in a bathroom must respect safety \
                          zones. Consult an electrician."
                .to_string(),
            severity: Severity::Warning,
            code: Some("PUE-7 7.1"),
        });
    }

    let total_area_m2 = (doc.plan_width / 100.0) * (doc.plan_height / 100.0);
    if total_area_m2 < MIN_LIVING_AREA_M2 {
        issues.push(ComplianceIssue {
            id: "small-area",
            title: "Small room area",
            description: "A habitable room should be at least 8 m². Check the \
                          requirements for your room type."
                .to_string(),
            severity: Severity::Warning,
            code: Some("SP 54.13330.2016 5.7"),
        });
    }

    if !wet_fixtures.is_empty() && !bearing_walls.is_empty() {
        issues.push(ComplianceIssue {
            id: "wet-zone-relocation",
            title: "Wet zone relocation",
            description: "Moving a bathroom or kitchen elsewhere in the apartment \
                          requires approval and waterproofing."
                .to_string(),
            severity: Severity::Warning,
            code: Some("RF Decree 47"),
        });
    }

    // Satisfied checks.

    if !doc.walls.is_empty() && doc.walls.iter().all(|w| w.thickness >= MIN_PARTITION_THICKNESS) {
        issues.push(ComplianceIssue {
            id: "proper-walls",
            title: "Wall thickness within standard",
            description: "All walls are thick enough for habitable rooms.".to_string(),
            severity: Severity::Success,
            code: Some("SP 70.13330.2012"),
        });
    }

    if !doc.walls.is_empty() && doc.walls.iter().all(|w| w.height >= MIN_WALL_HEIGHT) {
        issues.push(ComplianceIssue {
            id: "proper-height",
            title: "Ceiling height compliant",
            description: "Room height meets the residential standard (≥ 2.5 m).".to_string(),
            severity: Severity::Success,
            code: Some("SP 54.13330.2016"),
        });
    }

    if !bearing_walls.is_empty()
        && bearing_walls.iter().all(|w| w.thickness >= MIN_BEARING_THICKNESS)
    {
        issues.push(ComplianceIssue {
            id: "bearing-thickness",
            title: "Bearing walls correct",
            description: "Bearing wall thickness meets the minimum requirement \
                          (≥ 20 cm)."
                .to_string(),
            severity: Severity::Success,
            code: Some("SP 70.13330.2012"),
        });
    }

    if !doc.objects.is_empty() && too_close == 0 {
        issues.push(ComplianceIssue {
            id: "proper-layout",
            title: "Furniture layout correct",
            description: "Passages between objects meet ergonomic standards.".to_string(),
            severity: Severity::Success,
            code: Some("SP 59.13330.2020"),
        });
    }

    // Count heuristic only: four walls are taken as "probably a room".
    // Deliberately not a topological closure test.
    if doc.walls.len() >= ENCLOSED_WALL_COUNT {
        issues.push(ComplianceIssue {
            id: "enclosed-space",
            title: "Enclosed space",
            description: "The plan contains enough walls to form a room.".to_string(),
            severity: Severity::Success,
            code: Some("SP 54.13330.2016"),
        });
    }

    debug!(total = issues.len(), "compliance pass complete");
    issues
}

fn name_matches(name: &str, keywords: &[&str]) -> bool {
    let lowered = name.to_lowercase();
    keywords.iter().any(|k| lowered.contains(k))
}

fn classify<'a>(objects: &'a [PlacedObject], keywords: &[&str]) -> Vec<&'a PlacedObject> {
    objects
        .iter()
        .filter(|o| name_matches(&o.name, keywords))
        .collect()
}

/// Counts object pairs whose center-to-center distance is below the
/// clearance threshold. Coincident centers (distance zero) are excluded
/// by contract.
fn too_close_pair_count(objects: &[PlacedObject]) -> usize {
    let mut count = 0;
    for i in 0..objects.len() {
        for j in (i + 1)..objects.len() {
            let a = &objects[i];
            let b = &objects[j];
            let dist = a.center().distance_to(&b.center());
            let min_dist =
                a.width.max(a.height).max(b.width).max(b.height) / 2.0 + PASSAGE_CLEARANCE;
            if dist > 0.0 && dist < min_dist {
                count += 1;
            }
        }
    }
    count
}

/// Proximity is measured between footprint origins, matching the
/// editor's placement coordinates.
fn wet_fixture_near_bed(wet: &[&PlacedObject], beds: &[&PlacedObject]) -> bool {
    wet.iter().any(|fixture| {
        beds.iter().any(|bed| {
            let a = Point::new(fixture.x, fixture.y);
            let b = Point::new(bed.x, bed.y);
            a.distance_to(&b) < WET_TO_BED_DISTANCE
        })
    })
}
