//! SVG serialization of a 2D scene, for export and for snapshotting in
//! tests.

use std::fmt::Write;

use crate::scene2d::{Primitive, Scene2d};

/// Serializes a display list to a standalone SVG document.
pub fn scene_to_svg(scene: &Scene2d) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" width="{}" height="{}">"#,
        scene.width, scene.height, scene.width, scene.height
    );
    let _ = writeln!(
        out,
        r#"  <rect x="0" y="0" width="{}" height="{}" fill="{}"/>"#,
        scene.width, scene.height, scene.background
    );

    for primitive in &scene.primitives {
        match primitive {
            Primitive::Line {
                from,
                to,
                width,
                color,
                dash,
            } => {
                let dash_attr = match dash {
                    Some([on, off]) => format!(r#" stroke-dasharray="{on} {off}""#),
                    None => String::new(),
                };
                let _ = writeln!(
                    out,
                    r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}" stroke-linecap="square"{}/>"#,
                    from.x, from.y, to.x, to.y, color, width, dash_attr
                );
            }
            Primitive::Rect {
                center,
                width,
                height,
                rotation_deg,
                fill,
                stroke,
                stroke_width,
            } => {
                let x = center.x - width / 2.0;
                let y = center.y - height / 2.0;
                let _ = writeln!(
                    out,
                    r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="{}" stroke="{}" stroke-width="{}" transform="rotate({} {} {})"/>"#,
                    x, y, width, height, fill, stroke, stroke_width, rotation_deg, center.x, center.y
                );
            }
            Primitive::Label {
                anchor,
                text,
                angle_deg,
                color,
            } => {
                let _ = writeln!(
                    out,
                    r#"  <text x="{}" y="{}" fill="{}" font-size="11" text-anchor="middle" transform="rotate({} {} {})">{}</text>"#,
                    anchor.x,
                    anchor.y,
                    color,
                    angle_deg,
                    anchor.x,
                    anchor.y,
                    escape(text)
                );
            }
        }
    }

    out.push_str("</svg>\n");
    out
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
