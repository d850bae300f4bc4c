//! Headless PlanKit shell: load a project and print a plan summary
//! plus the compliance report.

use anyhow::{Context, Result};

use plankit::{evaluate, init_logging, EditorState, IssueReport};

fn main() -> Result<()> {
    init_logging()?;

    let mut editor = EditorState::new();

    if let Some(path) = std::env::args().nth(1) {
        let json = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read project file {path}"))?;
        editor
            .import_project(&json)
            .with_context(|| format!("Failed to import project file {path}"))?;
        println!("Loaded project from {path}");
    } else {
        println!("No project file given, reporting on an empty plan.");
    }

    let doc = &editor.document;
    println!();
    println!(
        "Plan {:.0}x{:.0} cm | bearing walls: {} | partitions: {} | objects: {}",
        doc.plan_width,
        doc.plan_height,
        doc.bearing_wall_count(),
        doc.partition_count(),
        doc.objects.len()
    );

    let report = IssueReport::new(evaluate(doc));
    println!(
        "Compliance: {} error(s), {} warning(s), {} check(s) passed",
        report.error_count(),
        report.warning_count(),
        report.success_count()
    );

    for issue in &report.issues {
        let code = issue.code.map(|c| format!(" [{c}]")).unwrap_or_default();
        println!(
            "  {:<7} {}{} - {}",
            issue.severity.to_string(),
            issue.title,
            code,
            issue.description
        );
    }

    Ok(())
}
