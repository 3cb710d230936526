//! Text rendering for builds and the class catalog.

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use esr_core::{Build, Catalog};

/// Render one build as an indented, boxed block.
pub fn render_build(build: &Build) -> String {
    let edge = |s: &str| s.bright_cyan().to_string();

    let mut lines = vec![
        format!("{} {}", edge("╭─"), format!("{} Build", build.base_class).bold()),
        format!(
            "{} {}",
            edge("│"),
            format!("{} with Skill Lines:", build.base_class).bold().blue()
        ),
    ];

    for (i, slot) in build.skill_lines.iter().enumerate() {
        let name = format!("• {}", slot.skill_line).cyan();
        if build.is_native(i) {
            lines.push(format!("{}   {name}", edge("│")));
        } else {
            let from = format!("(from {})", slot.class).yellow();
            lines.push(format!("{}   {name} {from}", edge("│")));
        }
    }

    lines.push(edge("│"));
    let donors: Vec<String> = build
        .subclassed_from
        .iter()
        .map(|c| c.bold().yellow().to_string())
        .collect();
    lines.push(format!(
        "{} {} {}",
        edge("│"),
        "Subclasses".bold().cyan(),
        donors.join(", ")
    ));
    lines.push(edge("╰─"));

    lines.iter().map(|l| format!("  {l}\n")).collect()
}

/// Render a sequence of builds separated by blank lines.
pub fn render_builds(builds: &[Build]) -> String {
    builds
        .iter()
        .map(render_build)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Heading printed above a batch of builds.
pub fn batch_header(count: usize) -> String {
    let noun = if count == 1 { "Build" } else { "Builds" };
    format!("  {}\n", format!("{count} Random ESO {noun}").bold().magenta())
}

/// Every class with its native skill lines.
pub fn classes_table(catalog: &Catalog) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Class", "Skill Lines"]);
    for class in catalog.classes() {
        table.add_row(vec![class.name().to_string(), class.skill_lines().join(", ")]);
    }
    table
}

/// Numbered class picker used by the interactive mode.
pub fn class_menu_table(catalog: &Catalog) -> Table {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::NOTHING);
    for (i, class) in catalog.classes().iter().enumerate() {
        table.add_row(vec![(i + 1).to_string(), class.name().to_string()]);
    }
    table.add_row(vec!["Q".to_string(), "Quit".to_string()]);
    table
}
