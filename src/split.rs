// ABOUTME: Slide splitting for the md2pptx builder
// ABOUTME: Cuts raw markdown into per-slide units on standalone delimiter lines

use crate::config::PAGEBREAK_ALIAS;
use log::info;

/// Split a markdown document into trimmed, non-empty slide units.
///
/// Every occurrence of `<!-- pagebreak -->` is first rewritten to `delimiter`.
/// A line that consists solely of the delimiter then ends the current unit.
pub fn split_slides(markdown: &str, delimiter: &str) -> Vec<String> {
    let normalized = markdown.replace(PAGEBREAK_ALIAS, delimiter);

    let mut units = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in normalized.split('\n') {
        if line.trim_end_matches('\r') == delimiter {
            push_unit(&mut units, &current);
            current.clear();
        } else {
            current.push(line);
        }
    }
    push_unit(&mut units, &current);

    info!("Split markdown into {} slides", units.len());
    units
}

fn push_unit(units: &mut Vec<String>, lines: &[&str]) {
    let unit = lines.join("\n");
    let trimmed = unit.trim();
    if !trimmed.is_empty() {
        units.push(trimmed.to_string());
    }
}
