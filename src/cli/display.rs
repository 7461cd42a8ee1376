//! Table and color helpers shared by the list commands.

use comfy_table::{presets, Cell, CellAlignment, ContentArrangement, Table};
use console::{style, StyledObject};

/// Create a borderless list table with upper-cased headers.
pub fn list_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::NOTHING)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(
            headers
                .iter()
                .map(|h| Cell::new(h.to_uppercase()).set_alignment(CellAlignment::Left)),
        );
    table
}

/// Render a table under a count line, or a "none found" message.
pub fn render_list(entity_name: &str, table: &Table, total: usize) -> String {
    if total == 0 {
        return format!("No {entity_name}s found.");
    }
    let noun = if total == 1 {
        entity_name.to_string()
    } else {
        format!("{entity_name}s")
    };
    format!("{} {noun}:\n{table}", style(total).bold())
}

pub fn check_mark(done: bool) -> StyledObject<&'static str> {
    if done {
        style("[x]").green()
    } else {
        style("[ ]").dim()
    }
}

pub fn step_label(label: &str, failed: bool, skipped: bool) -> StyledObject<String> {
    let text = label.to_string();
    if failed {
        style(text).red().bold()
    } else if skipped {
        style(text).dim()
    } else {
        style(text).green()
    }
}
