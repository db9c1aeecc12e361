pub mod last;
pub mod roll;
pub mod sources;
pub mod towns;

use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use shop_core::Catalog;
use shop_mechanics::{Narration, Selection, is_error_line};

/// Lines before this index summarize the catalog; the rest narrate the rolls.
const SUMMARY_LINES: usize = 3;

/// Load a catalog file, mapping errors to a printable message.
fn load_catalog(path: &Path) -> Result<Catalog, String> {
    Catalog::load(path).map_err(|e| format!("{}: {e}", path.display()))
}

/// Print narration and the item table.
fn print_selection(selection: &Selection) {
    print_narration(&selection.narration);

    let Some(entries) = &selection.stock else {
        println!("  {}", "No items available.".dimmed());
        return;
    };

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Item",
        "Quantity",
        "Slot",
        "Price",
        "Source",
        "Description",
    ]);

    for entry in entries {
        let item = &entry.item;
        table.add_row(vec![
            item.name.clone(),
            entry.quantity.to_string(),
            or_dash(&item.slot),
            or_dash(&item.price),
            or_dash(&item.source),
            or_dash(&truncate(&item.description, 60)),
        ]);
    }

    println!("  {}", "Available Items".bold().underline());
    println!();
    println!("{table}");
    println!();
    let total: u32 = entries.iter().map(|e| e.quantity).sum();
    println!("  {total} items, {} distinct", entries.len());
}

fn print_narration(narration: &Narration) {
    for (idx, line) in narration.iter().enumerate() {
        if idx == SUMMARY_LINES {
            println!();
        }
        if is_error_line(line) {
            println!("  {}", line.red().bold());
        } else {
            println!("  {line}");
        }
    }
    println!();
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let head: String = text.chars().take(max - 3).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}

fn or_dash(text: &str) -> String {
    if text.is_empty() {
        "—".to_string()
    } else {
        text.to_string()
    }
}
