use std::path::Path;

use colored::Colorize;

use crate::state::LastRoll;

pub fn run(state: &Path, json: bool) -> Result<(), String> {
    let last = LastRoll::load(state)?;

    if json {
        let text = serde_json::to_string_pretty(&last)
            .map_err(|e| format!("JSON serialization error: {e}"))?;
        println!("{text}");
        return Ok(());
    }

    println!(
        "  {} {} {}",
        "Last roll".bold(),
        last.town,
        format!("({})", last.generated_at.format("%Y-%m-%d %H:%M UTC")).dimmed()
    );
    println!();
    super::print_selection(&last.selection);
    Ok(())
}
