use comfy_table::{ContentArrangement, Table};

use shop_core::TownSize;

pub fn run() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Size",
        "Obtainable",
        "Max Price",
        "Faint",
        "Moderate",
        "Strong",
    ]);

    for town in TownSize::ALL {
        let profile = town.profile();
        table.add_row(vec![
            town.name().to_string(),
            profile.obtainable.to_string(),
            profile.max_price().to_string(),
            profile.faint.to_string(),
            profile.moderate.to_string(),
            profile.strong.to_string(),
        ]);
    }

    println!("{table}");
    Ok(())
}
