use std::path::Path;

pub fn run(catalog: &Path) -> Result<(), String> {
    let catalog = super::load_catalog(catalog)?;
    let sources = catalog.sources();

    if sources.is_empty() {
        println!("  No sources found.");
        return Ok(());
    }

    for source in &sources {
        println!("  {source}");
    }
    println!();
    println!("  {} sources, {} items", sources.len(), catalog.len());

    Ok(())
}
