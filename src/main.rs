use anyhow::Result;
use hub_icons::config::GeneratorConfig;
use hub_icons::generate::generate;

fn main() -> Result<()> {
    let config = GeneratorConfig::default();
    let report = generate(&config)?;

    println!("Icons generated successfully!");
    for file in &report.files {
        println!("  {}", file);
    }

    Ok(())
}
