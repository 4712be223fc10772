use clap::Parser;
use coinquest::game_logic::errors::{CoinQuestError, CoinQuestResult};
use coinquest::map::WorldLayout;

#[derive(Parser, Clone)]
#[command(name = "layoutgen")]
#[command(about = "Write and inspect world layout files for CoinQuest")]
struct Args {
    /// Layout to write (currently only "starter_village" is built in)
    #[arg(long, default_value = "starter_village")]
    name: String,

    /// Output file path relative to the maps/ directory (e.g. "my_world.bin")
    #[arg(long)]
    output: Option<String>,

    /// Check an existing layout file instead of writing one
    #[arg(long)]
    check: Option<String>,
}

fn validate_output_path(filename: &str) -> CoinQuestResult<()> {
    use std::path::Path;

    let path = Path::new(filename);
    if path.is_absolute() {
        return Err(CoinQuestError::InvalidLayoutData {
            reason: format!(
                "Output path must be relative to the maps/ directory, got absolute path: {filename}"
            ),
        });
    }

    if filename.contains("..") {
        return Err(CoinQuestError::InvalidLayoutData {
            reason: "Output path cannot contain '..'".to_string(),
        });
    }

    Ok(())
}

fn built_in_layout(name: &str) -> CoinQuestResult<WorldLayout> {
    match name {
        "starter_village" => Ok(WorldLayout::starter_village()),
        other => Err(CoinQuestError::InvalidLayoutData {
            reason: format!("Unknown layout name: {other}"),
        }),
    }
}

fn main() -> CoinQuestResult<()> {
    let args = Args::parse();

    if let Some(filename) = args.check {
        let layout = WorldLayout::load_from_file(&filename)?;
        println!("Layout file {filename} is valid");
        return print_layout_summary(&layout);
    }

    let layout = built_in_layout(&args.name)?;
    let output_filename = args.output.unwrap_or_else(|| format!("{}.bin", layout.name));
    validate_output_path(&output_filename)?;

    layout.save_to_file(&output_filename)?;

    let layouts_dir = WorldLayout::get_layouts_dir()?;
    println!(
        "Layout saved successfully to: {}",
        layouts_dir.join(&output_filename).display()
    );
    print_layout_summary(&layout)
}

fn print_layout_summary(layout: &WorldLayout) -> CoinQuestResult<()> {
    println!("\nLayout summary:");
    println!("  Name: {}", layout.name);
    println!("  World: {}x{} pixels", layout.width, layout.height);
    println!("  Player spawn: {}", layout.player_spawn);

    let mut kind_counts = std::collections::HashMap::new();
    for placement in &layout.props {
        *kind_counts.entry(placement.kind.label()).or_insert(0) += 1;
    }
    println!("  Props: {} total", layout.props.len());
    for (kind, count) in kind_counts {
        println!("    {kind}: {count}");
    }

    println!("  Agents: {}", layout.npcs.len());
    for npc in &layout.npcs {
        println!(
            "    {name}: {mode} at {position}{hostile}",
            name = npc.name,
            mode = npc.mode.label(),
            position = npc.position,
            hostile = if npc.hostile { " (hostile)" } else { "" }
        );
    }

    Ok(())
}
