use crate::error::HordeResult;
use crate::excel::SpawnTableImporter;
use crate::parser;
use crate::spawn::{self, SpawnResult};
use crate::types::{Bracket, SpawnTables};
use crate::writer;
use colored::Colorize;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

/// Execute the convert command: workbook in, spawn table JSON out
pub fn convert(input: PathBuf, output: PathBuf, verbose: bool) -> HordeResult<()> {
    println!("{}", "⚔️  Horde Spawn - Converting spawn tables".bold().green());
    println!("   Input:  {}", input.display());
    println!("   Output: {}\n", output.display());

    let tables = SpawnTableImporter::new(&input).import()?;
    print_faction_summary(&tables, verbose);

    writer::write_spawn_tables(&output, &tables)?;

    println!("\nSpawn tables saved to {}", output.display().to_string().bold());
    println!("Total factions processed: {}", tables.len());

    Ok(())
}

fn print_faction_summary(tables: &SpawnTables, verbose: bool) {
    for table in tables.factions() {
        println!("Processing faction: {}", table.faction.bright_blue());
        println!("  - Total units: {}", table.brackets.extracted_unit_count());
        for bracket in Bracket::EXTRACTED {
            let units = table.brackets.get(bracket);
            println!("    {}: {} units", bracket, units.len());
            if verbose {
                for unit in units {
                    println!("      • {}", unit.dimmed());
                }
            }
        }
    }
}

/// Options for the roll command
#[derive(Debug, Clone)]
pub struct RollOptions {
    pub tables: PathBuf,
    pub faction: String,
    pub round: u32,
    pub modifier: i32,
    pub zones: Option<usize>,
    pub points: Option<u32>,
    pub seed: Option<u64>,
    pub json: bool,
}

impl RollOptions {
    /// Zone count: explicit zones, else derived from the points limit, else one
    fn zone_count(&self) -> usize {
        match (self.zones, self.points) {
            (Some(zones), _) => zones,
            (None, Some(points)) => spawn::spawning_zones(points),
            (None, None) => 1,
        }
    }
}

/// Execute the roll command
pub fn roll(options: RollOptions) -> HordeResult<()> {
    let tables = parser::parse_spawn_tables(&options.tables)?;

    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let results = spawn::spawn_for_all_zones(
        &tables,
        &options.faction,
        options.round,
        options.zone_count(),
        options.modifier,
        &mut rng,
    )?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    println!("{}", "🎲 Horde Spawn - Spawn Roll".bold().green());
    println!("   Faction: {}", options.faction.bright_blue());
    println!(
        "   Round:   {} (modifier +{})\n",
        options.round,
        spawn::round_modifier(options.round)
    );

    for (zone, result) in results.iter().enumerate() {
        print_spawn_result(zone + 1, result);
    }

    Ok(())
}

fn print_spawn_result(zone: usize, result: &SpawnResult) {
    let unit = match &result.selected_unit {
        Some(unit) => unit.bold().to_string(),
        None => "No Spawn".yellow().to_string(),
    };
    println!(
        "   Zone {}: rolled {} → {} (bracket {}) → {}",
        zone, result.roll, result.modified_roll, result.bracket, unit
    );
}

/// Execute the factions command
pub fn factions(tables: PathBuf) -> HordeResult<()> {
    let tables = parser::parse_spawn_tables(&tables)?;
    for name in tables.faction_names() {
        println!("{}", name);
    }
    Ok(())
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
