//! Horde spawn rolls against converted spawn tables
//!
//! Each spawning zone rolls 2D6 and adds the battle round modifier plus any
//! extra modifiers; the modified total picks a bracket and a unit is drawn
//! at random from it. An unmodified 2 never spawns.

use crate::error::{HordeError, HordeResult};
use crate::types::{Bracket, SpawnTables};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

/// Outcome of one spawn roll
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpawnResult {
    pub roll: i32,
    pub modified_roll: i32,
    pub bracket: Bracket,
    pub available_units: Vec<String>,
    pub selected_unit: Option<String>,
}

/// Roll two six-sided dice
pub fn roll_2d6<R: Rng + ?Sized>(rng: &mut R) -> i32 {
    rng.gen_range(1..=6) + rng.gen_range(1..=6)
}

/// Spawn roll modifier for a battle round: +0 in rounds 1-2, +1 in rounds
/// 3-4, +2 from round 5 on
pub fn round_modifier(battle_round: u32) -> i32 {
    match battle_round {
        0..=2 => 0,
        3 | 4 => 1,
        _ => 2,
    }
}

/// Spawning zones on the table for a game size
pub fn spawning_zones(points_limit: u32) -> usize {
    if points_limit == 1000 {
        2
    } else {
        4
    }
}

pub fn perform_spawn_roll<R: Rng + ?Sized>(
    tables: &SpawnTables,
    faction: &str,
    battle_round: u32,
    extra_modifier: i32,
    rng: &mut R,
) -> HordeResult<SpawnResult> {
    let table = tables
        .get(faction)
        .ok_or_else(|| HordeError::UnknownFaction(faction.to_string()))?;

    let roll = roll_2d6(rng);
    let modified_roll = roll + round_modifier(battle_round) + extra_modifier;

    let bracket = if roll == 2 {
        Bracket::Two
    } else {
        Bracket::for_roll(modified_roll)
    };

    let available_units = table.brackets.get(bracket).to_vec();
    let selected_unit = match bracket {
        Bracket::Two => None,
        _ => available_units.choose(rng).cloned(),
    };

    Ok(SpawnResult {
        roll,
        modified_roll,
        bracket,
        available_units,
        selected_unit,
    })
}

/// One independent roll per spawning zone
pub fn spawn_for_all_zones<R: Rng + ?Sized>(
    tables: &SpawnTables,
    faction: &str,
    battle_round: u32,
    zones: usize,
    extra_modifier: i32,
    rng: &mut R,
) -> HordeResult<Vec<SpawnResult>> {
    (0..zones)
        .map(|_| perform_spawn_roll(tables, faction, battle_round, extra_modifier, &mut *rng))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FactionTable;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn space_marines() -> SpawnTables {
        let mut table = FactionTable::new("Space Marines");
        table.brackets.three_four = vec!["Scouts".to_string()];
        table.brackets.five_six = vec!["Intercessors".to_string(), "Hellblasters".to_string()];
        table.brackets.seven_nine = vec!["Terminators".to_string()];
        table.brackets.ten_plus = vec!["Redemptor Dreadnought".to_string()];

        let mut tables = SpawnTables::new();
        tables.add_faction(table);
        tables
    }

    #[test]
    fn test_roll_2d6_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let roll = roll_2d6(&mut rng);
            assert!((2..=12).contains(&roll));
        }
    }

    #[test]
    fn test_round_modifier() {
        assert_eq!(round_modifier(1), 0);
        assert_eq!(round_modifier(2), 0);
        assert_eq!(round_modifier(3), 1);
        assert_eq!(round_modifier(4), 1);
        assert_eq!(round_modifier(5), 2);
        assert_eq!(round_modifier(10), 2);
    }

    #[test]
    fn test_spawning_zones() {
        assert_eq!(spawning_zones(1000), 2);
        assert_eq!(spawning_zones(2000), 4);
    }

    #[test]
    fn test_perform_spawn_roll_applies_modifiers() {
        let tables = space_marines();
        let mut rng = StdRng::seed_from_u64(42);
        for round in 1..=6 {
            let result = perform_spawn_roll(&tables, "Space Marines", round, 1, &mut rng).unwrap();
            assert_eq!(result.modified_roll, result.roll + round_modifier(round) + 1);
        }
    }

    #[test]
    fn test_perform_spawn_roll_selects_from_bracket() {
        let tables = space_marines();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let result = perform_spawn_roll(&tables, "Space Marines", 3, 0, &mut rng).unwrap();
            if result.roll == 2 {
                assert_eq!(result.bracket, Bracket::Two);
                assert_eq!(result.available_units, vec!["No Spawn"]);
                assert!(result.selected_unit.is_none());
            } else {
                assert_eq!(result.bracket, Bracket::for_roll(result.modified_roll));
                let selected = result.selected_unit.unwrap();
                assert!(result.available_units.contains(&selected));
            }
        }
    }

    #[test]
    fn test_perform_spawn_roll_empty_bracket() {
        let mut tables = SpawnTables::new();
        tables.add_faction(FactionTable::new("Orks"));
        let mut rng = StdRng::seed_from_u64(11);
        let result = perform_spawn_roll(&tables, "Orks", 1, 0, &mut rng).unwrap();
        assert!(result.selected_unit.is_none());
    }

    #[test]
    fn test_perform_spawn_roll_unknown_faction() {
        let tables = space_marines();
        let mut rng = StdRng::seed_from_u64(1);
        let result = perform_spawn_roll(&tables, "unknown_faction", 1, 0, &mut rng);
        assert!(matches!(result, Err(HordeError::UnknownFaction(f)) if f == "unknown_faction"));
    }

    #[test]
    fn test_spawn_for_all_zones() {
        let tables = space_marines();
        let mut rng = StdRng::seed_from_u64(5);
        let results =
            spawn_for_all_zones(&tables, "Space Marines", 2, spawning_zones(2000), 0, &mut rng)
                .unwrap();
        assert_eq!(results.len(), 4);
    }

    #[test]
    fn test_spawn_result_json_field_names() {
        let result = SpawnResult {
            roll: 6,
            modified_roll: 7,
            bracket: Bracket::SevenNine,
            available_units: vec!["Terminators".to_string()],
            selected_unit: Some("Terminators".to_string()),
        };
        assert_eq!(
            serde_json::to_string(&result).unwrap(),
            r#"{"roll":6,"modifiedRoll":7,"bracket":"7-9","availableUnits":["Terminators"],"selectedUnit":"Terminators"}"#
        );
    }

    #[test]
    fn test_seeded_rolls_repeat() {
        let tables = space_marines();
        let first =
            spawn_for_all_zones(&tables, "Space Marines", 5, 4, 0, &mut StdRng::seed_from_u64(9))
                .unwrap();
        let second =
            spawn_for_all_zones(&tables, "Space Marines", 5, 4, 0, &mut StdRng::seed_from_u64(9))
                .unwrap();
        assert_eq!(first, second);
    }
}
