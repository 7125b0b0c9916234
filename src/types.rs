use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

//==============================================================================
// Workbook Layout
//==============================================================================

/// Sheet used as the blank template in the master workbook; never a faction
pub const RESERVED_SHEET: &str = "MASTER BLANK";

/// Rows 0 and 1 of every faction sheet are headers
pub const HEADER_ROWS: u32 = 2;

/// The fixed contents of bracket "2"
pub const NO_SPAWN: &str = "No Spawn";

/// Cells containing any of these substrings are rules text, not units.
/// Matching is case-sensitive and by substring.
pub const SKIP_KEYWORDS: [&str; 8] = [
    "REMINDERS",
    "Unmodified",
    "Rounds",
    "Round 5",
    "tier",
    "You may instead",
    "If there are units",
    "The term",
];

/// Workbook read when no input path is given
pub const DEFAULT_INPUT_PATH: &str = "40KHordeModeSpawnTablesMasterv1.0.xlsx";

/// JSON written when no output path is given
pub const DEFAULT_OUTPUT_PATH: &str = "server/data/spawn_tables.json";

/// A 2D6 spawn bracket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bracket {
    Two,
    ThreeFour,
    FiveSix,
    SevenNine,
    TenPlus,
}

impl Bracket {
    /// All brackets in output order
    pub const ALL: [Bracket; 5] = [
        Bracket::Two,
        Bracket::ThreeFour,
        Bracket::FiveSix,
        Bracket::SevenNine,
        Bracket::TenPlus,
    ];

    /// Brackets whose units come from the workbook
    pub const EXTRACTED: [Bracket; 4] = [
        Bracket::ThreeFour,
        Bracket::FiveSix,
        Bracket::SevenNine,
        Bracket::TenPlus,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Bracket::Two => "2",
            Bracket::ThreeFour => "3-4",
            Bracket::FiveSix => "5-6",
            Bracket::SevenNine => "7-9",
            Bracket::TenPlus => "10+",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.label() == label)
    }

    /// Bracket a (possibly modified) 2D6 roll lands in
    pub fn for_roll(roll: i32) -> Self {
        match roll {
            2 => Bracket::Two,
            r if r <= 4 => Bracket::ThreeFour,
            r if r <= 6 => Bracket::FiveSix,
            r if r <= 9 => Bracket::SevenNine,
            _ => Bracket::TenPlus,
        }
    }
}

impl fmt::Display for Bracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Bracket {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Where a faction sheet keeps its data.
///
/// `Default` is the layout of the master spawn table workbook: a reserved
/// template sheet, two header rows, and one unit column per bracket with a
/// spacer column between them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetLayout {
    pub reserved_sheet: String,
    pub header_rows: u32,
    /// Zero-based column index of each extracted bracket
    pub columns: Vec<(Bracket, u32)>,
}

impl Default for SheetLayout {
    fn default() -> Self {
        Self {
            reserved_sheet: RESERVED_SHEET.to_string(),
            header_rows: HEADER_ROWS,
            columns: vec![
                (Bracket::ThreeFour, 1),
                (Bracket::FiveSix, 3),
                (Bracket::SevenNine, 5),
                (Bracket::TenPlus, 7),
            ],
        }
    }
}

impl SheetLayout {
    pub fn column_for(&self, bracket: Bracket) -> Option<u32> {
        self.columns
            .iter()
            .find(|(b, _)| *b == bracket)
            .map(|(_, col)| *col)
    }
}

//==============================================================================
// Spawn Tables
//==============================================================================

/// Unit lists per bracket, serialized with keys in roll order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brackets {
    #[serde(rename = "2")]
    pub two: Vec<String>,
    #[serde(rename = "3-4")]
    pub three_four: Vec<String>,
    #[serde(rename = "5-6")]
    pub five_six: Vec<String>,
    #[serde(rename = "7-9")]
    pub seven_nine: Vec<String>,
    #[serde(rename = "10+")]
    pub ten_plus: Vec<String>,
}

impl Default for Brackets {
    fn default() -> Self {
        Self {
            two: vec![NO_SPAWN.to_string()],
            three_four: Vec::new(),
            five_six: Vec::new(),
            seven_nine: Vec::new(),
            ten_plus: Vec::new(),
        }
    }
}

impl Brackets {
    pub fn get(&self, bracket: Bracket) -> &[String] {
        match bracket {
            Bracket::Two => &self.two,
            Bracket::ThreeFour => &self.three_four,
            Bracket::FiveSix => &self.five_six,
            Bracket::SevenNine => &self.seven_nine,
            Bracket::TenPlus => &self.ten_plus,
        }
    }

    pub fn get_mut(&mut self, bracket: Bracket) -> &mut Vec<String> {
        match bracket {
            Bracket::Two => &mut self.two,
            Bracket::ThreeFour => &mut self.three_four,
            Bracket::FiveSix => &mut self.five_six,
            Bracket::SevenNine => &mut self.seven_nine,
            Bracket::TenPlus => &mut self.ten_plus,
        }
    }

    /// Units across the extracted brackets (bracket "2" excluded)
    pub fn extracted_unit_count(&self) -> usize {
        Bracket::EXTRACTED
            .iter()
            .map(|b| self.get(*b).len())
            .sum()
    }
}

/// One faction's spawn table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactionTable {
    pub faction: String,
    pub brackets: Brackets,
}

impl FactionTable {
    pub fn new(faction: impl Into<String>) -> Self {
        Self {
            faction: faction.into(),
            brackets: Brackets::default(),
        }
    }
}

/// Faction tables keyed by faction name, in workbook sheet order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpawnTables {
    factions: Vec<FactionTable>,
}

impl SpawnTables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a faction. A faction already present is replaced in place.
    pub fn add_faction(&mut self, table: FactionTable) {
        match self.factions.iter_mut().find(|t| t.faction == table.faction) {
            Some(existing) => *existing = table,
            None => self.factions.push(table),
        }
    }

    pub fn get(&self, faction: &str) -> Option<&FactionTable> {
        self.factions.iter().find(|t| t.faction == faction)
    }

    pub fn factions(&self) -> &[FactionTable] {
        &self.factions
    }

    pub fn faction_names(&self) -> Vec<&str> {
        self.factions.iter().map(|t| t.faction.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.factions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factions.is_empty()
    }
}

impl Serialize for SpawnTables {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.factions.len()))?;
        for table in &self.factions {
            map.serialize_entry(&table.faction, table)?;
        }
        map.end()
    }
}

/// Entries are kept as keyed; the key/`faction` agreement is checked by
/// `parser::parse_spawn_tables`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyedFactionTable {
    pub key: String,
    pub table: FactionTable,
}

/// Raw document shape, preserving key order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpawnTablesDocument {
    pub entries: Vec<KeyedFactionTable>,
}

impl<'de> Deserialize<'de> for SpawnTablesDocument {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DocumentVisitor;

        impl<'de> Visitor<'de> for DocumentVisitor {
            type Value = SpawnTablesDocument;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of faction name to spawn table")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, table)) = access.next_entry::<String, FactionTable>()? {
                    entries.push(KeyedFactionTable { key, table });
                }
                Ok(SpawnTablesDocument { entries })
            }
        }

        deserializer.deserialize_map(DocumentVisitor)
    }
}
