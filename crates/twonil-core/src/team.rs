//! Core data model for extracted teams and squads

use serde::{Deserialize, Serialize};

/// Which of the two extracted datasets a value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatasetId {
    /// Dataset A: teams from the fixed-stride slot table, 21-player squads
    A,
    /// Dataset B: teams from the packed Pascal-string region, 16-player squads
    B,
}

impl std::fmt::Display for DatasetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatasetId::A => write!(f, "A"),
            DatasetId::B => write!(f, "B"),
        }
    }
}

/// A team extracted by one of the scanners
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamRecord {
    /// Position in the source table; unique within its dataset
    pub index: usize,
    /// Decoded team name; empty when the source record was corrupt
    pub name: String,
}

impl TeamRecord {
    /// Create a new team record
    pub fn new(index: usize, name: impl Into<String>) -> Self {
        Self {
            index,
            name: name.into(),
        }
    }
}

/// The ordered player list belonging to one team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Squad {
    /// Player names in squad order
    pub players: Vec<String>,
    /// True when the token stream ran out before the squad was full;
    /// only produced in best-effort mode
    pub partial: bool,
}

impl Squad {
    /// A complete squad
    pub fn full(players: Vec<String>) -> Self {
        Self {
            players,
            partial: false,
        }
    }

    /// A squad cut short by the end of the token stream
    pub fn truncated(players: Vec<String>) -> Self {
        Self {
            players,
            partial: true,
        }
    }

    /// Number of players present
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Check if no players are present
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Check if a player is in the squad
    pub fn contains(&self, player: &str) -> bool {
        self.players.iter().any(|p| p == player)
    }

    /// Squad slot of a player, if present
    pub fn position_of(&self, player: &str) -> Option<usize> {
        self.players.iter().position(|p| p == player)
    }
}

/// One output row: a team and its squad
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetRow {
    pub team: TeamRecord,
    pub squad: Squad,
}

/// An ordered table of teams with their squads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Dataset identity
    pub id: DatasetId,
    /// Squad size contract: every full squad has exactly this many players
    pub squad_size: usize,
    /// Rows in team order
    pub rows: Vec<DatasetRow>,
}

impl Dataset {
    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Total column count: team_index, team_name, p1..pN
    pub fn column_count(&self) -> usize {
        2 + self.squad_size
    }

    /// Header row: `team_index, team_name, p1..pN`
    pub fn header(&self) -> Vec<String> {
        let mut header = vec!["team_index".to_string(), "team_name".to_string()];
        for i in 0..self.squad_size {
            header.push(format!("p{}", i + 1));
        }
        header
    }

    /// Project a row to its cell values, padded to the full column count.
    ///
    /// Partial squads (best-effort mode only) pad with empty cells so the
    /// column contract holds; the row stays flagged in the data model.
    pub fn row_values(&self, row: &DatasetRow) -> Vec<String> {
        let mut values = Vec::with_capacity(self.column_count());
        values.push(row.team.index.to_string());
        values.push(row.team.name.clone());
        values.extend(row.squad.players.iter().cloned());
        while values.len() < self.column_count() {
            values.push(String::new());
        }
        values
    }

    /// Find a row by exact team name
    pub fn find_team(&self, name: &str) -> Option<&DatasetRow> {
        self.rows.iter().find(|r| r.team.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_dataset() -> Dataset {
        Dataset {
            id: DatasetId::A,
            squad_size: 3,
            rows: vec![DatasetRow {
                team: TeamRecord::new(4, "Aberdeen"),
                squad: Squad::full(vec![
                    "Esson".to_string(),
                    "Anderson".to_string(),
                    "Diamond".to_string(),
                ]),
            }],
        }
    }

    #[test]
    fn test_header_shape() {
        let ds = sample_dataset();
        assert_eq!(ds.header(), vec!["team_index", "team_name", "p1", "p2", "p3"]);
        assert_eq!(ds.column_count(), 5);
    }

    #[test]
    fn test_row_values() {
        let ds = sample_dataset();
        assert_eq!(
            ds.row_values(&ds.rows[0]),
            vec!["4", "Aberdeen", "Esson", "Anderson", "Diamond"]
        );
    }

    #[test]
    fn test_partial_row_padded_to_column_count() {
        let mut ds = sample_dataset();
        ds.rows[0].squad = Squad::truncated(vec!["Esson".to_string()]);
        let values = ds.row_values(&ds.rows[0]);
        assert_eq!(values.len(), ds.column_count());
        assert_eq!(values[2], "Esson");
        assert_eq!(values[3], "");
        assert_eq!(values[4], "");
    }

    #[test]
    fn test_squad_lookup() {
        let ds = sample_dataset();
        let squad = &ds.rows[0].squad;
        assert!(squad.contains("Diamond"));
        assert_eq!(squad.position_of("Anderson"), Some(1));
        assert_eq!(squad.position_of("McNaughton"), None);
    }

    #[test]
    fn test_find_team() {
        let ds = sample_dataset();
        assert!(ds.find_team("Aberdeen").is_some());
        assert!(ds.find_team("Celtic").is_none());
    }
}
