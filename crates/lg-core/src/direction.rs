use serde::{Deserialize, Serialize};

/// One of the twelve exit symbols a room may offer.
///
/// Eight compass points plus the vertical and threshold pairs. The token
/// forms (`W`, `NW`, `IN`, ...) are what the player types and what room
/// descriptions display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// West.
    West,
    /// Northwest.
    Northwest,
    /// North.
    North,
    /// Northeast.
    Northeast,
    /// East.
    East,
    /// Southeast.
    Southeast,
    /// South.
    South,
    /// Southwest.
    Southwest,
    /// Inward, through a threshold.
    In,
    /// Outward, through a threshold.
    Out,
    /// Up a level.
    Up,
    /// Down a level.
    Down,
}

impl Direction {
    /// Parse a direction from a single token, case-insensitively.
    pub fn parse(token: &str) -> Option<Self> {
        match token.to_ascii_uppercase().as_str() {
            "W" => Some(Self::West),
            "NW" => Some(Self::Northwest),
            "N" => Some(Self::North),
            "NE" => Some(Self::Northeast),
            "E" => Some(Self::East),
            "SE" => Some(Self::Southeast),
            "S" => Some(Self::South),
            "SW" => Some(Self::Southwest),
            "IN" => Some(Self::In),
            "OUT" => Some(Self::Out),
            "UP" => Some(Self::Up),
            "DOWN" => Some(Self::Down),
            _ => None,
        }
    }

    /// The display token for this direction.
    pub fn token(&self) -> &'static str {
        match self {
            Self::West => "W",
            Self::Northwest => "NW",
            Self::North => "N",
            Self::Northeast => "NE",
            Self::East => "E",
            Self::Southeast => "SE",
            Self::South => "S",
            Self::Southwest => "SW",
            Self::In => "IN",
            Self::Out => "OUT",
            Self::Up => "UP",
            Self::Down => "DOWN",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}
