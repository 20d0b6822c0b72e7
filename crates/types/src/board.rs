use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Position {
    #[default]
    North,
    East,
    South,
    West,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Partnership {
    NS,
    EW,
}

impl fmt::Display for Partnership {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Partnership::NS => write!(f, "NS"),
            Partnership::EW => write!(f, "EW"),
        }
    }
}

impl Partnership {
    pub fn contains(self, pos: Position) -> bool {
        match self {
            Partnership::NS => pos == Position::North || pos == Position::South,
            Partnership::EW => pos == Position::East || pos == Position::West,
        }
    }

    pub fn idx(self) -> usize {
        match self {
            Partnership::NS => 0,
            Partnership::EW => 1,
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            Partnership::NS => Partnership::EW,
            Partnership::EW => Partnership::NS,
        }
    }
}

impl Position {
    pub const ALL: [Position; 4] = [
        Position::North,
        Position::East,
        Position::South,
        Position::West,
    ];

    pub fn partnership(self) -> Partnership {
        match self {
            Position::North | Position::South => Partnership::NS,
            Position::East | Position::West => Partnership::EW,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Position::North => Position::East,
            Position::East => Position::South,
            Position::South => Position::West,
            Position::West => Position::North,
        }
    }

    pub fn idx(self) -> usize {
        match self {
            Position::North => 0,
            Position::East => 1,
            Position::South => 2,
            Position::West => 3,
        }
    }

    pub fn partner(self) -> Self {
        match self {
            Position::North => Position::South,
            Position::South => Position::North,
            Position::East => Position::West,
            Position::West => Position::East,
        }
    }

    /// Left-hand opponent (next in clockwise bidding order).
    pub fn lho(self) -> Self {
        self.next()
    }

    /// Right-hand opponent (previous in clockwise bidding order).
    pub fn rho(self) -> Self {
        self.partner().next()
    }

    pub fn to_char(self) -> char {
        match self {
            Position::North => 'N',
            Position::East => 'E',
            Position::South => 'S',
            Position::West => 'W',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'N' => Some(Position::North),
            'E' => Some(Position::East),
            'S' => Some(Position::South),
            'W' => Some(Position::West),
            _ => None,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Vulnerability {
    #[default]
    None,
    NS,
    EW,
    Both,
}

impl Vulnerability {
    pub fn is_vulnerable(self, pos: Position) -> bool {
        match self {
            Vulnerability::None => false,
            Vulnerability::NS => pos == Position::North || pos == Position::South,
            Vulnerability::EW => pos == Position::East || pos == Position::West,
            Vulnerability::Both => true,
        }
    }

    /// Vulnerability of the table given each side's status relative to `our_side`.
    pub fn from_sides(our_side: Partnership, vulnerable_we: bool, vulnerable_they: bool) -> Self {
        let (ns, ew) = match our_side {
            Partnership::NS => (vulnerable_we, vulnerable_they),
            Partnership::EW => (vulnerable_they, vulnerable_we),
        };
        match (ns, ew) {
            (false, false) => Vulnerability::None,
            (true, false) => Vulnerability::NS,
            (false, true) => Vulnerability::EW,
            (true, true) => Vulnerability::Both,
        }
    }

    pub fn is_side_vulnerable(self, side: Partnership) -> bool {
        match side {
            Partnership::NS => self.is_vulnerable(Position::North),
            Partnership::EW => self.is_vulnerable(Position::East),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_next() {
        assert_eq!(Position::North.next(), Position::East);
        assert_eq!(Position::West.next(), Position::North);
    }

    #[test]
    fn test_vulnerability() {
        assert!(Vulnerability::NS.is_vulnerable(Position::North));
        assert!(!Vulnerability::NS.is_vulnerable(Position::East));
        assert!(Vulnerability::Both.is_vulnerable(Position::West));
        assert!(!Vulnerability::None.is_vulnerable(Position::South));
    }

    #[test]
    fn test_vulnerability_from_sides() {
        assert_eq!(
            Vulnerability::from_sides(Partnership::NS, true, false),
            Vulnerability::NS
        );
        assert_eq!(
            Vulnerability::from_sides(Partnership::EW, true, false),
            Vulnerability::EW
        );
        assert_eq!(
            Vulnerability::from_sides(Partnership::EW, true, true),
            Vulnerability::Both
        );
        assert!(Vulnerability::EW.is_side_vulnerable(Partnership::EW));
        assert!(!Vulnerability::EW.is_side_vulnerable(Partnership::NS));
    }

    #[test]
    fn test_rotation() {
        assert_eq!(Position::South.lho(), Position::West);
        assert_eq!(Position::South.rho(), Position::East);
        assert_eq!(Position::East.partner(), Position::West);
    }

    #[test]
    fn test_position_char() {
        assert_eq!(Position::North.to_char(), 'N');
        assert_eq!(Position::from_char('W'), Some(Position::West));
        assert_eq!(Position::from_char('X'), None);
    }

    #[test]
    fn test_partnership() {
        assert_eq!(Position::North.partnership(), Partnership::NS);
        assert_eq!(Position::South.partnership(), Partnership::NS);
        assert_eq!(Position::East.partnership(), Partnership::EW);
        assert_eq!(Position::West.partnership(), Partnership::EW);

        assert!(Partnership::NS.contains(Position::North));
        assert!(Partnership::NS.contains(Position::South));
        assert!(!Partnership::NS.contains(Position::East));

        assert_eq!(Partnership::NS.idx(), 0);
        assert_eq!(Partnership::EW.idx(), 1);
    }
}
