use serde::{Deserialize, Serialize};

/// What shipping does to the reserved quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservedOnShip {
    /// Subtract the shipped amount as-is; reserved may go below zero when
    /// more is shipped than was reserved.
    #[default]
    Subtract,
    /// Subtract, but never below zero.
    FloorAtZero,
}

impl std::fmt::Display for ReservedOnShip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReservedOnShip::Subtract => write!(f, "subtract"),
            ReservedOnShip::FloorAtZero => write!(f, "floor_at_zero"),
        }
    }
}

impl std::str::FromStr for ReservedOnShip {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "subtract" => Ok(ReservedOnShip::Subtract),
            "floor_at_zero" => Ok(ReservedOnShip::FloorAtZero),
            _ => Err(format!("Invalid reserved-on-ship policy: {}", s)),
        }
    }
}

/// How a counter is attached to a colliding product name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameSuffix {
    /// `Widget(1)`, the way file managers disambiguate copies.
    #[default]
    Parenthesized,
    /// `Widget1`.
    Bare,
}

impl NameSuffix {
    pub fn apply(&self, name: &str, counter: u64) -> String {
        match self {
            NameSuffix::Parenthesized => format!("{}({})", name, counter),
            NameSuffix::Bare => format!("{}{}", name, counter),
        }
    }
}

impl std::fmt::Display for NameSuffix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NameSuffix::Parenthesized => write!(f, "parenthesized"),
            NameSuffix::Bare => write!(f, "bare"),
        }
    }
}

impl std::str::FromStr for NameSuffix {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "parenthesized" => Ok(NameSuffix::Parenthesized),
            "bare" => Ok(NameSuffix::Bare),
            _ => Err(format!("Invalid name suffix style: {}", s)),
        }
    }
}
