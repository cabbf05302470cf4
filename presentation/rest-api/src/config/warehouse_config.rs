use std::env;
use std::fmt::Display;
use std::str::FromStr;

use business::domain::product::policies::{NameSuffix, ReservedOnShip};

/// Business policies that have more than one defensible behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WarehouseConfig {
    pub reserved_on_ship: ReservedOnShip,
    pub name_suffix: NameSuffix,
}

impl WarehouseConfig {
    /// Load warehouse policies from environment variables
    ///
    /// Environment variables:
    /// - WAREHOUSE_RESERVED_ON_SHIP: "subtract" or "floor_at_zero" (default: "subtract")
    /// - WAREHOUSE_NAME_SUFFIX: "parenthesized" or "bare" (default: "parenthesized")
    pub fn from_env() -> Self {
        Self {
            reserved_on_ship: parse_setting(
                "WAREHOUSE_RESERVED_ON_SHIP",
                env::var("WAREHOUSE_RESERVED_ON_SHIP").ok(),
            ),
            name_suffix: parse_setting(
                "WAREHOUSE_NAME_SUFFIX",
                env::var("WAREHOUSE_NAME_SUFFIX").ok(),
            ),
        }
    }
}

/// Unknown values fall back to the default so a typo cannot stop the service.
fn parse_setting<T>(name: &str, value: Option<String>) -> T
where
    T: FromStr<Err = String> + Default + Display,
{
    let Some(raw) = value else {
        return T::default();
    };

    raw.trim().to_lowercase().parse().unwrap_or_else(|err| {
        let fallback = T::default();
        tracing::warn!("{}: {}, falling back to {}", name, err, fallback);
        fallback
    })
}
