pub mod error;
pub mod health;
pub mod tags;
pub mod warehouse;
