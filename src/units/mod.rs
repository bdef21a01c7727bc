//! Units on the board: champions, minions, and the champion registry.

mod champion;
mod registry;
mod unit;

pub use champion::{Champion, ChampionBuilder};
pub use registry::{ChampionFactory, ChampionRegistry};
pub use unit::{Unit, UnitKind, UnitType};
