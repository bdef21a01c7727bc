//! Champion registry for building champions by name.
//!
//! Concrete champion kits live outside the engine. They register a factory
//! here and bootstrap code builds fresh champions from it.

use rustc_hash::FxHashMap;

use super::Unit;
use crate::core::{EngineError, Result};

/// Builds a new champion unit. Each call must return a fresh unit.
pub type ChampionFactory = fn() -> Result<Unit>;

/// Registry of champion factories keyed by champion name.
///
/// ## Example
///
/// ```
/// use rune_chess::core::Result;
/// use rune_chess::units::{ChampionRegistry, Unit};
///
/// fn plain() -> Result<Unit> {
///     Unit::champion("Plain").build()
/// }
///
/// let mut registry = ChampionRegistry::new();
/// registry.register("Plain", plain);
///
/// let a = registry.create("Plain").unwrap();
/// let b = registry.create("Plain").unwrap();
/// assert_ne!(a.id(), b.id());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ChampionRegistry {
    factories: FxHashMap<String, ChampionFactory>,
}

impl ChampionRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a champion factory.
    ///
    /// Panics if a champion with the same name is already registered.
    pub fn register(&mut self, name: impl Into<String>, factory: ChampionFactory) {
        let name = name.into();
        if self.factories.contains_key(&name) {
            panic!("Champion {name:?} already registered");
        }
        self.factories.insert(name, factory);
    }

    /// Build a fresh champion.
    pub fn create(&self, name: &str) -> Result<Unit> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| EngineError::UnknownChampion(name.to_string()))?;
        factory()
    }

    /// Check if a champion name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}
