//! The board: which unit stands on which cell.
//!
//! The `Board` is the single source of truth for unit locations. It keeps
//! two indexes in step:
//! - cell -> unit ID (at most one unit per cell)
//! - unit ID -> unit (each unit on exactly one cell)
//!
//! and writes the unit's own `position` in the same operation, so the board
//! and the unit never disagree about where the unit is.
//!
//! Both indexes are `im` persistent maps, so cloning a board is O(1). Hand
//! clones to read-only consumers (renderers, lookahead) as snapshots.

use im::HashMap as ImHashMap;
use tracing::debug;

use crate::abilities::AbilityTarget;
use crate::core::{BoardPosition, EngineError, Result, TeamColor, UnitId};
use crate::units::Unit;

/// Square grid of cells, each holding at most one unit.
///
/// ## Usage
///
/// ```
/// use rune_chess::board::Board;
/// use rune_chess::core::{BoardPosition, EngineError};
/// use rune_chess::units::Unit;
///
/// let mut board = Board::new(8);
/// let cell = BoardPosition::new(3, 3);
///
/// let id = board.place_unit(Unit::minion(), cell).unwrap();
/// assert_eq!(board.unit_at(cell).map(Unit::id), Some(id));
///
/// // Collisions are rejected, not displaced
/// let err = board.place_unit(Unit::minion(), cell).unwrap_err();
/// assert!(matches!(err, EngineError::PositionOccupied { .. }));
/// assert_eq!(board.len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct Board {
    size: u8,
    units: ImHashMap<UnitId, Unit>,
    cells: ImHashMap<BoardPosition, UnitId>,
}

impl Board {
    /// Create an empty board with `size` cells per side.
    #[must_use]
    pub fn new(size: u8) -> Self {
        assert!(size > 0, "Board must have at least 1 cell per side");
        Self {
            size,
            units: ImHashMap::new(),
            cells: ImHashMap::new(),
        }
    }

    /// Cells per side.
    #[must_use]
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Check if a position lies on this board.
    #[must_use]
    pub fn contains(&self, position: BoardPosition) -> bool {
        position.is_within(self.size)
    }

    /// Place a unit on an empty cell.
    ///
    /// Fails without changing anything if the cell is off the board
    /// (`PositionOutOfBounds`), already holds a unit (`PositionOccupied`),
    /// or the unit is already on the board (`UnitAlreadyPlaced`).
    pub fn place_unit(&mut self, mut unit: Unit, position: BoardPosition) -> Result<UnitId> {
        let id = unit.id();
        self.check_placement(id, position)?;

        unit.set_position(Some(position));
        debug!(unit = %id, name = unit.name(), team = %unit.team_color(), %position, "unit placed");
        self.cells.insert(position, id);
        self.units.insert(id, unit);
        Ok(id)
    }

    /// Check whether `place_unit` would accept unit `id` on `position`.
    ///
    /// Callers that want to keep a unit they cannot place check first;
    /// `place_unit` consumes its unit either way.
    pub fn check_placement(&self, id: UnitId, position: BoardPosition) -> Result<()> {
        if !self.contains(position) {
            return Err(EngineError::PositionOutOfBounds {
                position,
                board_size: self.size,
            });
        }
        if let Some(&occupant) = self.cells.get(&position) {
            return Err(EngineError::PositionOccupied { position, occupant });
        }
        if self.units.contains_key(&id) {
            return Err(EngineError::UnitAlreadyPlaced(id));
        }
        Ok(())
    }

    /// The cell an ability target points at.
    ///
    /// `None` targets have no cell. A unit target resolves to the cell of
    /// that unit and fails with `UnitNotFound` when it is not on this board.
    /// A location target fails with `PositionOutOfBounds` when it lies off
    /// the board.
    pub fn resolve_target(&self, target: &AbilityTarget) -> Result<Option<BoardPosition>> {
        match *target {
            AbilityTarget::None => Ok(None),
            AbilityTarget::Unit(id) => self
                .unit(id)
                .and_then(Unit::position)
                .map(Some)
                .ok_or(EngineError::UnitNotFound(id)),
            AbilityTarget::Location(position) if self.contains(position) => Ok(Some(position)),
            AbilityTarget::Location(position) => Err(EngineError::PositionOutOfBounds {
                position,
                board_size: self.size,
            }),
        }
    }

    /// Take a unit off the board, returning it with its position cleared.
    pub fn remove_unit(&mut self, id: UnitId) -> Result<Unit> {
        let mut unit = self.units.remove(&id).ok_or(EngineError::UnitNotFound(id))?;
        if let Some(position) = unit.position() {
            self.cells.remove(&position);
        }
        unit.set_position(None);
        debug!(unit = %id, name = unit.name(), "unit removed");
        Ok(unit)
    }

    /// The unit on a cell.
    #[must_use]
    pub fn unit_at(&self, position: BoardPosition) -> Option<&Unit> {
        self.cells.get(&position).and_then(|id| self.units.get(id))
    }

    /// A unit by ID.
    #[must_use]
    pub fn unit(&self, id: UnitId) -> Option<&Unit> {
        self.units.get(&id)
    }

    /// Check if a cell holds a unit.
    #[must_use]
    pub fn is_occupied(&self, position: BoardPosition) -> bool {
        self.cells.contains_key(&position)
    }

    /// Every unit on the board.
    ///
    /// Order is unspecified; sort if it matters.
    #[must_use]
    pub fn all_units(&self) -> Vec<&Unit> {
        self.units.values().collect()
    }

    /// Units of one team color.
    pub fn units_of(&self, color: TeamColor) -> impl Iterator<Item = &Unit> + '_ {
        self.units.values().filter(move |unit| unit.team_color() == color)
    }

    /// Number of units on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}
