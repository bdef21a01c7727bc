//! The game: one board, three teams, and whose turn it is.

use tracing::debug;

use crate::abilities::{AbilityIdentifier, AbilityTarget, CastReport};
use crate::board::Board;
use crate::core::{
    BoardPosition, EngineError, GameConfig, GameRng, Result, Team, TeamColor, UnitId,
};
use crate::units::Unit;

/// Composition root over the board and teams.
///
/// Each `Game` owns its board outright; games share nothing.
///
/// ## Example
///
/// ```
/// use rune_chess::core::{BoardPosition, GameConfig, TeamColor};
/// use rune_chess::game::Game;
/// use rune_chess::units::Unit;
///
/// let mut game = Game::new(GameConfig::new(42));
/// let id = game
///     .place_unit(Unit::minion(), BoardPosition::new(0, 1), TeamColor::Red)
///     .unwrap();
///
/// assert_eq!(game.board().unit(id).unwrap().team_color(), TeamColor::Red);
/// assert!(game.turn().is_none());
///
/// let first = game.begin();
/// assert!(first.is_playable());
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    board: Board,
    red: Team,
    blue: Team,
    neutral: Team,
    turn: Option<TeamColor>,
    rng: GameRng,
}

impl Game {
    /// Create a game with an empty board.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            board: Board::new(config.board_size),
            red: Team::new(TeamColor::Red),
            blue: Team::new(TeamColor::Blue),
            neutral: Team::new(TeamColor::Neutral),
            turn: None,
            rng: GameRng::new(config.seed),
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Read-only view of the board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Whose turn it is. `None` until [`begin`](Self::begin).
    #[must_use]
    pub fn turn(&self) -> Option<TeamColor> {
        self.turn
    }

    /// The team with a color.
    #[must_use]
    pub fn team(&self, color: TeamColor) -> &Team {
        match color {
            TeamColor::Red => &self.red,
            TeamColor::Blue => &self.blue,
            TeamColor::Neutral => &self.neutral,
        }
    }

    /// The team opposing `team`. Fails for Neutral.
    pub fn opposing_team(&self, team: &Team) -> Result<&Team> {
        Ok(self.team(team.opposing_color()?))
    }

    /// Check whether `unit` could be placed on `position` right now.
    ///
    /// Nothing changes either way. Use this before
    /// [`place_unit`](Self::place_unit) to keep hold of a unit the board
    /// would refuse.
    pub fn check_placement(&self, unit: &Unit, position: BoardPosition) -> Result<()> {
        self.board.check_placement(unit.id(), position)
    }

    /// Assign a unit to a team and place it, as one step.
    ///
    /// On failure the board is unchanged and the unit is dropped; see
    /// [`check_placement`](Self::check_placement).
    pub fn place_unit(
        &mut self,
        mut unit: Unit,
        position: BoardPosition,
        color: TeamColor,
    ) -> Result<UnitId> {
        unit.set_team_color(color);
        self.board.place_unit(unit, position)
    }

    pub(super) fn restore_board(&mut self, snapshot: Board) {
        self.board = snapshot;
    }

    /// Take a unit off the board.
    pub fn remove_unit(&mut self, id: UnitId) -> Result<Unit> {
        self.board.remove_unit(id)
    }

    /// Pick the starting team (Red or Blue) and return it.
    ///
    /// The choice is deterministic for a given seed.
    pub fn begin(&mut self) -> TeamColor {
        let first = if self.rng.gen_bool(0.5) {
            TeamColor::Red
        } else {
            TeamColor::Blue
        };
        debug!(seed = self.rng.seed(), first = %first, "game begins");
        self.turn = Some(first);
        first
    }

    /// Cast an ability of a champion on the board.
    pub fn cast_ability(
        &self,
        caster: UnitId,
        which: AbilityIdentifier,
        target: AbilityTarget,
    ) -> Result<CastReport> {
        let unit = self
            .board
            .unit(caster)
            .ok_or(EngineError::UnitNotFound(caster))?;
        unit.cast_ability(which, target, &self.board)
    }
}
