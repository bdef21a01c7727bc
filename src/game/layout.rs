//! Standard opening layout.
//!
//! Each side gets its champion in the corner column and a full row of
//! minions in front of it:
//!
//! ```text
//! y = 0        red champion at x = 0
//! y = 1        red minions
//! y = size-2   blue minions
//! y = size-1   blue champion at x = 0
//! ```

use super::Game;
use crate::core::{BoardPosition, Result, TeamColor};
use crate::units::Unit;

impl Game {
    /// Place both champions and fill both minion rows.
    ///
    /// Needs a board of at least 4 cells per side; smaller boards fail with
    /// `PositionOccupied` when the rows overlap. On failure the board is
    /// left as it was before the call.
    pub fn place_standard_layout(&mut self, red_champion: Unit, blue_champion: Unit) -> Result<()> {
        let snapshot = self.board().clone();
        let placed = self.fill_standard_layout(red_champion, blue_champion);
        if placed.is_err() {
            self.restore_board(snapshot);
        }
        placed
    }

    fn fill_standard_layout(&mut self, red_champion: Unit, blue_champion: Unit) -> Result<()> {
        let last = self.board().size() - 1;

        self.place_unit(red_champion, BoardPosition::new(0, 0), TeamColor::Red)?;
        self.place_unit(blue_champion, BoardPosition::new(0, last), TeamColor::Blue)?;

        for x in 0..=last {
            self.place_unit(Unit::minion(), BoardPosition::new(x, 1), TeamColor::Red)?;
            self.place_unit(Unit::minion(), BoardPosition::new(x, last - 1), TeamColor::Blue)?;
        }
        Ok(())
    }
}
