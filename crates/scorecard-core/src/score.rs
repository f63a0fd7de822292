use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::game::GameId;
use crate::player::PlayerId;

/// Unique identifier for a single score entry.
pub type ScoreId = Uuid;

/// One player's stroke count for one hole of one game.
///
/// A recorded score of 0 strokes is a real, countable score. "Not entered"
/// is represented only by the absence of a `Score` — never by a sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub id: ScoreId,
    /// 1-based hole number.
    pub hole_number: u32,
    pub strokes: u32,
    pub game_id: GameId,
    pub player_id: PlayerId,
}

impl Score {
    pub fn new(hole_number: u32, strokes: u32, game_id: GameId, player_id: PlayerId) -> Self {
        Self {
            id: Uuid::new_v4(),
            hole_number,
            strokes,
            game_id,
            player_id,
        }
    }
}

/// How a stroke count compares to par. Display-side only; the scoring
/// engines never consult par.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreClass {
    UnderPar,
    AtPar,
    OverPar,
}

impl ScoreClass {
    pub fn of(strokes: u32, par: u32) -> Self {
        if strokes < par {
            Self::UnderPar
        } else if strokes > par {
            Self::OverPar
        } else {
            Self::AtPar
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_class_boundaries() {
        assert_eq!(ScoreClass::of(2, 3), ScoreClass::UnderPar);
        assert_eq!(ScoreClass::of(3, 3), ScoreClass::AtPar);
        assert_eq!(ScoreClass::of(4, 3), ScoreClass::OverPar);
    }

    #[test]
    fn zero_strokes_is_under_any_par() {
        assert_eq!(ScoreClass::of(0, 2), ScoreClass::UnderPar);
    }
}
