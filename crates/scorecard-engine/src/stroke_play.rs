//! Stroke play: total-stroke standings for a game.

use serde::{Deserialize, Serialize};

use scorecard_core::game::Game;
use scorecard_core::player::Player;

/// One player's line on the stroke play leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokePlayStanding {
    pub player: Player,
    pub total_strokes: u32,
    /// Strokes relative to the course's total par; `None` when the game has
    /// no course.
    pub to_par: Option<i64>,
}

/// Standings sorted by total strokes, lowest first. The sort is stable, so
/// equal totals keep roster order; the first entry is the leader.
pub fn stroke_play_result(game: &Game) -> Vec<StrokePlayStanding> {
    let total_par = game.course.as_ref().map(|c| i64::from(c.total_par()));
    let mut standings: Vec<StrokePlayStanding> = game
        .players
        .iter()
        .map(|p| {
            let total_strokes = game.total_strokes(p.id);
            StrokePlayStanding {
                player: p.clone(),
                total_strokes,
                to_par: total_par.map(|par| i64::from(total_strokes) - par),
            }
        })
        .collect();
    standings.sort_by_key(|s| s.total_strokes);
    standings
}

/// Render a to-par difference the way scorecards do: "Even", "+n", or "-n".
pub fn format_to_par(to_par: i64) -> String {
    if to_par == 0 {
        "Even".to_string()
    } else if to_par > 0 {
        format!("+{to_par}")
    } else {
        to_par.to_string()
    }
}
