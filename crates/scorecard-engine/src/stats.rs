//! Lifetime statistics: folds a player's score history into per-course and
//! overall numbers. Read-only; the caller supplies the games to scan.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use scorecard_core::course::{Course, CourseId};
use scorecard_core::game::Game;
use scorecard_core::player::PlayerId;

/// A player's record on one course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseStats {
    pub course_id: CourseId,
    pub course_name: String,
    /// Number of distinct games with at least one recorded score here.
    pub games_played: u32,
    /// Mean of the per-game stroke totals.
    pub average_score: f64,
    /// Lowest per-game total (golf convention: lower is better).
    pub best_score: u32,
    /// Highest per-game total.
    pub worst_score: u32,
    /// Mean strokes per hole across all games, keyed by 1-based hole
    /// number. Holes the player never recorded are absent, not zero.
    /// Ordered map so serialized results are byte-stable between calls.
    pub hole_averages: BTreeMap<u32, f64>,
}

/// A player's lifetime record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub player_id: PlayerId,
    pub total_games_played: u32,
    /// Average per-game stroke total across every course (games are the
    /// denominator, not holes). 0.0 with no games on record.
    pub overall_average_score: f64,
    /// One entry per course played, most-played course first.
    pub course_stats: Vec<CourseStats>,
}

/// Statistics for one player on one course, scanning the supplied games.
/// Returns `None` when the player has no recorded score on the course.
pub fn course_stats(player_id: PlayerId, course: &Course, games: &[Game]) -> Option<CourseStats> {
    let mut game_totals: Vec<u32> = Vec::new();
    let mut hole_sums: BTreeMap<u32, (u32, u32)> = BTreeMap::new();

    for game in games {
        if game.course.as_ref().map(|c| c.id) != Some(course.id) {
            continue;
        }
        let scores: Vec<_> = game
            .scores
            .iter()
            .filter(|s| s.player_id == player_id)
            .collect();
        if scores.is_empty() {
            continue;
        }
        game_totals.push(scores.iter().map(|s| s.strokes).sum());
        for score in scores {
            let entry = hole_sums.entry(score.hole_number).or_insert((0, 0));
            entry.0 += score.strokes;
            entry.1 += 1;
        }
    }

    if game_totals.is_empty() {
        return None;
    }

    let games_played = game_totals.len() as u32;
    let average_score = f64::from(game_totals.iter().sum::<u32>()) / f64::from(games_played);
    let best_score = game_totals.iter().copied().min().unwrap_or(0);
    let worst_score = game_totals.iter().copied().max().unwrap_or(0);
    let hole_averages = hole_sums
        .into_iter()
        .map(|(hole, (total, count))| (hole, f64::from(total) / f64::from(count)))
        .collect();

    Some(CourseStats {
        course_id: course.id,
        course_name: course.name.clone(),
        games_played,
        average_score,
        best_score,
        worst_score,
        hole_averages,
    })
}

/// Lifetime statistics for a player across the supplied games.
///
/// A game counts once it holds at least one of the player's scores; games
/// without a course still count toward the totals but produce no course
/// entry.
pub fn player_stats(player_id: PlayerId, games: &[Game]) -> PlayerStats {
    let mut total_games_played = 0u32;
    let mut total_strokes = 0u32;
    let mut courses_seen: Vec<&Course> = Vec::new();

    for game in games {
        let strokes: u32 = game
            .scores
            .iter()
            .filter(|s| s.player_id == player_id)
            .map(|s| s.strokes)
            .sum();
        let played = game.scores.iter().any(|s| s.player_id == player_id);
        if !played {
            continue;
        }
        total_games_played += 1;
        total_strokes += strokes;
        if let Some(course) = &game.course
            && !courses_seen.iter().any(|c| c.id == course.id)
        {
            courses_seen.push(course);
        }
    }

    let overall_average_score = if total_games_played > 0 {
        f64::from(total_strokes) / f64::from(total_games_played)
    } else {
        0.0
    };

    let mut course_stats: Vec<CourseStats> = courses_seen
        .into_iter()
        .filter_map(|course| self::course_stats(player_id, course, games))
        .collect();
    // Stable sort: equally played courses keep first-seen order.
    course_stats.sort_by(|a, b| b.games_played.cmp(&a.games_played));

    PlayerStats {
        player_id,
        total_games_played,
        overall_average_score,
        course_stats,
    }
}
