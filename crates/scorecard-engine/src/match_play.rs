//! Match play: per-hole winners and running match status.
//!
//! Holes are won by the strict minimum stroke count among players who have a
//! recorded score for the hole. Players without a score are excluded, never
//! penalized.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use scorecard_core::game::Game;
use scorecard_core::player::{Player, PlayerId};

/// Hole count assumed when a game has lost its course reference. Only
/// reachable when `match_status` is called directly on such a game;
/// `match_play_result` degrades to a neutral result before this applies.
const FALLBACK_HOLES: u32 = 18;

/// Outcome of a single hole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoleResult {
    /// 1-based hole number.
    pub hole_number: u32,
    /// Winning player, or `None` for a tied or unplayed hole.
    pub winner: Option<PlayerId>,
    /// Recorded strokes per player. Players without a score are absent.
    /// Ordered map so serialized results are byte-stable between calls.
    pub scores: BTreeMap<PlayerId, u32>,
}

/// Full match play outcome for a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchPlayResult {
    pub hole_results: Vec<HoleResult>,
    /// Set only when the match is mathematically closed out ("wins D&R").
    /// Running statuses like "All Square" are deliberately not surfaced here.
    pub final_status: String,
    /// Player with strictly the most holes won, or `None` on a tie.
    pub winner: Option<PlayerId>,
}

impl MatchPlayResult {
    fn no_players() -> Self {
        Self {
            hole_results: Vec::new(),
            final_status: "No players".to_string(),
            winner: None,
        }
    }
}

/// Winner of a hole among the given players: the unique strict minimum
/// stroke count. Any tie at the minimum (two-way or wider) means no winner,
/// as does a hole nobody has scored on.
pub fn hole_winner<'a>(game: &Game, hole: u32, players: &'a [Player]) -> Option<&'a Player> {
    let entries: Vec<(&Player, u32)> = players
        .iter()
        .filter_map(|p| game.score_for(p.id, hole).map(|s| (p, s.strokes)))
        .collect();

    let min = entries.iter().map(|&(_, strokes)| strokes).min()?;
    let mut at_min = entries.iter().filter(|&&(_, strokes)| strokes == min);
    match (at_min.next(), at_min.next()) {
        (Some(&(winner, _)), None) => Some(winner),
        _ => None,
    }
}

/// Running status string for the holes decided so far.
///
/// With exactly two players this is golf match-play notation: "All Square",
/// "{name} is {n} up", or "{name} wins {d}&{r}" once the deficit exceeds the
/// holes remaining. Any other roster size falls back to a holes-won summary.
pub fn match_status(game: &Game, hole_results: &[HoleResult]) -> String {
    if game.players.len() != 2 {
        return multi_player_status(game, hole_results);
    }

    let p1 = &game.players[0];
    let p2 = &game.players[1];
    let p1_wins = wins_for(hole_results, p1.id);
    let p2_wins = wins_for(hole_results, p2.id);

    if p1_wins == p2_wins {
        return "All Square".to_string();
    }

    let holes = game
        .course
        .as_ref()
        .map(|c| c.number_of_holes)
        .unwrap_or(FALLBACK_HOLES);
    let holes_remaining = holes.saturating_sub(hole_results.len() as u32);
    let difference = p1_wins.abs_diff(p2_wins);
    let leader = if p1_wins > p2_wins { p1 } else { p2 };

    if difference > holes_remaining {
        // The trailing player cannot catch up even by winning out.
        format!("{} wins {difference}&{holes_remaining}", leader.name)
    } else {
        format!("{} is {difference} up", leader.name)
    }
}

/// Status for rosters that are not head-to-head: report the leading hole-win
/// count. Ties at the top go to the earliest roster entry, so the result is
/// deterministic for any score set.
fn multi_player_status(game: &Game, hole_results: &[HoleResult]) -> String {
    let counts: Vec<(&Player, u32)> = game
        .players
        .iter()
        .map(|p| (p, wins_for(hole_results, p.id)))
        .collect();
    let max = counts.iter().map(|&(_, wins)| wins).max().unwrap_or(0);
    if max == 0 {
        return "Match in Progress".to_string();
    }
    // Equal leaders resolve to the earliest roster entry, so the string is
    // deterministic for any score set.
    let leader = counts
        .iter()
        .find(|&&(_, wins)| wins == max)
        .map(|&(p, _)| p);
    match leader {
        Some(player) => format!("{} leads with {max} holes won", player.name),
        None => "Match in Progress".to_string(),
    }
}

/// Compute the complete match play outcome for a game: one `HoleResult` per
/// course hole, the closed-out status if any, and the overall winner.
///
/// A game without a course or without players yields the neutral
/// "No players" result rather than an error.
pub fn match_play_result(game: &Game) -> MatchPlayResult {
    let Some(course) = &game.course else {
        tracing::debug!(game_id = %game.id, "Match play requested without a course");
        return MatchPlayResult::no_players();
    };
    if game.players.is_empty() {
        tracing::debug!(game_id = %game.id, "Match play requested without players");
        return MatchPlayResult::no_players();
    }

    let mut hole_results = Vec::with_capacity(course.number_of_holes as usize);
    for hole in 1..=course.number_of_holes {
        let winner = hole_winner(game, hole, &game.players).map(|p| p.id);
        let scores = game
            .players
            .iter()
            .filter_map(|p| game.score_for(p.id, hole).map(|s| (p.id, s.strokes)))
            .collect();
        hole_results.push(HoleResult {
            hole_number: hole,
            winner,
            scores,
        });
    }

    let status = match_status(game, &hole_results);
    // Only a closed-out match surfaces as final_status; "All Square" and
    // "N up" are running states the caller reads via match_status.
    let final_status = if status.contains(" wins ") {
        status
    } else {
        String::new()
    };

    MatchPlayResult {
        winner: overall_winner(game, &hole_results),
        hole_results,
        final_status,
    }
}

/// Player with strictly the most holes won. A tie at the top (or no holes
/// won at all) means no winner.
fn overall_winner(game: &Game, hole_results: &[HoleResult]) -> Option<PlayerId> {
    let counts: Vec<(PlayerId, u32)> = game
        .players
        .iter()
        .map(|p| (p.id, wins_for(hole_results, p.id)))
        .collect();
    let max = counts.iter().map(|&(_, wins)| wins).max()?;
    if max == 0 {
        return None;
    }
    let mut at_max = counts.iter().filter(|&&(_, wins)| wins == max);
    match (at_max.next(), at_max.next()) {
        (Some(&(id, _)), None) => Some(id),
        _ => None,
    }
}

fn wins_for(hole_results: &[HoleResult], player_id: PlayerId) -> u32 {
    hole_results
        .iter()
        .filter(|r| r.winner == Some(player_id))
        .count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use scorecard_core::game::GameMode;
    use scorecard_core::test_helpers::{make_game, make_players, record_hole, record_round};

    fn two_player_game(holes: u32) -> Game {
        make_game(holes, make_players(2), GameMode::MatchPlay)
    }

    #[test]
    fn hole_winner_is_strict_minimum() {
        let mut game = two_player_game(9);
        record_round(&mut game, 1, &[2, 4]);
        let winner = hole_winner(&game, 1, &game.players).unwrap();
        assert_eq!(winner.id, game.players[0].id);
    }

    #[test]
    fn tied_hole_has_no_winner() {
        let mut game = two_player_game(9);
        record_round(&mut game, 1, &[3, 3]);
        assert!(hole_winner(&game, 1, &game.players).is_none());
    }

    #[test]
    fn three_way_tie_has_no_winner() {
        let mut game = make_game(9, make_players(3), GameMode::MatchPlay);
        record_round(&mut game, 1, &[2, 2, 2]);
        assert!(hole_winner(&game, 1, &game.players).is_none());
    }

    #[test]
    fn unscored_hole_has_no_winner() {
        let game = two_player_game(9);
        assert!(hole_winner(&game, 1, &game.players).is_none());
    }

    #[test]
    fn player_without_score_is_excluded_not_penalized() {
        let mut game = make_game(9, make_players(3), GameMode::MatchPlay);
        // Only players 1 and 2 have scores; player 3 sits the hole out.
        record_hole(&mut game, 0, 1, 5);
        record_hole(&mut game, 1, 1, 4);
        let winner = hole_winner(&game, 1, &game.players).unwrap();
        assert_eq!(winner.id, game.players[1].id);
    }

    #[test]
    fn zero_strokes_beats_any_positive_score() {
        let mut game = two_player_game(9);
        record_round(&mut game, 1, &[0, 1]);
        let winner = hole_winner(&game, 1, &game.players).unwrap();
        assert_eq!(winner.id, game.players[0].id);
    }

    #[test]
    fn status_all_square_on_equal_wins() {
        let mut game = two_player_game(9);
        record_round(&mut game, 1, &[2, 4]);
        record_round(&mut game, 2, &[4, 2]);
        let result = match_play_result(&game);
        assert_eq!(match_status(&game, &result.hole_results), "All Square");
    }

    #[test]
    fn status_two_up_mid_match() {
        // Wins 3-1 after 5 holes of 9: difference 2 <= 4 remaining.
        let mut game = two_player_game(9);
        record_round(&mut game, 1, &[2, 4]);
        record_round(&mut game, 2, &[2, 4]);
        record_round(&mut game, 3, &[2, 4]);
        record_round(&mut game, 4, &[4, 2]);
        record_round(&mut game, 5, &[3, 3]);
        let results: Vec<HoleResult> = match_play_result(&game)
            .hole_results
            .into_iter()
            .take(5)
            .collect();
        let status = match_status(&game, &results);
        assert_eq!(status, format!("{} is 2 up", game.players[0].name));
    }

    #[test]
    fn status_closed_out_four_and_two() {
        // After 7 holes of 9: 5 wins to 1 with one tie. Deficit 4 > 2 left.
        let mut game = two_player_game(9);
        for hole in 1..=5 {
            record_round(&mut game, hole, &[2, 4]);
        }
        record_round(&mut game, 6, &[4, 2]);
        record_round(&mut game, 7, &[3, 3]);
        let results: Vec<HoleResult> = match_play_result(&game)
            .hole_results
            .into_iter()
            .take(7)
            .collect();
        let status = match_status(&game, &results);
        assert_eq!(status, format!("{} wins 4&2", game.players[0].name));
    }

    #[test]
    fn trailing_player_two_can_lead() {
        let mut game = two_player_game(9);
        record_round(&mut game, 1, &[4, 2]);
        let result = match_play_result(&game);
        let status = match_status(&game, &result.hole_results);
        assert_eq!(status, format!("{} is 1 up", game.players[1].name));
    }

    #[test]
    fn final_status_only_set_when_closed_out() {
        let mut game = two_player_game(9);
        record_round(&mut game, 1, &[2, 4]);
        let result = match_play_result(&game);
        // One-up with eight to play is a running status, not a final one.
        assert_eq!(result.final_status, "");

        for hole in 2..=8 {
            record_round(&mut game, hole, &[2, 4]);
        }
        let result = match_play_result(&game);
        assert_eq!(
            result.final_status,
            format!("{} wins 8&1", game.players[0].name)
        );
    }

    #[test]
    fn all_square_never_surfaces_as_final_status() {
        let mut game = two_player_game(2);
        record_round(&mut game, 1, &[2, 4]);
        record_round(&mut game, 2, &[4, 2]);
        let result = match_play_result(&game);
        assert_eq!(result.final_status, "");
        assert_eq!(result.winner, None);
    }

    #[test]
    fn multi_player_status_reports_leader() {
        let mut game = make_game(9, make_players(3), GameMode::MatchPlay);
        record_round(&mut game, 1, &[2, 4, 5]);
        record_round(&mut game, 2, &[2, 4, 5]);
        record_round(&mut game, 3, &[5, 2, 4]);
        let result = match_play_result(&game);
        let status = match_status(&game, &result.hole_results);
        assert_eq!(
            status,
            format!("{} leads with 2 holes won", game.players[0].name)
        );
    }

    #[test]
    fn multi_player_leader_tie_breaks_by_roster_order() {
        let mut game = make_game(9, make_players(3), GameMode::MatchPlay);
        // Players 2 and 3 each win one hole; earliest roster entry leads.
        record_round(&mut game, 1, &[5, 2, 4]);
        record_round(&mut game, 2, &[5, 4, 2]);
        let result = match_play_result(&game);
        let status = match_status(&game, &result.hole_results);
        assert_eq!(
            status,
            format!("{} leads with 1 holes won", game.players[1].name)
        );
    }

    #[test]
    fn multi_player_status_in_progress_without_wins() {
        let game = make_game(9, make_players(3), GameMode::MatchPlay);
        let result = match_play_result(&game);
        assert_eq!(
            match_status(&game, &result.hole_results),
            "Match in Progress"
        );
    }

    #[test]
    fn overall_winner_is_most_holes_won() {
        let mut game = two_player_game(3);
        record_round(&mut game, 1, &[2, 4]);
        record_round(&mut game, 2, &[4, 2]);
        record_round(&mut game, 3, &[2, 4]);
        let result = match_play_result(&game);
        assert_eq!(result.winner, Some(game.players[0].id));
    }

    #[test]
    fn no_winner_when_nobody_won_a_hole() {
        let mut game = two_player_game(3);
        record_round(&mut game, 1, &[3, 3]);
        let result = match_play_result(&game);
        assert_eq!(result.winner, None);
    }

    #[test]
    fn result_covers_every_course_hole() {
        let mut game = two_player_game(9);
        for hole in 1..=9 {
            record_round(&mut game, hole, &[3, 4]);
        }
        let result = match_play_result(&game);
        assert_eq!(result.hole_results.len(), 9);
        for (i, r) in result.hole_results.iter().enumerate() {
            assert_eq!(r.hole_number, i as u32 + 1);
            assert_eq!(r.scores.len(), 2);
        }
    }

    #[test]
    fn missing_course_degrades_to_no_players() {
        let mut game = two_player_game(9);
        game.course = None;
        let result = match_play_result(&game);
        assert!(result.hole_results.is_empty());
        assert_eq!(result.final_status, "No players");
        assert_eq!(result.winner, None);
    }

    #[test]
    fn empty_roster_degrades_to_no_players() {
        let mut game = two_player_game(9);
        game.players.clear();
        let result = match_play_result(&game);
        assert_eq!(result.final_status, "No players");
    }

    #[test]
    fn repeated_calls_are_identical() {
        let mut game = two_player_game(9);
        record_round(&mut game, 1, &[2, 4]);
        record_round(&mut game, 2, &[3, 3]);
        assert_eq!(match_play_result(&game), match_play_result(&game));
    }
}
