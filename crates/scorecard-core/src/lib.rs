//! Entity model for the scorecard engine: players, courses, games, and
//! scores. Pure data plus lookup helpers; all scoring logic lives in
//! `scorecard-engine`.

pub mod course;
pub mod game;
pub mod player;
pub mod score;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use crate::course::Course;
    use crate::game::{Game, GameMode, TeamAssignments, TeamFormat};
    use crate::player::Player;

    /// Create `n` test players named Player1..PlayerN with matching initials.
    pub fn make_players(n: usize) -> Vec<Player> {
        (1..=n)
            .map(|i| Player::new(format!("Player{i}")).with_initials(format!("P{i}")))
            .collect()
    }

    /// Create a par-3 test course with the given hole count.
    pub fn make_course(holes: u32) -> Course {
        Course::new("Test Course", holes)
    }

    /// Create a game on a fresh par-3 course.
    pub fn make_game(holes: u32, players: Vec<Player>, mode: GameMode) -> Game {
        Game::new(make_course(holes), players, mode)
    }

    /// Create a team match play game with players auto-split A/B in roster
    /// order.
    pub fn make_team_game(holes: u32, players: Vec<Player>, format: TeamFormat) -> Game {
        let assignments = TeamAssignments::auto_split(&players);
        Game::new(make_course(holes), players, GameMode::TeamMatchPlay)
            .with_teams(format, assignments)
    }

    /// Record a score for the player at the given roster index.
    pub fn record_hole(game: &mut Game, player_index: usize, hole: u32, strokes: u32) {
        let player_id = game.players[player_index].id;
        game.record_score(player_id, hole, strokes);
    }

    /// Record a full hole for every roster member at once.
    pub fn record_round(game: &mut Game, hole: u32, strokes: &[u32]) {
        let ids: Vec<_> = game.players.iter().map(|p| p.id).collect();
        for (id, &s) in ids.iter().zip(strokes) {
            game.record_score(*id, hole, s);
        }
    }
}
