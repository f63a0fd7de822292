//! Team match play: two fixed teams, per-hole team scores under a
//! selectable format, and team-level match status.

use serde::{Deserialize, Serialize};

use scorecard_core::game::{Game, Team, TeamFormat};
use scorecard_core::player::Player;

/// A team's score for one hole.
///
/// `NoScore` replaces the traditional unbeatable-sentinel convention: the
/// variant order makes any recorded stroke count compare lower than (beat)
/// `NoScore`, and two `NoScore` sides compare equal (tie).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TeamHoleScore {
    Strokes(u32),
    NoScore,
}

impl TeamHoleScore {
    /// Numeric value for scorecard tables that expect the classic 999
    /// no-score sentinel.
    pub const fn sentinel_value(self) -> u32 {
        match self {
            Self::Strokes(n) => n,
            Self::NoScore => 999,
        }
    }

    /// Render as a cell: the stroke count, or "-" when no score exists.
    pub fn as_display(self) -> String {
        match self {
            Self::Strokes(n) => n.to_string(),
            Self::NoScore => "-".to_string(),
        }
    }
}

/// Outcome of one hole at the team level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamHoleResult {
    /// 1-based hole number.
    pub hole_number: u32,
    /// Winning team, or `None` for a tie (including both sides unscored).
    pub winning_team: Option<Team>,
    pub team_a_score: TeamHoleScore,
    pub team_b_score: TeamHoleScore,
}

/// Full team match play outcome for a game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMatchPlayResult {
    pub hole_results: Vec<TeamHoleResult>,
    /// Running status string: "All Square" or "Team {X} is {n} up". Team
    /// match status never uses the closed-out "wins D&R" phrasing.
    pub final_status: String,
    /// Team with strictly more holes won, or `None` on a tie.
    pub winning_team: Option<Team>,
    pub team_a_players: Vec<Player>,
    pub team_b_players: Vec<Player>,
}

impl TeamMatchPlayResult {
    fn invalid_setup() -> Self {
        Self {
            hole_results: Vec::new(),
            final_status: "Invalid team setup".to_string(),
            winning_team: None,
            team_a_players: Vec::new(),
            team_b_players: Vec::new(),
        }
    }
}

/// A team's score for a hole under the given format. Members without a
/// recorded score are skipped; a team with no scores at all gets `NoScore`.
pub fn team_score(
    players: &[&Player],
    game: &Game,
    hole: u32,
    format: TeamFormat,
) -> TeamHoleScore {
    let strokes: Vec<u32> = players
        .iter()
        .filter_map(|p| game.score_for(p.id, hole).map(|s| s.strokes))
        .collect();

    if strokes.is_empty() {
        return TeamHoleScore::NoScore;
    }

    match format {
        TeamFormat::BestBall => {
            let best = strokes.iter().copied().min().unwrap_or(0);
            TeamHoleScore::Strokes(best)
        },
        TeamFormat::CombinedScores => TeamHoleScore::Strokes(strokes.iter().sum()),
    }
}

/// Winner of a hole given both team scores: strictly lower wins, equal
/// scores tie.
pub fn team_hole_winner(team_a: TeamHoleScore, team_b: TeamHoleScore) -> Option<Team> {
    if team_a < team_b {
        Some(Team::A)
    } else if team_b < team_a {
        Some(Team::B)
    } else {
        None
    }
}

/// Running status for the holes decided so far. Unlike individual match
/// play this always reports the "up" form, even when the match is
/// mathematically closed out.
pub fn team_match_status(hole_results: &[TeamHoleResult]) -> String {
    let a_wins = team_wins(hole_results, Team::A);
    let b_wins = team_wins(hole_results, Team::B);

    if a_wins == b_wins {
        return "All Square".to_string();
    }
    let leader = if a_wins > b_wins { Team::A } else { Team::B };
    let difference = a_wins.abs_diff(b_wins);
    format!("Team {leader} is {difference} up")
}

/// Compute the complete team match play outcome for a game.
///
/// Requires both a course and a team format; anything else yields the
/// neutral "Invalid team setup" result rather than an error.
pub fn team_match_play_result(game: &Game) -> TeamMatchPlayResult {
    let (Some(course), Some(format)) = (&game.course, game.team_format) else {
        tracing::debug!(game_id = %game.id, "Team match play requested without course or format");
        return TeamMatchPlayResult::invalid_setup();
    };

    let team_a = game.team_players(Team::A);
    let team_b = game.team_players(Team::B);

    let mut hole_results = Vec::with_capacity(course.number_of_holes as usize);
    for hole in 1..=course.number_of_holes {
        let a_score = team_score(&team_a, game, hole, format);
        let b_score = team_score(&team_b, game, hole, format);
        hole_results.push(TeamHoleResult {
            hole_number: hole,
            winning_team: team_hole_winner(a_score, b_score),
            team_a_score: a_score,
            team_b_score: b_score,
        });
    }

    let final_status = team_match_status(&hole_results);

    let a_wins = team_wins(&hole_results, Team::A);
    let b_wins = team_wins(&hole_results, Team::B);
    let winning_team = if a_wins > b_wins {
        Some(Team::A)
    } else if b_wins > a_wins {
        Some(Team::B)
    } else {
        None
    };

    TeamMatchPlayResult {
        hole_results,
        final_status,
        winning_team,
        team_a_players: team_a.into_iter().cloned().collect(),
        team_b_players: team_b.into_iter().cloned().collect(),
    }
}

fn team_wins(hole_results: &[TeamHoleResult], team: Team) -> u32 {
    hole_results
        .iter()
        .filter(|r| r.winning_team == Some(team))
        .count() as u32
}
