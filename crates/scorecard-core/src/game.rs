use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::course::Course;
use crate::player::{Player, PlayerId};
use crate::score::Score;

/// Unique identifier for a game.
pub type GameId = Uuid;

/// Competitive format for a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// Lowest total strokes wins.
    StrokePlay,
    /// Holes won head-to-head decide the match.
    MatchPlay,
    /// Match play scored between two fixed teams.
    TeamMatchPlay,
}

impl Default for GameMode {
    fn default() -> Self {
        Self::StrokePlay
    }
}

/// How a team's per-hole score is derived from its members' scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeamFormat {
    /// The best (lowest) individual score counts.
    BestBall,
    /// All members' scores are added together.
    CombinedScores,
}

/// One of the two fixed team labels in team match play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    A,
    B,
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
        }
    }
}

/// Mapping of player ids to team labels. A player missing from the map is
/// unassigned and belongs to neither team.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamAssignments(HashMap<PlayerId, Team>);

impl TeamAssignments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Alternate players A, B, A, B, ... in roster order.
    pub fn auto_split(players: &[Player]) -> Self {
        let map = players
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id, if i % 2 == 0 { Team::A } else { Team::B }))
            .collect();
        Self(map)
    }

    pub fn assign(&mut self, player_id: PlayerId, team: Team) {
        self.0.insert(player_id, team);
    }

    pub fn team_of(&self, player_id: PlayerId) -> Option<Team> {
        self.0.get(&player_id).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A round of golf: a course, a roster, a score set, and a format.
///
/// Player order is significant: in two-player match play the first two
/// roster entries are "Player 1" and "Player 2".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    pub created_at: DateTime<Utc>,
    pub is_complete: bool,
    pub mode: GameMode,
    pub course: Option<Course>,
    pub players: Vec<Player>,
    pub scores: Vec<Score>,
    /// Present only for team match play.
    pub team_format: Option<TeamFormat>,
    /// Present only for team match play.
    pub team_assignments: Option<TeamAssignments>,
}

impl Game {
    pub fn new(course: Course, players: Vec<Player>, mode: GameMode) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            is_complete: false,
            mode,
            course: Some(course),
            players,
            scores: Vec::new(),
            team_format: None,
            team_assignments: None,
        }
    }

    /// Configure team match play with the given format and assignments.
    pub fn with_teams(mut self, format: TeamFormat, assignments: TeamAssignments) -> Self {
        self.mode = GameMode::TeamMatchPlay;
        self.team_format = Some(format);
        self.team_assignments = Some(assignments);
        self
    }

    /// Look up a player's score for a 1-based hole.
    ///
    /// The score set holds at most one entry per (player, hole); duplicates
    /// are undefined behavior and this returns the first match in insertion
    /// order.
    pub fn score_for(&self, player_id: PlayerId, hole: u32) -> Option<&Score> {
        self.scores
            .iter()
            .find(|s| s.player_id == player_id && s.hole_number == hole)
    }

    /// Enter or replace a player's score for a hole.
    ///
    /// This is the only mutation the core offers; the scoring engines never
    /// call it.
    pub fn record_score(&mut self, player_id: PlayerId, hole: u32, strokes: u32) {
        if let Some(existing) = self
            .scores
            .iter_mut()
            .find(|s| s.player_id == player_id && s.hole_number == hole)
        {
            existing.strokes = strokes;
        } else {
            self.scores
                .push(Score::new(hole, strokes, self.id, player_id));
        }
    }

    /// Sum of all recorded strokes for a player across the game.
    pub fn total_strokes(&self, player_id: PlayerId) -> u32 {
        self.scores
            .iter()
            .filter(|s| s.player_id == player_id)
            .map(|s| s.strokes)
            .sum()
    }

    /// Roster members assigned to the given team, in roster order. Empty
    /// when the game has no assignment map.
    pub fn team_players(&self, team: Team) -> Vec<&Player> {
        let Some(assignments) = &self.team_assignments else {
            return Vec::new();
        };
        self.players
            .iter()
            .filter(|p| assignments.team_of(p.id) == Some(team))
            .collect()
    }

    /// Serialize the game for storage or transfer. Returns empty bytes on
    /// encode failure.
    pub fn to_snapshot_bytes(&self) -> Vec<u8> {
        rmp_serde::to_vec(self).unwrap_or_default()
    }

    /// Restore a game from snapshot bytes. Malformed input is dropped with a
    /// debug log.
    pub fn from_snapshot_bytes(bytes: &[u8]) -> Option<Self> {
        match rmp_serde::from_slice(bytes) {
            Ok(game) => Some(game),
            Err(e) => {
                tracing::debug!(error = %e, "Dropped malformed game snapshot");
                None
            },
        }
    }
}
