//! Scoring and results engine for multi-player, multi-hole golf-style
//! games under three formats: stroke play, match play, and team match play,
//! plus per-course and lifetime statistics.
//!
//! Every function here is a pure read of the entity graph it is handed:
//! no internal state, no I/O, no mutation, fresh allocations per call.
//! Repeated invocation over an unchanged game yields identical results, and
//! calls are safe from any thread as long as the caller does not mutate the
//! graph mid-call. Missing relationships (no course, no players, no team
//! format) degrade to explicit neutral results instead of errors, so an
//! in-progress or half-configured game can always be rendered.

pub mod match_play;
pub mod stats;
pub mod stroke_play;
pub mod team_play;

pub use match_play::{HoleResult, MatchPlayResult, hole_winner, match_play_result, match_status};
pub use stats::{CourseStats, PlayerStats, course_stats, player_stats};
pub use stroke_play::{StrokePlayStanding, format_to_par, stroke_play_result};
pub use team_play::{
    TeamHoleResult, TeamHoleScore, TeamMatchPlayResult, team_hole_winner, team_match_play_result,
    team_match_status, team_score,
};
