use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player.
pub type PlayerId = Uuid;

/// A player who can participate in games.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Short display tag for tight scorecard columns, conventionally 2-3
    /// characters. May be empty; renderers fall back to the full name.
    pub initials: String,
    pub created_at: DateTime<Utc>,
    /// Cosmetic preference only. Scoring never reads this.
    pub preferred_ball_color: Option<BallColor>,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            initials: String::new(),
            created_at: Utc::now(),
            preferred_ball_color: None,
        }
    }

    pub fn with_initials(mut self, initials: impl Into<String>) -> Self {
        self.initials = initials.into();
        self
    }

    pub fn with_ball_color(mut self, color: BallColor) -> Self {
        self.preferred_ball_color = Some(color);
        self
    }

    /// Initials when set, otherwise the full name.
    pub fn short_label(&self) -> &str {
        if self.initials.is_empty() {
            &self.name
        } else {
            &self.initials
        }
    }
}

/// Ball color selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BallColor {
    Red,
    Blue,
    Green,
    Yellow,
    Orange,
    Purple,
    Pink,
    White,
    Black,
}

impl BallColor {
    /// All colors, in picker order.
    pub const ALL: &[BallColor] = &[
        BallColor::Red,
        BallColor::Blue,
        BallColor::Green,
        BallColor::Yellow,
        BallColor::Orange,
        BallColor::Purple,
        BallColor::Pink,
        BallColor::White,
        BallColor::Black,
    ];

    /// Display color as (r, g, b).
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Red => (255, 87, 87),
            Self::Blue => (83, 152, 255),
            Self::Green => (46, 213, 115),
            Self::Yellow => (255, 195, 18),
            Self::Orange => (255, 148, 77),
            Self::Purple => (130, 88, 255),
            Self::Pink => (255, 107, 175),
            Self::White => (255, 255, 255),
            Self::Black => (30, 30, 30),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_label_prefers_initials() {
        let p = Player::new("Alice Anderson").with_initials("AA");
        assert_eq!(p.short_label(), "AA");
    }

    #[test]
    fn short_label_falls_back_to_name() {
        let p = Player::new("Bob");
        assert_eq!(p.short_label(), "Bob");
    }

    #[test]
    fn ball_color_is_a_pure_preference() {
        let p = Player::new("Cara").with_ball_color(BallColor::Purple);
        assert_eq!(p.preferred_ball_color, Some(BallColor::Purple));
        assert_eq!(BallColor::Purple.rgb(), (130, 88, 255));
    }

    #[test]
    fn every_color_has_an_rgb_entry() {
        for &color in BallColor::ALL {
            // White is the only all-255 entry; everything else is distinct.
            let _ = color.rgb();
        }
        assert_eq!(BallColor::ALL.len(), 9);
    }
}
