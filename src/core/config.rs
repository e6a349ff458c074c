//! Rules configuration.
//!
//! Two rule choices are left open by the plain click-driven game and are
//! exposed here instead of being hardcoded:
//! - `mandatory_capture`: whether a capture anywhere on the board forces the
//!   player to capture at initial selection (multi-jump continuation is
//!   always forced)
//! - `blocked_player_loses`: whether a player with pieces but no legal move
//!   loses

use serde::{Deserialize, Serialize};

use super::color::Color;

/// Rules configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Side that moves first (default: Red).
    pub first_player: Color,

    /// Restrict selection to capturing pieces whenever any capture exists
    /// (default: false).
    pub mandatory_capture: bool,

    /// End the game when the side to move has no legal move (default: false).
    pub blocked_player_loses: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            first_player: Color::Red,
            mandatory_capture: false,
            blocked_player_loses: false,
        }
    }
}

impl RulesConfig {
    /// Standard tournament rules: forced capture and blocked-side loses.
    #[must_use]
    pub fn strict() -> Self {
        Self::default()
            .with_mandatory_capture(true)
            .with_blocked_player_loses(true)
    }

    pub fn with_first_player(mut self, color: Color) -> Self {
        self.first_player = color;
        self
    }

    pub fn with_mandatory_capture(mut self, enabled: bool) -> Self {
        self.mandatory_capture = enabled;
        self
    }

    pub fn with_blocked_player_loses(mut self, enabled: bool) -> Self {
        self.blocked_player_loses = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RulesConfig::default();
        assert_eq!(config.first_player, Color::Red);
        assert!(!config.mandatory_capture);
        assert!(!config.blocked_player_loses);
    }

    #[test]
    fn test_builder_pattern() {
        let config = RulesConfig::default()
            .with_first_player(Color::Black)
            .with_mandatory_capture(true);

        assert_eq!(config.first_player, Color::Black);
        assert!(config.mandatory_capture);
        assert!(!config.blocked_player_loses);
    }

    #[test]
    fn test_strict() {
        let config = RulesConfig::strict();
        assert!(config.mandatory_capture);
        assert!(config.blocked_player_loses);
    }

    #[test]
    fn test_serialization() {
        let config = RulesConfig::strict().with_first_player(Color::Black);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: RulesConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
