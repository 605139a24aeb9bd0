//! Game settings
//!
//! Every tunable lives here. Defaults reproduce the classic 800x600 layout;
//! JSON overrides exist for embedding and tests, the binary ships defaults only.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Why a settings document was rejected
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings are not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: i64 },
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: i64 },
    #[error("paddle height {paddle} does not fit a playfield {screen} high")]
    PaddleTooTall { paddle: i32, screen: i32 },
    #[error("paddles and ball do not fit a playfield {screen} wide")]
    TooNarrow { screen: i32 },
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Surface ===
    pub screen_width: i32,
    pub screen_height: i32,
    pub caption: String,
    /// Simulation ticks per second
    pub tick_rate: u32,

    // === Paddles ===
    pub paddle_width: i32,
    pub paddle_height: i32,
    pub paddle_speed: i32,
    pub paddle_margin: i32,

    // === Ball ===
    pub ball_size: i32,
    pub ball_speed: i32,

    // === HUD ===
    pub score_font_size: u16,
    pub instruction_font_size: u16,

    // === Input ===
    /// Hold window for terminals without key release reporting
    pub key_hold_ticks: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            caption: CAPTION.to_string(),
            tick_rate: TICK_RATE,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            paddle_margin: PADDLE_MARGIN,

            ball_size: BALL_SIZE,
            ball_speed: BALL_SPEED,

            score_font_size: SCORE_FONT_SIZE,
            instruction_font_size: INSTRUCTION_FONT_SIZE,

            key_hold_ticks: KEY_HOLD_TICKS,
        }
    }
}

impl Settings {
    /// Parse settings from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check that the geometry describes a playable field
    pub fn validate(&self) -> Result<(), SettingsError> {
        let positive = [
            ("screen_width", self.screen_width as i64),
            ("screen_height", self.screen_height as i64),
            ("tick_rate", self.tick_rate as i64),
            ("paddle_width", self.paddle_width as i64),
            ("paddle_height", self.paddle_height as i64),
            ("ball_size", self.ball_size as i64),
            ("ball_speed", self.ball_speed as i64),
        ];
        for (field, value) in positive {
            if value <= 0 {
                return Err(SettingsError::NotPositive { field, value });
            }
        }

        // A zero speed freezes the paddles, a zero margin puts them on the edge
        let non_negative = [
            ("paddle_speed", self.paddle_speed as i64),
            ("paddle_margin", self.paddle_margin as i64),
        ];
        for (field, value) in non_negative {
            if value < 0 {
                return Err(SettingsError::Negative { field, value });
            }
        }

        if self.paddle_height > self.screen_height {
            return Err(SettingsError::PaddleTooTall {
                paddle: self.paddle_height,
                screen: self.screen_height,
            });
        }

        let needed = 2 * (self.paddle_margin + self.paddle_width) + self.ball_size;
        if needed >= self.screen_width {
            return Err(SettingsError::TooNarrow {
                screen: self.screen_width,
            });
        }

        Ok(())
    }

    /// Native settings are never persisted
    pub fn load() -> Self {
        log::debug!("Using default settings");
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.screen_width, 800);
        assert_eq!(settings.screen_height, 600);
        assert_eq!(settings.tick_rate, 60);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "paddle_speed": 7 }"#).unwrap();
        assert_eq!(settings.paddle_speed, 7);
        assert_eq!(settings.ball_speed, BALL_SPEED);
        assert_eq!(settings.caption, CAPTION);
    }

    #[test]
    fn test_rejects_bad_json() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SettingsError::Json(_)));
    }

    #[test]
    fn test_rejects_zero_tick_rate() {
        let err = Settings::from_json(r#"{ "tick_rate": 0 }"#).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::NotPositive {
                field: "tick_rate",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_paddle_taller_than_screen() {
        let err = Settings::from_json(r#"{ "paddle_height": 700 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::PaddleTooTall { .. }));
    }

    #[test]
    fn test_rejects_narrow_field() {
        let err = Settings::from_json(r#"{ "screen_width": 40 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::TooNarrow { screen: 40 }));
    }

    #[test]
    fn test_rejects_negative_paddle_speed() {
        let err = Settings::from_json(r#"{ "paddle_speed": -5 }"#).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Negative {
                field: "paddle_speed",
                value: -5
            }
        ));
    }

    #[test]
    fn test_rejects_negative_margin() {
        let err = Settings::from_json(r#"{ "paddle_margin": -1 }"#).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Negative {
                field: "paddle_margin",
                value: -1
            }
        ));
    }

    #[test]
    fn test_zero_speed_and_margin_are_allowed() {
        let settings = Settings::from_json(r#"{ "paddle_speed": 0, "paddle_margin": 0 }"#).unwrap();
        assert_eq!(settings.paddle_speed, 0);
        assert_eq!(settings.paddle_margin, 0);
    }
}
