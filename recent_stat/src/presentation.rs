use std::fmt;

use config::{BadgeType, FormatConfig};
use domain::models::{Achievements, PlayerStatRecord};

use crate::template::{self, TemplateError, Value};

/// Put in front of names whose stats must not be shown.
pub const OBFUSCATED_PREFIX: &str = "? ";

const BADGE_BASE: u8 = 10;

/// Lower bounds of rating tiers 1 to 4.
const TIER_THRESHOLDS: [i64; 4] = [600, 800, 1000, 1200];

/// Team achievements in priority order. The position is the team id and must
/// stay in sync with the badge atlas.
const TEAM_ACHIEVEMENTS: [&str; 4] = [
    "medalBobKorbenDallas",
    "medalBobAmway921",
    "medalBobLebwa",
    "medalBobYusha",
];

/// Icon identifier understood by the host renderer, e.g. `badge_12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BadgeId(u8);

impl BadgeId {
    pub const fn number(self) -> u8 {
        self.0
    }
}

impl fmt::Display for BadgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "badge_{}", self.0)
    }
}

/// 0 is the worst tier, 4 the best.
pub fn rating_tier(xwn8: i64) -> u8 {
    TIER_THRESHOLDS
        .iter()
        .filter(|threshold| xwn8 >= **threshold)
        .count() as u8
}

pub fn team_id(achievements: &Achievements) -> Option<u8> {
    TEAM_ACHIEVEMENTS
        .iter()
        .position(|name| achievements.contains(*name))
        .map(|position| position as u8)
}

pub fn obfuscate(name: &str) -> String {
    format!("{OBFUSCATED_PREFIX}{name}")
}

/// Turns cached records into badges and decorated names. Knows nothing about
/// anonymity; the session decides when stats must be hidden.
#[derive(Debug, Clone)]
pub struct Presenter {
    badge_type: BadgeType,
    format: FormatConfig,
}

impl Presenter {
    pub fn new(badge_type: BadgeType, format: FormatConfig) -> Self {
        Self { badge_type, format }
    }

    pub fn badge(&self, record: Option<&PlayerStatRecord>) -> Option<BadgeId> {
        let record = record?;
        let offset = match self.badge_type {
            BadgeType::TeamColor => team_id(record.achievements.as_ref()?)?,
            BadgeType::TieredRating => rating_tier(record.xwn8?),
        };
        Some(BadgeId(BADGE_BASE + offset))
    }

    /// Prepends the rendered name template when the record has any stat. A
    /// broken template leaves the name untouched.
    pub fn decorate_name(&self, record: Option<&PlayerStatRecord>, name: &str) -> String {
        let Some(record) = record.filter(|record| record.has_any_stat()) else {
            return name.to_string();
        };

        match self.render_prefix(record) {
            Ok(prefix) => prefix + name,
            Err(error) => {
                tracing::error!(template = %self.format.player_name, "can't format player name: {error}");
                name.to_string()
            }
        }
    }

    fn render_prefix(&self, record: &PlayerStatRecord) -> Result<String, TemplateError> {
        template::render(&self.format.player_name, |field| {
            let value = match field {
                "xwn8" => record.xwn8,
                "wn8" => record.wn8,
                "achievements" => record
                    .achievements
                    .as_ref()
                    .map(|achievements| achievements.len() as i64),
                _ => return None,
            };
            Some(value.map_or_else(|| Value::Text(self.format.no_value.clone()), Value::Number))
        })
    }
}
