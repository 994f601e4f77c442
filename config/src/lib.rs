use anyhow::Result;
use domain::models::Region;
use envy::Error;
use serde::Deserialize;

pub trait FromEnv: Sized {
    fn from_env() -> Result<Self, Error>;
}

trait FromEnvLikeKeyValuePairs: Sized {
    fn from_iter(iter: impl Iterator<Item = (String, String)> + Clone) -> Result<Self, Error>;
}

impl<T: FromEnvLikeKeyValuePairs> FromEnv for T {
    fn from_env() -> Result<Self, Error> {
        // std::env::Vars is not Clone
        Self::from_iter(std::env::vars().collect::<Vec<_>>().into_iter())
    }
}

/// How the badge next to a player name is chosen.
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BadgeType {
    #[default]
    TieredRating,
    TeamColor,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    Wotbox,
    WgApi,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub main: MainConfig,
    pub format: FormatConfig,
}

impl FromEnvLikeKeyValuePairs for AppConfig {
    fn from_iter(iter: impl Iterator<Item = (String, String)> + Clone) -> Result<Self, Error> {
        Ok(Self {
            main: MainConfig::from_iter(iter.clone())?,
            format: FormatConfig::from_iter(iter)?,
        })
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MainConfig {
    #[serde(default = "default_region")]
    pub region: Region,
    #[serde(default)]
    pub badge_type: BadgeType,
    #[serde(default = "default_providers")]
    pub providers: Vec<ProviderKind>,
}

impl Default for MainConfig {
    fn default() -> Self {
        Self {
            region: default_region(),
            badge_type: BadgeType::default(),
            providers: default_providers(),
        }
    }
}

const fn default_region() -> Region {
    Region::Cn
}

fn default_providers() -> Vec<ProviderKind> {
    vec![ProviderKind::Wotbox]
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FormatConfig {
    /// Prefix template rendered in front of a player's name.
    #[serde(default = "default_player_name")]
    pub player_name: String,
    /// Rendered in place of a stat the record does not have.
    #[serde(default = "default_no_value")]
    pub no_value: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            player_name: default_player_name(),
            no_value: default_no_value(),
        }
    }
}

fn default_player_name() -> String {
    "[{xwn8}] ".to_string()
}

fn default_no_value() -> String {
    "-".to_string()
}

impl FromEnvLikeKeyValuePairs for MainConfig {
    fn from_iter(iter: impl Iterator<Item = (String, String)>) -> Result<Self, Error> {
        envy::prefixed("RECENT_STAT_").from_iter(iter)
    }
}

impl FromEnvLikeKeyValuePairs for FormatConfig {
    fn from_iter(iter: impl Iterator<Item = (String, String)>) -> Result<Self, Error> {
        envy::prefixed("RECENT_STAT_FORMAT_").from_iter(iter)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn read_config_from_iterator() {
        let setting = [
            ("RECENT_STAT_REGION".to_string(), "eu".to_string()),
            ("RECENT_STAT_BADGE_TYPE".to_string(), "team_color".to_string()),
            (
                "RECENT_STAT_PROVIDERS".to_string(),
                "wotbox,wg_api".to_string(),
            ),
            (
                "RECENT_STAT_FORMAT_PLAYER_NAME".to_string(),
                "{xwn8}/{wn8} ".to_string(),
            ),
            ("RECENT_STAT_FORMAT_NO_VALUE".to_string(), "?".to_string()),
        ];

        let config = AppConfig::from_iter(setting.into_iter()).unwrap();

        assert_eq!(config.main.region, Region::Eu);
        assert_eq!(config.main.badge_type, BadgeType::TeamColor);
        assert_eq!(
            config.main.providers,
            vec![ProviderKind::Wotbox, ProviderKind::WgApi]
        );
        assert_eq!(config.format.player_name, "{xwn8}/{wn8} ");
        assert_eq!(config.format.no_value, "?");
    }

    #[test]
    fn missing_variables_fall_back_to_defaults() {
        let config = AppConfig::from_iter(std::iter::empty()).unwrap();

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.main.region, Region::Cn);
        assert_eq!(config.main.providers, vec![ProviderKind::Wotbox]);
    }

    #[test]
    fn unknown_badge_type_is_rejected() {
        let setting = [(
            "RECENT_STAT_BADGE_TYPE".to_string(),
            "rainbow".to_string(),
        )];

        assert!(AppConfig::from_iter(setting.into_iter()).is_err());
    }
}
