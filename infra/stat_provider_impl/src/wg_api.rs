use std::collections::HashMap;

use anyhow::{anyhow, Context, Result};
use domain::models::{AccountId, Achievements, Region, StatField};
use domain::providers::{StatProvider, StatRequest};
use reqwest::Url;
use serde::Deserialize;

use crate::{config, http};

/// Reads a player's achievements from the official public API.
#[derive(Debug, Clone)]
pub struct WgApiProvider {
    application_id: String,
}

impl WgApiProvider {
    pub fn new(config: config::WgApi) -> Self {
        Self {
            application_id: config.wg_api_application_id,
        }
    }

    fn achievements_url(&self, region: Region, account_id: AccountId) -> Result<Option<Url>> {
        let Some(host) = api_host(region) else {
            return Ok(None);
        };

        let account_id = account_id.to_string();
        let url = Url::parse_with_params(
            &format!("https://{host}/wot/account/achievements/"),
            &[
                ("application_id", self.application_id.as_str()),
                ("account_id", account_id.as_str()),
                ("fields", "achievements"),
            ],
        )?;
        Ok(Some(url))
    }
}

const fn api_host(region: Region) -> Option<&'static str> {
    match region {
        Region::Eu => Some("api.worldoftanks.eu"),
        Region::Na => Some("api.worldoftanks.com"),
        Region::Asia => Some("api.worldoftanks.asia"),
        Region::Cn => None,
    }
}

#[async_trait::async_trait]
impl StatProvider for WgApiProvider {
    fn name(&self) -> &'static str {
        "wg_api"
    }

    #[tracing::instrument(skip_all, fields(account_id = %request.account_id))]
    async fn try_fetch(&self, request: &StatRequest) -> Result<Vec<StatField>> {
        let Some(url) = self.achievements_url(request.region, request.account_id)? else {
            tracing::debug!(region = %request.region, "no public api for region");
            return Ok(Vec::new());
        };

        let body = http::get_text(url).await?;
        parse_achievements_response(&body, request.account_id)
    }
}

#[derive(Debug, Deserialize)]
struct AchievementsResponse {
    status: String,
    #[serde(default)]
    data: HashMap<String, Option<PlayerAchievements>>,
    #[serde(default)]
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct PlayerAchievements {
    #[serde(default)]
    achievements: HashMap<String, u64>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(default)]
    message: String,
}

fn parse_achievements_response(body: &str, account_id: AccountId) -> Result<Vec<StatField>> {
    let response: AchievementsResponse =
        serde_json::from_str(body).context("malformed achievements response")?;

    if response.status != "ok" {
        let message = response.error.map(|e| e.message).unwrap_or_default();
        return Err(anyhow!("api answered {}: {message}", response.status));
    }

    let Some(Some(player)) = response.data.get(&account_id.to_string()) else {
        return Ok(Vec::new());
    };

    let achievements: Achievements = player
        .achievements
        .iter()
        .filter(|(_, count)| **count > 0)
        .map(|(name, _)| name.clone())
        .collect();

    Ok(vec![StatField::Achievements(achievements)])
}

#[cfg(test)]
mod test {
    use super::*;

    fn provider() -> WgApiProvider {
        WgApiProvider::new(config::WgApi {
            wg_api_application_id: "demo".to_string(),
        })
    }

    #[test]
    fn url_follows_region() {
        let url = provider()
            .achievements_url(Region::Eu, AccountId(500_000_001))
            .unwrap()
            .unwrap();

        assert_eq!(url.host_str(), Some("api.worldoftanks.eu"));
        assert_eq!(url.path(), "/wot/account/achievements/");
        assert!(url
            .query_pairs()
            .any(|(k, v)| k == "account_id" && v == "500000001"));
        assert!(provider()
            .achievements_url(Region::Cn, AccountId(1))
            .unwrap()
            .is_none());
    }

    #[test]
    fn parse_earned_achievements() {
        let body = r#"{
            "status": "ok",
            "meta": {"count": 1},
            "data": {"42": {"achievements": {"medalBobLebwa": 1, "warrior": 12, "medalKay": 0}}}
        }"#;

        let fields = parse_achievements_response(body, AccountId(42)).unwrap();

        let expected: Achievements = ["medalBobLebwa", "warrior"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(fields, vec![StatField::Achievements(expected)]);
    }

    #[test]
    fn unknown_player_yields_nothing() {
        let body = r#"{"status": "ok", "data": {"42": null}}"#;

        assert!(parse_achievements_response(body, AccountId(42))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn api_errors_are_reported() {
        let body = r#"{"status": "error", "error": {"code": 407, "message": "INVALID_APPLICATION_ID"}}"#;

        let error = parse_achievements_response(body, AccountId(42)).unwrap_err();
        assert!(error.to_string().contains("INVALID_APPLICATION_ID"));
        assert!(parse_achievements_response("<html>", AccountId(42)).is_err());
    }

    #[tokio::test]
    async fn unsupported_region_is_not_an_error() {
        let request = StatRequest {
            region: Region::Cn,
            nickname: "Tanker".to_string(),
            account_id: AccountId(42),
        };

        assert!(provider().fetch(&request).await.is_empty());
    }
}
