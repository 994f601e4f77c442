use anyhow::Result;
use domain::models::StatField;
use domain::providers::{StatProvider, StatRequest};
use reqwest::Url;

use crate::http;

const PLAYER_PAGE_URL: &str = "http://wotbox.ouj.com/wotbox/index.php?r=default/index";

const RATING_MARKERS: (&str, &str) = ("<span class='num'>", "</span>");
const WIN_RATE_MARKERS: (&str, &str) = ("win-rate='", "'");

/// Scrapes the public player page of the box statistics site.
///
/// The page carries the combat effectiveness number (stored as `xwn8`) and
/// the win rate (stored as `wn8`). Only the win rate marks the player as
/// having a recent stat.
#[derive(Debug, Clone, Default)]
pub struct WotboxProvider;

impl WotboxProvider {
    pub const fn new() -> Self {
        Self
    }

    fn player_page_url(nickname: &str) -> Result<Url> {
        let mut url = Url::parse(PLAYER_PAGE_URL)?;
        url.query_pairs_mut().append_pair("pn", nickname);
        Ok(url)
    }
}

#[async_trait::async_trait]
impl StatProvider for WotboxProvider {
    fn name(&self) -> &'static str {
        "wotbox"
    }

    #[tracing::instrument(skip_all, fields(nickname = %request.nickname))]
    async fn try_fetch(&self, request: &StatRequest) -> Result<Vec<StatField>> {
        let page = http::get_text(Self::player_page_url(&request.nickname)?).await?;
        let fields = parse_player_page(&page);
        if fields.is_empty() {
            tracing::debug!("player page has no stat markers");
        }
        Ok(fields)
    }
}

fn parse_player_page(page: &str) -> Vec<StatField> {
    let mut fields = Vec::new();

    if let Some(rating) = find_number_between(page, RATING_MARKERS) {
        fields.push(StatField::Xwn8(rating));
    }

    if let Some(win_rate) = find_number_between(page, WIN_RATE_MARKERS) {
        fields.push(StatField::Wn8(win_rate));
        fields.push(StatField::RecentStatAvailable);
    }

    fields
}

/// First number enclosed by the markers, skipping occurrences that enclose
/// anything else.
fn find_number_between(text: &str, (open, close): (&str, &str)) -> Option<i64> {
    let mut rest = text;
    while let Some(start) = rest.find(open) {
        rest = &rest[start + open.len()..];
        let Some(end) = rest.find(close) else {
            return None;
        };

        let candidate = rest[..end].trim();
        if !candidate.is_empty() && candidate.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(number) = candidate.parse() {
                return Some(number);
            }
        }
    }
    None
}
