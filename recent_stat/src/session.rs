use std::sync::Arc;

use config::AppConfig;
use domain::models::{AccountId, Roster};
use domain::providers::StatProvider;

use crate::aggregator::PlayerDataAggregator;
use crate::presentation::{obfuscate, BadgeId, Presenter};

/// Messages the host shows to the player once per session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notifications {
    pub welcome: String,
    pub info: String,
}

/// State the host keeps for one game session.
pub struct RecentStatSession {
    config: AppConfig,
    aggregator: PlayerDataAggregator,
    presenter: Presenter,
    welcome_message: String,
    notifications_shown: bool,
    is_anonymous_host: bool,
}

impl RecentStatSession {
    pub fn new(config: AppConfig, providers: Vec<Arc<dyn StatProvider>>) -> Self {
        tracing::info!("session setup is started");

        let aggregator = PlayerDataAggregator::new(config.main.region, providers);
        let presenter = Presenter::new(config.main.badge_type, config.format.clone());
        let welcome_message = format!(
            "Recent stat<br>Version: {}<br>Providers: {}<br>",
            env!("CARGO_PKG_VERSION"),
            aggregator.provider_names().join(", ")
        );

        tracing::info!(main = ?config.main, format = ?config.format, "session setup is finished");

        Self {
            config,
            aggregator,
            presenter,
            welcome_message,
            notifications_shown: false,
            is_anonymous_host: false,
        }
    }

    pub fn welcome_message(&self) -> &str {
        &self.welcome_message
    }

    pub fn info_message(&self) -> String {
        format!(
            "Configs:<br><br>main = {:?}<br><br>format = {:?}",
            self.config.main, self.config.format
        )
    }

    /// Hands out the notifications on the first call only.
    pub fn take_notifications(&mut self) -> Option<Notifications> {
        if self.notifications_shown {
            return None;
        }
        self.notifications_shown = true;

        Some(Notifications {
            welcome: self.welcome_message.clone(),
            info: self.info_message(),
        })
    }

    pub const fn is_anonymous_host(&self) -> bool {
        self.is_anonymous_host
    }

    pub const fn aggregator(&self) -> &PlayerDataAggregator {
        &self.aggregator
    }

    pub async fn load_player_data_by_vehicle_list(&mut self, roster: &Roster) {
        self.check_if_host_is_anonymous(roster);
        self.aggregator.load_player_data_by_vehicle_list(roster).await;
    }

    /// Once any player shows up under a fake name, the host stays anonymous
    /// for the rest of the session.
    fn check_if_host_is_anonymous(&mut self, roster: &Roster) {
        for (vehicle_id, entry) in roster.entries() {
            match entry.shows_fake_name() {
                Some(true) => {
                    if !self.is_anonymous_host {
                        tracing::info!(vehicle_id, "host is anonymous");
                    }
                    self.is_anonymous_host = true;
                }
                Some(false) => {}
                None => tracing::warn!(vehicle_id, "can't check if host is anonymous"),
            }
        }
    }

    pub fn format_player_name(&self, account_id: AccountId, name: &str) -> String {
        if self.is_anonymous_host || account_id.is_synthetic() {
            return obfuscate(name);
        }

        self.presenter
            .decorate_name(self.aggregator.record(account_id), name)
    }

    pub fn get_player_badge_icon(&self, account_id: AccountId) -> Option<BadgeId> {
        if self.is_anonymous_host {
            return None;
        }

        self.presenter.badge(self.aggregator.record(account_id))
    }
}
