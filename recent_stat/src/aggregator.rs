use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Instant;

use domain::models::{AccountId, PlayerStatRecord, Region, Roster, StatUpdate};
use domain::providers::{StatProvider, StatRequest};
use domain::types::TimeStamped;
use tokio::sync::mpsc;
use tokio::task::JoinSet;

/// How many roster players ended up with stats after a load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub with_stat: usize,
    pub with_recent_stat: usize,
    pub without_stat: usize,
}

/// Owns every player's stat record for the session and fills them from the
/// registered providers.
pub struct PlayerDataAggregator {
    region: Region,
    providers: Vec<Arc<dyn StatProvider>>,
    records: HashMap<AccountId, PlayerStatRecord>,
}

impl PlayerDataAggregator {
    pub fn new(region: Region, providers: Vec<Arc<dyn StatProvider>>) -> Self {
        Self {
            region,
            providers,
            records: HashMap::new(),
        }
    }

    pub fn record(&self, account_id: AccountId) -> Option<&PlayerStatRecord> {
        self.records.get(&account_id)
    }

    pub fn provider_names(&self) -> Vec<&'static str> {
        self.providers.iter().map(|provider| provider.name()).collect()
    }

    /// Fetches stats for every roster player that has no recent stat yet,
    /// one task per player and provider. Returns once all of them finished.
    ///
    /// Provider failures never surface here: a failed fetch only means the
    /// record keeps its fields unset.
    #[tracing::instrument(skip_all, fields(roster_size = roster.len()))]
    pub async fn load_player_data_by_vehicle_list(&mut self, roster: &Roster) {
        let started = Instant::now();
        let (sender, mut receiver) = mpsc::unbounded_channel::<TimeStamped<StatUpdate>>();
        let mut tasks = JoinSet::new();
        let mut launched = HashSet::new();

        for (nickname, account_id) in roster.players() {
            let record = self.records.entry(account_id).or_default();
            if record.has_recent_stat || !launched.insert(account_id) {
                continue;
            }

            for provider in &self.providers {
                let provider = Arc::clone(provider);
                let sender = sender.clone();
                let request = StatRequest {
                    region: self.region,
                    nickname: nickname.to_owned(),
                    account_id,
                };

                tasks.spawn(async move {
                    for field in provider.fetch(&request).await {
                        let update = StatUpdate {
                            account_id: request.account_id,
                            field,
                        };
                        // the receiver lives until every sender is gone
                        let _ = sender.send(TimeStamped::now(update));
                    }
                });
            }
        }
        drop(sender);

        tracing::info!("vehicle info task count: {}", tasks.len());

        while let Some(update) = receiver.recv().await {
            self.merge(update);
        }

        while let Some(joined) = tasks.join_next().await {
            if let Err(error) = joined {
                tracing::error!("stat fetch task failed: {error}");
            }
        }

        tracing::info!("tasks are joined");

        let summary = self.summarize(roster);
        tracing::info!(
            elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            with_stat = summary.with_stat,
            with_recent_stat = summary.with_recent_stat,
            without_stat = summary.without_stat,
            "stats loaded"
        );
    }

    fn merge(&mut self, update: TimeStamped<StatUpdate>) {
        let account_id = update.data.account_id;
        let field = update.map(|update| update.field);
        tracing::trace!(%account_id, field = ?field.data, "merging stat update");

        if self.records.entry(account_id).or_default().apply(field) {
            tracing::debug!(%account_id, "stat field overwritten by a later update");
        }
    }

    pub fn summarize(&self, roster: &Roster) -> LoadSummary {
        roster
            .account_ids()
            .fold(LoadSummary::default(), |mut summary, account_id| {
                match self.record(account_id) {
                    Some(record) if record.has_any_stat() => {
                        summary.with_stat += 1;
                        if record.has_recent_stat {
                            summary.with_recent_stat += 1;
                        }
                    }
                    _ => summary.without_stat += 1,
                }
                summary
            })
    }
}
