use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use domain::models::{AccountId, Roster, RosterEntry, StatField};
use domain::providers::{StatProvider, StatRequest};

/// Answers from a fixed table and counts how often it was asked.
pub struct StubProvider {
    name: &'static str,
    answers: HashMap<AccountId, Vec<StatField>>,
    calls: AtomicUsize,
}

impl StubProvider {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            answers: HashMap::new(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with(mut self, account_id: AccountId, fields: Vec<StatField>) -> Self {
        self.answers.insert(account_id, fields);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl StatProvider for StubProvider {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn try_fetch(&self, request: &StatRequest) -> anyhow::Result<Vec<StatField>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .answers
            .get(&request.account_id)
            .cloned()
            .unwrap_or_default())
    }
}

pub struct PanickingProvider;

#[async_trait::async_trait]
impl StatProvider for PanickingProvider {
    fn name(&self) -> &'static str {
        "panicking"
    }

    async fn try_fetch(&self, _request: &StatRequest) -> anyhow::Result<Vec<StatField>> {
        panic!("provider blew up")
    }
}

/// Roster whose vehicle ids are assigned in order and whose fake names match.
pub fn roster_of(players: &[(&str, i64)]) -> Roster {
    players
        .iter()
        .zip(1..)
        .map(|((name, account_id), vehicle_id)| {
            (vehicle_id, RosterEntry::new(*name, AccountId(*account_id)))
        })
        .collect()
}
