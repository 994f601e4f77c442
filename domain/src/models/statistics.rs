use std::collections::BTreeSet;

use super::AccountId;

/// Names of the achievements a player holds.
pub type Achievements = BTreeSet<String>;

/// A single stat value produced by a provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatField {
    Xwn8(i64),
    Wn8(i64),
    RecentStatAvailable,
    Achievements(Achievements),
}

/// Partial update of one player's record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatUpdate {
    pub account_id: AccountId,
    pub field: StatField,
}
