use derive_more::Display;
use serde::Deserialize;

/// Numeric account id of a player, as the game server reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Deserialize)]
#[serde(transparent)]
pub struct AccountId(pub i64);

impl AccountId {
    /// Bots and other server-side stand-ins are handed non-positive ids.
    pub const fn is_synthetic(self) -> bool {
        self.0 <= 0
    }
}
