use crate::models::{AccountId, Region, StatField};

/// Who to look up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatRequest {
    pub region: Region,
    pub nickname: String,
    pub account_id: AccountId,
}

/// A third-party statistics source.
///
/// Implementations issue their own outbound request and translate the
/// response into stat fields for the requested player. They may be invoked
/// concurrently for the same or different players.
#[async_trait::async_trait]
pub trait StatProvider: Send + Sync {
    fn name(&self) -> &'static str;

    async fn try_fetch(&self, request: &StatRequest) -> anyhow::Result<Vec<StatField>>;

    /// Like [`StatProvider::try_fetch`], but a failure only leaves a log line
    /// and yields no fields.
    async fn fetch(&self, request: &StatRequest) -> Vec<StatField> {
        match self.try_fetch(request).await {
            Ok(fields) => fields,
            Err(error) => {
                tracing::warn!(
                    provider = self.name(),
                    nickname = %request.nickname,
                    account_id = %request.account_id,
                    "failed to fetch player stats: {error:#}"
                );
                Vec::new()
            }
        }
    }
}
