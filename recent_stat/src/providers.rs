use std::collections::HashSet;
use std::sync::Arc;

use anyhow::Context;
use config::ProviderKind;
use domain::providers::StatProvider;
use infra_stat_provider_impl::{WgApiProvider, WotboxProvider};

/// Instantiates each configured provider once, in configuration order.
pub fn build_providers(kinds: &[ProviderKind]) -> anyhow::Result<Vec<Arc<dyn StatProvider>>> {
    let mut seen = HashSet::new();
    kinds
        .iter()
        .filter(|kind| seen.insert(**kind))
        .map(|kind| build_provider(*kind))
        .collect()
}

fn build_provider(kind: ProviderKind) -> anyhow::Result<Arc<dyn StatProvider>> {
    Ok(match kind {
        ProviderKind::Wotbox => Arc::new(WotboxProvider::new()),
        ProviderKind::WgApi => {
            let config = infra_stat_provider_impl::config::WgApi::from_env()
                .context("wg_api provider needs WG_API_APPLICATION_ID")?;
            Arc::new(WgApiProvider::new(config))
        }
    })
}
