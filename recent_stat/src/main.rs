#![deny(clippy::all, clippy::cargo)]
#![warn(clippy::nursery, clippy::pedantic)]
#![allow(clippy::cargo_common_metadata, clippy::multiple_crate_versions)]

use std::fs;

use anyhow::Context;
use config::{AppConfig, FromEnv};
use domain::models::Roster;
use recent_stat::providers::build_providers;
use recent_stat::RecentStatSession;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::env::Env;

mod env;

fn init_sentry(env: &Env) -> Option<sentry::ClientInitGuard> {
    // only send sentry events when it's not running locally
    if env.environment_name == "local" {
        return None;
    }
    let dsn = env.sentry_dsn.as_deref()?;

    let guard = sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            traces_sample_rate: 0.1,
            environment: Some(env.environment_name.clone().into()),
            ..Default::default()
        },
    ));
    sentry::configure_scope(|scope| scope.set_level(Some(sentry::Level::Warning)));

    Some(guard)
}

fn read_roster(path: &str) -> anyhow::Result<Roster> {
    let raw = fs::read_to_string(path).with_context(|| format!("failed to read {path}"))?;
    serde_json::from_str(&raw).with_context(|| format!("malformed roster in {path}"))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env = Env::from_env()?;
    let _sentry_guard = init_sentry(&env);

    // initialize tracing
    // see https://github.com/tokio-rs/axum/blob/79a0a54bc9f0f585c974b5e6793541baff980662/examples/tracing-aka-logging/src/main.rs
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(sentry::integrations::tracing::layer())
        .init();

    let Some(roster_path) = std::env::args().nth(1) else {
        return Err("usage: recent-stat <roster.json>".into());
    };
    let roster = read_roster(&roster_path)?;

    let config = AppConfig::from_env()?;
    let providers = build_providers(&config.main.providers)?;
    let mut session = RecentStatSession::new(config, providers);
    if let Some(notifications) = session.take_notifications() {
        println!("{}", notifications.welcome);
        tracing::debug!("{}", notifications.info);
    }

    session.load_player_data_by_vehicle_list(&roster).await;

    for (vehicle_id, entry) in roster.entries() {
        let (Some(name), Some(account_id)) = (entry.name.as_deref(), entry.account_id) else {
            continue;
        };
        let badge = session
            .get_player_badge_icon(account_id)
            .map_or_else(|| "-".to_string(), |badge| badge.to_string());

        println!(
            "{vehicle_id:>4} {badge:<9} {}",
            session.format_player_name(account_id, name)
        );
    }

    Ok(())
}
