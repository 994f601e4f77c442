use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use once_cell::sync::OnceCell;
use reqwest::header::USER_AGENT;
use reqwest::{Client, Url};

const REQUEST_TIMEOUT_SECS: u64 = 10;

static CLIENT: OnceCell<Client> = OnceCell::new();

fn http_client() -> Result<&'static Client> {
    CLIENT.get_or_try_init(|| {
        Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("failed to build http client")
    })
}

/// GETs `url` and returns the body of a successful response.
pub(crate) async fn get_text(url: Url) -> Result<String> {
    let resp = http_client()?
        .get(url.clone())
        .header(USER_AGENT, "Mozilla/5.0")
        .send()
        .await
        .with_context(|| format!("request to {url} failed"))?;

    let status = resp.status();
    let body = resp.text().await.context("failed reading body")?;
    if !status.is_success() {
        return Err(anyhow!("http {status} from {url}"));
    }

    Ok(body)
}
