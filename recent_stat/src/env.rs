#[derive(serde::Deserialize, Debug)]
pub struct Env {
    #[serde(default = "local_environment")]
    pub environment_name: String,
    #[serde(default)]
    pub sentry_dsn: Option<String>,
}

fn local_environment() -> String {
    "local".to_string()
}

impl Env {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(envy::prefixed("ENV_").from_env::<Self>()?)
    }
}
