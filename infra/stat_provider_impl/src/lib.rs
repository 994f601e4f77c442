mod http;
mod wg_api;
mod wotbox;

pub mod config {
    #[derive(serde::Deserialize, Debug, Clone)]
    pub struct WgApi {
        pub wg_api_application_id: String,
    }

    impl WgApi {
        pub fn from_env() -> anyhow::Result<Self> {
            Ok(envy::from_env::<Self>()?)
        }
    }
}

pub use wg_api::WgApiProvider;
pub use wotbox::WotboxProvider;
