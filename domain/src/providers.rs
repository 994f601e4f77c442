mod stat_provider;

pub use stat_provider::{StatProvider, StatRequest};
