pub mod aggregator;
pub mod presentation;
pub mod providers;
mod session;
mod template;

pub use session::{Notifications, RecentStatSession};

#[cfg(test)]
pub(crate) mod testing;
