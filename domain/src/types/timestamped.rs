use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeStamped<T> {
    pub data: T,
    pub utc_timestamp: DateTime<Utc>,
}

impl<T> TimeStamped<T> {
    pub fn now(data: T) -> Self {
        Self {
            data,
            utc_timestamp: Utc::now(),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> TimeStamped<U> {
        TimeStamped {
            data: f(self.data),
            utc_timestamp: self.utc_timestamp,
        }
    }
}
