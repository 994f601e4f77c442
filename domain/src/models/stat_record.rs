use chrono::{DateTime, Utc};

use super::{Achievements, StatField};
use crate::types::TimeStamped;

/// Everything known about one player during a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerStatRecord {
    pub xwn8: Option<i64>,
    pub wn8: Option<i64>,
    pub has_recent_stat: bool,
    pub achievements: Option<Achievements>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl PlayerStatRecord {
    pub fn has_any_stat(&self) -> bool {
        self.xwn8.is_some()
            || self.wn8.is_some()
            || self.has_recent_stat
            || self.achievements.is_some()
    }

    /// Writes the field into the record. The latest arriving value wins.
    ///
    /// Returns `true` if a different value was already present.
    pub fn apply(&mut self, update: TimeStamped<StatField>) -> bool {
        let overwritten = match update.data {
            StatField::Xwn8(value) => replace_differing(&mut self.xwn8, value),
            StatField::Wn8(value) => replace_differing(&mut self.wn8, value),
            StatField::RecentStatAvailable => {
                self.has_recent_stat = true;
                false
            }
            StatField::Achievements(value) => replace_differing(&mut self.achievements, value),
        };

        self.updated_at = Some(match self.updated_at {
            Some(previous) => previous.max(update.utc_timestamp),
            None => update.utc_timestamp,
        });

        overwritten
    }
}

fn replace_differing<T: PartialEq>(slot: &mut Option<T>, value: T) -> bool {
    let differs = slot.as_ref().is_some_and(|current| *current != value);
    *slot = Some(value);
    differs
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn fresh_record_has_no_stat() {
        assert!(!PlayerStatRecord::default().has_any_stat());
    }

    #[test]
    fn apply_sets_fields_and_timestamp() {
        let mut record = PlayerStatRecord::default();

        assert!(!record.apply(TimeStamped::now(StatField::Xwn8(1050))));
        assert!(!record.apply(TimeStamped::now(StatField::RecentStatAvailable)));

        assert_eq!(record.xwn8, Some(1050));
        assert!(record.has_recent_stat);
        assert!(record.has_any_stat());
        assert!(record.updated_at.is_some());
    }

    #[test]
    fn later_value_replaces_earlier_one() {
        let mut record = PlayerStatRecord::default();
        record.apply(TimeStamped::now(StatField::Wn8(48)));

        assert!(!record.apply(TimeStamped::now(StatField::Wn8(48))));
        assert!(record.apply(TimeStamped::now(StatField::Wn8(52))));
        assert_eq!(record.wn8, Some(52));
    }
}
