mod player;
mod region;
mod roster;
mod stat_record;
mod statistics;

pub use player::AccountId;
pub use region::Region;
pub use roster::{Roster, RosterEntry, VehicleId};
pub use stat_record::PlayerStatRecord;
pub use statistics::{Achievements, StatField, StatUpdate};
