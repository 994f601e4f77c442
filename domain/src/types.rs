mod timestamped;

pub use timestamped::TimeStamped;
