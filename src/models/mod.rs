pub mod daily;
pub mod hourly;
pub mod precip;
pub mod station;

pub use daily::DailyRecord;
pub use hourly::HourlyRecord;
pub use precip::PrecipRecord;
pub use station::{StationKey, StationRecord};
