//! Goal entities, the period-sorted goal list and the storage line codec.

pub mod comparator;
#[allow(clippy::module_inception)]
pub mod goal;
pub mod goal_list;
pub mod period_type;
pub mod record_type;
pub mod storage_line;

pub use goal::Goal;
pub use goal_list::GoalList;
pub use period_type::PeriodType;
pub use record_type::RecordType;
