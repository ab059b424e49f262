#![doc(test(attr(deny(warnings))))]

//! Goal tracking for a personal health log: daily and weekly numeric targets,
//! their progress, listing output and the line-based storage format.

pub mod config;
pub mod errors;
pub mod goal;
pub mod messages;
pub mod utils;

pub use errors::{GoalError, GoalResult};
pub use goal::{Goal, GoalList, PeriodType, RecordType};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Health goals tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
