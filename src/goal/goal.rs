use chrono::{Local, NaiveDate};
use uuid::Uuid;

use super::{PeriodType, RecordType};
use crate::errors::{GoalError, GoalResult};
use crate::utils::date_format::format_date;

/// A numeric target for one health metric over one period.
///
/// The target and creation date are fixed once built; progress is freely
/// overwritten by whoever feeds records into the goal. Achievement is always
/// derived from the two numbers and never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Goal {
    id: Uuid,
    day_set: NaiveDate,
    record_type: RecordType,
    period_type: PeriodType,
    target: f64,
    progress: f64,
}

impl Goal {
    /// Field separator used by storage lines.
    pub const SEPARATOR: &'static str = " | ";

    /// Creates a goal dated today.
    pub fn new(
        record_type: RecordType,
        period_type: PeriodType,
        target: f64,
    ) -> GoalResult<Self> {
        Self::with_day_set(record_type, period_type, target, Local::now().date_naive())
    }

    /// Fails with [`GoalError::InvalidTarget`] unless `target` is finite and
    /// non-negative.
    pub fn with_day_set(
        record_type: RecordType,
        period_type: PeriodType,
        target: f64,
        day_set: NaiveDate,
    ) -> GoalResult<Self> {
        if !target.is_finite() || target < 0.0 {
            return Err(GoalError::InvalidTarget(target));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            day_set,
            record_type,
            period_type,
            target,
            progress: 0.0,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn set_progress(&mut self, progress: f64) {
        self.progress = progress;
    }

    pub fn initialize_progress(&mut self) {
        self.progress = 0.0;
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn day_set(&self) -> NaiveDate {
        self.day_set
    }

    pub fn record_type(&self) -> RecordType {
        self.record_type
    }

    pub fn period_type(&self) -> PeriodType {
        self.period_type
    }

    pub fn is_achieved(&self) -> bool {
        self.progress >= self.target
    }

    pub fn achieved_label(&self) -> &'static str {
        if self.is_achieved() {
            "(achieved)"
        } else {
            "(not achieved)"
        }
    }

    /// One-line description, reported back when the goal is removed.
    pub fn goal_summary(&self) -> String {
        format!(
            "{} {} goal of {}",
            self.period_type.code(),
            self.record_type.description(),
            self.record_type.format_amount(self.target)
        )
    }

    /// Row shown in goal listings, tab separated to line up with the header.
    pub fn goal_data(&self) -> String {
        let mut target = self.record_type.format_amount(self.target);
        let mut progress = self.record_type.format_amount(self.progress);
        // Rounding must not make an unmet goal look met.
        if target == progress && !self.is_achieved() {
            target = self.record_type.format_exact(self.target);
            progress = self.record_type.format_exact(self.progress);
        }
        format!(
            "{}\t\t{}\t\t{}\t\t{}\t\t{}\t\t{}",
            self.period_type.label(),
            self.record_type.description(),
            target,
            progress,
            format_date(self.day_set),
            self.achieved_label()
        )
    }

    pub fn progress_unit(&self) -> &'static str {
        self.record_type.unit()
    }

    /// Encodes the goal as `record | period | target | progress | dd-MM-yyyy`.
    pub fn goal_data_to_store(&self) -> String {
        [
            self.record_type.code().to_string(),
            self.period_type.code().to_string(),
            self.target.to_string(),
            self.progress.to_string(),
            format_date(self.day_set),
        ]
        .join(Self::SEPARATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steps_goal(target: f64) -> Goal {
        Goal::with_day_set(
            RecordType::Step,
            PeriodType::Daily,
            target,
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn achieved_once_progress_reaches_target() {
        let mut goal = steps_goal(10_000.0);
        assert!(!goal.is_achieved());
        assert_eq!(goal.achieved_label(), "(not achieved)");

        goal.set_progress(10_000.0);
        assert!(goal.is_achieved());
        assert_eq!(goal.achieved_label(), "(achieved)");

        goal.set_progress(12_500.0);
        assert!(goal.is_achieved());
    }

    #[test]
    fn initialize_progress_resets_to_zero() {
        let mut goal = steps_goal(5.0);
        goal.set_progress(7.0);
        goal.initialize_progress();
        assert_eq!(goal.progress(), 0.0);
        assert_eq!(goal.target(), 5.0);
    }

    #[test]
    fn zero_target_is_achieved_immediately() {
        assert!(steps_goal(0.0).is_achieved());
    }

    #[test]
    fn rejects_negative_or_non_finite_targets() {
        for target in [-1.0, f64::NAN, f64::INFINITY] {
            let err = Goal::new(RecordType::Step, PeriodType::Daily, target).unwrap_err();
            assert!(matches!(err, GoalError::InvalidTarget(_)));
        }
    }

    #[test]
    fn unmet_goal_never_shows_progress_equal_to_target() {
        let mut goal = Goal::with_day_set(
            RecordType::Calorie,
            PeriodType::Daily,
            2_000.0,
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        )
        .unwrap();
        goal.set_progress(1_999.6);
        assert_eq!(
            goal.goal_data(),
            "Daily\t\tcalorie intake\t\t2000 kcal\t\t1999.6 kcal\t\t01-05-2024\t\t(not achieved)"
        );

        goal.set_progress(2_000.2);
        assert!(goal.goal_data().contains("\t\t2000 kcal\t\t2000 kcal\t\t"));
        assert!(goal.goal_data().ends_with("(achieved)"));
    }

    #[test]
    fn new_goals_are_dated_today() {
        let goal = Goal::new(RecordType::Water, PeriodType::Weekly, 14_000.0).unwrap();
        assert_eq!(goal.day_set(), Local::now().date_naive());
        assert_eq!(goal.progress(), 0.0);
    }

    #[test]
    fn identical_fields_still_yield_distinct_goals() {
        assert_ne!(steps_goal(1.0).id(), steps_goal(1.0).id());
    }

    #[test]
    fn formats_summary_row_and_storage_line() {
        let mut goal = Goal::with_day_set(
            RecordType::Calorie,
            PeriodType::Weekly,
            14_000.0,
            NaiveDate::from_ymd_opt(2024, 1, 9).unwrap(),
        )
        .unwrap();
        goal.set_progress(2_500.4);

        assert_eq!(goal.goal_summary(), "weekly calorie intake goal of 14000 kcal");
        assert_eq!(goal.progress_unit(), "kcal");
        assert_eq!(
            goal.goal_data(),
            "Weekly\t\tcalorie intake\t\t14000 kcal\t\t2500 kcal\t\t09-01-2024\t\t(not achieved)"
        );
        assert_eq!(
            goal.goal_data_to_store(),
            "calorie | weekly | 14000 | 2500.4 | 09-01-2024"
        );
    }
}
