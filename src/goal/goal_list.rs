use tracing::{debug, warn};

use super::{comparator::by_period_type, storage_line, Goal, PeriodType};
use crate::errors::{GoalError, GoalResult};
use crate::messages::{MESSAGE_CHECK_HEADER, MESSAGE_NO_ELIGIBLE_GOAL, MESSAGE_NO_GOAL};

/// The active goals, kept grouped by period with daily goals first.
#[derive(Debug, Clone, Default)]
pub struct GoalList {
    goals: Vec<Goal>,
}

impl GoalList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a list from the text produced by [`GoalList::goals_to_store`].
    pub fn from_stored(text: &str) -> GoalResult<Self> {
        storage_line::parse_goal_list(text)
    }

    pub fn add_goal(&mut self, goal: Goal) {
        debug!(id = %goal.id(), period = %goal.period_type(), "adding goal");
        self.goals.push(goal);
        // `sort_by` is stable: goals sharing a period keep their insertion order.
        self.goals.sort_by(by_period_type);
    }

    /// Removes the goal at the 0-based `index` and returns its summary.
    pub fn remove_goal(&mut self, index: usize) -> GoalResult<String> {
        if index >= self.goals.len() {
            warn!(index, len = self.goals.len(), "goal removal out of range");
            return Err(GoalError::IndexOutOfRange {
                index,
                len: self.goals.len(),
            });
        }
        let removed = self.goals.remove(index);
        debug!(id = %removed.id(), "removed goal");
        Ok(removed.goal_summary())
    }

    /// Renders the numbered goal table, optionally restricted to one period.
    pub fn goals_to_print(&self, period_filter: Option<PeriodType>) -> String {
        if self.goals.is_empty() {
            return MESSAGE_NO_GOAL.to_string();
        }

        let rows: String = self
            .goals
            .iter()
            .filter(|goal| period_filter.map_or(true, |period| goal.period_type() == period))
            .enumerate()
            .map(|(idx, goal)| format!("{}\t\t{}\n", idx + 1, goal.goal_data()))
            .collect();

        if period_filter.is_some() && rows.is_empty() {
            return MESSAGE_NO_ELIGIBLE_GOAL.to_string();
        }
        format!("{}{}", MESSAGE_CHECK_HEADER, rows)
    }

    /// One storage line per goal, each terminated by a newline.
    pub fn goals_to_store(&self) -> String {
        self.goals
            .iter()
            .map(|goal| format!("{}\n", goal.goal_data_to_store()))
            .collect()
    }

    /// Overwrites the progress of every daily goal. Weekly goals are left alone.
    pub fn update_daily_progress(&mut self, progress: f64) {
        let mut updated = 0usize;
        for goal in self
            .goals
            .iter_mut()
            .filter(|goal| goal.period_type() == PeriodType::Daily)
        {
            goal.set_progress(progress);
            updated += 1;
        }
        debug!(progress, updated, "updated daily goal progress");
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn get(&self, index: usize) -> Option<&Goal> {
        self.goals.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Goal> {
        self.goals.iter()
    }
}
