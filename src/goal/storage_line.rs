//! Parser for the storage lines produced by [`Goal::goal_data_to_store`].

use tracing::warn;

use super::{Goal, GoalList, PeriodType, RecordType};
use crate::errors::{GoalError, GoalResult};
use crate::utils::date_format::parse_date;

const FIELD_COUNT: usize = 5;

/// Rebuilds a goal from one storage line. `line_no` is 1-based and only used
/// for error reporting.
pub fn parse_goal(line: &str, line_no: usize) -> GoalResult<Goal> {
    let fail = |reason: String| GoalError::Parse {
        line: line_no,
        reason,
    };

    let fields: Vec<&str> = line.trim().split(Goal::SEPARATOR).map(str::trim).collect();
    if fields.len() != FIELD_COUNT {
        return Err(fail(format!(
            "expected {} fields, found {}",
            FIELD_COUNT,
            fields.len()
        )));
    }

    let record_type = RecordType::from_code(fields[0])
        .ok_or_else(|| fail(format!("unknown record type `{}`", fields[0])))?;
    let period_type = PeriodType::from_code(fields[1])
        .ok_or_else(|| fail(format!("unknown period type `{}`", fields[1])))?;
    let target =
        parse_number(fields[2]).map_err(|reason| fail(format!("target {}", reason)))?;
    let progress =
        parse_number(fields[3]).map_err(|reason| fail(format!("progress {}", reason)))?;
    let day_set =
        parse_date(fields[4]).map_err(|err| fail(format!("date `{}`: {}", fields[4], err)))?;

    let mut goal = Goal::with_day_set(record_type, period_type, target, day_set)
        .map_err(|err| fail(err.to_string()))?;
    // Progress is never validated on the way in, so any value written back
    // out (NaN and infinities included) must load again.
    goal.set_progress(progress);
    Ok(goal)
}

/// Parses a whole goals file. Blank lines are skipped; the first malformed
/// line aborts the load.
pub fn parse_goal_list(text: &str) -> GoalResult<GoalList> {
    let mut goals = GoalList::new();
    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_goal(line, idx + 1) {
            Ok(goal) => goals.add_goal(goal),
            Err(err) => {
                warn!(line = idx + 1, "rejecting stored goal: {}", err);
                return Err(err);
            }
        }
    }
    Ok(goals)
}

fn parse_number(raw: &str) -> Result<f64, String> {
    raw.parse::<f64>()
        .map_err(|_| format!("`{}` is not a number", raw))
}
