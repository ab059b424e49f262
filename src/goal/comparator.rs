use std::cmp::Ordering;

use super::Goal;

/// Orders goals by cadence only, so that a stable sort keeps goals of the same
/// period in insertion order.
pub fn by_period_type(a: &Goal, b: &Goal) -> Ordering {
    a.period_type().rank().cmp(&b.period_type().rank())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::goal::{PeriodType, RecordType};

    #[test]
    fn same_period_compares_equal_regardless_of_metric() {
        let steps = Goal::new(RecordType::Step, PeriodType::Daily, 8_000.0).unwrap();
        let water = Goal::new(RecordType::Water, PeriodType::Daily, 2_000.0).unwrap();
        let sleep = Goal::new(RecordType::Sleep, PeriodType::Weekly, 49.0).unwrap();

        assert_eq!(by_period_type(&steps, &water), Ordering::Equal);
        assert_eq!(by_period_type(&steps, &sleep), Ordering::Less);
        assert_eq!(by_period_type(&sleep, &water), Ordering::Greater);
    }
}
