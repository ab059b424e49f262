//! Fixed display strings handed back to the command layer.

pub const MESSAGE_NO_GOAL: &str = "You have not set any goals yet.";
pub const MESSAGE_NO_ELIGIBLE_GOAL: &str = "There is no goal matching the given period.";
pub const MESSAGE_CHECK_HEADER: &str =
    "Here are your goals:\nIndex\t\tPeriod\t\tType\t\tTarget\t\tProgress\t\tSet on\t\tStatus\n";
