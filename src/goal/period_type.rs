use std::fmt;

/// Cadence over which a goal's progress is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PeriodType {
    Daily,
    Weekly,
}

impl PeriodType {
    pub const ALL: [PeriodType; 2] = [PeriodType::Daily, PeriodType::Weekly];

    /// Position of the period in goal listings. Lower ranks are listed first.
    pub fn rank(self) -> u8 {
        match self {
            PeriodType::Daily => 0,
            PeriodType::Weekly => 1,
        }
    }

    /// Token written into storage lines.
    pub fn code(self) -> &'static str {
        match self {
            PeriodType::Daily => "daily",
            PeriodType::Weekly => "weekly",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|period| period.code().eq_ignore_ascii_case(code.trim()))
    }

    pub fn label(self) -> &'static str {
        match self {
            PeriodType::Daily => "Daily",
            PeriodType::Weekly => "Weekly",
        }
    }
}

impl fmt::Display for PeriodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
