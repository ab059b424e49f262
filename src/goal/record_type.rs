use std::fmt;

/// Health metric a goal tracks. Each variant owns its unit, wording and
/// storage code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    /// Calories consumed through meals.
    Calorie,
    /// Calories burnt through exercise.
    Exercise,
    Step,
    Water,
    Sleep,
}

impl RecordType {
    pub const ALL: [RecordType; 5] = [
        RecordType::Calorie,
        RecordType::Exercise,
        RecordType::Step,
        RecordType::Water,
        RecordType::Sleep,
    ];

    pub fn unit(self) -> &'static str {
        match self {
            RecordType::Calorie | RecordType::Exercise => "kcal",
            RecordType::Step => "steps",
            RecordType::Water => "ml",
            RecordType::Sleep => "hours",
        }
    }

    /// Human wording used in summaries and table rows.
    pub fn description(self) -> &'static str {
        match self {
            RecordType::Calorie => "calorie intake",
            RecordType::Exercise => "calories burnt",
            RecordType::Step => "step count",
            RecordType::Water => "water intake",
            RecordType::Sleep => "sleep duration",
        }
    }

    /// Token written into storage lines.
    pub fn code(self) -> &'static str {
        match self {
            RecordType::Calorie => "calorie",
            RecordType::Exercise => "exercise",
            RecordType::Step => "step",
            RecordType::Water => "water",
            RecordType::Sleep => "sleep",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.code().eq_ignore_ascii_case(code.trim()))
    }

    /// Renders an amount with the precision that suits the metric.
    pub fn format_amount(self, amount: f64) -> String {
        match self {
            RecordType::Sleep => format!("{:.1} {}", amount, self.unit()),
            _ => format!("{:.0} {}", amount, self.unit()),
        }
    }

    /// Renders an amount at full precision.
    pub fn format_exact(self, amount: f64) -> String {
        format!("{} {}", amount, self.unit())
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_code_resolves_to_its_variant() {
        for kind in RecordType::ALL {
            assert_eq!(RecordType::from_code(kind.code()), Some(kind));
        }
        assert_eq!(RecordType::from_code("weight"), None);
    }

    #[test]
    fn amounts_use_metric_precision() {
        assert_eq!(RecordType::Step.format_amount(8000.4), "8000 steps");
        assert_eq!(RecordType::Sleep.format_amount(7.5), "7.5 hours");
        assert_eq!(RecordType::Exercise.format_amount(350.0), "350 kcal");
    }
}
