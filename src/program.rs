/// Invocation parameters for one generated program.
///
/// Non-positive or absent values fall back to the documented defaults
/// rather than erroring, matching the CLI contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Program {
    /// Number of weeks in the program (one sheet per week).
    pub weeks: u32,
    /// Training frequency in days per week.
    pub frequency: u32,
    /// Number of exercise slots per workout.
    pub slots: u32,
    /// Number of sets per exercise slot.
    pub sets: u32,
}

impl Default for Program {
    fn default() -> Self {
        Self {
            weeks: 8,
            frequency: 3,
            slots: 3,
            sets: 10,
        }
    }
}

impl Program {
    pub fn from_args(
        weeks: Option<i64>,
        frequency: Option<i64>,
        slots: Option<i64>,
        sets: Option<i64>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            weeks: positive_or(weeks, defaults.weeks),
            frequency: positive_or(frequency, defaults.frequency),
            slots: positive_or(slots, defaults.slots),
            sets: positive_or(sets, defaults.sets),
        }
    }
}

fn positive_or(value: Option<i64>, default: u32) -> u32 {
    value
        .and_then(|v| u32::try_from(v).ok())
        .filter(|&v| v > 0)
        .unwrap_or(default)
}
