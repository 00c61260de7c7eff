use serde::Serialize;
use std::fmt::{self, Display, Formatter};

// Number of milliseconds in a second
const MS_SECOND: u64 = 1000;

// A month is 365/12 days, so conversions between days and months are done in twelfths of a day
const DAYS_PER_YEAR: u64 = 365;
const MONTHS_PER_YEAR: u64 = 12;

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Seconds,
    Minutes,
    Hours,
    Days,
    Months,
    Years,
    Decades,
    Centuries,
    Millenniums,
}

impl Unit {
    /// Every unit, from the smallest to the largest
    pub const ALL: [Self; 9] = [
        Self::Seconds,
        Self::Minutes,
        Self::Hours,
        Self::Days,
        Self::Months,
        Self::Years,
        Self::Decades,
        Self::Centuries,
        Self::Millenniums,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Seconds => "seconds",
            Self::Minutes => "minutes",
            Self::Hours => "hours",
            Self::Days => "days",
            Self::Months => "months",
            Self::Years => "years",
            Self::Decades => "decades",
            Self::Centuries => "centuries",
            Self::Millenniums => "millenniums",
        }
    }

    /// Short suffix used by the compact counter
    pub fn abbreviation(self) -> &'static str {
        match self {
            Self::Seconds => "s",
            Self::Minutes => "m",
            Self::Hours => "h",
            Self::Days => "d",
            Self::Months => "mo",
            Self::Years => "y",
            Self::Decades => "de",
            Self::Centuries => "c",
            Self::Millenniums => "mi",
        }
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Cumulative magnitudes of a span of time at every unit
///
/// Each magnitude is the total number of whole units that fit in the span, not the remainder left
/// over after the larger units, so `hours` of a two day span is 48.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Duration {
    pub seconds: u64,
    pub minutes: u64,
    pub hours: u64,
    pub days: u64,
    pub months: u64,
    pub years: u64,
    pub decades: u64,
    pub centuries: u64,
    pub millenniums: u64,
}

/// The largest unit with a nonzero magnitude
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct DominantUnit {
    pub unit: Unit,
    pub magnitude: u64,
}

impl Duration {
    /// Split a number of milliseconds into cumulative magnitudes
    pub fn decompose(delta_millis: u64) -> Self {
        let seconds = delta_millis / MS_SECOND;
        let minutes = seconds / 60;
        let hours = minutes / 60;
        let days = hours / 24;
        // floor(days / (365 / 12)) without going through floating point
        let months = days * MONTHS_PER_YEAR / DAYS_PER_YEAR;
        let years = months / MONTHS_PER_YEAR;
        let decades = years / 10;
        let centuries = decades / 10;
        let millenniums = centuries / 10;

        Self {
            seconds,
            minutes,
            hours,
            days,
            months,
            years,
            decades,
            centuries,
            millenniums,
        }
    }

    /// Return the magnitude of a single unit
    pub fn get(&self, unit: Unit) -> u64 {
        match unit {
            Unit::Seconds => self.seconds,
            Unit::Minutes => self.minutes,
            Unit::Hours => self.hours,
            Unit::Days => self.days,
            Unit::Months => self.months,
            Unit::Years => self.years,
            Unit::Decades => self.decades,
            Unit::Centuries => self.centuries,
            Unit::Millenniums => self.millenniums,
        }
    }

    /// Find the largest unit with a nonzero magnitude, falling back to zero seconds
    pub fn dominant_unit(&self) -> DominantUnit {
        Unit::ALL
            .iter()
            .rev()
            .map(|&unit| DominantUnit {
                unit,
                magnitude: self.get(unit),
            })
            .find(|dominant| dominant.magnitude > 0)
            .unwrap_or(DominantUnit {
                unit: Unit::Seconds,
                magnitude: 0,
            })
    }

    /// Return the clock-like components of the duration, from decades down to seconds
    ///
    /// Every component except decades is the remainder left over by the next larger unit.
    /// Decades stays cumulative because it leads the counter.
    pub fn counter_components(&self) -> [(Unit, u64); 7] {
        [
            (Unit::Decades, self.decades),
            (Unit::Years, self.years % 10),
            (Unit::Months, self.months % MONTHS_PER_YEAR),
            (Unit::Days, self.days * MONTHS_PER_YEAR % DAYS_PER_YEAR / MONTHS_PER_YEAR),
            (Unit::Hours, self.hours % 24),
            (Unit::Minutes, self.minutes % 60),
            (Unit::Seconds, self.seconds % 60),
        ]
    }

    /// Return the nonzero counter components, most significant first
    pub fn breakdown(&self) -> Vec<(Unit, u64)> {
        self.counter_components()
            .into_iter()
            .filter(|(_, value)| *value > 0)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS_MINUTE: u64 = MS_SECOND * 60;
    const MS_HOUR: u64 = MS_MINUTE * 60;
    const MS_DAY: u64 = MS_HOUR * 24;

    #[test]
    fn test_decompose_zero() {
        assert_eq!(Duration::decompose(0), Duration::default());
    }

    #[test]
    fn test_decompose_sub_second() {
        assert_eq!(Duration::decompose(999).seconds, 0);
        assert_eq!(Duration::decompose(1000).seconds, 1);
    }

    #[test]
    fn test_decompose_is_cumulative() {
        let duration = Duration::decompose(2 * MS_DAY + 3 * MS_HOUR);
        assert_eq!(duration.days, 2);
        assert_eq!(duration.hours, 51);
        assert_eq!(duration.minutes, 51 * 60);
        assert_eq!(duration.seconds, 51 * 3600);
        assert_eq!(duration.months, 0);
    }

    #[test]
    fn test_decompose_chain() {
        for delta in [0, 59_999, 3_600_000, 987_654_321, 31_536_000_000, 123_456_789_012_345] {
            let duration = Duration::decompose(delta);
            assert_eq!(duration.seconds, delta / 1000);
            assert_eq!(duration.minutes, duration.seconds / 60);
            assert_eq!(duration.hours, duration.minutes / 60);
            assert_eq!(duration.days, duration.hours / 24);
            // months is the floor of days / (365 / 12)
            assert!(duration.months * 365 <= duration.days * 12);
            assert!(duration.days * 12 < (duration.months + 1) * 365);
            assert_eq!(duration.years, duration.months / 12);
            assert_eq!(duration.decades, duration.years / 10);
            assert_eq!(duration.centuries, duration.decades / 10);
            assert_eq!(duration.millenniums, duration.centuries / 10);
        }
    }

    #[test]
    fn test_months_boundary() {
        assert_eq!(Duration::decompose(30 * MS_DAY).months, 0);
        assert_eq!(Duration::decompose(31 * MS_DAY).months, 1);
        assert_eq!(Duration::decompose(365 * MS_DAY).months, 12);
        assert_eq!(Duration::decompose(365 * MS_DAY).years, 1);
    }

    #[test]
    fn test_dominant_unit_zero() {
        assert_eq!(
            Duration::decompose(0).dominant_unit(),
            DominantUnit {
                unit: Unit::Seconds,
                magnitude: 0,
            }
        );
    }

    #[test]
    fn test_dominant_unit_prefers_largest() {
        assert_eq!(
            Duration::decompose(400 * MS_DAY).dominant_unit(),
            DominantUnit {
                unit: Unit::Years,
                magnitude: 1,
            }
        );
        assert_eq!(
            Duration::decompose(90 * MS_SECOND).dominant_unit(),
            DominantUnit {
                unit: Unit::Minutes,
                magnitude: 1,
            }
        );
        assert_eq!(
            Duration::decompose(45 * MS_SECOND).dominant_unit(),
            DominantUnit {
                unit: Unit::Seconds,
                magnitude: 45,
            }
        );
    }

    #[test]
    fn test_dominant_unit_millenniums() {
        assert_eq!(
            Duration::decompose(1100 * 365 * MS_DAY).dominant_unit(),
            DominantUnit {
                unit: Unit::Millenniums,
                magnitude: 1,
            }
        );
    }

    #[test]
    fn test_counter_components() {
        let duration = Duration::decompose(MS_DAY + 2 * MS_HOUR + 3 * MS_MINUTE + 4 * MS_SECOND);
        assert_eq!(
            duration.counter_components().map(|(_, value)| value),
            [0, 0, 0, 1, 2, 3, 4]
        );
    }

    #[test]
    fn test_counter_days_remainder() {
        // 31 days is one month and less than a day
        let duration = Duration::decompose(31 * MS_DAY);
        assert_eq!(
            duration.counter_components().map(|(_, value)| value),
            [0, 0, 1, 0, 0, 0, 0]
        );

        let duration = Duration::decompose(45 * MS_DAY);
        assert_eq!(
            duration.counter_components().map(|(_, value)| value),
            [0, 0, 1, 14, 0, 0, 0]
        );
    }

    #[test]
    fn test_breakdown() {
        assert_eq!(
            Duration::decompose(90 * MS_SECOND).breakdown(),
            vec![(Unit::Minutes, 1), (Unit::Seconds, 30)]
        );
        assert_eq!(
            Duration::decompose(MS_DAY + 5 * MS_SECOND).breakdown(),
            vec![(Unit::Days, 1), (Unit::Seconds, 5)]
        );
        assert!(Duration::decompose(0).breakdown().is_empty());
    }
}
