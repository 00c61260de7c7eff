use crate::clock::{now_millis, to_millis};
use crate::duration::{DominantUnit, Duration, Unit};
use crate::error::{validate_timestamp, Result};
use crate::locale::{Locale, SentenceOrder, BUILTIN_LOCALES};
use chrono::{DateTime, TimeZone};
use log::debug;
use serde::Serialize;
use std::fmt::{self, Display, Formatter};
use std::sync::Arc;

/// The language used when none is requested
pub const DEFAULT_LANG: &str = "es";

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Past,
    Now,
    Future,
}

/// A timestamp described relative to the moment it was anchored
#[derive(Clone, Debug)]
pub struct Timestamper {
    timestamp: f64,
    // now - timestamp, negative when the timestamp is in the future
    position_delta: i64,
    delta_millis: u64,
    duration: Duration,
    dominant: DominantUnit,
    locale: Arc<Locale>,
}

/// A serializable snapshot of every rendering of a `Timestamper`
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub direction: Direction,
    pub sentence: String,
    pub short: String,
    pub counter: String,
    pub breakdown: String,
    pub compact: String,
    pub dominant: DominantUnit,
    pub delta_millis: u64,
    pub duration: Duration,
}

impl Timestamper {
    /// Describe a millisecond timestamp relative to the current time in a built-in language
    pub fn new(timestamp: f64, lang: &str) -> Result<Self> {
        let locale = BUILTIN_LOCALES.get(lang)?;
        Self::relative_to(timestamp, now_millis(), locale)
    }

    /// Describe a millisecond timestamp relative to the current time in the default language
    pub fn with_default_lang(timestamp: f64) -> Result<Self> {
        Self::new(timestamp, DEFAULT_LANG)
    }

    /// Describe a date relative to the current time in a built-in language
    pub fn from_datetime<Tz: TimeZone>(date: &DateTime<Tz>, lang: &str) -> Result<Self> {
        Self::new(to_millis(date), lang)
    }

    /// Describe a millisecond timestamp relative to an explicit "now"
    pub fn relative_to(timestamp: f64, now: i64, locale: Arc<Locale>) -> Result<Self> {
        let (position_delta, delta_millis) = Self::anchor(timestamp, now)?;
        let duration = Duration::decompose(delta_millis);
        Ok(Self {
            timestamp,
            position_delta,
            delta_millis,
            duration,
            dominant: duration.dominant_unit(),
            locale,
        })
    }

    /// Validate the timestamp and measure its distance from now
    fn anchor(timestamp: f64, now: i64) -> Result<(i64, u64)> {
        let millis = validate_timestamp(timestamp)?;
        let position_delta = now.saturating_sub(millis);
        debug!("Anchored timestamp {millis} at {now} ({position_delta}ms)");
        Ok((position_delta, position_delta.unsigned_abs()))
    }

    /// Replace the timestamp, measuring it from the current time
    pub fn reanchor(&mut self, timestamp: f64) -> Result<&mut Self> {
        self.reanchor_relative_to(timestamp, now_millis())
    }

    /// Replace the timestamp, measuring it from an explicit "now"
    ///
    /// The instance is left unchanged if the timestamp is invalid.
    pub fn reanchor_relative_to(&mut self, timestamp: f64, now: i64) -> Result<&mut Self> {
        let (position_delta, delta_millis) = Self::anchor(timestamp, now)?;
        self.timestamp = timestamp;
        self.position_delta = position_delta;
        self.delta_millis = delta_millis;
        self.duration = Duration::decompose(delta_millis);
        self.dominant = self.duration.dominant_unit();
        Ok(self)
    }

    pub fn direction(&self) -> Direction {
        if self.dominant.magnitude == 0 {
            Direction::Now
        } else if self.position_delta < 0 {
            Direction::Future
        } else {
            Direction::Past
        }
    }

    /// Return the label of the dominant unit, which is singular only for a magnitude of one
    pub fn grammatical_label(&self) -> &str {
        self.locale.label(self.dominant.unit, self.dominant.magnitude)
    }

    /// Render the full sentence, such as "2 minutes ago" or "hace 2 minutos"
    pub fn to_sentence(&self) -> String {
        let direction_word = match self.direction() {
            Direction::Now => return self.locale.now.clone(),
            Direction::Past => &self.locale.ago_time,
            Direction::Future => &self.locale.in_time,
        };
        let magnitude = self.dominant.magnitude;
        let label = self.grammatical_label();
        match self.locale.sentence_order {
            SentenceOrder::Prefix => format!("{direction_word} {magnitude} {label}"),
            SentenceOrder::Suffix => format!("{magnitude} {label} {direction_word}"),
        }
    }

    /// Render the quantity without a direction, such as "2 minutes"
    pub fn to_short_phrase(&self) -> String {
        if self.direction() == Direction::Now {
            return self.locale.now.clone();
        }
        format!("{} {}", self.dominant.magnitude, self.grammatical_label())
    }

    /// Render the duration like a clock, such as "1:00:00:00" or "1:30"
    pub fn to_counter(&self) -> String {
        let components = self.duration.counter_components();
        // Minutes and seconds are always shown
        let first_shown = components
            .iter()
            .position(|(_, value)| *value > 0)
            .map_or(5, |index| index.min(5));
        components[first_shown..]
            .iter()
            .enumerate()
            .map(|(index, (_, value))| {
                if index == 0 {
                    value.to_string()
                } else {
                    format!("{value:02}")
                }
            })
            .collect::<Vec<_>>()
            .join(":")
    }

    /// Render every nonzero component with its label, such as "1 minute, 30 seconds"
    pub fn to_breakdown(&self) -> String {
        let breakdown = self.duration.breakdown();
        if breakdown.is_empty() {
            return self.locale.now.clone();
        }
        breakdown
            .into_iter()
            .map(|(unit, value)| format!("{value} {}", self.locale.label(unit, value)))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Render every nonzero component with an abbreviated unit, such as "1m:30s"
    pub fn to_compact_counter(&self) -> String {
        let breakdown = self.duration.breakdown();
        if breakdown.is_empty() {
            return format!("0{}", Unit::Seconds.abbreviation());
        }
        breakdown
            .into_iter()
            .enumerate()
            .map(|(index, (unit, value))| {
                let abbreviation = unit.abbreviation();
                if index == 0 {
                    format!("{value}{abbreviation}")
                } else {
                    format!("{value:02}{abbreviation}")
                }
            })
            .collect::<Vec<_>>()
            .join(":")
    }

    /// Capture every rendering at once
    pub fn summary(&self) -> Summary {
        Summary {
            direction: self.direction(),
            sentence: self.to_sentence(),
            short: self.to_short_phrase(),
            counter: self.to_counter(),
            breakdown: self.to_breakdown(),
            compact: self.to_compact_counter(),
            dominant: self.dominant,
            delta_millis: self.delta_millis,
            duration: self.duration,
        }
    }

    pub fn timestamp(&self) -> f64 {
        self.timestamp
    }

    /// Milliseconds from the timestamp to the anchor, negative for future timestamps
    pub fn position_delta(&self) -> i64 {
        self.position_delta
    }

    pub fn delta_millis(&self) -> u64 {
        self.delta_millis
    }

    pub fn duration(&self) -> &Duration {
        &self.duration
    }

    pub fn dominant_unit(&self) -> DominantUnit {
        self.dominant
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn seconds(&self) -> u64 {
        self.duration.seconds
    }

    pub fn minutes(&self) -> u64 {
        self.duration.minutes
    }

    pub fn hours(&self) -> u64 {
        self.duration.hours
    }

    pub fn days(&self) -> u64 {
        self.duration.days
    }

    pub fn months(&self) -> u64 {
        self.duration.months
    }

    pub fn years(&self) -> u64 {
        self.duration.years
    }

    pub fn decades(&self) -> u64 {
        self.duration.decades
    }

    pub fn centuries(&self) -> u64 {
        self.duration.centuries
    }

    pub fn millenniums(&self) -> u64 {
        self.duration.millenniums
    }
}

impl Display for Timestamper {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sentence())
    }
}
