mod builtin;
mod registry;

pub use self::registry::{Locales, BUILTIN_LOCALES};
use crate::duration::Unit;
use crate::error::{Error, Result};
use log::debug;
use serde::Deserialize;
use std::fs::read_to_string;
use std::path::Path;

/// Where the direction word goes relative to the quantity
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum SentenceOrder {
    /// "hace 2 minutos"
    Prefix,
    /// "2 minutes ago"
    Suffix,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Label {
    pub singular: String,
    pub plural: String,
}

impl Label {
    pub fn new(singular: &str, plural: &str) -> Self {
        Self {
            singular: singular.to_owned(),
            plural: plural.to_owned(),
        }
    }

    /// Pick the grammatical form for a magnitude, which is singular only for exactly one
    pub fn for_magnitude(&self, magnitude: u64) -> &str {
        if magnitude == 1 {
            &self.singular
        } else {
            &self.plural
        }
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct UnitLabels {
    pub seconds: Label,
    pub minutes: Label,
    pub hours: Label,
    pub days: Label,
    pub months: Label,
    pub years: Label,
    pub decades: Label,
    pub centuries: Label,
    pub millenniums: Label,
}

impl UnitLabels {
    pub fn get(&self, unit: Unit) -> &Label {
        match unit {
            Unit::Seconds => &self.seconds,
            Unit::Minutes => &self.minutes,
            Unit::Hours => &self.hours,
            Unit::Days => &self.days,
            Unit::Months => &self.months,
            Unit::Years => &self.years,
            Unit::Decades => &self.decades,
            Unit::Centuries => &self.centuries,
            Unit::Millenniums => &self.millenniums,
        }
    }
}

/// The words a language uses to describe relative time
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct Locale {
    pub now: String,
    pub ago_time: String,
    pub in_time: String,
    pub sentence_order: SentenceOrder,
    pub units: UnitLabels,
}

impl Locale {
    /// Return the label of a unit in the grammatical form matching the magnitude
    pub fn label(&self, unit: Unit, magnitude: u64) -> &str {
        self.units.get(unit).for_magnitude(magnitude)
    }

    /// Parse a locale from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Load a locale from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        debug!("Loading locale {}", path.display());
        let toml_str = read_to_string(path).map_err(|err| Error::LocaleFile {
            path: path.to_owned(),
            message: err.to_string(),
        })?;
        Self::from_toml(&toml_str).map_err(|err| Error::LocaleFile {
            path: path.to_owned(),
            message: err.to_string(),
        })
    }
}
