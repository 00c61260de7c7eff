//! Describe millisecond timestamps relative to now, in words or as a counter
//!
//! ```
//! use timestamper::Timestamper;
//!
//! let timestamper = Timestamper::relative_to(
//!     1_699_999_880_000.0,
//!     1_700_000_000_000,
//!     timestamper::BUILTIN_LOCALES.get("en")?,
//! )?;
//! assert_eq!(timestamper.to_sentence(), "2 minutes ago");
//! assert_eq!(timestamper.to_counter(), "2:00");
//! # Ok::<(), timestamper::Error>(())
//! ```

pub mod clock;
pub mod duration;
pub mod error;
pub mod locale;
pub mod timestamper;

pub use crate::duration::{DominantUnit, Duration, Unit};
pub use crate::error::{Error, Result};
pub use crate::locale::{Label, Locale, Locales, SentenceOrder, UnitLabels, BUILTIN_LOCALES};
pub use crate::timestamper::{Direction, Summary, Timestamper, DEFAULT_LANG};
