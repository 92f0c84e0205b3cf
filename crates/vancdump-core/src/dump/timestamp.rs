//! Millisecond timestamp normalisation for RCWT records.
//!
//! Steps run in a fixed order on every record: one-shot zero-basing, constant
//! offset, optional rounding to a frame boundary, optional delta encoding.
//! Rounding happens before deltas so that deltas are frame-exact.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Rational frames-per-second value from the fixed catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRate {
    name: &'static str,
    numerator: u32,
    denominator: u32,
}

const FRAME_RATES: [FrameRate; 10] = [
    FrameRate::new("23.976", 24_000, 1_001),
    FrameRate::new("24", 24, 1),
    FrameRate::new("25", 25, 1),
    FrameRate::new("29.97", 30_000, 1_001),
    FrameRate::new("30", 30, 1),
    FrameRate::new("47.952", 48_000, 1_001),
    FrameRate::new("48", 48, 1),
    FrameRate::new("50", 50, 1),
    FrameRate::new("59.94", 60_000, 1_001),
    FrameRate::new("60", 60, 1),
];

#[derive(Debug, Clone, Error)]
#[error("unknown frame rate '{name}' (expected one of: {})", FrameRate::names().join(", "))]
pub struct UnknownFrameRate {
    pub name: String,
}

impl FrameRate {
    const fn new(name: &'static str, numerator: u32, denominator: u32) -> Self {
        Self {
            name,
            numerator,
            denominator,
        }
    }

    /// Look up a catalogue entry by name, ignoring ASCII case.
    ///
    /// # Examples
    /// ```
    /// use vancdump_core::FrameRate;
    ///
    /// let rate = FrameRate::from_name("29.97").unwrap();
    /// assert_eq!((rate.numerator(), rate.denominator()), (30_000, 1_001));
    /// assert!(FrameRate::from_name("31").is_none());
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        FRAME_RATES
            .iter()
            .find(|rate| rate.name.eq_ignore_ascii_case(name.trim()))
            .copied()
    }

    pub fn names() -> Vec<&'static str> {
        FRAME_RATES.iter().map(|rate| rate.name).collect()
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn numerator(&self) -> u32 {
        self.numerator
    }

    pub fn denominator(&self) -> u32 {
        self.denominator
    }

    /// Move a millisecond timestamp to the nearest frame boundary.
    ///
    /// Half-frame ties round up; negative times use floor division so the
    /// grid is continuous across zero.
    ///
    /// # Examples
    /// ```
    /// use vancdump_core::FrameRate;
    ///
    /// let rate = FrameRate::from_name("25").unwrap();
    /// assert_eq!(rate.round_ms(19), 0);
    /// assert_eq!(rate.round_ms(20), 40);
    /// assert_eq!(rate.round_ms(-21), -40);
    /// ```
    pub fn round_ms(&self, ms: i64) -> i64 {
        let num = i128::from(self.numerator);
        let den = i128::from(self.denominator);
        let frame = (i128::from(ms) * num + den * 500).div_euclid(den * 1000);
        let rounded = (frame * 1000 * den + num / 2).div_euclid(num);
        i64::try_from(rounded).unwrap_or(if rounded < 0 { i64::MIN } else { i64::MAX })
    }
}

impl fmt::Display for FrameRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl FromStr for FrameRate {
    type Err = UnknownFrameRate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FrameRate::from_name(s).ok_or_else(|| UnknownFrameRate {
            name: s.to_string(),
        })
    }
}

/// Timestamp controls. All off by default, which passes times through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimestampOptions {
    pub offset_ms: i64,
    pub start_at_zero: bool,
    pub time_deltas: bool,
    pub round_to: Option<FrameRate>,
}

/// Cross-record state; the only mutable state a decode carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TimestampState {
    last_time: i64,
    start_at_zero_pending: bool,
    offset_ms: i64,
}

/// Applies `TimestampOptions` to a stream of raw record times.
///
/// # Examples
/// ```
/// use vancdump_core::{TimestampOptions, TimestampTransformer};
///
/// let mut transform = TimestampTransformer::new(TimestampOptions {
///     start_at_zero: true,
///     time_deltas: true,
///     ..TimestampOptions::default()
/// });
/// assert_eq!(transform.apply(5_000), 0);
/// assert_eq!(transform.apply(5_040), 40);
/// assert_eq!(transform.apply(5_100), 60);
/// ```
#[derive(Debug, Clone)]
pub struct TimestampTransformer {
    round_to: Option<FrameRate>,
    time_deltas: bool,
    state: TimestampState,
}

impl TimestampTransformer {
    pub fn new(options: TimestampOptions) -> Self {
        Self {
            round_to: options.round_to,
            time_deltas: options.time_deltas,
            state: TimestampState {
                last_time: 0,
                start_at_zero_pending: options.start_at_zero,
                offset_ms: options.offset_ms,
            },
        }
    }

    pub fn apply(&mut self, raw: i64) -> i64 {
        if self.state.start_at_zero_pending {
            self.state.start_at_zero_pending = false;
            self.state.offset_ms = self.state.offset_ms.saturating_sub(raw);
        }

        let mut time = raw.saturating_add(self.state.offset_ms);
        if let Some(rate) = self.round_to {
            time = rate.round_ms(time);
        }

        let absolute = time;
        if self.time_deltas {
            time = absolute.saturating_sub(self.state.last_time);
        }
        self.state.last_time = absolute;
        time
    }
}
