//! Stagger resolution from a configured style value.
use crate::Error;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr, time::Duration};

/// Fallback stagger in seconds for the standard profile.
pub const STANDARD_FALLBACK: f64 = 0.15;

/// Fallback stagger in seconds for the legacy profile.
pub const LEGACY_FALLBACK: f64 = 0.3;

/// Delay between successive character reveals.
///
/// Always a finite number of seconds greater than zero.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Stagger(f64);

impl Stagger {
    /// Create a stagger; returns `None` unless `seconds`
    /// is finite and positive.
    pub fn new(seconds: f64) -> Option<Self> {
        (seconds.is_finite() && seconds > 0.0).then_some(Self(seconds))
    }

    /// Stagger in seconds.
    pub fn seconds(&self) -> f64 {
        self.0
    }

    /// Stagger as a duration.
    pub fn duration(&self) -> Duration {
        Duration::try_from_secs_f64(self.0).unwrap_or(Duration::MAX)
    }
}

/// Parsing rules for a configured stagger value.
///
/// The two rule sets come from separate page scripts that
/// disagree on the fallback and on unitless values so both
/// are kept.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaggerProfile {
    /// Fallback of 0.15 seconds; unitless numbers are seconds.
    #[default]
    Standard,
    /// Fallback of 0.3 seconds; values without an `ms` or `s`
    /// suffix are ignored.
    Legacy,
}

impl StaggerProfile {
    /// Fallback stagger for this profile.
    pub fn fallback(&self) -> Stagger {
        match self {
            Self::Standard => Stagger(STANDARD_FALLBACK),
            Self::Legacy => Stagger(LEGACY_FALLBACK),
        }
    }

    /// Resolve a configured value into a stagger.
    ///
    /// Absent, unparseable and non-positive values resolve
    /// to the fallback.
    pub fn resolve(&self, configured: Option<&str>) -> Stagger {
        let Some(value) = configured.map(str::trim).filter(|v| !v.is_empty())
        else {
            return self.fallback();
        };

        let number = parse_float_prefix(value);
        let seconds = if value.ends_with("ms") {
            number.map(|n| n / 1000.0)
        } else if value.ends_with('s') {
            number
        } else {
            match self {
                Self::Standard => number,
                Self::Legacy => None,
            }
        };

        match seconds.and_then(Stagger::new) {
            Some(stagger) => stagger,
            None => {
                tracing::debug!(
                    value = %value,
                    profile = %self,
                    "stagger::fallback"
                );
                self.fallback()
            }
        }
    }
}

impl fmt::Display for StaggerProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Standard => "standard",
                Self::Legacy => "legacy",
            }
        )
    }
}

impl FromStr for StaggerProfile {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(Self::Standard),
            "legacy" => Ok(Self::Legacy),
            _ => Err(Error::UnknownProfile(s.to_owned())),
        }
    }
}

/// Resolve the stagger for a configured style value.
pub fn resolve_stagger(
    configured: Option<&str>,
    profile: StaggerProfile,
) -> Stagger {
    profile.resolve(configured)
}

/// Parse the longest leading decimal number, ignoring any
/// trailing text such as a unit suffix.
fn parse_float_prefix(value: &str) -> Option<f64> {
    let bytes = value.as_bytes();
    let digits = |mut at: usize| {
        let start = at;
        while at < bytes.len() && bytes[at].is_ascii_digit() {
            at += 1;
        }
        (at, at - start)
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let (after_int, int_digits) = digits(end);
    end = after_int;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        let (after_frac, count) = digits(end + 1);
        frac_digits = count;
        if int_digits > 0 || frac_digits > 0 {
            end = after_frac;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut at = end + 1;
        if matches!(bytes.get(at), Some(b'+' | b'-')) {
            at += 1;
        }
        let (after_exp, count) = digits(at);
        if count > 0 {
            end = after_exp;
        }
    }

    value[..end].parse().ok()
}
