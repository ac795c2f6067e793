//! Explicit-or-derived value chains
//!
//! Utilization sheets sometimes carry a precomputed figure and sometimes
//! only its inputs. [`Fallback`] takes candidates in priority order and
//! keeps the first one that is non-zero; later candidates are only
//! evaluated when needed.
//!
//! ```
//! use opsboard_core::utils::Fallback;
//!
//! let explicit = 0.0;
//! let paid_day = Fallback::from(explicit).or(480.0).value();
//! assert_eq!(paid_day, 480.0);
//! ```

/// First non-zero candidate wins; 0 when none is
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Fallback(Option<f64>);

impl Fallback {
    pub fn new() -> Self {
        Self(None)
    }

    /// Adds a candidate that is already computed
    #[must_use]
    pub fn or(self, candidate: f64) -> Self {
        self.or_else(|| candidate)
    }

    /// Adds a candidate computed only if nothing before it was usable
    #[must_use]
    pub fn or_else(self, candidate: impl FnOnce() -> f64) -> Self {
        match self.0 {
            Some(_) => self,
            None => Self(Some(candidate()).filter(|v| is_present(*v))),
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.0.is_some()
    }

    pub fn value(self) -> f64 {
        self.0.unwrap_or(0.0)
    }
}

impl From<f64> for Fallback {
    fn from(candidate: f64) -> Self {
        Self::new().or(candidate)
    }
}

fn is_present(value: f64) -> bool {
    value != 0.0 && !value.is_nan()
}
