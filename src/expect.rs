//! The closed set of matchers usable inside test bodies.
//!
//! [`expect`] wraps a value into an [`Expectation`], whose only operations are the
//! matchers below. Every matcher returns a `Result`, so test bodies can return it directly or
//! chain several with `?`:
//!
//! ```
//! use slip::{ExpectationError, expect};
//!
//! fn body() -> Result<(), ExpectationError> {
//!     expect(0.1 + 0.2).to_be_precisely(0.3)?;
//!     expect("slip").to_equal("slip")
//! }
//!
//! assert!(body().is_ok());
//! ```
//!
//! Misspelled matchers do not compile. For matchers picked at runtime, [`MatcherName`] and
//! [`Expectation::by_name`] reject unknown names before comparing anything.

use std::{fmt::Debug, str::FromStr};

use thiserror::Error;

/// Precision used by [`Expectation::to_be_precisely`].
pub const DEFAULT_PRECISION: u32 = 6;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ExpectationError {
    #[error("expect({actual}).to_equal({expected})")]
    NotEqual { actual: String, expected: String },

    #[error("expect({actual}).to_be_precisely({expected}, {precision})")]
    NotPrecise {
        actual: String,
        expected: String,
        precision: u32,
    },

    #[error("expect(...).{name} is not a supported expectation.")]
    Unsupported { name: String },
}

/// Start an expectation about `actual`.
pub fn expect<T>(actual: T) -> Expectation<T> {
    Expectation { actual }
}

/// A one-shot assertion about a single value.
#[derive(Debug, Clone, Copy)]
#[must_use = "an expectation does nothing unless a matcher is called"]
pub struct Expectation<T> {
    actual: T,
}

impl<T: Debug> Expectation<T> {
    /// Fails unless the value equals `expected`.
    pub fn to_equal<U>(self, expected: U) -> Result<(), ExpectationError>
    where
        T: PartialEq<U>,
        U: Debug,
    {
        match self.actual == expected {
            true => Ok(()),
            false => Err(ExpectationError::NotEqual {
                actual: format!("{:?}", self.actual),
                expected: format!("{expected:?}"),
            }),
        }
    }
}

impl<T: Into<f64> + Copy + Debug> Expectation<T> {
    /// Fails unless the value is within `10^-6` of `expected`.
    pub fn to_be_precisely<E>(self, expected: E) -> Result<(), ExpectationError>
    where
        E: Into<f64> + Copy + Debug,
    {
        self.to_be_precisely_to(expected, DEFAULT_PRECISION)
    }

    /// Fails unless the value is strictly closer than `10^-precision` to `expected`.
    ///
    /// Equal values always pass, even once the tolerance underflows to zero.
    pub fn to_be_precisely_to<E>(
        self,
        expected: E,
        precision: u32,
    ) -> Result<(), ExpectationError>
    where
        E: Into<f64> + Copy + Debug,
    {
        let (actual, wanted): (f64, f64) = (self.actual.into(), expected.into());
        let exponent = i32::try_from(precision).unwrap_or(i32::MAX);
        let tolerance = 10f64.powi(-exponent);
        match actual == wanted || (actual - wanted).abs() < tolerance {
            true => Ok(()),
            false => Err(ExpectationError::NotPrecise {
                actual: format!("{:?}", self.actual),
                expected: format!("{expected:?}"),
                precision,
            }),
        }
    }

    /// Run the matcher called `name` against `expected`.
    ///
    /// The name is checked first, an unknown one fails without comparing anything.
    /// `to_be_precisely` uses [`DEFAULT_PRECISION`]. Only numeric values can pick both
    /// matchers this way, other values check the name with [`MatcherName`] and call
    /// [`Expectation::to_equal`] directly.
    pub fn by_name(self, name: &str, expected: T) -> Result<(), ExpectationError>
    where
        T: PartialEq,
    {
        match name.parse::<MatcherName>()? {
            MatcherName::ToEqual => self.to_equal(expected),
            MatcherName::ToBePrecisely => self.to_be_precisely(expected),
        }
    }
}

/// The names of all supported matchers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatcherName {
    ToEqual,
    ToBePrecisely,
}

impl MatcherName {
    pub const fn as_str(self) -> &'static str {
        match self {
            MatcherName::ToEqual => "to_equal",
            MatcherName::ToBePrecisely => "to_be_precisely",
        }
    }
}

impl FromStr for MatcherName {
    type Err = ExpectationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "to_equal" => Ok(MatcherName::ToEqual),
            "to_be_precisely" => Ok(MatcherName::ToBePrecisely),
            name => Err(ExpectationError::Unsupported {
                name: name.to_string(),
            }),
        }
    }
}
