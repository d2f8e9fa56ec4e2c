//! Strongly-typed value objects used by domain entities and filter records.
//!
//! These wrappers enforce basic invariants (positive identifiers, page sizes
//! from the allowed set, trimmed names) so that once a value reaches the
//! domain layer it can be treated as trusted.
use std::fmt::{Display, Formatter};
use std::ops::Deref;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero or negative.
    #[error("id must be greater than zero")]
    NonPositiveId,
    /// Provided page number is zero.
    #[error("page must be greater than zero")]
    NonPositivePage,
    /// Provided page size is not one of the allowed values.
    #[error("per_page must be one of 5, 10, 25, 50 or 100, got {0}")]
    InvalidPerPage(u32),
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided value failed custom validation.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId)
                }
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

id_newtype!(ShopId, "Unique identifier for a shop listing.");

/// Page sizes a list view may request.
pub const ALLOWED_PER_PAGE: [u32; 5] = [5, 10, 25, 50, 100];

/// Number of rows shown on one page, restricted to [`ALLOWED_PER_PAGE`].
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "u32", into = "u32")]
pub struct PerPage(u32);

impl PerPage {
    pub const DEFAULT: Self = Self(10);

    /// Accepts only values from the allowed set.
    pub fn new(value: u32) -> Result<Self, TypeConstraintError> {
        if ALLOWED_PER_PAGE.contains(&value) {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::InvalidPerPage(value))
        }
    }

    /// Clamps an arbitrary requested size into the allowed set.
    ///
    /// Non-positive values fall back to [`PerPage::DEFAULT`]; anything else
    /// becomes the smallest allowed size that fits it, capped at the largest.
    pub fn clamp(raw: i64) -> Self {
        if raw <= 0 {
            return Self::DEFAULT;
        }
        let size = ALLOWED_PER_PAGE
            .iter()
            .copied()
            .find(|&allowed| i64::from(allowed) >= raw)
            .unwrap_or(ALLOWED_PER_PAGE[ALLOWED_PER_PAGE.len() - 1]);
        Self(size)
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    /// Page size as `usize` for offset arithmetic.
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl Default for PerPage {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Display for PerPage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for PerPage {
    type Error = TypeConstraintError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PerPage> for u32 {
    fn from(value: PerPage) -> Self {
        value.0
    }
}

/// One-based page number.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "u32", into = "u32")]
pub struct PageNumber(u32);

impl PageNumber {
    pub const FIRST: Self = Self(1);

    pub fn new(value: u32) -> Result<Self, TypeConstraintError> {
        if value > 0 {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::NonPositivePage)
        }
    }

    /// Lenient conversion used for raw query input: anything below one is page one.
    pub fn clamp(raw: i64) -> Self {
        Self(u32::try_from(raw.max(1)).unwrap_or(u32::MAX))
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// The previous page, if this is not the first one.
    pub fn prev(self) -> Option<Self> {
        (self.0 > 1).then(|| Self(self.0 - 1))
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl Display for PageNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for PageNumber {
    type Error = TypeConstraintError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PageNumber> for u32 {
    fn from(value: PageNumber) -> Self {
        value.0
    }
}

macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed, non-empty value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                let trimmed = value.into().trim().to_string();
                if trimmed.is_empty() {
                    return Err(TypeConstraintError::EmptyString);
                }
                Ok(Self(trimmed))
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

non_empty_string_newtype!(ShopName, "Storefront name enforcing trimmed, non-empty values.");

non_empty_string_newtype!(CityName, "City wrapper enforcing trimmed, non-empty values.");
