//! Endpoint slope policies

use crate::io::error::{Result, SplineError, invalid_parameter};
use std::fmt;
use std::str::FromStr;

/// Which endpoint first derivatives the caller supplies
///
/// Slopes that are not supplied are estimated from the samples nearest the
/// corresponding boundary. The mode is fixed for the lifetime of a fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BoundaryMode {
    /// Both endpoint slopes are supplied (code 0)
    BothGiven,
    /// Left slope supplied, right slope estimated (code 1)
    LeftGiven,
    /// Right slope supplied, left slope estimated (code 2)
    RightGiven,
    /// Both slopes estimated from three boundary samples (code 3)
    #[default]
    NeitherGiven,
}

impl BoundaryMode {
    /// All modes in code order
    pub const ALL: [Self; 4] = [
        Self::BothGiven,
        Self::LeftGiven,
        Self::RightGiven,
        Self::NeitherGiven,
    ];

    /// Integer code of this mode
    pub const fn code(self) -> u8 {
        match self {
            Self::BothGiven => 0,
            Self::LeftGiven => 1,
            Self::RightGiven => 2,
            Self::NeitherGiven => 3,
        }
    }

    /// Whether the left slope is taken from the caller
    pub const fn left_given(self) -> bool {
        matches!(self, Self::BothGiven | Self::LeftGiven)
    }

    /// Whether the right slope is taken from the caller
    pub const fn right_given(self) -> bool {
        matches!(self, Self::BothGiven | Self::RightGiven)
    }
}

impl TryFrom<u8> for BoundaryMode {
    type Error = SplineError;

    fn try_from(code: u8) -> Result<Self> {
        match code {
            0 => Ok(Self::BothGiven),
            1 => Ok(Self::LeftGiven),
            2 => Ok(Self::RightGiven),
            3 => Ok(Self::NeitherGiven),
            _ => Err(invalid_parameter(
                "boundary_mode",
                &code,
                &"expected a code between 0 and 3",
            )),
        }
    }
}

impl FromStr for BoundaryMode {
    type Err = SplineError;

    /// Parses a bare code, or a code followed by the parenthesised
    /// description that [`fmt::Display`] appends
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let code = match trimmed.split_once(char::is_whitespace) {
            Some((code, rest)) if rest.trim_start().starts_with('(') => code,
            _ => trimmed,
        };
        let code = code
            .parse::<u8>()
            .map_err(|e| invalid_parameter("boundary_mode", &s, &e))?;
        Self::try_from(code)
    }
}

impl fmt::Display for BoundaryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = match self {
            Self::BothGiven => "both slopes given",
            Self::LeftGiven => "left slope given",
            Self::RightGiven => "right slope given",
            Self::NeitherGiven => "both slopes estimated",
        };
        write!(f, "{} ({description})", self.code())
    }
}
