//! Feedback Rating

use serde::Serialize;

use crate::error::{SchoolError, SchoolResult};

/// Integer rating in `1..=5`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    pub const MIN: i64 = 1;
    pub const MAX: i64 = 5;

    pub fn new(value: i64) -> SchoolResult<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(SchoolError::InvalidRating)
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl From<Rating> for i16 {
    fn from(r: Rating) -> Self {
        r.0 as i16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_are_inclusive() {
        assert_eq!(Rating::new(1).unwrap().value(), 1);
        assert_eq!(Rating::new(5).unwrap().value(), 5);
    }

    #[test]
    fn test_out_of_range() {
        for value in [0, 6, -1, 255] {
            assert!(matches!(Rating::new(value), Err(SchoolError::InvalidRating)));
        }
    }
}
