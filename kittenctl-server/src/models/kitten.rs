//! Kitten field validation
//!
//! `NewKitten` and `KittenChanges` carry only validated values, so the
//! service and repository layers never see raw request input.

use super::{BreedName, ValidationError};

/// Maximum length for a kitten's color, in characters
const MAX_COLOR_LEN: usize = 64;

/// Maximum length for a kitten's description, in characters
const MAX_DESCRIPTION_LEN: usize = 1024;

/// Validated, non-empty color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Color(String);

impl Color {
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "color" });
        }

        if trimmed.chars().count() > MAX_COLOR_LEN {
            return Err(ValidationError::TooLong {
                field: "color",
                max: MAX_COLOR_LEN,
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Age in whole years, never negative
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Age(i32);

impl Age {
    pub fn new(years: i32) -> Result<Self, ValidationError> {
        if years < 0 {
            return Err(ValidationError::OutOfRange { field: "age", min: 0 });
        }
        Ok(Self(years))
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

/// Free-text description. Empty strings are allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description(String);

impl Description {
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(ValidationError::TooLong {
                field: "description",
                max: MAX_DESCRIPTION_LEN,
            });
        }
        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A kitten ready to be inserted.
///
/// `breed` is still a name here; the service resolves it to an id.
#[derive(Debug, Clone)]
pub struct NewKitten {
    pub color: Color,
    pub age: Age,
    pub description: Option<Description>,
    pub breed: Option<BreedName>,
}

/// Partial update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct KittenChanges {
    pub color: Option<Color>,
    pub age: Option<Age>,
    pub description: Option<Description>,
    pub breed: Option<BreedName>,
}

impl KittenChanges {
    /// True when the update would not touch any column.
    pub fn is_empty(&self) -> bool {
        self.color.is_none()
            && self.age.is_none()
            && self.description.is_none()
            && self.breed.is_none()
    }
}
