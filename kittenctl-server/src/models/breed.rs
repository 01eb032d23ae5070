//! Breed name validation

use super::ValidationError;

/// Maximum length for breed names, in characters
const MAX_BREED_NAME_LEN: usize = 128;

/// Validated breed name
///
/// Names are free-form text (any script), trimmed of surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BreedName(String);

impl BreedName {
    /// Create a new breed name.
    ///
    /// # Rules
    /// - Non-empty (after trimming whitespace)
    /// - Max 128 characters
    ///
    /// # Example
    /// ```
    /// use kittenctl_server::models::BreedName;
    ///
    /// assert!(BreedName::new("siamese").is_ok());
    /// assert!(BreedName::new("   ").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "breed_name" });
        }

        if trimmed.chars().count() > MAX_BREED_NAME_LEN {
            return Err(ValidationError::TooLong {
                field: "breed_name",
                max: MAX_BREED_NAME_LEN,
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Get the breed name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
