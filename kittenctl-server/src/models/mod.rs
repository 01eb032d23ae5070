//! Domain models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod breed;
pub mod kitten;

pub use validation::ValidationError;
pub use breed::BreedName;
pub use kitten::{Age, Color, Description, KittenChanges, NewKitten};
