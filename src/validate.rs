//! Argument checks run before any key is opened.

use crate::error::{RegistryError, Result};

/// Check that a location and at least one value name were given
///
/// # Errors
///
/// Returns `MissingLocation` for an empty location, then `MissingNames` for an empty names slice
pub fn check_arguments<S: AsRef<str>>(location: &str, names: &[S]) -> Result {
    if location.is_empty() {
        return Err(RegistryError::MissingLocation);
    }
    if names.is_empty() {
        return Err(RegistryError::MissingNames);
    }
    Ok(())
}

/// Names and values are paired by index and must line up one to one
///
/// # Errors
///
/// Returns `LengthMismatch` when the counts differ
pub fn check_lengths(names: usize, values: usize) -> Result {
    if names != values {
        return Err(RegistryError::LengthMismatch { names, values });
    }
    Ok(())
}
