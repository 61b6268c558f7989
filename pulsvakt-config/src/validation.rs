//! Custom validation functions for configuration.
//!
//! Provides shared validation logic used across multiple configuration modules.

use validator::ValidationError;

use crate::metrics::DeltaRangeConfig;

/// Validate that a half-open delta range is non-empty.
pub fn validate_delta_range(range: &DeltaRangeConfig) -> Result<(), ValidationError> {
    if range.min < range.max {
        Ok(())
    } else {
        Err(ValidationError::new("empty_delta_range"))
    }
}

/// Validate that a delta range can never produce a negative draw.
pub fn validate_non_negative_range(range: &DeltaRangeConfig) -> Result<(), ValidationError> {
    if range.min < 0 {
        return Err(ValidationError::new("negative_delta_range"));
    }
    validate_delta_range(range)
}
