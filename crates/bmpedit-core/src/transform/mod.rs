//! Geometric transforms: quarter-turn rotation and nearest-neighbor enlarge.
//!
//! Both rebuild the grid with new dimensions; pixel values are copied, never
//! interpolated.
//!
//! # Coordinate System
//!
//! - Rotation is clockwise, in whole quarter turns
//! - Enlarge scales columns by `x_scale` and rows by `y_scale`
//! - Origin is the top-left corner

mod enlarge;
mod rotation;

pub use enlarge::apply_enlarge;
pub use rotation::{rotate_90_cw, rotate_by_degrees, rotate_quarter_turns};

use thiserror::Error;

/// Errors for transform parameters that cannot be applied.
#[derive(Debug, Error, PartialEq)]
pub enum TransformError {
    #[error("Rotation of {0} degrees is not a multiple of 90")]
    InvalidAngle(i64),

    #[error("Enlarge scale must be positive, got x={x_scale} y={y_scale}")]
    InvalidScale { x_scale: u32, y_scale: u32 },

    #[error("Enlarged image would be too large: {width}x{height} scaled by {x_scale}x{y_scale}")]
    DimensionsTooLarge {
        width: u32,
        height: u32,
        x_scale: u32,
        y_scale: u32,
    },

    #[error("Scaling factor must be finite, got {0}")]
    InvalidFactor(f64),
}

/// Reject NaN and infinite scaling factors.
pub fn validate_factor(factor: f64) -> Result<f64, TransformError> {
    if factor.is_finite() {
        Ok(factor)
    } else {
        Err(TransformError::InvalidFactor(factor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_factor() {
        assert_eq!(validate_factor(0.5), Ok(0.5));
        assert_eq!(validate_factor(-2.0), Ok(-2.0));
        assert!(matches!(
            validate_factor(f64::INFINITY),
            Err(TransformError::InvalidFactor(_))
        ));
        assert!(validate_factor(f64::NAN).is_err());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            TransformError::InvalidAngle(45).to_string(),
            "Rotation of 45 degrees is not a multiple of 90"
        );
        let err = TransformError::InvalidScale {
            x_scale: 0,
            y_scale: 2,
        };
        assert_eq!(err.to_string(), "Enlarge scale must be positive, got x=0 y=2");
    }
}
