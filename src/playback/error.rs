use thiserror::Error;

/// Errors raised when reconfiguring a [`Player`](super::Player).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PlaybackError {
    #[error("Speed {speed}x must be a positive finite number")]
    InvalidSpeed { speed: f64 },

    #[error("Speed increment {step}x must be a positive finite number")]
    InvalidSpeedStep { step: f64 },

    #[error("Speed {speed}x is outside the allowed range {min}x..={max}x")]
    SpeedOutOfRange { speed: f64, min: f64, max: f64 },

    #[error("Speed {speed}x is not a multiple of {step}x")]
    SpeedOffStep { speed: f64, step: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_display() {
        let e = PlaybackError::SpeedOutOfRange {
            speed: 4.0,
            min: 0.5,
            max: 3.0,
        };
        assert_eq!(
            e.to_string(),
            "Speed 4x is outside the allowed range 0.5x..=3x"
        );
    }

    #[test]
    fn invalid_speed_display() {
        let e = PlaybackError::InvalidSpeed { speed: 0.0 };
        assert_eq!(e.to_string(), "Speed 0x must be a positive finite number");
    }

    #[test]
    fn invalid_speed_step_display() {
        let e = PlaybackError::InvalidSpeedStep { step: 0.0 };
        assert_eq!(
            e.to_string(),
            "Speed increment 0x must be a positive finite number"
        );
    }

    #[test]
    fn off_step_display() {
        let e = PlaybackError::SpeedOffStep {
            speed: 1.2,
            step: 0.5,
        };
        assert_eq!(e.to_string(), "Speed 1.2x is not a multiple of 0.5x");
    }
}
