use thiserror::Error;

/// typed failures raised while translating request parameters. every value
/// carries the numeric code resolved from the error code registry plus the
/// (name, value) pairs identifying the offending parameters. all failures
/// surface immediately; retry policy belongs to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// a supplied enumerated value has no internal mapping
    #[error("unknown value '{value}' for parameter '{parameter}' (code {code})")]
    UnknownParameterValue {
        code: i32,
        parameter: String,
        value: String,
    },
    /// a structurally valid value that does not apply to the resolved profile
    #[error("parameter '{parameter}' value '{value}' is incompatible with {other_parameter} '{other_value}' (code {code})")]
    IncompatibleParameter {
        code: i32,
        parameter: String,
        value: String,
        other_parameter: String,
        other_value: String,
    },
    /// value fails independent validity checks
    #[error("invalid value for parameter '{parameter}' (code {code})")]
    InvalidParameterValue { code: i32, parameter: String },
    /// payload could not be parsed as GeoJSON at all
    #[error("parameter '{parameter}' could not be parsed as JSON (code {code})")]
    InvalidJsonFormat { code: i32, parameter: String },
}

impl RequestError {
    pub fn code(&self) -> i32 {
        match self {
            RequestError::UnknownParameterValue { code, .. } => *code,
            RequestError::IncompatibleParameter { code, .. } => *code,
            RequestError::InvalidParameterValue { code, .. } => *code,
            RequestError::InvalidJsonFormat { code, .. } => *code,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_message_carries_both_parameter_pairs() {
        let error = RequestError::IncompatibleParameter {
            code: 2003,
            parameter: String::from("vehicle_type"),
            value: String::from("hgv"),
            other_parameter: String::from("profile"),
            other_value: String::from("cycling-regular"),
        };
        let message = error.to_string();
        assert!(message.contains("vehicle_type"));
        assert!(message.contains("hgv"));
        assert!(message.contains("profile"));
        assert!(message.contains("cycling-regular"));
        assert_eq!(error.code(), 2003);
    }
}
