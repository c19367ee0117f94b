//! symbolic error names and the registry resolving them to the numeric
//! codes surfaced in API error payloads.

use std::collections::HashMap;

pub const INVALID_JSON_FORMAT: &str = "INVALID_JSON_FORMAT";
pub const MISSING_PARAMETER: &str = "MISSING_PARAMETER";
pub const INVALID_PARAMETER_FORMAT: &str = "INVALID_PARAMETER_FORMAT";
pub const INVALID_PARAMETER_VALUE: &str = "INVALID_PARAMETER_VALUE";
pub const UNKNOWN_PARAMETER: &str = "UNKNOWN_PARAMETER";

/// immutable mapping from symbolic error names to numeric codes. built once
/// at handler construction; concurrent requests share it without
/// synchronization because it is never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct ErrorCodeRegistry {
    codes: HashMap<String, i32>,
}

impl ErrorCodeRegistry {
    pub fn new<I>(codes: I) -> ErrorCodeRegistry
    where
        I: IntoIterator<Item = (String, i32)>,
    {
        ErrorCodeRegistry {
            codes: codes.into_iter().collect(),
        }
    }

    /// registry without entries; every lookup yields -1
    pub fn empty() -> ErrorCodeRegistry {
        ErrorCodeRegistry::default()
    }

    /// the default code table for routing requests
    pub fn routing() -> ErrorCodeRegistry {
        ErrorCodeRegistry::new([
            (INVALID_JSON_FORMAT.to_string(), 2000),
            (MISSING_PARAMETER.to_string(), 2001),
            (INVALID_PARAMETER_FORMAT.to_string(), 2002),
            (INVALID_PARAMETER_VALUE.to_string(), 2003),
            (UNKNOWN_PARAMETER.to_string(), 2004),
        ])
    }

    /// numeric code for a symbolic name, -1 when unregistered
    pub fn get(&self, name: &str) -> i32 {
        self.codes.get(name).copied().unwrap_or(-1)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_registered_names_resolve() {
        let registry = ErrorCodeRegistry::routing();
        assert_eq!(registry.get(INVALID_JSON_FORMAT), 2000);
        assert_eq!(registry.get(UNKNOWN_PARAMETER), 2004);
    }

    #[test]
    fn test_unregistered_name_defaults_to_minus_one() {
        let registry = ErrorCodeRegistry::empty();
        assert_eq!(registry.get(INVALID_PARAMETER_VALUE), -1);
        assert_eq!(registry.get("NOT_A_NAME"), -1);
    }
}
