//! bit flags describing the load a heavy vehicle carries. the request
//! translation layer only ever derives the hazmat bit.

/// vehicle carries hazardous materials
pub const HAZMAT: u32 = 1;

/// flag for a load characteristic name, or 0 when unrecognized
pub fn from_name(name: &str) -> u32 {
    match name {
        "hazmat" => HAZMAT,
        _ => 0,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_hazmat_lookup() {
        assert_eq!(from_name("hazmat"), HAZMAT);
        assert_eq!(from_name("livestock"), 0);
    }
}
