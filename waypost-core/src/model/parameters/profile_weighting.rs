use serde::Serialize;

/// a named soft preference factor layered onto profile parameters.
/// parameters keep insertion order, which downstream cost assembly follows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileWeighting {
    name: String,
    parameters: Vec<(String, String)>,
}

impl ProfileWeighting {
    pub fn new(name: &str) -> ProfileWeighting {
        ProfileWeighting {
            name: name.to_string(),
            parameters: Vec::new(),
        }
    }

    /// appends a formatted parameter, preserving order
    pub fn with_parameter(mut self, key: &str, value: String) -> ProfileWeighting {
        self.parameters.push((key.to_string(), value));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameters(&self) -> &[(String, String)] {
        &self.parameters
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parameters_keep_insertion_order() {
        let weighting = ProfileWeighting::new("green")
            .with_parameter("factor", String::from("0.40"))
            .with_parameter("scope", String::from("edge"));
        assert_eq!(weighting.name(), "green");
        assert_eq!(
            weighting.parameters().to_vec(),
            vec![
                (String::from("factor"), String::from("0.40")),
                (String::from("scope"), String::from("edge")),
            ]
        );
    }
}
