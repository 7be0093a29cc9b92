//! Operator identity for the placeholder login gate.
//!
//! There is no authentication: the signed-in operator is whoever the environment says,
//! falling back to the default branch manager.

/// Display name used when `STORE_OPERATOR_NAME` is unset.
pub const DEFAULT_OPERATOR_NAME: &str = "Galit Uve";

/// Role used when `STORE_OPERATOR_ROLE` is unset.
pub const DEFAULT_OPERATOR_ROLE: &str = "Branch Manager";

/// The person shown as signed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operator {
    /// Display name
    pub name: String,
    /// Job title
    pub role: String,
}

impl Default for Operator {
    fn default() -> Self {
        Self {
            name: DEFAULT_OPERATOR_NAME.to_string(),
            role: DEFAULT_OPERATOR_ROLE.to_string(),
        }
    }
}

/// Reads the operator from `STORE_OPERATOR_NAME` and `STORE_OPERATOR_ROLE`.
#[must_use]
pub fn current_operator() -> Operator {
    let defaults = Operator::default();
    Operator {
        name: std::env::var("STORE_OPERATOR_NAME").unwrap_or(defaults.name),
        role: std::env::var("STORE_OPERATOR_ROLE").unwrap_or(defaults.role),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_operator() {
        let operator = Operator::default();
        assert_eq!(operator.name, "Galit Uve");
        assert_eq!(operator.role, "Branch Manager");
    }
}
