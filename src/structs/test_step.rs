use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestStep {
    pub action: String,
    pub expected_result: String,
}

impl TestStep {
    pub fn new(action: &str, expected_result: &str) -> Self {
        Self {
            action: action.to_string(),
            expected_result: expected_result.to_string(),
        }
    }
}
