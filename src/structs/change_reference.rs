use std::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeReference {
    pub instance_root: String,
    pub project_path: String,
    pub change_number: u64,
}

impl ChangeReference {
    pub fn web_url(&self) -> String {
        format!(
            "{}/{}/-/merge_requests/{}",
            self.instance_root, self.project_path, self.change_number
        )
    }
}

impl fmt::Display for ChangeReference {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}!{}", self.project_path, self.change_number)
    }
}
