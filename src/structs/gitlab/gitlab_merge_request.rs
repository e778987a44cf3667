use serde::Deserialize;
use crate::structs::gitlab::gitlab_change::GitLabChange;

#[derive(Debug, Clone, Deserialize)]
pub struct GitLabMergeRequest {
    pub iid: u64,
    pub title: String,
    #[serde(default)]
    pub state: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GitLabMergeRequestChanges {
    #[serde(default)]
    pub changes: Vec<GitLabChange>,
}
