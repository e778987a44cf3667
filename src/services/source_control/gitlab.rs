use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use crate::config::constants::timeout_duration_secs;
use crate::enums::change_type::ChangeType;
use crate::errors::{PlanError, PlanResult};
use crate::structs::change_reference::ChangeReference;
use crate::structs::config::gitlab_config::GitLabConfig;
use crate::structs::file_change::FileChange;
use crate::structs::gitlab::gitlab_change::GitLabChange;
use crate::structs::gitlab::gitlab_merge_request::{GitLabMergeRequest, GitLabMergeRequestChanges};
use crate::traits::source_control::SourceControl;

/// `SourceControl` over the GitLab REST v4 API.
pub struct GitLabClient {
    client: Client,
    token: Option<String>,
}

impl GitLabClient {
    pub fn new(config: &GitLabConfig) -> PlanResult<Self> {
        let client = Client::builder()
            .timeout(timeout_duration_secs(config.timeout_secs))
            .danger_accept_invalid_certs(!config.ssl_verify)
            .build()
            .map_err(|e| PlanError::config_error("gitlab", &e.to_string()))?;

        let token = std::env::var(&config.token_env).ok().filter(|t| !t.trim().is_empty());
        if token.is_none() {
            log::warn!("⚠️ {} not set, requesting GitLab anonymously", config.token_env);
        }

        Ok(Self { client, token })
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    fn merge_request_url(reference: &ChangeReference) -> String {
        let encoded_path = urlencoding::encode(&reference.project_path);
        format!(
            "{}/api/v4/projects/{}/merge_requests/{}",
            reference.instance_root, encoded_path, reference.change_number
        )
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str, operation: &str, reference: &ChangeReference) -> PlanResult<T> {
        let mut request = self.client.get(url);
        if let Some(token) = &self.token {
            request = request.header("PRIVATE-TOKEN", token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| PlanError::source_control_error(operation, &e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::map_status(status, operation, reference));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| PlanError::source_control_error(operation, &format!("invalid response body: {}", e)))
    }

    fn map_status(status: StatusCode, operation: &str, reference: &ChangeReference) -> PlanError {
        match status {
            StatusCode::NOT_FOUND => PlanError::ChangeSetNotFound {
                project_path: reference.project_path.clone(),
                change_number: reference.change_number,
            },
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => PlanError::AccessDenied {
                project_path: reference.project_path.clone(),
                status_code: status.as_u16(),
            },
            other => PlanError::source_control_error(operation, &format!("HTTP {}", other)),
        }
    }

    fn to_file_change(change: GitLabChange) -> FileChange {
        let change_type = ChangeType::from_flags(change.new_file, change.deleted_file, change.renamed_file);
        FileChange::new(&change.new_path, change_type, &change.diff)
    }
}

#[async_trait]
impl SourceControl for GitLabClient {

    async fn fetch_changes(&self, reference: ChangeReference) -> PlanResult<Vec<FileChange>> {
        let url = format!("{}/changes", Self::merge_request_url(&reference));
        let changes: GitLabMergeRequestChanges = self.get_json(&url, "fetch merge request changes", &reference).await?;

        log::info!("📁 Found {} changed files in {}", changes.changes.len(), reference);
        Ok(changes.changes.into_iter().map(Self::to_file_change).collect())
    }

    async fn fetch_title(&self, reference: ChangeReference) -> PlanResult<String> {
        let url = Self::merge_request_url(&reference);
        let merge_request: GitLabMergeRequest = self.get_json(&url, "fetch merge request", &reference).await?;

        log::info!(
            "📋 MR #{}: {} ({})",
            merge_request.iid,
            merge_request.title,
            merge_request.state.as_deref().unwrap_or("unknown state")
        );
        Ok(merge_request.title)
    }
}
