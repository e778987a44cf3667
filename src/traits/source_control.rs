use async_trait::async_trait;
use crate::errors::PlanResult;
use crate::structs::change_reference::ChangeReference;
use crate::structs::file_change::FileChange;

/// Read access to a merge request's changed files and title.
#[async_trait]
pub trait SourceControl: Send + Sync {

    async fn fetch_changes(&self, reference: ChangeReference) -> PlanResult<Vec<FileChange>>;

    async fn fetch_title(&self, reference: ChangeReference) -> PlanResult<String>;
}
