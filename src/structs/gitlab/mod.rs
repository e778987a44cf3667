pub mod gitlab_change;
pub mod gitlab_merge_request;
