use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct GitLabChange {
    pub new_path: String,
    #[serde(default)]
    pub new_file: bool,
    #[serde(default)]
    pub renamed_file: bool,
    #[serde(default)]
    pub deleted_file: bool,
    #[serde(default)]
    pub diff: String,
}
