use url::Url;
use crate::errors::{PlanError, PlanResult};
use crate::structs::change_reference::ChangeReference;

const RESOURCE_DELIMITER: &str = "/-/";
const MERGE_REQUESTS_SEGMENT: &str = "merge_requests";

/// Turns a pasted merge request URL into a `ChangeReference`.
pub struct ChangeReferenceResolver;

impl ChangeReferenceResolver {

    /// Parses a merge request URL such as
    /// `@https://gitlab.example.com/group/proj/-/merge_requests/42/diffs`.
    pub fn resolve(raw: &str) -> PlanResult<ChangeReference> {
        let candidate = raw
            .trim()
            .trim_start_matches(|c: char| !c.is_ascii_alphanumeric());

        let url = Url::parse(candidate)
            .map_err(|e| PlanError::malformed(raw, &format!("not a URL ({})", e)))?;

        if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
            return Err(PlanError::malformed(raw, "missing http(s) scheme or host"));
        }

        let (project_path, resource) = Self::split_project_and_resource(url.path())
            .ok_or_else(|| PlanError::malformed(raw, "no merge_requests segment in path"))?;

        // Url keeps the path percent-encoded; GitLab expects the plain path.
        let project_path = urlencoding::decode(project_path)
            .map_err(|_| PlanError::malformed(raw, "project path is not valid UTF-8"))?;

        if project_path.is_empty() {
            return Err(PlanError::malformed(raw, "empty project path"));
        }

        let change_number = Self::parse_change_number(resource)
            .ok_or_else(|| PlanError::malformed(raw, "no merge request number after merge_requests"))?;

        Ok(ChangeReference {
            instance_root: url.origin().ascii_serialization(),
            project_path: project_path.into_owned(),
            change_number,
        })
    }

    // Returns (project path, text after "merge_requests/").
    fn split_project_and_resource(path: &str) -> Option<(&str, &str)> {
        if let Some(index) = path.find(RESOURCE_DELIMITER) {
            let project = path[..index].trim_matches('/');
            let resource = &path[index + RESOURCE_DELIMITER.len()..];
            let rest = resource.strip_prefix(MERGE_REQUESTS_SEGMENT)?;
            return Some((project, rest.trim_start_matches('/')));
        }

        // Legacy URLs without the "/-/" separator.
        let marker = format!("/{}/", MERGE_REQUESTS_SEGMENT);
        let index = path.find(&marker)?;
        Some((path[..index].trim_matches('/'), &path[index + marker.len()..]))
    }

    fn parse_change_number(resource: &str) -> Option<u64> {
        let digits: String = resource.chars().take_while(char::is_ascii_digit).collect();
        digits.parse::<u64>().ok().filter(|n| *n > 0)
    }
}
