/// Result of a model-backed step. `Unavailable` carries the reason for logs only;
/// callers fall back to the heuristic path without inspecting it.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelOutcome<T> {
    Success(T),
    Unavailable(String),
}
