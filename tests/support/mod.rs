use std::net::SocketAddr;
use serde_json::{json, Value};
use warp::http::StatusCode;
use warp::Filter;

pub const MR_TITLE: &str = "Rework login redirect";

pub const ANALYSIS_RESPONSE: &str = r#"Here is my analysis:
```json
{
  "summary": "Login now redirects to the last visited page",
  "affected_areas": ["Login page", "Dashboard"],
  "user_impact": "Users land on their previous page after signing in",
  "risk_areas": ["Redirect loops", "Session expiry"]
}
```"#;

pub const SCENARIOS_RESPONSE: &str = r#"```json
[
  {
    "title": "Login page redirects to the last visited page",
    "steps": [
      {"action": "Open a bookmarked report while signed out", "expected_result": "The login page is shown"},
      {"action": "Sign in with a valid account", "expected_result": "The bookmarked report opens"}
    ],
    "risk_level": "High"
  },
  {
    "title": "Expired session on the Dashboard",
    "steps": [
      {"action": "Let the session expire on the dashboard", "expected_result": "A sign-in prompt appears"}
    ],
    "risk_level": "medium"
  },
  {
    "title": "Invalid credentials",
    "steps": [
      {"action": "Submit a wrong password", "expected_result": "An error message is shown"}
    ],
    "risk_level": "low"
  }
]
```"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelBehavior {
    Healthy,
    GarbledScenarios,
}

/// Fake Ollama: `/api/version`, `/api/tags` and `/api/generate`. Scenario
/// requests are told apart from analysis requests by their system prompt.
pub async fn spawn_fake_ollama(behavior: ModelBehavior) -> SocketAddr {
    let version = warp::path!("api" / "version")
        .and(warp::get())
        .map(|| warp::reply::json(&json!({"version": "0.5.1"})));

    let tags = warp::path!("api" / "tags")
        .and(warp::get())
        .map(|| warp::reply::json(&json!({"models": [{"name": "qwen2.5-coder:1.5b"}]})));

    let generate = warp::path!("api" / "generate")
        .and(warp::post())
        .and(warp::body::json())
        .map(move |body: Value| {
            let system = body["system"].as_str().unwrap_or_default();
            let text = if !system.contains("QA engineer") {
                ANALYSIS_RESPONSE
            } else if behavior == ModelBehavior::Healthy {
                SCENARIOS_RESPONSE
            } else {
                "Sorry, I can only describe the scenarios in prose."
            };
            warp::reply::json(&json!({"model": body["model"], "response": text, "done": true}))
        });

    let (addr, server) = warp::serve(version.or(tags).or(generate)).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);
    addr
}

fn changes_body() -> Value {
    json!({
        "iid": 42,
        "title": MR_TITLE,
        "changes": [
            {
                "old_path": "src/auth/login.py",
                "new_path": "src/auth/login.py",
                "new_file": false,
                "renamed_file": false,
                "deleted_file": false,
                "diff": "@@ -1,3 +1,4 @@\n-def login():\n+def login(next_url=None):\n+    remember(next_url)\n     pass\n"
            },
            {
                "old_path": "README.md",
                "new_path": "README.md",
                "new_file": false,
                "renamed_file": false,
                "deleted_file": false,
                "diff": "@@ -1 +1 @@\n-Old intro\n+New intro\n"
            }
        ]
    })
}

/// Fake GitLab serving merge request 42 only; token "secret" is required
/// when `require_token` is set.
pub async fn spawn_fake_gitlab(require_token: bool) -> SocketAddr {
    let auth = warp::header::optional::<String>("private-token").map(move |token: Option<String>| {
        !require_token || token.as_deref() == Some("secret")
    });

    let changes = warp::path!("api" / "v4" / "projects" / String / "merge_requests" / u64 / "changes")
        .and(warp::get())
        .and(auth.clone())
        .map(|_project: String, iid: u64, allowed: bool| respond(iid, allowed, changes_body()));

    let merge_request = warp::path!("api" / "v4" / "projects" / String / "merge_requests" / u64)
        .and(warp::get())
        .and(auth)
        .map(|_project: String, iid: u64, allowed: bool| {
            respond(iid, allowed, json!({"iid": iid, "title": MR_TITLE, "state": "opened"}))
        });

    let (addr, server) = warp::serve(changes.or(merge_request)).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);
    addr
}

fn respond(iid: u64, allowed: bool, body: Value) -> warp::reply::WithStatus<warp::reply::Json> {
    if !allowed {
        return warp::reply::with_status(warp::reply::json(&json!({"message": "401 Unauthorized"})), StatusCode::UNAUTHORIZED);
    }
    if iid != 42 {
        return warp::reply::with_status(warp::reply::json(&json!({"message": "404 Not found"})), StatusCode::NOT_FOUND);
    }
    warp::reply::with_status(warp::reply::json(&body), StatusCode::OK)
}

pub fn mr_url(gitlab: SocketAddr, number: u64) -> String {
    format!("http://{}/group/app/-/merge_requests/{}/diffs", gitlab, number)
}
