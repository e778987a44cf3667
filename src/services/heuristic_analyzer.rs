use crate::config::constants::{MAX_SCENARIOS, MIN_SCENARIOS};
use crate::enums::risk_tier::RiskTier;
use crate::services::component_classifier::{
    TAG_API, TAG_AUTH, TAG_BACKEND, TAG_CONFIG, TAG_DATABASE, TAG_FRONTEND, TAG_SECURITY,
};
use crate::structs::classified_file::ClassifiedFile;
use crate::structs::impact_analysis::ImpactAnalysis;
use crate::structs::test_scenario::TestScenario;
use crate::structs::test_step::TestStep;

pub const GENERAL_REGRESSION_TITLE: &str = "General regression: verify core functionality on affected pages";
pub const EDGE_CASES_TITLE: &str = "Edge cases: input validation and error handling";

// navigate -> representative action -> verify, each with its expected result.
struct AreaPlaybook {
    tag: &'static str,
    title: &'static str,
    steps: [(&'static str, &'static str); 3],
}

const AREA_PLAYBOOKS: &[AreaPlaybook] = &[
    AreaPlaybook {
        tag: TAG_AUTH,
        title: "Authentication: sign-in, sign-out and session handling",
        steps: [
            ("Navigate to the login page", "The login form renders without errors"),
            ("Sign in with a valid test account, then sign out", "Sign-in lands on the home page and sign-out returns to the login page"),
            ("Open a protected page after signing out", "Access is refused and the user is redirected to the login page"),
        ],
    },
    AreaPlaybook {
        tag: TAG_SECURITY,
        title: "Security: protected actions and secure connections",
        steps: [
            ("Navigate to a page that performs a protected action", "The page loads over HTTPS without certificate warnings"),
            ("Perform the protected action as an authorised user", "The action succeeds and no sensitive data is shown in the UI"),
            ("Repeat the action as an unauthorised user", "The action is blocked with a clear permission message"),
        ],
    },
    AreaPlaybook {
        tag: TAG_DATABASE,
        title: "Data integrity: create, update and reload records",
        steps: [
            ("Navigate to a page listing records backed by the changed models", "Existing records load with correct values"),
            ("Create a record, then edit one of its fields and save", "Both saves succeed and a confirmation message appears"),
            ("Reload the page", "The new and edited records persist with the saved values"),
        ],
    },
    AreaPlaybook {
        tag: TAG_CONFIG,
        title: "Configuration: application behavior under updated settings",
        steps: [
            ("Navigate to the main entry page of the application", "The application starts and loads without configuration errors"),
            ("Exercise a feature controlled by the changed settings", "The feature follows the updated configuration"),
            ("Check the browser console and visible notices", "No missing-setting warnings or errors are displayed"),
        ],
    },
    AreaPlaybook {
        tag: TAG_API,
        title: "API-backed views: data loading and error states",
        steps: [
            ("Navigate to a page that loads data from the changed endpoints", "The page shows the loaded data without spinners stuck"),
            ("Trigger an action that sends data to the changed endpoints", "The request succeeds and the UI reflects the response"),
            ("Repeat the action with invalid input", "A readable error message is shown and the page stays usable"),
        ],
    },
    AreaPlaybook {
        tag: TAG_FRONTEND,
        title: "Frontend: layout and interaction on changed pages",
        steps: [
            ("Navigate to the pages rendered by the changed components", "The pages render without console errors"),
            ("Interact with the changed controls (click, type, submit)", "Each control responds as expected"),
            ("Resize the window to a mobile width", "Layout stays aligned with no overlapping or clipped content"),
        ],
    },
    AreaPlaybook {
        tag: TAG_BACKEND,
        title: "Backend workflows: end-to-end behavior of changed services",
        steps: [
            ("Navigate to a page whose workflow calls the changed services", "The page loads with current data"),
            ("Complete the workflow from start to finish", "Each step succeeds and the final confirmation appears"),
            ("Revisit the page after the workflow", "The UI reflects the state produced by the workflow"),
        ],
    },
];

/// Model-free impact analysis and scenarios, reproducible for the same input.
#[derive(Debug, Clone, Default)]
pub struct HeuristicAnalyzer;

impl HeuristicAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Distinct area tags in first-occurrence order across `files`.
    pub fn affected_areas(files: &[ClassifiedFile]) -> Vec<String> {
        let mut areas: Vec<String> = Vec::new();
        for tag in files.iter().flat_map(|f| f.area_tags.iter()) {
            if !areas.contains(tag) {
                areas.push(tag.clone());
            }
        }
        areas
    }

    fn highest_tier_for(files: &[ClassifiedFile], tag: &str) -> RiskTier {
        files
            .iter()
            .filter(|f| f.has_tag(tag))
            .map(|f| f.risk_tier)
            .max()
            .unwrap_or(RiskTier::Low)
    }

    pub fn summarize(&self, files: &[ClassifiedFile]) -> ImpactAnalysis {
        let affected_areas = Self::affected_areas(files);
        let risk_areas: Vec<String> = files
            .iter()
            .filter(|f| f.risk_tier == RiskTier::High)
            .map(|f| f.path().to_string())
            .collect();

        let summary = if affected_areas.is_empty() {
            format!(
                "Heuristic analysis of {} changed file(s); no functional area matched the classification rules.",
                files.len()
            )
        } else {
            let counts: Vec<String> = affected_areas
                .iter()
                .map(|area| format!("{} ({})", area, files.iter().filter(|f| f.has_tag(area)).count()))
                .collect();
            format!(
                "Heuristic analysis of {} changed file(s) across {} functional area(s): {}.",
                files.len(),
                affected_areas.len(),
                counts.join(", ")
            )
        };

        let user_impact = if !risk_areas.is_empty() {
            let scope = if affected_areas.is_empty() {
                "core".to_string()
            } else {
                affected_areas.join(", ")
            };
            format!(
                "{} high-risk file(s) may change {} workflows. Manual verification of the affected user journeys is recommended.",
                risk_areas.len(),
                scope
            )
        } else if !affected_areas.is_empty() {
            format!(
                "Changes touch {} functionality. Manual verification recommended.",
                affected_areas.join(", ")
            )
        } else {
            "Code changes detected. Manual verification recommended.".to_string()
        };

        ImpactAnalysis {
            summary,
            affected_areas,
            user_impact,
            risk_areas,
        }
    }

    pub fn scenarios_for(&self, files: &[ClassifiedFile]) -> Vec<TestScenario> {
        let mut scenarios: Vec<TestScenario> = Self::affected_areas(files)
            .iter()
            .take(MAX_SCENARIOS)
            .map(|tag| Self::area_scenario(tag, Self::highest_tier_for(files, tag)))
            .collect();

        for filler in self.filler_scenarios(files) {
            if scenarios.len() >= MIN_SCENARIOS {
                break;
            }
            scenarios.push(filler);
        }

        scenarios
    }

    fn area_scenario(tag: &str, risk_level: RiskTier) -> TestScenario {
        let (title, steps) = match AREA_PLAYBOOKS.iter().find(|p| p.tag == tag) {
            Some(playbook) => (
                playbook.title.to_string(),
                playbook.steps.iter().map(|(action, expected)| TestStep::new(action, expected)).collect(),
            ),
            None => (
                format!("{}: verify affected functionality", tag),
                vec![
                    TestStep::new(&format!("Navigate to the {} area of the application", tag), "The area loads without errors"),
                    TestStep::new("Perform the main action affected by the change", "The action completes as expected"),
                    TestStep::new("Check the resulting state in the UI", "The UI shows the expected updated state"),
                ],
            ),
        };

        TestScenario {
            title,
            steps,
            risk_level,
            area_tags: vec![tag.to_string()],
        }
    }

    /// Generic scenarios used to reach the minimum plan size, in preference order.
    pub fn filler_scenarios(&self, files: &[ClassifiedFile]) -> Vec<TestScenario> {
        let overall = files.iter().map(|f| f.risk_tier).max().unwrap_or(RiskTier::Low);

        vec![
            TestScenario {
                title: GENERAL_REGRESSION_TITLE.to_string(),
                steps: vec![
                    TestStep::new("Navigate to the pages touched by the merge request", "Each page loads successfully without errors"),
                    TestStep::new("Interact with the main functionality that was changed", "The feature works as expected according to the requirements"),
                    TestStep::new("Check for UI inconsistencies or broken layouts", "The UI displays correctly and consistently"),
                ],
                risk_level: overall,
                area_tags: Vec::new(),
            },
            TestScenario {
                title: EDGE_CASES_TITLE.to_string(),
                steps: vec![
                    TestStep::new("Navigate to a form or input affected by the change", "The form is present with all fields"),
                    TestStep::new("Enter invalid, empty or special-character input and submit", "Submission is blocked and validation errors appear next to the fields"),
                    TestStep::new("Correct the input and submit again", "Submission succeeds and the error messages disappear"),
                ],
                risk_level: RiskTier::Medium,
                area_tags: Vec::new(),
            },
        ]
    }
}
