use crate::structs::test_plan::TestPlan;

const RULE_WIDTH: usize = 80;

pub struct TestPlanLogger {}

impl TestPlanLogger {

    pub fn print_test_plan(plan: &TestPlan) {
        println!("{}", "=".repeat(RULE_WIDTH));
        println!("UI TEST PLAN");
        println!("{}", "=".repeat(RULE_WIDTH));
        println!("\nMR: {}", plan.mr_title);
        println!("URL: {}", plan.change_reference.web_url());
        println!("\nOVERVIEW:\n{}", plan.overall_summary);

        Self::print_impact_analysis(plan);
        Self::print_scenarios(plan);

        println!("\n{}", "=".repeat(RULE_WIDTH));
        println!("Total Scenarios: {}", plan.scenarios.len());
        if plan.ai_assisted {
            println!("🤖 AI-assisted: yes");
        } else {
            println!("📋 AI-assisted: no (heuristic analysis)");
        }
        println!("{}", "=".repeat(RULE_WIDTH));
    }

    fn print_impact_analysis(plan: &TestPlan) {
        let analysis = &plan.impact_analysis;

        println!("\n📝 Summary:");
        println!("   {}", analysis.summary);
        println!("\n🎯 User Impact:");
        println!("   {}", analysis.user_impact);

        if !analysis.affected_areas.is_empty() {
            println!("\n🌐 Affected Areas:");
            for area in &analysis.affected_areas {
                println!("   • {}", area);
            }
        }

        println!("\n⚠️  Risk Areas:");
        if analysis.risk_areas.is_empty() {
            println!("   (none identified)");
        }
        for risk in &analysis.risk_areas {
            println!("   • {}", risk);
        }
    }

    fn print_scenarios(plan: &TestPlan) {
        println!("\n📋 TEST SCENARIOS ({}):", plan.scenarios.len());
        println!("{}", "-".repeat(RULE_WIDTH));

        for (i, scenario) in plan.scenarios.iter().enumerate() {
            println!("\n{}. {}", i + 1, scenario.title);
            println!(
                "   Risk Level: {} {}",
                scenario.risk_level.emoji(),
                scenario.risk_level.as_str().to_uppercase()
            );
            if !scenario.area_tags.is_empty() {
                println!("   Areas: {}", scenario.area_tags.join(", "));
            }
            println!("   Steps:");
            for (j, step) in scenario.steps.iter().enumerate() {
                println!("      {}. Action: {}", j + 1, step.action);
                println!("         Expected: {}", step.expected_result);
            }
        }
    }
}
