//! Prompt construction for the plan generator.
//!
//! The prompt carries a fully spelled-out JSON skeleton. Every number in it is
//! already computed; the backend only fills in the `<...>` prose placeholders.

use models::PlanRequest;
use serde_json::{json, Value};

use crate::figures::PlanFigures;

pub const EMERGENCY_ICON: &str = "shield.lefthalf.filled";
pub const BUDGET_ICON: &str = "chart.pie.fill";
pub const GOAL_ICON: &str = "flag.checkered";

/// First emergency-fund step, copied verbatim by the backend.
pub fn emergency_target_step(figures: &PlanFigures) -> String {
    format!(
        "Save {} as your emergency fund target (3 months of expenses).",
        figures.emergency_target_display()
    )
}

/// The JSON object the backend is asked to return.
pub fn plan_skeleton(request: &PlanRequest, figures: &PlanFigures) -> Value {
    let goal_context = request.goal_context();
    let long_term_goal = request.long_term_goal();

    let allocations: Vec<Value> = figures
        .allocations
        .iter()
        .map(|a| {
            json!({
                "category": a.slice.category,
                "percentage": a.slice.percentage,
                "amount": a.amount,
                "color": a.slice.color,
            })
        })
        .collect();

    json!({
        "emergencyFundPlan": {
            "title": "Build Your Emergency Fund",
            "iconName": EMERGENCY_ICON,
            "summary": format!("<1-2 sentences on why an emergency fund matters when working towards: {goal_context}>"),
            "steps": [
                emergency_target_step(figures),
                "<a concrete step to reach the target>",
                "<a concrete step to keep the fund intact>"
            ]
        },
        "budgetAllocationPlan": {
            "title": "Your 50/30/20 Budget",
            "iconName": BUDGET_ICON,
            "summary": format!("<1-2 sentences explaining the 50/30/20 split in the context of: {goal_context}>"),
            "allocations": allocations
        },
        "longTermGoalSuggestion": {
            "title": "<a short title for the long-term goal>",
            "iconName": GOAL_ICON,
            "summary": format!("<1-2 sentences describing a path towards {long_term_goal}>"),
            "steps": [
                "<first step towards the goal>",
                "<second step towards the goal>",
                "<third step towards the goal>"
            ]
        }
    })
}

/// Builds the single prompt sent to the generative backend.
pub fn build_prompt(request: &PlanRequest, figures: &PlanFigures) -> String {
    let skeleton = plan_skeleton(request, figures);
    let skeleton = serde_json::to_string_pretty(&skeleton).unwrap_or_else(|_| skeleton.to_string());

    let mut prompt = String::with_capacity(2048);

    prompt.push_str(
        "You are a financial planning assistant. Write a short, encouraging personal \
         financial plan for the user described below.\n\n",
    );

    prompt.push_str("User data:\n");
    prompt.push_str(&format!("- Monthly income: {:.2}\n", request.monthly_income));
    prompt.push_str(&format!("- Monthly expenses: {:.2}\n", request.monthly_expenses));
    prompt.push_str(&format!("- Financial goals: {}\n", request.goal_context()));
    prompt.push_str(&format!("- Long-term goal: {}\n\n", request.long_term_goal()));

    prompt.push_str("Pre-computed figures (use exactly as given):\n");
    prompt.push_str(&format!(
        "- Emergency fund target: {} (3 x monthly expenses)\n",
        figures.emergency_target_display()
    ));
    for a in &figures.allocations {
        prompt.push_str(&format!(
            "- {}: {:.0}% of income = {:.2}\n",
            a.slice.category,
            a.slice.percentage * 100.0,
            a.amount
        ));
    }
    prompt.push('\n');

    prompt.push_str(
        "Respond with ONLY a JSON object and nothing else: no markdown code fences, \
         no text before or after it. The object must have exactly this structure. \
         Replace every <...> placeholder with your own text and keep every other value \
         exactly as written:\n\n",
    );
    prompt.push_str(&skeleton);
    prompt.push_str("\n\n");

    prompt.push_str("Rules:\n");
    prompt.push_str("- Do not recalculate, round or reformat any number.\n");
    prompt.push_str("- Keep the three allocations in the order shown.\n");
    prompt.push_str("- Keep the first emergency fund step word for word.\n");
    prompt.push_str("- Every step is a single plain-text sentence.\n");

    prompt
}
