use models::{Allocation, FinancialPlan, PlanSection};
use serde_json::{Map, Value};

use crate::error::{PlanError, Result};
use crate::figures::PlanFigures;

const PERCENTAGE_TOLERANCE: f64 = 1e-6;
const AMOUNT_TOLERANCE: f64 = 0.01;

/// Converts the extracted object into a typed plan and checks it against the
/// locally computed figures. Any mismatch is a malformed upstream response.
pub fn validate_plan(object: Map<String, Value>, figures: &PlanFigures) -> Result<FinancialPlan> {
    let plan: FinancialPlan = serde_json::from_value(Value::Object(object))
        .map_err(|e| PlanError::malformed(format!("plan does not match the expected shape: {e}")))?;

    check_section("emergencyFundPlan", &plan.emergency_fund_plan)?;
    check_section("longTermGoalSuggestion", &plan.long_term_goal_suggestion)?;
    let budget = &plan.budget_allocation_plan;
    check_heading("budgetAllocationPlan", &budget.title, &budget.summary)?;
    check_allocations(&budget.allocations, figures)?;

    let target = figures.emergency_target_display();
    if !plan
        .emergency_fund_plan
        .steps
        .iter()
        .any(|step| step.contains(&target))
    {
        return Err(PlanError::malformed(format!(
            "emergencyFundPlan.steps does not mention the target {target}"
        )));
    }

    Ok(plan)
}

fn check_heading(name: &str, title: &str, summary: &str) -> Result<()> {
    if title.trim().is_empty() || summary.trim().is_empty() {
        return Err(PlanError::malformed(format!("{name} has an empty title or summary")));
    }
    Ok(())
}

fn check_section(name: &str, section: &PlanSection) -> Result<()> {
    check_heading(name, &section.title, &section.summary)?;
    if section.steps.is_empty() {
        return Err(PlanError::malformed(format!("{name}.steps is empty")));
    }
    Ok(())
}

fn check_allocations(allocations: &[Allocation], figures: &PlanFigures) -> Result<()> {
    if allocations.len() != figures.allocations.len() {
        return Err(PlanError::malformed(format!(
            "expected {} allocations, got {}",
            figures.allocations.len(),
            allocations.len()
        )));
    }

    for (i, (got, expected)) in allocations.iter().zip(&figures.allocations).enumerate() {
        if (got.percentage - expected.slice.percentage).abs() > PERCENTAGE_TOLERANCE {
            return Err(PlanError::malformed(format!(
                "allocations[{i}].percentage is {}, expected {}",
                got.percentage, expected.slice.percentage
            )));
        }

        // One cent, widened to a few ulps for incomes where a cent is below f64 precision.
        let tolerance = AMOUNT_TOLERANCE.max(expected.amount.abs() * f64::EPSILON * 4.0);
        if (got.amount - expected.amount).abs() > tolerance {
            return Err(PlanError::malformed(format!(
                "allocations[{i}].amount is {}, expected {:.2}",
                got.amount, expected.amount
            )));
        }

        if got.category.trim().is_empty() || got.color.trim().is_empty() {
            return Err(PlanError::malformed(format!(
                "allocations[{i}] has an empty category or color"
            )));
        }
    }

    Ok(())
}
