use models::PlanRequest;
use serde_json::Value;

use crate::error::{PlanError, Result};
use crate::figures::PlanFigures;

pub const MONTHLY_INCOME: &str = "monthlyIncome";
pub const MONTHLY_EXPENSES: &str = "monthlyExpenses";
pub const FINANCIAL_GOALS: &str = "financialGoals";

/// Reads a `PlanRequest` out of an untyped JSON body and checks its ranges.
///
/// Only JSON numbers count as numeric; `"5000"` is rejected.
pub fn parse_plan_request(body: &Value) -> Result<PlanRequest> {
    let object = body
        .as_object()
        .ok_or_else(|| PlanError::validation("body", "Request body must be a JSON object"))?;

    let monthly_income = number_field(object.get(MONTHLY_INCOME), MONTHLY_INCOME, "greater than 0")?;
    let monthly_expenses = number_field(
        object.get(MONTHLY_EXPENSES),
        MONTHLY_EXPENSES,
        "greater than or equal to 0",
    )?;

    let financial_goals = match object.get(FINANCIAL_GOALS) {
        None | Some(Value::Null) => None,
        Some(Value::String(goals)) => Some(goals.clone()),
        Some(_) => {
            return Err(PlanError::validation(
                FINANCIAL_GOALS,
                "financialGoals must be a string when provided",
            ));
        }
    };

    let request = PlanRequest::new(monthly_income, monthly_expenses, financial_goals);
    check_request(&request)?;
    Ok(request)
}

/// Range checks shared by the JSON path and typed callers.
pub fn check_request(request: &PlanRequest) -> Result<()> {
    if !request.monthly_income.is_finite() || request.monthly_income <= 0.0 {
        return Err(invalid_number(MONTHLY_INCOME, "greater than 0"));
    }
    if !request.monthly_expenses.is_finite() || request.monthly_expenses < 0.0 {
        return Err(invalid_number(MONTHLY_EXPENSES, "greater than or equal to 0"));
    }

    // Derived amounts are rounded to cents, so they must stay finite after scaling by 100.
    let figures = PlanFigures::from_request(request);
    if figures.allocations.iter().any(|a| !a.amount.is_finite()) {
        return Err(PlanError::validation(
            MONTHLY_INCOME,
            "monthlyIncome is too large to plan with",
        ));
    }
    if !figures.emergency_target.is_finite() {
        return Err(PlanError::validation(
            MONTHLY_EXPENSES,
            "monthlyExpenses is too large to plan with",
        ));
    }
    Ok(())
}

fn number_field(value: Option<&Value>, field: &'static str, bound: &str) -> Result<f64> {
    value
        .and_then(Value::as_f64)
        .ok_or_else(|| invalid_number(field, bound))
}

fn invalid_number(field: &'static str, bound: &str) -> PlanError {
    PlanError::validation(field, format!("{field} is required and must be a number {bound}"))
}
