use std::sync::Arc;

use ai_client::{truncate, TextGenerator};
use models::{FinancialPlan, PlanRequest};
use serde_json::Value;

use crate::error::{PlanError, Result};
use crate::extract::extract_json_object;
use crate::figures::PlanFigures;
use crate::prompt::build_prompt;
use crate::schema::validate_plan;
use crate::validate::{check_request, parse_plan_request};

// Raw upstream text is logged up to this many chars when it cannot be used.
const LOGGED_RESPONSE_CHARS: usize = 2000;

/// Stateless plan generator. One upstream call per valid request, no retries.
pub struct PlanService {
    generator: Arc<dyn TextGenerator>,
}

impl PlanService {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Validates an untyped request body, then generates the plan.
    pub async fn generate_plan_from_json(&self, body: &Value) -> Result<FinancialPlan> {
        let request = parse_plan_request(body)?;
        self.generate_plan(&request).await
    }

    pub async fn generate_plan(&self, request: &PlanRequest) -> Result<FinancialPlan> {
        check_request(request)?;

        let figures = PlanFigures::from_request(request);
        let prompt = build_prompt(request, &figures);

        tracing::info!(
            monthly_income = request.monthly_income,
            monthly_expenses = request.monthly_expenses,
            has_goals = request.goals().is_some(),
            "Generating financial plan"
        );

        let text = self.generator.generate(&prompt).await.map_err(|e| {
            tracing::error!(error = %format!("{e:#}"), "Plan generator call failed");
            PlanError::UpstreamCall(e)
        })?;

        let plan = extract_json_object(&text)
            .and_then(|object| validate_plan(object, &figures))
            .inspect_err(|e| {
                tracing::warn!(
                    error = %e,
                    response = %truncate(&text, LOGGED_RESPONSE_CHARS),
                    "Discarding unusable plan generator response"
                );
            })?;

        tracing::debug!("Financial plan generated");
        Ok(plan)
    }
}
