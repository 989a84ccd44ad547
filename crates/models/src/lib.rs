use serde::{Deserialize, Serialize};

/// Goal text used in the emergency fund and budget narrative when the caller gives none.
pub const DEFAULT_GOAL_CONTEXT: &str = "General financial stability";
/// Goal text used in the long-term suggestion when the caller gives none.
pub const DEFAULT_LONG_TERM_GOAL: &str = "financial independence";

// Request models
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
	pub monthly_income: f64,
	pub monthly_expenses: f64,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub financial_goals: Option<String>,
}

impl PlanRequest {
	pub fn new(monthly_income: f64, monthly_expenses: f64, financial_goals: Option<String>) -> Self {
		Self {
			monthly_income,
			monthly_expenses,
			financial_goals,
		}
	}

	/// The caller's goals, or `None` when they are missing or blank.
	pub fn goals(&self) -> Option<&str> {
		self.financial_goals
			.as_deref()
			.map(str::trim)
			.filter(|g| !g.is_empty())
	}

	/// Goal text for the emergency fund and budget sections.
	pub fn goal_context(&self) -> &str {
		self.goals().unwrap_or(DEFAULT_GOAL_CONTEXT)
	}

	/// Goal text for the long-term suggestion section.
	pub fn long_term_goal(&self) -> &str {
		self.goals().unwrap_or(DEFAULT_LONG_TERM_GOAL)
	}
}

// Plan models (camelCase on the wire, as rendered by the mobile client)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialPlan {
	pub emergency_fund_plan: PlanSection,
	pub budget_allocation_plan: BudgetAllocationPlan,
	pub long_term_goal_suggestion: PlanSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSection {
	pub title: String,
	pub icon_name: String,
	pub summary: String,
	pub steps: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetAllocationPlan {
	pub title: String,
	pub icon_name: String,
	pub summary: String,
	pub allocations: Vec<Allocation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
	pub category: String,
	pub percentage: f64,
	pub amount: f64,
	pub color: String,
}

// Settings models
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
	pub host: String,
	pub port: u16,
	pub model: String,
	pub base_url: String,
	pub request_timeout_secs: u64,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			host: "127.0.0.1".to_string(),
			port: 3000,
			model: "gemini-1.5-flash".to_string(),
			base_url: "https://generativelanguage.googleapis.com".to_string(),
			request_timeout_secs: 30,
		}
	}
}

/// Round a monetary value to cents.
pub fn round_cents(value: f64) -> f64 {
	(value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_goal_fallbacks_are_independent() {
		let request = PlanRequest::new(5000.0, 3000.0, None);
		assert_eq!(request.goal_context(), "General financial stability");
		assert_eq!(request.long_term_goal(), "financial independence");
	}

	#[test]
	fn test_blank_goals_use_fallbacks() {
		let request = PlanRequest::new(5000.0, 3000.0, Some("   ".to_string()));
		assert_eq!(request.goals(), None);
		assert_eq!(request.long_term_goal(), DEFAULT_LONG_TERM_GOAL);
	}

	#[test]
	fn test_given_goals_are_trimmed() {
		let request = PlanRequest::new(5000.0, 3000.0, Some("  buy a house ".to_string()));
		assert_eq!(request.goal_context(), "buy a house");
		assert_eq!(request.long_term_goal(), "buy a house");
	}

	#[test]
	fn test_plan_uses_camel_case_keys() {
		let plan = FinancialPlan {
			emergency_fund_plan: PlanSection {
				title: "Emergency".to_string(),
				icon_name: "shield".to_string(),
				summary: "s".to_string(),
				steps: vec![],
			},
			budget_allocation_plan: BudgetAllocationPlan {
				title: "Budget".to_string(),
				icon_name: "chart".to_string(),
				summary: "s".to_string(),
				allocations: vec![],
			},
			long_term_goal_suggestion: PlanSection {
				title: "Goal".to_string(),
				icon_name: "flag".to_string(),
				summary: "s".to_string(),
				steps: vec![],
			},
		};

		let value = serde_json::to_value(&plan).unwrap();
		assert!(value.get("emergencyFundPlan").is_some());
		assert_eq!(value["budgetAllocationPlan"]["iconName"], "chart");
		assert!(value.get("longTermGoalSuggestion").is_some());
	}

	#[test]
	fn test_settings_defaults_fill_missing_keys() {
		let settings: Settings = serde_json::from_str(r#"{"port": 8080}"#).unwrap();
		assert_eq!(settings.port, 8080);
		assert_eq!(settings.host, "127.0.0.1");
		assert_eq!(settings.request_timeout_secs, 30);
	}

	#[test]
	fn test_round_cents() {
		assert_eq!(round_cents(1500.0000000002), 1500.0);
		assert_eq!(round_cents(1234.567), 1234.57);
	}
}
