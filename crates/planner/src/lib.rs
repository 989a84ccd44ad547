//! # Planner
//!
//! Turns a validated income/expense snapshot into a structured [`FinancialPlan`]
//! by delegating the prose to a generative backend.
//!
//! The numbers in the plan (3-month emergency target, 50/30/20 split) are
//! computed here and handed to the backend as literals. The backend response is
//! treated as untrusted text: the first balanced JSON object is extracted,
//! parsed, checked against the full plan shape and re-checked against the
//! computed figures before it is returned.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use planner::PlanService;
//! # async fn demo(generator: Arc<dyn ai_client::TextGenerator>) -> Result<(), planner::PlanError> {
//! let service = PlanService::new(generator);
//! let body = serde_json::json!({"monthlyIncome": 5000, "monthlyExpenses": 3000});
//! let _plan = service.generate_plan_from_json(&body).await?;
//! # Ok(()) }
//! ```
//!
//! [`FinancialPlan`]: models::FinancialPlan

pub mod error;
pub mod extract;
pub mod figures;
pub mod prompt;
pub mod schema;
pub mod service;
pub mod validate;

pub use error::{PlanError, Result};
pub use figures::PlanFigures;
pub use service::PlanService;
