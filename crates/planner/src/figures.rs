use models::{round_cents, PlanRequest};

/// Months of expenses the emergency fund should cover.
pub const EMERGENCY_FUND_MONTHS: f64 = 3.0;

/// One slice of the 50/30/20 budget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetSlice {
    pub category: &'static str,
    pub percentage: f64,
    pub color: &'static str,
}

pub const BUDGET_SPLIT: [BudgetSlice; 3] = [
    BudgetSlice {
        category: "Needs",
        percentage: 0.5,
        color: "#4A90E2",
    },
    BudgetSlice {
        category: "Wants",
        percentage: 0.3,
        color: "#F5A623",
    },
    BudgetSlice {
        category: "Savings",
        percentage: 0.2,
        color: "#7ED321",
    },
];

/// Numbers computed locally and spliced into the prompt as literals,
/// so the backend never does arithmetic.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanFigures {
    pub monthly_income: f64,
    pub emergency_target: f64,
    pub allocations: Vec<AllocationFigure>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AllocationFigure {
    pub slice: BudgetSlice,
    pub amount: f64,
}

impl PlanFigures {
    pub fn from_request(request: &PlanRequest) -> Self {
        let allocations = BUDGET_SPLIT
            .iter()
            .map(|slice| AllocationFigure {
                slice: *slice,
                amount: round_cents(request.monthly_income * slice.percentage),
            })
            .collect();

        Self {
            monthly_income: request.monthly_income,
            emergency_target: round_cents(request.monthly_expenses * EMERGENCY_FUND_MONTHS),
            allocations,
        }
    }

    /// The emergency target as it must appear in the plan text, e.g. `9000.00`.
    pub fn emergency_target_display(&self) -> String {
        format!("{:.2}", self.emergency_target)
    }
}
