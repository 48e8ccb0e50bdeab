use crate::forms::{Form, ValidationErrors, non_blank, parse_positive_quantity};
use chrono::NaiveDate;
use shared::supplyline::order::ReorderRequest;

pub const QUANTITY_ERROR: &str = "Please enter a quantity greater than 0";

/// Requests replenishment of a chemical. Shown with the current stock for context.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReorderRequestForm {
    pub chemical_id: i64,
    pub current_quantity: f64,
    pub unit: String,
    pub requested_quantity: String,
    pub notes: String,
}

impl ReorderRequestForm {
    pub fn new(chemical_id: i64, current_quantity: f64, unit: impl Into<String>) -> Self {
        Self {
            chemical_id,
            current_quantity,
            unit: unit.into(),
            ..Self::default()
        }
    }
}

impl Form for ReorderRequestForm {
    type Submission = ReorderRequest;

    const SUCCESS_MESSAGE: &'static str = "Reorder request submitted successfully";

    fn validate(&self, _today: NaiveDate) -> Result<ReorderRequest, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        let quantity = parse_positive_quantity(&self.requested_quantity);
        if quantity.is_none() {
            errors.push("requested_quantity", QUANTITY_ERROR);
        }
        errors.into_result(|| ReorderRequest {
            requested_quantity: quantity.unwrap_or_default(),
            notes: non_blank(&self.notes),
        })
    }
}
