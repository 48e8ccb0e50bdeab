use crate::forms::{Form, ValidationErrors, non_blank, parse_positive_quantity};
use chrono::NaiveDate;
use shared::supplyline::chemical::IssueChemicalRequest;

/// Withdraws a quantity of a chemical for use.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IssueForm {
    pub chemical_id: i64,
    pub available_quantity: f64,
    pub quantity: String,
    pub hangar: String,
    pub purpose: String,
}

impl IssueForm {
    pub fn new(chemical_id: i64, available_quantity: f64) -> Self {
        Self {
            chemical_id,
            available_quantity,
            ..Self::default()
        }
    }
}

impl Form for IssueForm {
    type Submission = IssueChemicalRequest;

    const SUCCESS_MESSAGE: &'static str = "Chemical issued successfully";

    fn validate(&self, _today: NaiveDate) -> Result<IssueChemicalRequest, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let quantity = parse_positive_quantity(&self.quantity);
        match quantity {
            None => errors.push("quantity", "Please enter a quantity greater than 0"),
            Some(q) if f64::from(q) > self.available_quantity => errors.push(
                "quantity",
                format!(
                    "Quantity cannot exceed available quantity ({})",
                    self.available_quantity
                ),
            ),
            Some(_) => {}
        }

        let hangar = non_blank(&self.hangar);
        if hangar.is_none() {
            errors.push("hangar", "Hangar is required");
        }

        errors.into_result(|| IssueChemicalRequest {
            quantity: quantity.unwrap_or_default(),
            hangar: hangar.unwrap_or_default(),
            purpose: non_blank(&self.purpose),
        })
    }
}
