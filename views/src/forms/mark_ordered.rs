use crate::forms::{Form, ValidationErrors, non_blank, parse_input_date};
use chrono::{Days, NaiveDate};
use shared::supplyline::order::MarkOrderedRequest;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkOrderedForm {
    pub chemical_id: i64,
    pub expected_delivery_date: String,
    pub notes: String,
}

impl MarkOrderedForm {
    pub fn new(chemical_id: i64) -> Self {
        Self {
            chemical_id,
            ..Self::default()
        }
    }
}

impl Form for MarkOrderedForm {
    type Submission = MarkOrderedRequest;

    const SUCCESS_MESSAGE: &'static str = "Chemical marked as ordered";

    fn validate(&self, today: NaiveDate) -> Result<MarkOrderedRequest, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        let tomorrow = today.checked_add_days(Days::new(1)).unwrap_or(today);

        let date = if self.expected_delivery_date.trim().is_empty() {
            errors.push("expected_delivery_date", "Expected delivery date is required");
            None
        } else {
            match parse_input_date(&self.expected_delivery_date) {
                None => {
                    errors.push(
                        "expected_delivery_date",
                        "Expected delivery date must be a valid date (YYYY-MM-DD)",
                    );
                    None
                }
                Some(date) if date < tomorrow => {
                    errors.push(
                        "expected_delivery_date",
                        "Expected delivery date must be in the future",
                    );
                    None
                }
                Some(date) => Some(date),
            }
        };

        errors.into_result(|| MarkOrderedRequest {
            expected_delivery_date: date.unwrap_or(tomorrow),
            notes: non_blank(&self.notes),
        })
    }
}
