use crate::forms::{Form, ValidationErrors, parse_input_date};
use chrono::NaiveDate;
use shared::supplyline::tool::CheckoutRequest;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckoutForm {
    pub tool_id: i64,
    pub user_id: String,
    /// Optional; blank means open-ended.
    pub expected_return_date: String,
}

impl CheckoutForm {
    pub fn new(tool_id: i64) -> Self {
        Self {
            tool_id,
            ..Self::default()
        }
    }
}

impl Form for CheckoutForm {
    type Submission = CheckoutRequest;

    const SUCCESS_MESSAGE: &'static str = "Tool checked out successfully";

    fn validate(&self, today: NaiveDate) -> Result<CheckoutRequest, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let user_id = self.user_id.trim().parse::<i64>().ok().filter(|id| *id > 0);
        if user_id.is_none() {
            errors.push("user_id", "Please select a user");
        }

        let expected_return_date = if self.expected_return_date.trim().is_empty() {
            None
        } else {
            match parse_input_date(&self.expected_return_date) {
                None => {
                    errors.push(
                        "expected_return_date",
                        "Expected return date must be a valid date (YYYY-MM-DD)",
                    );
                    None
                }
                Some(date) if date < today => {
                    errors.push(
                        "expected_return_date",
                        "Expected return date cannot be in the past",
                    );
                    None
                }
                Some(date) => Some(date),
            }
        };

        errors.into_result(|| CheckoutRequest {
            user_id: user_id.unwrap_or_default(),
            expected_return_date,
        })
    }
}
