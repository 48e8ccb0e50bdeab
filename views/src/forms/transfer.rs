use crate::forms::{Form, ValidationErrors, non_blank, parse_positive_quantity};
use chrono::NaiveDate;
use shared::supplyline::kit::{ItemType, Location, TransferRequest};

/// Moves a kit item or chemical between kits and warehouses.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferForm {
    pub item_type: ItemType,
    pub item_id: i64,
    pub source: Location,
    pub available_quantity: f64,
    pub destination: Option<Location>,
    pub quantity: String,
    pub notes: String,
}

impl TransferForm {
    pub fn new(item_type: ItemType, item_id: i64, source: Location, available_quantity: f64) -> Self {
        Self {
            item_type,
            item_id,
            source,
            available_quantity,
            destination: None,
            quantity: String::new(),
            notes: String::new(),
        }
    }
}

impl Form for TransferForm {
    type Submission = TransferRequest;

    const SUCCESS_MESSAGE: &'static str = "Transfer completed successfully";

    fn validate(&self, _today: NaiveDate) -> Result<TransferRequest, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        match self.destination {
            None => errors.push("destination", "Please select a destination"),
            Some(destination) if destination == self.source => {
                errors.push("destination", "Destination must differ from the source")
            }
            Some(_) => {}
        }

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

        errors.into_result(|| {
            TransferRequest::new(
                self.item_type,
                self.item_id,
                self.source,
                self.destination.unwrap_or(self.source),
                quantity.unwrap_or_default(),
                non_blank(&self.notes),
            )
        })
    }
}
