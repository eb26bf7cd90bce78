//! Lender onboarding form.
//!
//! Posted with repeated `products` keys, so routes hand the raw body to
//! [`crate::services::partners::add_lender`] which parses it with
//! `serde_html_form`.

use serde::Deserialize;
use validator::Validate;

use crate::domain::partner::NewLender;
use crate::domain::types::TypeConstraintError;

#[derive(Debug, Deserialize, Validate)]
pub struct AddLenderForm {
    #[validate(length(min = 1, message = "name cannot be empty"))]
    pub name: String,
    #[validate(email(message = "invalid email"))]
    pub contact_email: String,
    #[validate(length(min = 1, message = "phone cannot be empty"))]
    pub contact_phone: String,
    #[validate(length(min = 1, message = "city cannot be empty"))]
    pub city: String,
    #[serde(default)]
    pub products: Vec<String>,
    pub commission_bps: i32,
    /// Empty when the lender works with us directly.
    #[serde(default)]
    pub aggregator_id: String,
    #[serde(default)]
    pub notes: String,
}

impl TryFrom<AddLenderForm> for NewLender {
    type Error = TypeConstraintError;

    fn try_from(form: AddLenderForm) -> Result<Self, Self::Error> {
        let aggregator_id = match form.aggregator_id.trim() {
            "" => None,
            raw => Some(raw.parse::<i32>().map_err(|_| {
                TypeConstraintError::InvalidValue(format!("bad aggregator id: {raw}"))
            })?),
        };
        let notes = match form.notes.trim() {
            "" => None,
            raw => Some(raw.to_string()),
        };
        NewLender::new(
            form.name,
            form.contact_email,
            form.contact_phone,
            form.city,
            form.products,
            form.commission_bps,
            aggregator_id,
            notes,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> AddLenderForm {
        AddLenderForm {
            name: "Crestline Capital".to_string(),
            contact_email: "Ops@Crestline.In".to_string(),
            contact_phone: "+91 98200 12345".to_string(),
            city: "Mumbai".to_string(),
            products: vec!["Personal Loan".to_string(), " ".to_string()],
            commission_bps: 240,
            aggregator_id: String::new(),
            notes: "  ".to_string(),
        }
    }

    #[test]
    fn test_form_parses_from_repeated_keys() {
        let body = "name=Crestline+Capital&contact_email=ops%40crestline.in\
                    &contact_phone=%2B919820012345&city=Mumbai\
                    &products=Personal+Loan&products=Gold+Loan\
                    &commission_bps=240&aggregator_id=&notes=";
        let form: AddLenderForm = serde_html_form::from_bytes(body.as_bytes()).unwrap();

        assert_eq!(form.products.len(), 2);
        assert_eq!(form.products[1], "Gold Loan");
        assert_eq!(form.commission_bps, 240);
        assert!(form.aggregator_id.is_empty());
    }

    #[test]
    fn test_into_payload_normalizes_fields() {
        let payload = NewLender::try_from(form()).unwrap();

        assert_eq!(payload.contact_email, "ops@crestline.in");
        assert_eq!(payload.contact_phone, "+919820012345");
        assert_eq!(payload.products, vec!["Personal Loan".to_string()]);
        assert_eq!(payload.aggregator_id, None);
        assert_eq!(payload.notes, None);
    }

    #[test]
    fn test_into_payload_rejects_bad_aggregator_id() {
        let mut bad = form();
        bad.aggregator_id = "first".to_string();

        assert!(NewLender::try_from(bad).is_err());
    }
}
