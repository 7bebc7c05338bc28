use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::models::customer::NewCustomer;

// Request para registrar un cliente
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerRequest {
    pub full_name: String,
    pub document: String,
    pub birth_date: NaiveDate,
}

impl From<CreateCustomerRequest> for NewCustomer {
    fn from(request: CreateCustomerRequest) -> Self {
        NewCustomer::new(request.full_name, request.document, request.birth_date)
    }
}
