use std::sync::Arc;

use tracing::info;
use validator::Validate;

use crate::dto::customer_dto::CreateCustomerRequest;
use crate::models::customer::NewCustomer;
use crate::repositories::CustomerRepository;
use crate::utils::errors::AppResult;

pub struct CustomerController {
    repository: Arc<dyn CustomerRepository>,
}

impl CustomerController {
    pub fn new(repository: Arc<dyn CustomerRepository>) -> Self {
        Self { repository }
    }

    // Sin verificación de documento duplicado
    pub async fn create(&self, request: CreateCustomerRequest) -> AppResult<()> {
        request.validate()?;

        let customer = self.repository.create(&NewCustomer::from(request)).await?;
        info!("👤 Cliente {} registrado", customer.id);
        Ok(())
    }
}
