//! Modelo de Customer

use chrono::NaiveDate;
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Customer {
    pub id: i32,
    pub full_name: String,
    pub document: String,
    pub birth_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewCustomer {
    pub full_name: String,
    pub document: String,
    pub birth_date: NaiveDate,
}

impl NewCustomer {
    pub fn new(full_name: String, document: String, birth_date: NaiveDate) -> Self {
        Self {
            full_name,
            document,
            birth_date,
        }
    }

    pub fn into_customer(self, id: i32) -> Customer {
        Customer {
            id,
            full_name: self.full_name,
            document: self.document,
            birth_date: self.birth_date,
        }
    }
}
