use chrono::NaiveDate;
use meridian_search::{Criteria, DateFieldValue, NumberFieldValue, SearchField, StringFieldValue};
use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

use crate::client::ApiClient;
use crate::errors::Result;
use crate::params::ListOptions;
use crate::response::ResultData;

/// Employee master record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Employee {
    pub internal_reference: i64,
    pub code: String,
    pub name: String,
    pub surname: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hire_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<i32>,
}

/// Payload for creating or replacing an employee.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct NewEmployee {
    pub code: String,
    pub name: String,
    pub surname: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hire_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum EmployeeField {
    InternalReference,
    Code,
    Name,
    Surname,
    Department,
    Position,
    HireDate,
    Active,
}

impl SearchField for EmployeeField {
    fn wire_name(self) -> &'static str {
        self.into()
    }
}

/// Typed search criteria for employees.
#[derive(Debug, Clone, Default)]
pub struct EmployeeCriteria {
    criteria: Criteria,
}

impl EmployeeCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn code(mut self, value: impl Into<StringFieldValue>) -> Self {
        self.criteria.set(EmployeeField::Code, value.into());
        self
    }

    pub fn name(mut self, value: impl Into<StringFieldValue>) -> Self {
        self.criteria.set(EmployeeField::Name, value.into());
        self
    }

    pub fn surname(mut self, value: impl Into<StringFieldValue>) -> Self {
        self.criteria.set(EmployeeField::Surname, value.into());
        self
    }

    pub fn department(mut self, value: impl Into<NumberFieldValue>) -> Self {
        self.criteria.set(EmployeeField::Department, value.into());
        self
    }

    pub fn position(mut self, value: impl Into<StringFieldValue>) -> Self {
        self.criteria.set(EmployeeField::Position, value.into());
        self
    }

    pub fn hire_date(mut self, value: impl Into<DateFieldValue>) -> Self {
        self.criteria.set(EmployeeField::HireDate, value.into());
        self
    }

    pub fn active(mut self, value: impl Into<NumberFieldValue>) -> Self {
        self.criteria.set(EmployeeField::Active, value.into());
        self
    }

    pub fn internal_reference(mut self, value: impl Into<NumberFieldValue>) -> Self {
        self.criteria
            .set(EmployeeField::InternalReference, value.into());
        self
    }

    pub fn to_query(&self) -> Option<String> {
        self.criteria.to_query()
    }
}

/// `/employees` endpoints.
pub struct Employees<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn employees(&self) -> Employees<'_> {
        Employees { client: self }
    }
}

impl Employees<'_> {
    pub async fn list(&self, options: &ListOptions) -> Result<ResultData<Employee>> {
        self.client.get("/employees", &options.pairs()).await
    }

    pub async fn search(
        &self,
        criteria: &EmployeeCriteria,
        options: &ListOptions,
    ) -> Result<ResultData<Employee>> {
        let mut pairs = options.pairs();
        // No clause means an unfiltered listing, never an empty `q`.
        if let Some(q) = criteria.to_query() {
            pairs.push(("q".to_string(), q));
        }
        self.client.get("/employees", &pairs).await
    }

    pub async fn get(&self, id: i64) -> Result<Employee> {
        self.client.get(&format!("/employees/{}", id), &[]).await
    }

    pub async fn create(&self, employee: &NewEmployee) -> Result<Employee> {
        self.client.post("/employees", employee).await
    }

    pub async fn update(&self, id: i64, employee: &NewEmployee) -> Result<Employee> {
        self.client.put(&format!("/employees/{}", id), employee).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.client.delete(&format!("/employees/{}", id)).await
    }
}
