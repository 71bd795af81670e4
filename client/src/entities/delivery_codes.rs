use meridian_search::{Criteria, NumberFieldValue, SearchField, StringFieldValue};
use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

use crate::client::{encode_path_segment, ApiClient};
use crate::errors::Result;
use crate::params::ListOptions;
use crate::response::ResultData;

/// Delivery code lookup entry, keyed by code rather than an internal id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct DeliveryCode {
    pub code: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum DeliveryCodeField {
    Code,
    Description,
    Active,
}

impl SearchField for DeliveryCodeField {
    fn wire_name(self) -> &'static str {
        self.into()
    }
}

/// Typed search criteria for delivery codes.
#[derive(Debug, Clone, Default)]
pub struct DeliveryCodeCriteria {
    criteria: Criteria,
}

impl DeliveryCodeCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn code(mut self, value: impl Into<StringFieldValue>) -> Self {
        self.criteria.set(DeliveryCodeField::Code, value.into());
        self
    }

    pub fn description(mut self, value: impl Into<StringFieldValue>) -> Self {
        self.criteria
            .set(DeliveryCodeField::Description, value.into());
        self
    }

    pub fn active(mut self, value: impl Into<NumberFieldValue>) -> Self {
        self.criteria.set(DeliveryCodeField::Active, value.into());
        self
    }

    pub fn to_query(&self) -> Option<String> {
        self.criteria.to_query()
    }
}

/// `/deliveryCodes` endpoints; a read-only lookup table.
pub struct DeliveryCodes<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn delivery_codes(&self) -> DeliveryCodes<'_> {
        DeliveryCodes { client: self }
    }
}

impl DeliveryCodes<'_> {
    pub async fn list(&self, options: &ListOptions) -> Result<ResultData<DeliveryCode>> {
        self.client.get("/deliveryCodes", &options.pairs()).await
    }

    pub async fn search(
        &self,
        criteria: &DeliveryCodeCriteria,
        options: &ListOptions,
    ) -> Result<ResultData<DeliveryCode>> {
        let mut pairs = options.pairs();
        // No clause means an unfiltered listing, never an empty `q`.
        if let Some(q) = criteria.to_query() {
            pairs.push(("q".to_string(), q));
        }
        self.client.get("/deliveryCodes", &pairs).await
    }

    pub async fn get(&self, code: &str) -> Result<DeliveryCode> {
        self.client
            .get(
                &format!("/deliveryCodes/{}", encode_path_segment(code)),
                &[],
            )
            .await
    }
}
