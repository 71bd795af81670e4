use meridian_search::{Criteria, NumberFieldValue, SearchField, StringFieldValue};
use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

use crate::client::ApiClient;
use crate::errors::Result;
use crate::params::ListOptions;
use crate::response::ResultData;

/// Business partner (accounts receivable/payable) record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Arp {
    pub internal_reference: i64,
    pub code: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auxil_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<i32>,
}

/// Payload for creating or replacing a business partner.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct NewArp {
    pub code: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auxil_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ArpField {
    InternalReference,
    Code,
    Title,
    AuxilCode,
    TaxNumber,
    City,
    Country,
    Active,
}

impl SearchField for ArpField {
    fn wire_name(self) -> &'static str {
        self.into()
    }
}

/// Typed search criteria for business partners.
#[derive(Debug, Clone, Default)]
pub struct ArpCriteria {
    criteria: Criteria,
}

impl ArpCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn code(mut self, value: impl Into<StringFieldValue>) -> Self {
        self.criteria.set(ArpField::Code, value.into());
        self
    }

    pub fn title(mut self, value: impl Into<StringFieldValue>) -> Self {
        self.criteria.set(ArpField::Title, value.into());
        self
    }

    pub fn auxil_code(mut self, value: impl Into<StringFieldValue>) -> Self {
        self.criteria.set(ArpField::AuxilCode, value.into());
        self
    }

    pub fn tax_number(mut self, value: impl Into<StringFieldValue>) -> Self {
        self.criteria.set(ArpField::TaxNumber, value.into());
        self
    }

    pub fn city(mut self, value: impl Into<StringFieldValue>) -> Self {
        self.criteria.set(ArpField::City, value.into());
        self
    }

    pub fn country(mut self, value: impl Into<StringFieldValue>) -> Self {
        self.criteria.set(ArpField::Country, value.into());
        self
    }

    pub fn active(mut self, value: impl Into<NumberFieldValue>) -> Self {
        self.criteria.set(ArpField::Active, value.into());
        self
    }

    pub fn internal_reference(mut self, value: impl Into<NumberFieldValue>) -> Self {
        self.criteria.set(ArpField::InternalReference, value.into());
        self
    }

    pub fn to_query(&self) -> Option<String> {
        self.criteria.to_query()
    }
}

/// `/arps` endpoints.
pub struct Arps<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn arps(&self) -> Arps<'_> {
        Arps { client: self }
    }
}

impl Arps<'_> {
    pub async fn list(&self, options: &ListOptions) -> Result<ResultData<Arp>> {
        self.client.get("/arps", &options.pairs()).await
    }

    pub async fn search(
        &self,
        criteria: &ArpCriteria,
        options: &ListOptions,
    ) -> Result<ResultData<Arp>> {
        let mut pairs = options.pairs();
        // No clause means an unfiltered listing, never an empty `q`.
        if let Some(q) = criteria.to_query() {
            pairs.push(("q".to_string(), q));
        }
        self.client.get("/arps", &pairs).await
    }

    pub async fn get(&self, id: i64) -> Result<Arp> {
        self.client.get(&format!("/arps/{}", id), &[]).await
    }

    pub async fn create(&self, arp: &NewArp) -> Result<Arp> {
        self.client.post("/arps", arp).await
    }

    pub async fn update(&self, id: i64, arp: &NewArp) -> Result<Arp> {
        self.client.put(&format!("/arps/{}", id), arp).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.client.delete(&format!("/arps/{}", id)).await
    }
}
