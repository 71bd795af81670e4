use chrono::NaiveDate;
use meridian_search::{Criteria, DateFieldValue, NumberFieldValue, SearchField, StringFieldValue};
use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

use crate::client::ApiClient;
use crate::errors::Result;
use crate::params::ListOptions;
use crate::response::ResultData;

/// Sales invoice slip.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct SalesInvoice {
    pub internal_reference: i64,
    pub number: String,
    pub date: NaiveDate,
    pub arp_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auxil_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_net: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_vat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_gross: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transactions: Option<Vec<InvoiceLine>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct InvoiceLine {
    pub internal_reference: i64,
    pub item_code: String,
    pub quantity: f64,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,
}

/// Payload for creating a sales invoice.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct NewSalesInvoice {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    pub date: NaiveDate,
    pub arp_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub transactions: Vec<NewInvoiceLine>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct NewInvoiceLine {
    pub item_code: String,
    pub quantity: f64,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_rate: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum SalesInvoiceField {
    InternalReference,
    Number,
    Date,
    ArpCode,
    AuxilCode,
    Currency,
    TotalNet,
    TotalVat,
    TotalGross,
}

impl SearchField for SalesInvoiceField {
    fn wire_name(self) -> &'static str {
        self.into()
    }
}

/// Typed search criteria for sales invoices.
#[derive(Debug, Clone, Default)]
pub struct SalesInvoiceCriteria {
    criteria: Criteria,
}

impl SalesInvoiceCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn number(mut self, value: impl Into<StringFieldValue>) -> Self {
        self.criteria.set(SalesInvoiceField::Number, value.into());
        self
    }

    pub fn date(mut self, value: impl Into<DateFieldValue>) -> Self {
        self.criteria.set(SalesInvoiceField::Date, value.into());
        self
    }

    pub fn arp_code(mut self, value: impl Into<StringFieldValue>) -> Self {
        self.criteria.set(SalesInvoiceField::ArpCode, value.into());
        self
    }

    pub fn auxil_code(mut self, value: impl Into<StringFieldValue>) -> Self {
        self.criteria.set(SalesInvoiceField::AuxilCode, value.into());
        self
    }

    pub fn currency(mut self, value: impl Into<StringFieldValue>) -> Self {
        self.criteria.set(SalesInvoiceField::Currency, value.into());
        self
    }

    pub fn total_net(mut self, value: impl Into<NumberFieldValue>) -> Self {
        self.criteria.set(SalesInvoiceField::TotalNet, value.into());
        self
    }

    pub fn total_gross(mut self, value: impl Into<NumberFieldValue>) -> Self {
        self.criteria
            .set(SalesInvoiceField::TotalGross, value.into());
        self
    }

    pub fn internal_reference(mut self, value: impl Into<NumberFieldValue>) -> Self {
        self.criteria
            .set(SalesInvoiceField::InternalReference, value.into());
        self
    }

    pub fn to_query(&self) -> Option<String> {
        self.criteria.to_query()
    }
}

/// `/salesInvoices` endpoints. Posted invoices cannot be replaced, so
/// there is no update; corrections go through `cancel` and re-issue.
pub struct SalesInvoices<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn sales_invoices(&self) -> SalesInvoices<'_> {
        SalesInvoices { client: self }
    }
}

impl SalesInvoices<'_> {
    pub async fn list(&self, options: &ListOptions) -> Result<ResultData<SalesInvoice>> {
        self.client.get("/salesInvoices", &options.pairs()).await
    }

    pub async fn search(
        &self,
        criteria: &SalesInvoiceCriteria,
        options: &ListOptions,
    ) -> Result<ResultData<SalesInvoice>> {
        let mut pairs = options.pairs();
        // No clause means an unfiltered listing, never an empty `q`.
        if let Some(q) = criteria.to_query() {
            pairs.push(("q".to_string(), q));
        }
        self.client.get("/salesInvoices", &pairs).await
    }

    pub async fn get(&self, id: i64) -> Result<SalesInvoice> {
        self.client.get(&format!("/salesInvoices/{}", id), &[]).await
    }

    pub async fn create(&self, invoice: &NewSalesInvoice) -> Result<SalesInvoice> {
        self.client.post("/salesInvoices", invoice).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.client.delete(&format!("/salesInvoices/{}", id)).await
    }

    pub async fn lines(&self, id: i64) -> Result<Vec<InvoiceLine>> {
        self.client
            .get(&format!("/salesInvoices/{}/transactions", id), &[])
            .await
    }

    /// Cancels a posted invoice; returns the updated slip.
    pub async fn cancel(&self, id: i64) -> Result<SalesInvoice> {
        self.client
            .post_action(&format!("/salesInvoices/{}/cancel", id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_criteria_currency_and_totals() {
        let criteria = SalesInvoiceCriteria::new()
            .currency(StringFieldValue::one_of(["EUR", "USD"]))
            .total_gross(NumberFieldValue::gte(1000));
        assert_eq!(
            criteria.to_query().unwrap(),
            "(CURRENCY eq 'EUR' or CURRENCY eq 'USD') and TOTAL_GROSS gte 1000"
        );
    }

    #[test]
    fn test_field_wire_names() {
        assert_eq!(SalesInvoiceField::TotalVat.wire_name(), "TOTAL_VAT");
        assert_eq!(SalesInvoiceField::Number.wire_name(), "NUMBER");
    }
}
