use chrono::NaiveDate;
use meridian_search::{Criteria, DateFieldValue, NumberFieldValue, SearchField, StringFieldValue};
use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

use crate::client::ApiClient;
use crate::errors::Result;
use crate::params::ListOptions;
use crate::response::ResultData;

/// Purchase order slip. Lines are only present when the backend expands
/// the `TRANSACTIONS` collection (single-record reads).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct PurchaseOrder {
    pub internal_reference: i64,
    pub number: String,
    pub date: NaiveDate,
    pub arp_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auxil_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_net: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_gross: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transactions: Option<Vec<OrderLine>>,
}

/// One line of a purchase order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct OrderLine {
    pub internal_reference: i64,
    pub item_code: String,
    pub quantity: f64,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_code: Option<String>,
}

/// Payload for creating or replacing a purchase order. Leaving `number`
/// unset lets the backend assign the next slip number.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct NewPurchaseOrder {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    pub date: NaiveDate,
    pub arp_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auxil_code: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub transactions: Vec<NewOrderLine>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct NewOrderLine {
    pub item_code: String,
    pub quantity: f64,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_code: Option<String>,
}

/// Searchable purchase order fields, named as the backend expects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum PurchaseOrderField {
    InternalReference,
    Number,
    Date,
    ArpCode,
    DeliveryCode,
    AuxilCode,
    Status,
    TotalNet,
    TotalGross,
}

impl SearchField for PurchaseOrderField {
    fn wire_name(self) -> &'static str {
        self.into()
    }
}

/// Typed search criteria for purchase orders; call order is preserved in
/// the compiled filter.
#[derive(Debug, Clone, Default)]
pub struct PurchaseOrderCriteria {
    criteria: Criteria,
}

impl PurchaseOrderCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn number(mut self, value: impl Into<StringFieldValue>) -> Self {
        self.criteria.set(PurchaseOrderField::Number, value.into());
        self
    }

    pub fn date(mut self, value: impl Into<DateFieldValue>) -> Self {
        self.criteria.set(PurchaseOrderField::Date, value.into());
        self
    }

    pub fn arp_code(mut self, value: impl Into<StringFieldValue>) -> Self {
        self.criteria.set(PurchaseOrderField::ArpCode, value.into());
        self
    }

    pub fn delivery_code(mut self, value: impl Into<StringFieldValue>) -> Self {
        self.criteria
            .set(PurchaseOrderField::DeliveryCode, value.into());
        self
    }

    pub fn auxil_code(mut self, value: impl Into<StringFieldValue>) -> Self {
        self.criteria.set(PurchaseOrderField::AuxilCode, value.into());
        self
    }

    pub fn status(mut self, value: impl Into<NumberFieldValue>) -> Self {
        self.criteria.set(PurchaseOrderField::Status, value.into());
        self
    }

    pub fn total_net(mut self, value: impl Into<NumberFieldValue>) -> Self {
        self.criteria.set(PurchaseOrderField::TotalNet, value.into());
        self
    }

    pub fn total_gross(mut self, value: impl Into<NumberFieldValue>) -> Self {
        self.criteria
            .set(PurchaseOrderField::TotalGross, value.into());
        self
    }

    pub fn internal_reference(mut self, value: impl Into<NumberFieldValue>) -> Self {
        self.criteria
            .set(PurchaseOrderField::InternalReference, value.into());
        self
    }

    pub fn to_query(&self) -> Option<String> {
        self.criteria.to_query()
    }
}

/// `/purchaseOrders` endpoints.
pub struct PurchaseOrders<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn purchase_orders(&self) -> PurchaseOrders<'_> {
        PurchaseOrders { client: self }
    }
}

impl PurchaseOrders<'_> {
    pub async fn list(&self, options: &ListOptions) -> Result<ResultData<PurchaseOrder>> {
        self.client.get("/purchaseOrders", &options.pairs()).await
    }

    pub async fn search(
        &self,
        criteria: &PurchaseOrderCriteria,
        options: &ListOptions,
    ) -> Result<ResultData<PurchaseOrder>> {
        let mut pairs = options.pairs();
        // No clause means an unfiltered listing, never an empty `q`.
        if let Some(q) = criteria.to_query() {
            pairs.push(("q".to_string(), q));
        }
        self.client.get("/purchaseOrders", &pairs).await
    }

    pub async fn get(&self, id: i64) -> Result<PurchaseOrder> {
        self.client
            .get(&format!("/purchaseOrders/{}", id), &[])
            .await
    }

    pub async fn create(&self, order: &NewPurchaseOrder) -> Result<PurchaseOrder> {
        self.client.post("/purchaseOrders", order).await
    }

    pub async fn update(&self, id: i64, order: &NewPurchaseOrder) -> Result<PurchaseOrder> {
        self.client
            .put(&format!("/purchaseOrders/{}", id), order)
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.client.delete(&format!("/purchaseOrders/{}", id)).await
    }

    /// Lines of one order, as a nested collection.
    pub async fn lines(&self, id: i64) -> Result<Vec<OrderLine>> {
        self.client
            .get(&format!("/purchaseOrders/{}/transactions", id), &[])
            .await
    }

    pub async fn add_line(&self, id: i64, line: &NewOrderLine) -> Result<OrderLine> {
        self.client
            .post(&format!("/purchaseOrders/{}/transactions", id), line)
            .await
    }

    pub async fn remove_line(&self, id: i64, line_id: i64) -> Result<()> {
        self.client
            .delete(&format!("/purchaseOrders/{}/transactions/{}", id, line_id))
            .await
    }

    /// Marks the order approved; returns the updated slip.
    pub async fn approve(&self, id: i64) -> Result<PurchaseOrder> {
        self.client
            .post_action(&format!("/purchaseOrders/{}/approve", id))
            .await
    }

    /// Cancels the order; returns the updated slip.
    pub async fn cancel(&self, id: i64) -> Result<PurchaseOrder> {
        self.client
            .post_action(&format!("/purchaseOrders/{}/cancel", id))
            .await
    }
}
