use meridian_search::{Criteria, NumberFieldValue, SearchField, StringFieldValue};
use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

use crate::client::ApiClient;
use crate::errors::Result;
use crate::params::ListOptions;
use crate::response::ResultData;

/// Item (material) master record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Item {
    pub internal_reference: i64,
    pub code: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auxil_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub producer_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_set_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<i32>,
}

/// Payload for creating or replacing an item.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct NewItem {
    pub code: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auxil_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub producer_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_set_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_rate: Option<f64>,
}

/// Searchable item fields, named as the backend expects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemField {
    InternalReference,
    Code,
    Name,
    AuxilCode,
    GroupCode,
    ProducerCode,
    VatRate,
    Active,
}

impl SearchField for ItemField {
    fn wire_name(self) -> &'static str {
        self.into()
    }
}

/// Typed search criteria for items; call order is preserved in the
/// compiled filter.
#[derive(Debug, Clone, Default)]
pub struct ItemCriteria {
    criteria: Criteria,
}

impl ItemCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn code(mut self, value: impl Into<StringFieldValue>) -> Self {
        self.criteria.set(ItemField::Code, value.into());
        self
    }

    pub fn name(mut self, value: impl Into<StringFieldValue>) -> Self {
        self.criteria.set(ItemField::Name, value.into());
        self
    }

    pub fn auxil_code(mut self, value: impl Into<StringFieldValue>) -> Self {
        self.criteria.set(ItemField::AuxilCode, value.into());
        self
    }

    pub fn group_code(mut self, value: impl Into<StringFieldValue>) -> Self {
        self.criteria.set(ItemField::GroupCode, value.into());
        self
    }

    pub fn producer_code(mut self, value: impl Into<StringFieldValue>) -> Self {
        self.criteria.set(ItemField::ProducerCode, value.into());
        self
    }

    pub fn vat_rate(mut self, value: impl Into<NumberFieldValue>) -> Self {
        self.criteria.set(ItemField::VatRate, value.into());
        self
    }

    pub fn active(mut self, value: impl Into<NumberFieldValue>) -> Self {
        self.criteria.set(ItemField::Active, value.into());
        self
    }

    pub fn internal_reference(mut self, value: impl Into<NumberFieldValue>) -> Self {
        self.criteria.set(ItemField::InternalReference, value.into());
        self
    }

    pub fn to_query(&self) -> Option<String> {
        self.criteria.to_query()
    }
}

/// `/items` endpoints.
pub struct Items<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn items(&self) -> Items<'_> {
        Items { client: self }
    }
}

impl Items<'_> {
    pub async fn list(&self, options: &ListOptions) -> Result<ResultData<Item>> {
        self.client.get("/items", &options.pairs()).await
    }

    pub async fn search(
        &self,
        criteria: &ItemCriteria,
        options: &ListOptions,
    ) -> Result<ResultData<Item>> {
        let mut pairs = options.pairs();
        // No clause means an unfiltered listing, never an empty `q`.
        if let Some(q) = criteria.to_query() {
            pairs.push(("q".to_string(), q));
        }
        self.client.get("/items", &pairs).await
    }

    pub async fn get(&self, id: i64) -> Result<Item> {
        self.client.get(&format!("/items/{}", id), &[]).await
    }

    pub async fn create(&self, item: &NewItem) -> Result<Item> {
        self.client.post("/items", item).await
    }

    pub async fn update(&self, id: i64, item: &NewItem) -> Result<Item> {
        self.client.put(&format!("/items/{}", id), item).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.client.delete(&format!("/items/{}", id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_criteria_compiles_in_call_order() {
        let criteria = ItemCriteria::new()
            .code(StringFieldValue::like("AB*"))
            .vat_rate(NumberFieldValue::between(1, 20))
            .active(1);
        assert_eq!(
            criteria.to_query().unwrap(),
            "CODE like 'AB*' and VAT_RATE gte 1 and VAT_RATE lte 20 and ACTIVE eq 1"
        );
    }

    #[test]
    fn test_empty_criteria_compiles_to_none() {
        assert_eq!(ItemCriteria::new().to_query(), None);
    }

    #[test]
    fn test_field_wire_names() {
        assert_eq!(ItemField::AuxilCode.wire_name(), "AUXIL_CODE");
        assert_eq!(ItemField::InternalReference.wire_name(), "INTERNAL_REFERENCE");
        assert_eq!(ItemField::VatRate.wire_name(), "VAT_RATE");
    }

    #[test]
    fn test_record_decodes_wire_shape() {
        let body = r#"{
            "INTERNAL_REFERENCE": 17,
            "CODE": "A-100",
            "NAME": "Hex bolt M8",
            "AUXIL_CODE": "FASTENERS",
            "VAT_RATE": 19.0
        }"#;
        let item: Item = serde_json::from_str(body).unwrap();
        assert_eq!(item.internal_reference, 17);
        assert_eq!(item.code, "A-100");
        assert_eq!(item.auxil_code.as_deref(), Some("FASTENERS"));
        assert_eq!(item.group_code, None);
    }

    #[test]
    fn test_new_item_skips_unset_fields() {
        let payload = NewItem {
            code: "A-100".to_string(),
            name: "Hex bolt M8".to_string(),
            auxil_code: None,
            group_code: None,
            producer_code: None,
            unit_set_code: None,
            vat_rate: Some(19.0),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"CODE": "A-100", "NAME": "Hex bolt M8", "VAT_RATE": 19.0})
        );
    }
}
