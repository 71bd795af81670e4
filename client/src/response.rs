use serde::Deserialize;

/// Envelope returned by every backend endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

/// Collection payload with paging metadata.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultData<T> {
    pub items: Vec<T>,
    pub meta: Meta,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    pub offset: u64,
    pub limit: u64,
    pub total: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_collection_envelope() {
        let body = r#"{
            "success": true,
            "data": {
                "items": [{"CODE": "A"}, {"CODE": "B"}],
                "meta": {"offset": 0, "limit": 10, "total": 2}
            },
            "error": null
        }"#;

        let envelope: ApiResponse<ResultData<serde_json::Value>> =
            serde_json::from_str(body).unwrap();
        assert!(envelope.success);
        let data = envelope.data.unwrap();
        assert_eq!(data.items.len(), 2);
        assert_eq!(data.meta.total, 2);
    }

    #[test]
    fn test_decode_error_envelope() {
        let body = r#"{"success": false, "error": "record not found"}"#;

        let envelope: ApiResponse<serde_json::Value> = serde_json::from_str(body).unwrap();
        assert!(!envelope.success);
        assert!(envelope.data.is_none());
        assert_eq!(envelope.error.unwrap(), "record not found");
    }
}
