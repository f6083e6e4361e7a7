//! Met Museum collection API adapter implementation.

use std::time::Duration;

use serde_json::Value;

use crate::catalog::{CatalogError, CatalogService, ObjectRecord};

const MET_API_BASE_URL: &str = "https://collectionapi.metmuseum.org/public/collection/v1";

/// Met collection adapter backed by `ureq`.
pub struct MetCatalogClient {
    base_url: String,
    http_client: ureq::Agent,
}

impl MetCatalogClient {
    /// Creates a new Met collection client with per-call timeouts.
    pub fn new() -> Self {
        let http_client = ureq::AgentBuilder::new()
            .timeout_connect(Duration::from_secs(5))
            .timeout_read(Duration::from_secs(30))
            .timeout_write(Duration::from_secs(30))
            .build();
        Self {
            base_url: MET_API_BASE_URL.to_string(),
            http_client,
        }
    }

    fn search_url(&self, title: &str) -> String {
        format!(
            "{}/search?q={}&title=true",
            self.base_url,
            urlencoding::encode(title)
        )
    }

    fn object_url(&self, object_id: u64) -> String {
        format!("{}/objects/{}", self.base_url, object_id)
    }

    fn request_json(&self, url: &str) -> Result<Value, CatalogError> {
        let response = self.http_client.get(url).call().map_err(|err| match err {
            ureq::Error::Status(403, _) => CatalogError::Throttled,
            ureq::Error::Status(code, _) => {
                CatalogError::Transport(format!("unexpected status {code}"))
            }
            ureq::Error::Transport(transport) => CatalogError::Transport(transport.to_string()),
        })?;
        response
            .into_json()
            .map_err(|err| CatalogError::Transport(format!("response parse failed: {err}")))
    }

    fn parse_search_payload(payload: &Value) -> Vec<u64> {
        // objectIDs is null when the search matched nothing.
        match payload.get("objectIDs") {
            Some(Value::Array(ids)) => ids.iter().filter_map(Value::as_u64).collect(),
            _ => Vec::new(),
        }
    }

    fn parse_object_payload(payload: &Value) -> ObjectRecord {
        ObjectRecord {
            title: payload
                .get("title")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            artist_display_name: payload
                .get("artistDisplayName")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
        }
    }
}

impl Default for MetCatalogClient {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogService for MetCatalogClient {
    fn search_by_title(&self, title: &str) -> Result<Vec<u64>, CatalogError> {
        let payload = self.request_json(&self.search_url(title))?;
        Ok(Self::parse_search_payload(&payload))
    }

    fn fetch_object(&self, object_id: u64) -> Result<ObjectRecord, CatalogError> {
        let payload = self.request_json(&self.object_url(object_id))?;
        Ok(Self::parse_object_payload(&payload))
    }
}

#[cfg(test)]
mod tests {
    use super::MetCatalogClient;
    use serde_json::json;

    #[test]
    fn test_search_url_encodes_title() {
        let client = MetCatalogClient::new();
        assert_eq!(
            client.search_url("Madame X (Madame Pierre Gautreau)"),
            "https://collectionapi.metmuseum.org/public/collection/v1/search\
             ?q=Madame%20X%20%28Madame%20Pierre%20Gautreau%29&title=true"
        );
    }

    #[test]
    fn test_object_url() {
        let client = MetCatalogClient::new();
        assert_eq!(
            client.object_url(436535),
            "https://collectionapi.metmuseum.org/public/collection/v1/objects/436535"
        );
    }

    #[test]
    fn test_parse_search_payload_with_ids() {
        let payload = json!({ "total": 3, "objectIDs": [101, 202, 303] });
        assert_eq!(
            MetCatalogClient::parse_search_payload(&payload),
            vec![101, 202, 303]
        );
    }

    #[test]
    fn test_parse_search_payload_null_ids() {
        let payload = json!({ "total": 0, "objectIDs": null });
        assert!(MetCatalogClient::parse_search_payload(&payload).is_empty());
    }

    #[test]
    fn test_parse_search_payload_missing_ids() {
        let payload = json!({ "total": 0 });
        assert!(MetCatalogClient::parse_search_payload(&payload).is_empty());
    }

    #[test]
    fn test_parse_object_payload() {
        let payload = json!({
            "objectID": 436535,
            "title": "Wheat Field with Cypresses",
            "artistDisplayName": "Vincent van Gogh",
        });
        let record = MetCatalogClient::parse_object_payload(&payload);
        assert_eq!(record.title, "Wheat Field with Cypresses");
        assert_eq!(record.artist_display_name, "Vincent van Gogh");
    }

    #[test]
    fn test_parse_object_payload_missing_fields() {
        let payload = json!({ "objectID": 1 });
        let record = MetCatalogClient::parse_object_payload(&payload);
        assert!(record.title.is_empty());
        assert!(record.artist_display_name.is_empty());
    }
}
