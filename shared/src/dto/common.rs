use serde::{Deserialize, Serialize};

/// Standard response envelope used by both backends.
///
/// The transport layer returns this as-is for any 2xx response; callers must
/// check `success` before trusting `data`. A 2xx response with
/// `success = false` is an application-level failure, not a transport error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Consume the envelope, yielding `data` when the backend reported
    /// success, or the embedded message (if any) when it did not.
    pub fn into_result(self) -> Result<Option<T>, Option<String>> {
        if self.success {
            Ok(self.data)
        } else {
            Err(self.message)
        }
    }
}

/// Paginated list envelope: `data` is the page, `pagination` the metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct PaginatedResponse<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Vec<T>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub pagination: Option<PageInfo>,
}

/// Page metadata attached to list responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub page: u32,
    pub limit: u32,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub total_pages: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_response_success_false_parses() {
        let json = r#"{"success":false,"message":"Invalid credentials"}"#;
        let response: ApiResponse<String> = serde_json::from_str(json).unwrap();
        assert!(!response.success);
        assert_eq!(response.data, None);
        assert_eq!(response.message.as_deref(), Some("Invalid credentials"));
    }

    #[test]
    fn test_paginated_response_defaults() {
        let json = r#"{"success":true}"#;
        let response: PaginatedResponse<u32> = serde_json::from_str(json).unwrap();
        assert!(response.success);
        assert!(response.data.is_empty());
        assert!(response.pagination.is_none());
    }

    #[test]
    fn test_page_info_camel_case() {
        let json = r#"{"page":2,"limit":20,"total":115,"totalPages":6}"#;
        let info: PageInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.total, Some(115));
        assert_eq!(info.total_pages, Some(6));
    }
}
