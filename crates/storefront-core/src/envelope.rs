// ── Response envelope ──
//
// Uniform wrapper produced by the access layer and consumed by the
// store/view layers. A failed envelope never carries a payload; the
// constructors make that unrepresentable. Messages are display text,
// never machine-matchable codes.

use serde::{Deserialize, Serialize};

/// Pagination summary attached to collection envelopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub page: usize,
    pub limit: usize,
    pub total: usize,
    pub total_pages: usize,
}

/// Uniform wrapper around access-layer results.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<PageMeta>,
}

impl<T> ApiResponse<T> {
    /// Successful envelope carrying a payload.
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            meta: None,
        }
    }

    /// Successful envelope with no payload (deletions).
    pub fn ok_empty(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
            meta: None,
        }
    }

    /// Failed envelope. Never carries a payload.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            meta: None,
        }
    }

    pub fn with_meta(mut self, meta: PageMeta) -> Self {
        self.meta = Some(meta);
        self
    }

    /// Take the payload, consuming the envelope.
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_never_carries_payload() {
        let env: ApiResponse<Vec<u8>> = ApiResponse::failure("boom");
        assert!(!env.success);
        assert!(env.data.is_none());
        assert_eq!(env.message, "boom");
    }

    #[test]
    fn meta_serializes_camel_case() {
        let meta = PageMeta {
            page: 2,
            limit: 12,
            total: 25,
            total_pages: 3,
        };
        let json = serde_json::to_value(meta).expect("serialize");
        assert_eq!(json["totalPages"], 3);
        assert_eq!(json["limit"], 12);
    }
}
