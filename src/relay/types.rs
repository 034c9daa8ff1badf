//! 中继响应类型定义

use serde::Serialize;
use serde_json::Value;

/// 成功状态标记
pub const STATUS_OK: &str = "OK";
/// 上游拒绝（非 2xx）状态标记
pub const STATUS_UPSTREAM_ERROR: &str = "UPSTREAM_ERROR";
/// 中继自身失败状态标记
pub const STATUS_ERROR: &str = "ERROR";

// === 中继信封 ===

/// 返回给调用方的信封
///
/// 成功时只有 `status` 与 `json` 两个字段；
/// 上游返回非 2xx 时额外携带 `upstreamStatus`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelayEnvelope {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upstream_status: Option<u16>,
    pub json: Value,
}

impl RelayEnvelope {
    /// 上游成功
    pub fn ok(json: Value) -> Self {
        Self {
            status: STATUS_OK,
            upstream_status: None,
            json,
        }
    }

    /// 上游拒绝（例如凭据无效、仓库不存在、参数校验失败）
    pub fn rejected(upstream_status: u16, json: Value) -> Self {
        Self {
            status: STATUS_UPSTREAM_ERROR,
            upstream_status: Some(upstream_status),
            json,
        }
    }
}

// === 错误响应 ===

/// 中继失败响应
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: &'static str,
    pub error: ErrorDetail,
}

/// 错误详情
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    #[serde(rename = "type")]
    pub error_type: String,
    pub message: String,
}

impl ErrorResponse {
    /// 创建新的错误响应
    pub fn new(error_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status: STATUS_ERROR,
            error: ErrorDetail {
                error_type: error_type.into(),
                message: message.into(),
            },
        }
    }
}

// === 健康检查 ===

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self { status: STATUS_OK }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ok_envelope_has_exactly_two_keys() {
        let value = serde_json::to_value(RelayEnvelope::ok(json!({"number": 7}))).unwrap();
        assert_eq!(value, json!({"status": "OK", "json": {"number": 7}}));
    }

    #[test]
    fn test_rejected_envelope_carries_upstream_status() {
        let value = serde_json::to_value(RelayEnvelope::rejected(
            401,
            json!({"message": "Bad credentials"}),
        ))
        .unwrap();
        assert_eq!(
            value,
            json!({
                "status": "UPSTREAM_ERROR",
                "upstreamStatus": 401,
                "json": {"message": "Bad credentials"}
            })
        );
    }

    #[test]
    fn test_error_response_shape() {
        let value =
            serde_json::to_value(ErrorResponse::new("upstream_timeout", "上游请求超时")).unwrap();
        assert_eq!(value["status"], "ERROR");
        assert_eq!(value["error"]["type"], "upstream_timeout");
        assert_eq!(value["error"]["message"], "上游请求超时");
    }
}
