use serde::Serialize;
use serde_json::Value;

/// Outcome of a single adapter or messenger operation.
#[derive(Debug, Clone, Serialize)]
pub struct ActionResult {
    /// Whether the operation succeeded.
    pub success: bool,
    /// Human-readable description of the outcome.
    pub message: String,
    /// Optional structured payload (pid, captured stdout/stderr, echoed action).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<Value>,
}

impl ActionResult {
    /// Create a successful result.
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            detail: None,
        }
    }

    /// Create a failed result.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            detail: None,
        }
    }

    /// Attach a structured payload to the result.
    pub fn with_detail(mut self, detail: Value) -> Self {
        self.detail = Some(detail);
        self
    }
}

/// Snapshot of the session state.
#[derive(Debug, Clone, Serialize)]
pub struct Status {
    pub running: bool,
    /// Seconds since `start`, zero when not running.
    pub uptime_secs: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_result_has_no_detail() {
        let result = ActionResult::ok("done");
        assert!(result.success);
        assert_eq!(result.message, "done");
        assert!(result.detail.is_none());
    }

    #[test]
    fn detail_is_attached() {
        let result =
            ActionResult::failure("nope").with_detail(serde_json::json!({ "action": "dance" }));
        assert!(!result.success);
        assert_eq!(result.detail.unwrap()["action"], "dance");
    }
}
