use serde::Deserialize;
use serde_json::Value;

/// The portal wraps every answer as `{"success": bool, "body": ...}`. Both fields
/// default to their empty form because the portal omits them on some error paths.
#[derive(Debug, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub body: Option<Value>,
}

impl Envelope {
    /// The payload when the portal accepted the call, `None` when it set the
    /// success flag to false. A missing body on an accepted call reads as an
    /// empty list, matching what the portal means by it.
    pub fn into_body(self) -> Option<Value> {
        if self.success {
            Some(self.body.unwrap_or_else(|| Value::Array(Vec::new())))
        } else {
            None
        }
    }
}
