use log::warn;
use serde_json::Value;

use crate::portal::PortalClient;

/// Write side of the portal plus the registered-classes views. Register and
/// cancel fold every failure mode into a plain bool so the batch endpoint above
/// can report per-class outcomes instead of aborting midway.
pub struct RegistrationGateway {
    client: PortalClient,
}

impl RegistrationGateway {
    pub fn new(client: PortalClient) -> RegistrationGateway {
        RegistrationGateway { client }
    }

    pub async fn register_class(&self, class_id: i64) -> bool {
        let path = format!("dangKyLopHocPhan?idLopHocPhan={}", class_id);
        match self.client.post(&path).await {
            Ok(envelope) => envelope.success,
            Err(_) => {
                warn!("registration call failed for class {}", class_id);
                false
            }
        }
    }

    pub async fn fetch_registered_classes(&self, dot_id: i64) -> Value {
        let path = format!("getLHPDaDangKy?idDot={}", dot_id);
        match self.client.get(&path).await {
            Ok(envelope) => match envelope.into_body() {
                Some(body) => body,
                None => {
                    warn!("portal rejected the registered-classes call for dot {}", dot_id);
                    Value::Array(Vec::new())
                }
            },
            Err(_) => {
                warn!("registered-classes call failed for dot {}, degrading to empty", dot_id);
                Value::Array(Vec::new())
            }
        }
    }

    pub async fn cancel_registered_class(&self, reg_id: i64) -> bool {
        let path = format!("huyDangKy?idDangKy={}", reg_id);
        match self.client.delete(&path).await {
            Ok(envelope) => envelope.success,
            Err(_) => {
                warn!("cancel call failed for registration {}", reg_id);
                false
            }
        }
    }
}
