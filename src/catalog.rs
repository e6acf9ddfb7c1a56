use log::warn;
use serde_json::Value;

use crate::data_structs::responses::course_record::{ClassSection, CourseRecord, Subject};
use crate::error::ProxyError;
use crate::portal::PortalClient;

/// Read side of the portal: registration periods ("dots") down to per-class
/// schedules. Built fresh for each inbound request and driven by exactly one
/// logical flow; it keeps no state between calls.
///
/// Error policy is asymmetric on purpose: dots and subjects are required and
/// fail loudly, while the per-subject and per-class enrichment calls degrade to
/// empty results so a single flaky class cannot sink the whole aggregation.
pub struct CourseDataFetcher {
    client: PortalClient,
}

impl CourseDataFetcher {
    pub fn new(client: PortalClient) -> CourseDataFetcher {
        CourseDataFetcher { client }
    }

    pub async fn fetch_dots(&self) -> Result<Value, ProxyError> {
        let envelope = self.client.get("getDot").await?;
        match envelope.into_body() {
            Some(body) => Ok(body),
            None => Err(ProxyError::BadUpstream("Failed to fetch dots")),
        }
    }

    pub async fn fetch_subjects(&self, dot_id: i64) -> Result<Vec<Subject>, ProxyError> {
        let envelope = self
            .client
            .get(&format!("getHocPhanHocMoi?idDot={}", dot_id))
            .await?;
        let body = envelope
            .into_body()
            .ok_or(ProxyError::BadUpstream("Failed to fetch subjects"))?;
        serde_json::from_value(body).map_err(|err| {
            warn!("subject list for dot {} did not match the expected shape: {}", dot_id, err);
            ProxyError::Upstream
        })
    }

    pub async fn fetch_classes_for_subject(&self, dot_id: i64, subject_code: &str) -> Vec<ClassSection> {
        // query literals (including the capitalized False) are what the portal expects
        let path = format!(
            "getLopHocPhanChoDangKy?idDot={}&maHocPhan={}&isLocTrung=False&isLocTrungWithoutElearning=false",
            dot_id, subject_code
        );
        let envelope = match self.client.get(&path).await {
            Ok(envelope) => envelope,
            Err(_) => {
                warn!("class list call failed for subject {}, degrading to empty", subject_code);
                return Vec::new();
            }
        };
        let body = match envelope.into_body() {
            Some(body) => body,
            None => {
                warn!("portal rejected the class list call for subject {}", subject_code);
                return Vec::new();
            }
        };
        match serde_json::from_value(body) {
            Ok(classes) => classes,
            Err(err) => {
                warn!("class list for subject {} did not match the expected shape: {}", subject_code, err);
                Vec::new()
            }
        }
    }

    pub async fn fetch_class_details(&self, class_id: i64) -> Value {
        let path = format!("getLopHocPhanDetail?idLopHocPhan={}", class_id);
        match self.client.get(&path).await {
            Ok(envelope) => match envelope.into_body() {
                Some(body) => body,
                None => {
                    warn!("portal rejected the detail call for class {}", class_id);
                    Value::Array(Vec::new())
                }
            },
            Err(_) => {
                warn!("detail call failed for class {}, degrading to empty", class_id);
                Value::Array(Vec::new())
            }
        }
    }

    /// The whole catalog for one registration period, flattened into one record
    /// per class. Strictly sequential: for S subjects and C classes in total this
    /// makes 1 + S + C portal calls, preserving upstream order throughout. A
    /// subjects failure aborts everything; class and detail failures only shrink
    /// the output.
    pub async fn fetch_all_data(&self, dot_id: i64) -> Result<Vec<CourseRecord>, ProxyError> {
        let subjects = self.fetch_subjects(dot_id).await?;
        let mut all_data = Vec::new();
        for subject in subjects {
            let classes = self.fetch_classes_for_subject(dot_id, &subject.ma_hoc_phan).await;
            for class in classes {
                let schedules = self.fetch_class_details(class.id).await;
                all_data.push(CourseRecord {
                    subject: subject.clone(),
                    class,
                    schedules,
                });
            }
        }
        Ok(all_data)
    }
}
