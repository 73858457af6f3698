//! Request types for the pay calculation engine API.
//!
//! This module defines the JSON request structures for the `/aggregate`
//! endpoint.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{Batch, EmployeeRecord};
use crate::rates::JobRate;

/// Request body for the `/aggregate` endpoint.
///
/// Carries an arbitrary number of batches, one per input source (for
/// example one file per pay period or per site).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregationRequest {
    /// The batches to process and fold, in the order given.
    pub batches: Vec<BatchRequest>,
}

/// One batch as submitted, before its required keys are validated.
///
/// Both keys are optional at the wire level so that a batch missing one of
/// them can be skipped on its own instead of failing the whole request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchRequest {
    /// The batch's job metadata, if present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_meta: Option<Vec<JobRate>>,
    /// The batch's employee punch data, if present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_data: Option<Vec<EmployeeRecord>>,
}

impl TryFrom<BatchRequest> for Batch {
    type Error = EngineError;

    /// Validates the presence of both required keys.
    fn try_from(req: BatchRequest) -> EngineResult<Batch> {
        let job_meta = req
            .job_meta
            .ok_or_else(|| EngineError::MissingRequiredKey {
                key: "jobMeta".to_string(),
            })?;
        let employee_data = req
            .employee_data
            .ok_or_else(|| EngineError::MissingRequiredKey {
                key: "employeeData".to_string(),
            })?;

        Ok(Batch {
            job_meta,
            employee_data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_aggregation_request() {
        let json = r#"{
            "batches": [
                {
                    "jobMeta": [
                        {"job": "Hand prep", "rate": 20.0, "benefitsRate": 2.0}
                    ],
                    "employeeData": [
                        {
                            "employee": "Mike",
                            "timePunch": [
                                {
                                    "job": "Hand prep",
                                    "start": "2022-02-18 09:00:00",
                                    "end": "2022-02-18 17:00:00"
                                }
                            ]
                        }
                    ]
                }
            ]
        }"#;

        let request: AggregationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.batches.len(), 1);

        let batch = Batch::try_from(request.batches[0].clone()).unwrap();
        assert_eq!(batch.job_meta[0].job, "Hand prep");
        assert_eq!(batch.employee_data[0].employee, "Mike");
    }

    #[test]
    fn test_missing_job_meta_is_detected() {
        let json = r#"{"employeeData": []}"#;
        let req: BatchRequest = serde_json::from_str(json).unwrap();

        match Batch::try_from(req) {
            Err(EngineError::MissingRequiredKey { key }) => assert_eq!(key, "jobMeta"),
            other => panic!("Expected MissingRequiredKey error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_employee_data_is_detected() {
        let json = r#"{"jobMeta": []}"#;
        let req: BatchRequest = serde_json::from_str(json).unwrap();

        match Batch::try_from(req) {
            Err(EngineError::MissingRequiredKey { key }) => assert_eq!(key, "employeeData"),
            other => panic!("Expected MissingRequiredKey error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_lists_are_valid() {
        let json = r#"{"jobMeta": [], "employeeData": []}"#;
        let req: BatchRequest = serde_json::from_str(json).unwrap();

        let batch = Batch::try_from(req).unwrap();
        assert!(batch.job_meta.is_empty());
        assert!(batch.employee_data.is_empty());
    }
}
