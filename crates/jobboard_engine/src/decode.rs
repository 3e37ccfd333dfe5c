use crate::{FailureKind, FetchError, JobRecord, JobsPayload};

/// Parses a response body into job records, preserving payload order.
pub fn decode_jobs(bytes: &[u8]) -> Result<Vec<JobRecord>, FetchError> {
    serde_json::from_slice::<JobsPayload>(bytes)
        .map(|payload| payload.jobs)
        .map_err(|err| FetchError::new(FailureKind::MalformedResponse, err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_JOB: &str = r#"{
        "jobs": [
            {
                "id": "j-1",
                "status": "RUNNING",
                "dataType": "imagery",
                "requestID": "1042",
                "requestStatusID": 2,
                "tier": "gold",
                "missionID": 7,
                "createdAt": "2024-01-02 03:04:05"
            }
        ],
        "total": 1
    }"#;

    #[test]
    fn decodes_camel_case_fields() {
        let jobs = decode_jobs(ONE_JOB.as_bytes()).unwrap();
        assert_eq!(
            jobs,
            vec![JobRecord {
                id: "j-1".into(),
                status: "RUNNING".into(),
                data_type: "imagery".into(),
                request_id: "1042".into(),
                request_status_id: 2,
                tier: "gold".into(),
                mission_id: 7,
                created_at: "2024-01-02 03:04:05".into(),
            }]
        );
    }

    #[test]
    fn empty_list_is_valid() {
        assert_eq!(decode_jobs(br#"{"jobs": []}"#).unwrap(), Vec::new());
    }

    #[test]
    fn missing_jobs_field_is_malformed() {
        let err = decode_jobs(br#"{"items": []}"#).unwrap_err();
        assert_eq!(err.kind, FailureKind::MalformedResponse);
    }

    #[test]
    fn non_json_body_is_malformed() {
        let err = decode_jobs(b"<html>maintenance</html>").unwrap_err();
        assert_eq!(err.kind, FailureKind::MalformedResponse);
    }

    #[test]
    fn fractional_mission_id_is_malformed() {
        let body = ONE_JOB.replace("\"missionID\": 7", "\"missionID\": 7.5");
        let err = decode_jobs(body.as_bytes()).unwrap_err();
        assert_eq!(err.kind, FailureKind::MalformedResponse);
    }
}
