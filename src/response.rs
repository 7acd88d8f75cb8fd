use serde::Deserialize;

use crate::Result;

/// Status the request layer reports when the login session has lapsed rather
/// than the server returning a real HTTP code.
pub const LOGIN_EXPIRED_STATUS: i64 = -1;

const LOGIN_EXPIRED_MESSAGE: &str = "Login session expired, please log in again";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorPayload {
    #[serde(default)]
    pub message: Option<String>,
}

/// A failed request as the HTTP layer hands it back: transport status plus
/// whatever error payload the server attached.
#[derive(Debug, Clone, Deserialize)]
pub struct FailedResponse {
    pub status: i64,
    #[serde(default)]
    pub data: ErrorPayload,
}

impl FailedResponse {
    pub fn from_json(payload: &str) -> Result<Self> {
        Ok(serde_json::from_str(payload)?)
    }

    /// Message for an error toast: the status code plus the server message
    /// when one is present.
    pub fn error_message(&self) -> String {
        if self.status == LOGIN_EXPIRED_STATUS {
            return LOGIN_EXPIRED_MESSAGE.to_string();
        }
        let mut msg = format!("Code:{}", self.status);
        if let Some(message) = self.data.message.as_deref() {
            msg.push_str(" Msg:");
            msg.push_str(message);
        }
        msg
    }

    /// The server message alone, or empty when the payload carried none.
    pub fn pure_error_message(&self) -> String {
        if self.status == LOGIN_EXPIRED_STATUS {
            return LOGIN_EXPIRED_MESSAGE.to_string();
        }
        self.data.message.clone().unwrap_or_default()
    }
}

/// One entry of a batch response; `code` is per-entity, not per-request.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchEntity<T> {
    pub code: i64,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub body: Option<T>,
}

/// Bodies of the successful entities plus warnings for the rest, in batch
/// order.
#[derive(Debug, Clone)]
pub struct Collected<T> {
    pub bodies: Vec<T>,
    pub warnings: Vec<String>,
}

pub fn collect_bodies<T>(entities: Vec<BatchEntity<T>>) -> Collected<T> {
    let mut bodies = Vec::new();
    let mut warnings = Vec::new();
    for entity in entities {
        if entity.code == 200 {
            if let Some(body) = entity.body {
                bodies.push(body);
            }
        } else {
            warnings.push(entity.message.unwrap_or_default());
        }
    }
    Collected { bodies, warnings }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failed(status: i64, message: Option<&str>) -> FailedResponse {
        FailedResponse {
            status,
            data: ErrorPayload {
                message: message.map(str::to_string),
            },
        }
    }

    #[rstest::rstest]
    fn test_error_message_with_and_without_payload() {
        assert_eq!(failed(500, None).error_message(), "Code:500");
        assert_eq!(
            failed(404, Some("namespace not found")).error_message(),
            "Code:404 Msg:namespace not found"
        );
    }

    #[rstest::rstest]
    fn test_login_expired_sentinel() {
        let response = failed(LOGIN_EXPIRED_STATUS, Some("ignored"));
        assert_eq!(response.error_message(), LOGIN_EXPIRED_MESSAGE);
        assert_eq!(response.pure_error_message(), LOGIN_EXPIRED_MESSAGE);
    }

    #[rstest::rstest]
    fn test_pure_error_message() {
        assert_eq!(failed(500, None).pure_error_message(), "");
        assert_eq!(
            failed(403, Some("no permission")).pure_error_message(),
            "no permission"
        );
    }

    #[rstest::rstest]
    fn test_from_json() {
        let response =
            FailedResponse::from_json(r#"{"status":400,"data":{"message":"bad request"}}"#)
                .unwrap();
        assert_eq!(response.status, 400);
        assert_eq!(response.data.message.as_deref(), Some("bad request"));

        let response = FailedResponse::from_json(r#"{"status":502}"#).unwrap();
        assert!(response.data.message.is_none());

        assert!(FailedResponse::from_json("not json").is_err());
    }

    #[rstest::rstest]
    fn test_collect_bodies_partitions_in_order() {
        let entities: Vec<BatchEntity<String>> = vec![
            BatchEntity {
                code: 200,
                message: None,
                body: Some("first".to_string()),
            },
            BatchEntity {
                code: 500,
                message: Some("boom".to_string()),
                body: None,
            },
            BatchEntity {
                code: 200,
                message: None,
                body: Some("second".to_string()),
            },
        ];
        let collected = collect_bodies(entities);
        assert_eq!(collected.bodies, vec!["first", "second"]);
        assert_eq!(collected.warnings, vec!["boom"]);
    }
}
