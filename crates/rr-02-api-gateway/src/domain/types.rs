//! Wire types for the HTTP surface.

use rr_01_receipt_scoring::{Points, ReceiptId};
use serde::{Deserialize, Serialize};

/// Sample receipt files referenced by the usage payload
pub const SAMPLE_RECEIPTS: [&str; 4] = [
    "receipt1.json",
    "receipt2.json",
    "receipt3.json",
    "receipt4.json",
];

pub const USAGE_MESSAGE: &str = "Receipt Exercise Started!";

/// `POST /receipts/process` success body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub id: ReceiptId,
}

/// `GET /receipts/{id}/points` success body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: Points,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            service: crate::SERVICE_NAME.to_string(),
            version: crate::VERSION.to_string(),
        }
    }
}

/// One example command in the usage payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandExample {
    pub description: String,
    pub example: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageCommands {
    #[serde(rename = "POST")]
    pub post: Vec<CommandExample>,
    #[serde(rename = "GET")]
    pub get: Vec<CommandExample>,
}

/// `GET /` body: how to drive the service with curl
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageResponse {
    pub message: String,
    pub commands: UsageCommands,
}

impl UsageResponse {
    /// Build the payload for a server reachable at `base` (`host:port`).
    pub fn for_base(base: &str) -> Self {
        let post = SAMPLE_RECEIPTS
            .iter()
            .map(|file| CommandExample {
                description: format!("POST command for processing {file}"),
                example: format!(
                    "curl {base}/receipts/process --include --header 'Content-Type: application/json' -d @receipts/{file} --request POST"
                ),
            })
            .collect();

        let get = vec![CommandExample {
            description: "GET command with receipt ID to retrieve points".to_string(),
            example: format!("curl http://{base}/receipts/{{id}}/points"),
        }];

        Self {
            message: USAGE_MESSAGE.to_string(),
            commands: UsageCommands { post, get },
        }
    }
}
