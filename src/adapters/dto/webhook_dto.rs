use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct PushRequest {
    pub uri: String,
    pub payload: serde_json::Value,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PushResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}
