use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const GREETING: &str = "Hello from PackPixie API!";

#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct HelloResponse {
    pub message: String,
}

impl Default for HelloResponse {
    fn default() -> Self {
        Self {
            message: GREETING.to_string(),
        }
    }
}
