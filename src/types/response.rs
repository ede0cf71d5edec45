use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct MessageRes {
    pub message: String,
}
