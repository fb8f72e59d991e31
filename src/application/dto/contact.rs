use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContactReceiptDto {
    pub status: String,
}

impl ContactReceiptDto {
    pub fn accepted() -> Self {
        Self {
            status: "accepted".into(),
        }
    }
}
