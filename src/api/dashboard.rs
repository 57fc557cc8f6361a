//! Dashboard aggregate endpoints

use crate::types::AdminStats;

use super::client::{expect_data, ApiClient, ApiError};

pub async fn stats(client: &ApiClient) -> Result<AdminStats, ApiError> {
    let payload = client.get("/dashboard/stats").await?;
    expect_data(payload)
}
