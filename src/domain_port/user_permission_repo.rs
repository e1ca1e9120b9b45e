use crate::domain_model::{MarketId, UserId};

#[async_trait::async_trait]
pub trait UserPermissionRepo: Send + Sync {
    /// Markets the user may see sales data for. An empty list means the user
    /// has no market permissions.
    async fn get_user_market_permissions(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<MarketId>, PermissionRepoError>;
}

/// Raised by store-backed repos; the in-memory ones never fail.
#[derive(Debug, thiserror::Error)]
pub enum PermissionRepoError {
    #[error("permission store error: {0}")]
    Store(String),
}
