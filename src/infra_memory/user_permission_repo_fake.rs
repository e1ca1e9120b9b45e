use crate::domain_model::{MarketId, UserId};
use crate::domain_port::{PermissionRepoError, UserPermissionRepo};

/// Grants every caller the same single market, whoever they are.
///
/// Used for workshops and local development; select the `static` backend to
/// enforce the permission table.
#[derive(Debug)]
pub struct FakeUserPermissionRepo {
    market_id: MarketId,
}

impl FakeUserPermissionRepo {
    pub fn with_market(market_id: MarketId) -> Self {
        Self { market_id }
    }
}

#[async_trait::async_trait]
impl UserPermissionRepo for FakeUserPermissionRepo {
    async fn get_user_market_permissions(
        &self,
        _user_id: &UserId,
    ) -> Result<Vec<MarketId>, PermissionRepoError> {
        Ok(vec![self.market_id.clone()])
    }
}
