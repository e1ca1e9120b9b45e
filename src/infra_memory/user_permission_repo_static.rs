use crate::domain_model::{MarketId, PermissionTable, UserId};
use crate::domain_port::{PermissionRepoError, UserPermissionRepo};
use tracing::debug;

#[derive(Debug)]
pub struct StaticUserPermissionRepo {
    table: PermissionTable,
}

impl StaticUserPermissionRepo {
    pub fn new(table: PermissionTable) -> Self {
        Self { table }
    }
}

#[async_trait::async_trait]
impl UserPermissionRepo for StaticUserPermissionRepo {
    async fn get_user_market_permissions(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<MarketId>, PermissionRepoError> {
        match self.table.get(user_id) {
            Some(market_id) => Ok(vec![market_id.clone()]),
            None => {
                // unknown users have no markets, not a placeholder one
                debug!(%user_id, "no market permissions for user");
                Ok(Vec::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_model::MarketGrant;

    #[tokio::test]
    async fn known_users_get_their_market() {
        let repo = StaticUserPermissionRepo::new(PermissionTable::builtin());

        let markets = repo
            .get_user_market_permissions(&UserId::from("auth0|655c7e9a022f6b2083b15dc5"))
            .await
            .unwrap();
        assert_eq!(markets, vec![MarketId::from("no")]);

        let markets = repo
            .get_user_market_permissions(&UserId::from(
                "ozrjG9OAXgswPYYYmeQaDQZVPLDR3p9y@clients",
            ))
            .await
            .unwrap();
        assert_eq!(markets, vec![MarketId::from("no")]);
    }

    #[tokio::test]
    async fn unknown_user_gets_no_markets() {
        let repo = StaticUserPermissionRepo::new(PermissionTable::builtin());
        let markets = repo
            .get_user_market_permissions(&UserId::from("auth0|unknown"))
            .await
            .unwrap();
        assert!(markets.is_empty());
    }

    #[tokio::test]
    async fn lookup_uses_injected_table() {
        let table = PermissionTable::from_grants(vec![
            MarketGrant::new("alice", "se"),
            MarketGrant::new("bob", "dk"),
        ])
        .unwrap();
        let repo = StaticUserPermissionRepo::new(table);

        let markets = repo
            .get_user_market_permissions(&UserId::from("bob"))
            .await
            .unwrap();
        assert_eq!(markets, vec![MarketId::from("dk")]);

        // builtin accounts are not implied
        let markets = repo
            .get_user_market_permissions(&UserId::from("auth0|655c7e9a022f6b2083b15dc5"))
            .await
            .unwrap();
        assert!(markets.is_empty());
    }
}
