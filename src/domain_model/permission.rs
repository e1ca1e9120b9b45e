use super::{MarketId, UserId};
use serde::Deserialize;
use std::collections::HashMap;

/// Market returned to every caller while the development override is active.
pub const DEFAULT_OVERRIDE_MARKET: &str = "no";

/// One user-to-market entry as written in the settings file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MarketGrant {
    pub user_id: UserId,
    pub market_id: MarketId,
}

impl MarketGrant {
    pub fn new(user_id: impl Into<String>, market_id: impl Into<String>) -> Self {
        Self {
            user_id: UserId::new(user_id),
            market_id: MarketId::new(market_id),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PermissionTableError {
    #[error("user {0} is granted more than one market")]
    DuplicateUser(UserId),
}

/// Read-only mapping from a user to the single market they may access.
///
/// Built once at startup and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct PermissionTable {
    entries: HashMap<UserId, MarketId>,
}

impl PermissionTable {
    pub fn from_grants(
        grants: impl IntoIterator<Item = MarketGrant>,
    ) -> Result<Self, PermissionTableError> {
        let mut entries = HashMap::new();
        for grant in grants {
            if entries.contains_key(&grant.user_id) {
                return Err(PermissionTableError::DuplicateUser(grant.user_id));
            }
            entries.insert(grant.user_id, grant.market_id);
        }
        Ok(Self { entries })
    }

    /// The two accounts used by the client workshop.
    pub fn builtin() -> Self {
        let entries = HashMap::from([
            (
                UserId::from("auth0|655c7e9a022f6b2083b15dc5"),
                MarketId::from("no"),
            ),
            (
                UserId::from("ozrjG9OAXgswPYYYmeQaDQZVPLDR3p9y@clients"),
                MarketId::from("no"),
            ),
        ]);
        Self { entries }
    }

    pub fn get(&self, user_id: &UserId) -> Option<&MarketId> {
        self.entries.get(user_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
