use crate::domain_model::{MarketId, PermissionTable};
use crate::domain_port::*;
use crate::infra_memory::*;
use crate::logger::*;
use crate::settings::Settings;
use std::sync::Arc;

pub struct Server {
    pub permission_repo: Arc<dyn UserPermissionRepo>,
}

impl Server {
    pub fn try_new(settings: &Settings) -> anyhow::Result<Self> {
        let permission = &settings.permission;

        let permission_repo: Arc<dyn UserPermissionRepo> = match permission.backend.as_str() {
            "fake" => {
                warn!(
                    market = %permission.override_market,
                    "permission override active, every user gets the same market"
                );
                Arc::new(FakeUserPermissionRepo::with_market(MarketId::new(
                    permission.override_market.clone(),
                )))
            }
            "static" => {
                let table = match &permission.grants {
                    Some(grants) => PermissionTable::from_grants(grants.iter().cloned())?,
                    None => PermissionTable::builtin(),
                };
                info!(users = table.len(), "loaded permission table");
                Arc::new(StaticUserPermissionRepo::new(table))
            }
            other => return Err(anyhow::anyhow!("Unknown permission backend: {}", other)),
        };

        Ok(Self { permission_repo })
    }
}
