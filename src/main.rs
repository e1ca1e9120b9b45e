use sales_permissions::domain_model::{MarketId, UserId};
use sales_permissions::logger::*;
use sales_permissions::server::*;
use sales_permissions::settings::*;
use serde_json::json;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let logger = Logger::new_bootstrap()?;

    let project_settings = parse_settings(cli.settings.as_deref())?;
    logger.reload_from_settings(&project_settings.log)?;
    debug!(?project_settings);

    let server = Server::try_new(&project_settings)?;

    let user_id = UserId::new(cli.user_id);
    let markets = server
        .permission_repo
        .get_user_market_permissions(&user_id)
        .await?;
    info!(%user_id, count = markets.len(), "resolved market permissions");

    println!("{}", serde_json::to_string_pretty(&render(&user_id, &markets))?);

    Ok(())
}

fn render(user_id: &UserId, markets: &[MarketId]) -> serde_json::Value {
    json!({
        "user_id": user_id,
        "markets": markets,
    })
}
