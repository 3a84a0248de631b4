use std::sync::Arc;

use expirefs::config::Config;
use expirefs::db::connect_and_migrate;
use expirefs::fs::FsFactory;
use expirefs::sweep::sweep_expired;
use expirefs::types::Result;

/// One sweep pass over the expiration ledger. Meant to be run by an external
/// periodic runner such as cron; there is no internal scheduler.
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let config = Arc::new(Config::from_env());
    let pool = connect_and_migrate(&config).await?;

    let factory = FsFactory::new(config, pool);
    let swept = sweep_expired(&factory).await?;

    log::info!("removed {} expired objects", swept);

    Ok(())
}
