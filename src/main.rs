use colorful::Colorful;
use dotenv::dotenv;
use infocard::{config::Config, logger, Result};
use tokio::signal::{self, unix};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    logger::init_logger()?;

    let config = Config::from_env()?;
    let mut instance = infocard::Instance::start(&config).await?;

    if let Some(shard) = instance.shard() {
        tokio::spawn(ctrl_c_handle(shard));
    }

    instance.wait().await?;

    println!("Bye!");
    Ok(())
}

// SIGINT and SIGTERM shut the shards down gracefully
async fn ctrl_c_handle(shard_manager: infocard::Shard) {
    let mut term_sig = match unix::signal(unix::SignalKind::terminate()) {
        Ok(v) => v,
        Err(why) => {
            log::error!("Cannot listen to SIGTERM: {}", why);
            return;
        }
    };

    let sig = Box::pin(term_sig.recv());
    let ctrl_c = Box::pin(signal::ctrl_c());
    futures::future::select(sig, ctrl_c).await;

    log::info!("{}", "RECEIVED THE EXIT SIGNAL".red().bold().underlined());
    shard_manager.lock().await.shutdown_all().await;
}
