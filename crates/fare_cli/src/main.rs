use clap::Parser;
use fare_cli::app::FareCliArguments;

#[tokio::main]
async fn main() {
    env_logger::init();
    let args = FareCliArguments::parse();
    match args.op.run().await {
        Ok(_) => log::info!("finished."),
        Err(e) => {
            log::error!("fare-split failed: {e}");
            std::process::exit(1);
        }
    }
}
