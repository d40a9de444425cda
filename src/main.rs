use pps_drill::{Trainer, TrainerConfig};
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let trainer = Trainer::new(TrainerConfig::default());
    if let Err(e) = trainer.show() {
        tracing::error!("{}", e);
        process::exit(1);
    }
}
