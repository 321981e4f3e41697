use clap::Parser;
use localisation_metrics::{
    settings::{Args, ENV_PREFIX, Settings},
    startup::App,
};
use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let args = Args::parse();
    let settings = Settings::new(&args).unwrap();

    let filter = EnvFilter::try_from_env(format!("{ENV_PREFIX}_LOG"))
        .unwrap_or_else(|_| EnvFilter::new(settings.log_level.as_ref()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let app = App::build(&settings);

    if let Err(e) = app.run().await {
        error!("failed to compute localisation metrics: {e:?}");
        std::process::exit(1);
    }
}
