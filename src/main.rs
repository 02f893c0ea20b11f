use anyhow::Result;
use orrery::engine::core::EngineConfig;
use orrery::engine::EngineApp;
use orrery::solar::catalog::SolarCatalog;

fn main() -> Result<()> {
    init_tracing();

    let config = EngineConfig::discover()?;
    let app = EngineApp::new(config, &SolarCatalog::standard());
    app.run()
}

fn init_tracing() {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("tracing subscriber already set");
    }
}
