mod batch;
mod config;
mod font;
mod icon;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = config::GeneratorConfig::default();
    batch::generate_all(&config)?;
    Ok(())
}
