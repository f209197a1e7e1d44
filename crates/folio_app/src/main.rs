mod data;
mod platform;

fn main() -> anyhow::Result<()> {
    let config = platform::AppConfig::from_env();
    platform::initialize_logging(config.log_destination);
    platform::run_app(config)
}
