use rsh::config::Config;

fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    rsh::logging::init(&config);
    log::info!("starting rsh");

    rsh::start_shell(&config)
}
