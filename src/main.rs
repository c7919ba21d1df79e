fn build_logger() -> simple_logger::SimpleLogger {
    simple_logger::SimpleLogger::new()
        .with_colors(true)
        .with_threads(true)
        .with_local_timestamps()
        .with_level(log::LevelFilter::Info)
}

fn main() -> anyhow::Result<()> {
    build_logger().env().init()?;

    let channels = adtouch_bridge::BridgeChannels::default();
    let backend = adtouch_backend::run(channels.backend_rx, channels.backend_tx);
    adtouch_frontend::run(channels.frontend_rx, channels.frontend_tx)?;

    backend
        .join()
        .map_err(|_| anyhow::anyhow!("backend thread panicked"))??;

    Ok(())
}
