use mock_daemon::utils::logger;
use mock_daemon::{interrupt_channel, DaemonConfig, MockDaemon};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logger::init_logger();

    let config = DaemonConfig::from_env();
    tracing::debug!("Daemon config: {:?}", config);

    // Nothing in-process interrupts the wait today; the handle keeps the
    // source open. SIGINT is left at its default action.
    let (_interrupter, mut interrupts) = interrupt_channel();

    let mut daemon = MockDaemon::new(config);
    daemon.start()?;

    let mut stdout = std::io::stdout();
    let report = daemon.run(&mut stdout, &mut interrupts).await?;
    tracing::debug!("Exiting after {:?}", report.waited);

    Ok(())
}
