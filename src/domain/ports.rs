/// Source of external interruptions delivered while the daemon waits.
///
/// Resolves to `Some(())` for each interruption and `None` once the source
/// can no longer deliver any.
pub trait InterruptSource: Send {
    fn interrupted(&mut self) -> impl std::future::Future<Output = Option<()>> + Send;
}
