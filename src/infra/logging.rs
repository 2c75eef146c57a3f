use tracing_subscriber::EnvFilter;

/// Поднять fmt-подписчик `tracing`.
///
/// Фильтр берётся из `RUST_LOG`, иначе `default_directive` (например, "info").
/// Повторный вызов ничего не делает.
pub fn init_tracing(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
