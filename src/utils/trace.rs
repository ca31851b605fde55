pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // module names add noise to every line.
        .with_target(false)
        // ANSI codes are unreadable once the lines land in CloudWatch.
        .with_ansi(false)
        // CloudWatch stamps ingestion time itself.
        .without_time()
        .json()
        .init();
}
