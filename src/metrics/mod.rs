use prometheus::{IntCounter, IntGauge, Registry};

lazy_static! {
    pub static ref REGISTRY: Registry = Registry::new();
    pub static ref ACTIVE_ROUNDS: IntGauge =
        IntGauge::new("wordguess_active_rounds", "Rounds currently held by the lobby")
            .expect("metric cannot be created");
    pub static ref ROUNDS_STARTED: IntCounter =
        IntCounter::new("wordguess_rounds_started", "Rounds started by the lobby")
            .expect("metric cannot be created");
    pub static ref ROUNDS_WON: IntCounter =
        IntCounter::new("wordguess_rounds_won", "Rounds won against the lobby")
            .expect("metric cannot be created");
    pub static ref ROUNDS_EXPIRED: IntCounter = IntCounter::new(
        "wordguess_rounds_expired",
        "Rounds dropped by the lobby after a period without requests"
    )
    .expect("metric cannot be created");
    pub static ref REMOTE_FALLBACKS: IntCounter = IntCounter::new(
        "wordguess_remote_fallbacks",
        "Rounds switched to offline after the remote guess service failed"
    )
    .expect("metric cannot be created");
}

/// Safe to call more than once, already registered collectors are skipped.
pub fn register_metrics() {
    let collectors: [Box<dyn prometheus::core::Collector>; 5] = [
        Box::new(ACTIVE_ROUNDS.clone()),
        Box::new(ROUNDS_STARTED.clone()),
        Box::new(ROUNDS_WON.clone()),
        Box::new(ROUNDS_EXPIRED.clone()),
        Box::new(REMOTE_FALLBACKS.clone()),
    ];

    for collector in collectors {
        match REGISTRY.register(collector) {
            Ok(()) | Err(prometheus::Error::AlreadyReg) => {}
            Err(error) => log::error!("Collector cannot be registered. Error: '{error}'."),
        }
    }
}
