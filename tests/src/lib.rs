//! Shared helpers for the workspace integration tests.

/// Route `log` output through the test harness.
pub fn init_test_logging() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Debug)
        .try_init();
}

/// Logit and probability computed directly from the published formula.
pub fn closed_form(age: bool, gender: bool, health: bool) -> (f64, f64) {
    let flag = |b: bool| if b { 1.0 } else { 0.0 };
    let logit = 2.88 - 1.78 * flag(age) - 2.36 * flag(gender) + 2.22 * flag(health);
    (logit, 1.0 / (1.0 + (-logit).exp()))
}
