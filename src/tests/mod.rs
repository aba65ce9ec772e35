mod real;

/// Route `log` output through the test harness so degenerate-input messages show up on failure.
fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
