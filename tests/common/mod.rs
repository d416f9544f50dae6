pub mod fixtures;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Route log output through the test harness.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
