use super::*;

#[test]
fn logger_init_failure_names_the_cause() {
    let line = logger_init_failure(&"attempted to set a logger after the logging system was already initialized");
    assert!(line.starts_with("auction-client: logger init failed"));
    assert!(line.ends_with("already initialized"));
}
