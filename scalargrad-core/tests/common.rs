use scalargrad_core::Value;

/// Installs the test logger once per test binary; `RUST_LOG=trace` shows every propagation step.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Collects `value()` from a slice of nodes.
#[allow(dead_code)]
pub fn values(nodes: &[Value]) -> Vec<f64> {
    nodes.iter().map(|n| n.value()).collect()
}
