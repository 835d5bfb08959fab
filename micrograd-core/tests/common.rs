use micrograd_core::Value;

// Installs env_logger once per test binary; RUST_LOG controls verbosity.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Returns the index of `node` in `order`, panicking if it is missing.
#[allow(dead_code)]
pub fn position_of(order: &[Value], node: &Value) -> usize {
    order
        .iter()
        .position(|v| v.ptr_eq(node))
        .expect("node missing from topological order")
}
