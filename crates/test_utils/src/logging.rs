//! Test logging setup

use once_cell::sync::OnceCell;

static TRACING: OnceCell<()> = OnceCell::new();

/// Installs a tracing subscriber once per test binary
///
/// Set `RUST_LOG=debug` to see the load pipeline's events.
pub fn init_test_tracing() {
    TRACING.get_or_init(|| {
        core_kernel::init_tracing("warn");
    });
}
