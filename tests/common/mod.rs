//! Reference classical LCS, used only as a test oracle. Never exported
//! from the library itself.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Installs a global `tracing` subscriber once per test binary, so debug
/// mode's per-wave boundary snapshots (spec §4.3) are actually emitted
/// somewhere observable instead of being dropped by the default no-op
/// subscriber.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

pub fn classical_lcs_len(a: &[i32], b: &[i32]) -> i64 {
    let mut dp = vec![vec![0i64; b.len() + 1]; a.len() + 1];
    for i in 1..=a.len() {
        for j in 1..=b.len() {
            dp[i][j] = if a[i - 1] == b[j - 1] {
                dp[i - 1][j - 1] + 1
            } else {
                dp[i - 1][j].max(dp[i][j - 1])
            };
        }
    }
    dp[a.len()][b.len()]
}
