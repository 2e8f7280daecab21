use std::sync::atomic::{AtomicI64, Ordering};

static NEXT_ID: AtomicI64 = AtomicI64::new(1);

/// Returns a process-unique id for factory defaults.
///
/// Keeps default names and ids distinct across factories within one test
/// process so unrelated rows never collide on unique columns.
pub fn next_id() -> i64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}
