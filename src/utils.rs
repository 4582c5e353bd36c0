//! Small general-purpose helpers

use std::time::{SystemTime, UNIX_EPOCH};

/// Pick an arbitrary element of a non-empty slice.
///
/// Seeded from the clock, so only suitable for cosmetic variety.
pub fn sample<T>(items: &[T]) -> &T {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() as usize)
        .unwrap_or(0);

    &items[nanos % items.len()]
}
