//! Unique identifiers for extracted steps.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// A source of unique step identifiers.
///
/// Implementations must be safe to share between threads since one
/// extractor may be used from several at once.
pub trait IdSource: Send + Sync {
    fn next_id(&self) -> String;
}

/// Random UUID v4 identifiers rendered as 32 lowercase hex digits
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdSource for UuidIds {
    fn next_id(&self) -> String {
        Uuid::new_v4().simple().to_string()
    }
}

/// Deterministic identifiers `step-1`, `step-2`, ...
#[derive(Debug, Default)]
pub struct SequentialIds {
    issued: AtomicU64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdSource for SequentialIds {
    fn next_id(&self) -> String {
        let n = self.issued.fetch_add(1, Ordering::Relaxed) + 1;
        format!("step-{n}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_uuid_ids() {
        let ids = UuidIds;
        let a = ids.next_id();
        let b = ids.next_id();
        assert_eq!(a.len(), 32);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert_ne!(a, b);
    }

    #[test]
    fn test_sequential_ids() {
        let ids = SequentialIds::new();
        assert_eq!(ids.next_id(), "step-1");
        assert_eq!(ids.next_id(), "step-2");
    }

    #[test]
    fn test_sequential_ids_across_threads() {
        let ids = SequentialIds::new();
        let issued: Vec<String> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| (0..25).map(|_| ids.next_id()).collect::<Vec<_>>()))
                .collect();
            handles
                .into_iter()
                .flat_map(|h| h.join().unwrap())
                .collect()
        });

        let unique: HashSet<_> = issued.iter().collect();
        assert_eq!(unique.len(), 100);
    }
}
