//! Filesystem-backed cache for raw API responses.
//!
//! Entries are JSON files named by the SHA-256 of the request payload, so
//! the cache is keyed by request content: same house, same cursor, same
//! query text → same entry. Repeating a fetch inside the freshness window
//! replays the stored bodies instead of hitting the network.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::warn;

/// Defines how the response cache participates in a fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CacheMode {
    /// Read fresh entries; write responses fetched on a miss.
    #[default]
    Use,
    /// Skip reads, always fetch, and overwrite the stored entry.
    Refresh,
    /// No reads, no writes.
    Bypass,
}

#[derive(Debug, Serialize, Deserialize)]
struct CacheEntry {
    /// Unix seconds at write time.
    stored_at: u64,
    body: String,
}

/// Filesystem-backed response cache with a bounded freshness window.
///
/// A cache problem is never a fetch problem: unreadable, corrupt, or
/// unwritable entries degrade to a network fetch with a logged warning.
#[derive(Debug, Clone)]
pub struct ResponseCache {
    dir: PathBuf,
    ttl: Duration,
    mode: CacheMode,
}

impl ResponseCache {
    pub fn new(dir: impl Into<PathBuf>, ttl: Duration, mode: CacheMode) -> Self {
        Self {
            dir: dir.into(),
            ttl,
            mode,
        }
    }

    /// Cache key for a request payload.
    pub fn key(payload: &str) -> String {
        hex::encode(Sha256::digest(payload.as_bytes()))
    }

    /// Look up a fresh entry. Misses on expiry, corruption, `Refresh`,
    /// and `Bypass`.
    pub fn get(&self, key: &str) -> Option<String> {
        if self.mode != CacheMode::Use {
            return None;
        }

        let path = self.entry_path(key);
        let raw = fs::read_to_string(&path).ok()?;
        let entry: CacheEntry = match serde_json::from_str(&raw) {
            Ok(entry) => entry,
            Err(error) => {
                warn!(path = %path.display(), "discarding corrupt cache entry: {error}");
                return None;
            }
        };

        if self.is_fresh(entry.stored_at) {
            Some(entry.body)
        } else {
            None
        }
    }

    /// Store a response body. No-op under `Bypass`; failures are logged
    /// and swallowed.
    pub fn put(&self, key: &str, body: &str) {
        if self.mode == CacheMode::Bypass {
            return;
        }

        if let Err(error) = self.try_put(key, body) {
            warn!(dir = %self.dir.display(), "failed to write cache entry: {error}");
        }
    }

    fn try_put(&self, key: &str, body: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let entry = CacheEntry {
            stored_at: unix_now(),
            body: body.to_owned(),
        };
        let serialized = serde_json::to_string(&entry).map_err(io::Error::other)?;
        fs::write(self.entry_path(key), serialized)
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    fn is_fresh(&self, stored_at: u64) -> bool {
        unix_now().saturating_sub(stored_at) <= self.ttl.as_secs()
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cache_in(dir: &tempfile::TempDir, mode: CacheMode) -> ResponseCache {
        ResponseCache::new(dir.path(), Duration::from_secs(90 * 60), mode)
    }

    #[test]
    fn put_then_get_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cache = cache_in(&dir, CacheMode::Use);
        let key = ResponseCache::key("payload-1");

        assert!(cache.get(&key).is_none());
        cache.put(&key, r#"{"data": 1}"#);
        assert_eq!(cache.get(&key).as_deref(), Some(r#"{"data": 1}"#));
    }

    #[test]
    fn distinct_payloads_get_distinct_keys() {
        assert_ne!(ResponseCache::key("a"), ResponseCache::key("b"));
        assert_eq!(ResponseCache::key("a"), ResponseCache::key("a"));
    }

    #[test]
    fn expired_entry_is_a_miss() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cache = cache_in(&dir, CacheMode::Use);
        let key = ResponseCache::key("payload-2");

        let stale = CacheEntry {
            stored_at: unix_now() - 91 * 60,
            body: String::from("old"),
        };
        fs::create_dir_all(dir.path()).expect("dir");
        fs::write(
            dir.path().join(format!("{key}.json")),
            serde_json::to_string(&stale).expect("json"),
        )
        .expect("write");

        assert!(cache.get(&key).is_none());
    }

    #[test]
    fn corrupt_entry_is_a_miss() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cache = cache_in(&dir, CacheMode::Use);
        let key = ResponseCache::key("payload-3");

        fs::write(dir.path().join(format!("{key}.json")), "not json").expect("write");

        assert!(cache.get(&key).is_none());
    }

    #[test]
    fn refresh_mode_writes_but_never_reads() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cache = cache_in(&dir, CacheMode::Refresh);
        let key = ResponseCache::key("payload-4");

        cache.put(&key, "fresh");
        assert!(cache.get(&key).is_none());

        // The write is visible to a Use-mode cache over the same dir.
        let reader = cache_in(&dir, CacheMode::Use);
        assert_eq!(reader.get(&key).as_deref(), Some("fresh"));
    }

    #[test]
    fn bypass_mode_neither_reads_nor_writes() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cache = cache_in(&dir, CacheMode::Bypass);
        let key = ResponseCache::key("payload-5");

        cache.put(&key, "body");
        assert!(cache.get(&key).is_none());
        assert!(!dir.path().join(format!("{key}.json")).exists());
    }
}
