//! Sources of unique identifier suffixes
//!
//! [`ObjectIdSource`] produces 12-byte tokens laid out like a BSON ObjectId,
//! which keeps generated suffixes wire-compatible with identifiers minted by
//! MongoDB-backed systems:
//!
//! | bytes  | content                                         |
//! |--------|-------------------------------------------------|
//! | 0..4   | seconds since the Unix epoch, big endian        |
//! | 4..9   | random value fixed for the lifetime of a source |
//! | 9..12  | 24-bit counter, random start, wrapping          |

use crate::domain::identifiers::UniqueToken;
use crate::domain::validation_constants::unique_token::{
    BYTE_LENGTH, COUNTER_MASK, PROCESS_UNIQUE_LENGTH,
};
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};
use uuid::Uuid;

/// Capability to draw a fresh, never-repeating token.
///
/// Implementations must be safe to call concurrently without external locking.
pub trait UniqueTokenSource: Send + Sync {
    fn next_token(&self) -> UniqueToken;
}

impl<T: UniqueTokenSource + ?Sized> UniqueTokenSource for &T {
    fn next_token(&self) -> UniqueToken {
        (**self).next_token()
    }
}

impl<T: UniqueTokenSource + ?Sized> UniqueTokenSource for Arc<T> {
    fn next_token(&self) -> UniqueToken {
        (**self).next_token()
    }
}

/// Timestamp + process discriminator + counter token source
#[derive(Debug)]
pub struct ObjectIdSource {
    process_unique: [u8; PROCESS_UNIQUE_LENGTH],
    counter: AtomicU32,
}

impl ObjectIdSource {
    /// Creates a source with a fresh random discriminator and counter start
    pub fn new() -> Self {
        let seed = Uuid::new_v4();
        let random = seed.as_bytes();

        let mut process_unique = [0u8; PROCESS_UNIQUE_LENGTH];
        process_unique.copy_from_slice(&random[..PROCESS_UNIQUE_LENGTH]);
        // Bytes 6 and 8 of a v4 UUID hold version/variant bits, so draw the counter from 9..12
        let counter = u32::from_be_bytes([0, random[9], random[10], random[11]]);

        Self {
            process_unique,
            counter: AtomicU32::new(counter),
        }
    }

    /// The process-wide source, created on first use
    pub fn shared() -> &'static Self {
        static SHARED: OnceLock<ObjectIdSource> = OnceLock::new();
        SHARED.get_or_init(Self::new)
    }

    /// Draws a token stamped with the given time instead of the clock
    ///
    /// The embedded seconds are an unsigned 32-bit count, so times before the
    /// Unix epoch clamp to `0` and times after 2106-02-07T06:28:15Z clamp to
    /// `u32::MAX`.
    pub fn token_at(&self, timestamp: DateTime<Utc>) -> UniqueToken {
        let seconds = u32::try_from(timestamp.timestamp().max(0)).unwrap_or(u32::MAX);
        let count = self.counter.fetch_add(1, Ordering::Relaxed) & COUNTER_MASK;

        let mut bytes = [0u8; BYTE_LENGTH];
        bytes[..4].copy_from_slice(&seconds.to_be_bytes());
        bytes[4..4 + PROCESS_UNIQUE_LENGTH].copy_from_slice(&self.process_unique);
        bytes[4 + PROCESS_UNIQUE_LENGTH..].copy_from_slice(&count.to_be_bytes()[1..]);

        UniqueToken::from_bytes(bytes)
    }

    /// Creation second embedded in an ObjectId-layout token
    pub fn timestamp_of(token: &UniqueToken) -> Option<DateTime<Utc>> {
        let bytes = token.to_bytes();
        let seconds = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        DateTime::from_timestamp(i64::from(seconds), 0)
    }
}

impl Default for ObjectIdSource {
    fn default() -> Self {
        Self::new()
    }
}

impl UniqueTokenSource for ObjectIdSource {
    fn next_token(&self) -> UniqueToken {
        self.token_at(Utc::now())
    }
}

/// Deterministic source yielding `start, start + 1, ...` as zero-padded hex.
///
/// Useful for fixtures and tests that need reproducible identifiers.
#[derive(Debug, Default)]
pub struct SequentialTokenSource {
    next: AtomicU64,
}

impl SequentialTokenSource {
    pub fn starting_at(start: u64) -> Self {
        Self {
            next: AtomicU64::new(start),
        }
    }
}

impl UniqueTokenSource for SequentialTokenSource {
    fn next_token(&self) -> UniqueToken {
        let value = self.next.fetch_add(1, Ordering::Relaxed);
        let mut bytes = [0u8; BYTE_LENGTH];
        bytes[BYTE_LENGTH - 8..].copy_from_slice(&value.to_be_bytes());
        UniqueToken::from_bytes(bytes)
    }
}
