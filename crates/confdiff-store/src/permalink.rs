//! Stored permalink entries and share id generation.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Length of a generated share id.
pub const ID_LENGTH: usize = 8;

/// URL-safe alphabet for share ids (64 symbols).
pub const ID_ALPHABET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

/// Generate a random share id.
///
/// Ids are [`ID_LENGTH`] characters drawn uniformly from [`ID_ALPHABET`].
/// Uniqueness is the caller's concern; the store re-draws on collision.
pub fn generate_id() -> String {
    let mut rng = rand::thread_rng();
    (0..ID_LENGTH)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect()
}

/// A saved comparison: the two config texts and when they were stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permalink {
    /// Left-hand config text.
    pub text1: String,
    /// Right-hand config text.
    pub text2: String,
    /// When the permalink was created.
    pub created_at: DateTime<Utc>,
}

impl Permalink {
    /// Create a permalink stamped with the current time.
    pub fn new(text1: impl Into<String>, text2: impl Into<String>) -> Self {
        Self {
            text1: text1.into(),
            text2: text2.into(),
            created_at: Utc::now(),
        }
    }
}
