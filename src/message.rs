use chrono::Utc;
use sha2::{Digest, Sha256};

/// A text payload stamped with Unix time in seconds.
///
/// Serializes as `{"payload": "...", "time": 1700000000}`. The timestamp is
/// taken as-is; zero, negative and far-future values are all accepted.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub payload: String,
    pub time: i64,
}

impl Message {
    /// Stamp `payload` with the current time.
    pub fn new<S: Into<String>>(payload: S) -> Self {
        Self::with_timestamp(payload, Utc::now().timestamp())
    }

    pub fn with_timestamp<S: Into<String>>(payload: S, time: i64) -> Self {
        Message {
            payload: payload.into(),
            time,
        }
    }

    /// The exact string that gets hashed and signed:
    /// `lowercase(payload) + "_" + decimal(time)`.
    ///
    /// Only ASCII letters are folded. Verifiers rebuild this byte for byte,
    /// so it must not change.
    pub fn canonical(&self) -> String {
        canonicalize(&self.payload, self.time)
    }

    /// SHA-256 of [`canonical`](#method.canonical).
    pub fn digest(&self) -> [u8; 32] {
        canonical_digest(&self.payload, self.time)
    }
}

/// The outcome of signing a [`Message`].
///
/// `time` always mirrors the signed message's `time`; a verifier uses it, not
/// its own clock, to rebuild the canonical string. `signature` is standard
/// padded base64.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub time: i64,
    pub signature: String,
}

pub(crate) fn canonicalize(payload: &str, time: i64) -> String {
    format!("{}_{}", payload.to_ascii_lowercase(), time)
}

pub(crate) fn canonical_digest(payload: &str, time: i64) -> [u8; 32] {
    let hashed = Sha256::digest(canonicalize(payload, time).as_bytes());

    let mut out = [0u8; 32];
    out.copy_from_slice(&hashed);
    out
}
