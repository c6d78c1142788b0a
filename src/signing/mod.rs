//! Signing backends.
//!
//! Each key family gets its own [`SignatureService`] implementation; callers
//! only ever see the trait.

use errors::Result;
use message::{Message, Signature};

pub mod rsa;

/// Signs [`Message`]s with a key bound at construction.
///
/// Implementations never mutate the key, so one service can be shared by
/// any number of threads. A failed call leaves the service usable.
pub trait SignatureService: Send + Sync {
    fn sign_message(&self, message: &Message) -> Result<Signature>;
}
