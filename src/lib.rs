//! Sign short, timestamped messages with an RSA private key.
//!
//! Load a key with [`key_loader`], wrap it in an [`RsaSignatureService`], and
//! sign [`Message`]s into [`Signature`]s that a remote party can check with the
//! matching public key.

extern crate base64;
extern crate chrono;
#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate log;
extern crate pem;
extern crate rand;
extern crate rsa;
extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate sha2;

#[cfg(test)]
#[macro_use]
extern crate serde_json;

pub mod errors;
pub mod key_loader;
pub mod message;
pub mod signing;
pub mod verify;


// Re-export types
pub use errors::{Error, ErrorKind, Result};
pub use key_loader::{from_base64_string, from_pem, KeySource, PrivateKey};
pub use message::{Message, Signature};
pub use signing::rsa::RsaSignatureService;
pub use signing::SignatureService;
pub use verify::{verify_signature, PublicKey};
