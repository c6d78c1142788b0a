//! The counterparty's side: check a [`Signature`] against its [`Message`].

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rsa::pkcs1::der::Decode;
use rsa::pkcs1::{self, EncodeRsaPublicKey};
use rsa::{BigUint, Pkcs1v15Sign, RsaPublicKey};
use sha2::Sha256;

use errors::*;
use message::{canonical_digest, Message, Signature};

// Matches the largest private keys we expect to load
const MAX_MODULUS_BITS: usize = 16384;

/// An RSA public key, read from and written as PKCS#1 `RSAPublicKey` DER.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    inner: RsaPublicKey,
}

impl PublicKey {
    pub fn from_der(der: &[u8]) -> Result<Self> {
        let parsed = pkcs1::RsaPublicKey::from_der(der)
            .map_err(|e| Error::from_kind(ErrorKind::PublicKeyFormat(e.to_string())))?;

        let inner = RsaPublicKey::new_with_max_size(
            BigUint::from_bytes_be(parsed.modulus.as_bytes()),
            BigUint::from_bytes_be(parsed.public_exponent.as_bytes()),
            MAX_MODULUS_BITS,
        ).map_err(|e| Error::from_kind(ErrorKind::PublicKeyFormat(e.to_string())))?;

        Ok(PublicKey { inner })
    }

    pub fn from_base64(encoded: &str) -> Result<Self> {
        let der = STANDARD.decode(encoded).chain_err(|| ErrorKind::Encoding)?;
        Self::from_der(&der)
    }

    pub(crate) fn from_rsa(inner: RsaPublicKey) -> Self {
        PublicKey { inner }
    }

    pub fn to_der(&self) -> Result<Vec<u8>> {
        let doc = self
            .inner
            .to_pkcs1_der()
            .map_err(|e| Error::from_kind(ErrorKind::PublicKeyFormat(e.to_string())))?;

        Ok(doc.as_bytes().to_vec())
    }

    pub fn to_base64(&self) -> Result<String> {
        Ok(STANDARD.encode(self.to_der()?))
    }
}

/// Check that `sig` is a PKCS#1 v1.5 / SHA-256 signature by `public_key` over
/// `message`'s canonical string.
///
/// The canonical string is rebuilt with `sig.time`, never the verifier's own
/// clock or `message.time`, so a signature moved onto a different timestamp
/// fails.
pub fn verify_signature(message: &Message, sig: &Signature, public_key: &PublicKey) -> Result<()> {
    let raw_sig = STANDARD
        .decode(&sig.signature)
        .chain_err(|| ErrorKind::Encoding)?;

    let hashed = canonical_digest(&message.payload, sig.time);

    public_key
        .inner
        .verify(Pkcs1v15Sign::new::<Sha256>(), &hashed, &raw_sig)
        .map_err(|_| Error::from_kind(ErrorKind::InvalidSignature))
}
