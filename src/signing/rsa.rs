use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rand::rngs::OsRng;
use rsa::Pkcs1v15Sign;
use sha2::Sha256;

use errors::*;
use key_loader::{KeySource, PrivateKey};
use message::{Message, Signature};
use signing::SignatureService;
use verify::PublicKey;

/// RSA PKCS#1 v1.5 / SHA-256 signer.
#[derive(Debug)]
pub struct RsaSignatureService {
    private_key: PrivateKey,
}

impl RsaSignatureService {
    pub fn new(private_key: PrivateKey) -> Self {
        debug!(
            "RSA signature service ready ({}-bit key)",
            private_key.modulus_bits()
        );

        RsaSignatureService { private_key }
    }

    pub fn from_source(source: &KeySource) -> Result<Self> {
        source.load().map(Self::new)
    }

    /// The public half of the bound key, for handing to verifiers.
    pub fn public_key(&self) -> PublicKey {
        self.private_key.public_key()
    }

    fn sign_digest_base64(&self, hashed: &[u8]) -> Result<String> {
        // Fresh OS randomness per call, for blinding
        let sig = self
            .private_key
            .inner()
            .sign_with_rng(&mut OsRng, Pkcs1v15Sign::new::<Sha256>(), hashed)
            .map_err(|e| Error::from_kind(ErrorKind::Signing(e.to_string())))?;

        Ok(STANDARD.encode(&sig))
    }
}

impl SignatureService for RsaSignatureService {
    fn sign_message(&self, message: &Message) -> Result<Signature> {
        let sg = self.sign_digest_base64(&message.digest())?;

        Ok(Signature {
            time: message.time,
            signature: sg,
        })
    }
}
