use rand::thread_rng;
use rsa::{pkcs8::EncodePublicKey, traits::PublicKeyParts, RsaPrivateKey, RsaPublicKey};
use sha2::{Digest, Sha256};

use crate::error::{Error, Result};

/// An RSA key pair.
///
/// The pair owns its private key; the public key is derived from it on
/// demand, so the two can never disagree. The type is deliberately not
/// `Clone`: secret material has a single owner, and the underlying `rsa`
/// types zeroize it on drop.
///
/// # Examples
///
/// ```no_run
/// use keybox::RsaKeyPair;
///
/// let pair = RsaKeyPair::generate(2048).unwrap();
/// assert_eq!(pair.size_bits(), 2048);
/// let public = pair.public_key();
/// ```
pub struct RsaKeyPair {
    private: RsaPrivateKey,
}

impl RsaKeyPair {
    /// Generate a fresh key pair with the requested modulus size in bits.
    ///
    /// Fails with [`Error::GenerationError`] when the requested size is
    /// unsupported or the randomness source gives out; the underlying cause
    /// is reported as text only.
    pub fn generate(bits: usize) -> Result<Self> {
        let mut rng = thread_rng();
        let private = RsaPrivateKey::new(&mut rng, bits)
            .map_err(|e| Error::GenerationError(format!("RSA-{bits} generation failed: {e}")))?;
        Ok(Self { private })
    }

    /// Borrow the private key.
    pub fn private_key(&self) -> &RsaPrivateKey {
        &self.private
    }

    /// Derive the public key from the private key.
    pub fn public_key(&self) -> RsaPublicKey {
        self.private.to_public_key()
    }

    /// Modulus size in bits.
    pub fn size_bits(&self) -> usize {
        self.private.size() * 8
    }

    /// SHA-256 fingerprint over the SPKI encoding of the public key.
    pub fn fingerprint_sha256(&self) -> Result<[u8; 32]> {
        let spki = self
            .public_key()
            .to_public_key_der()
            .map_err(|e| Error::EncodeError(format!("SPKI DER export failed: {e}")))?;
        Ok(Sha256::digest(spki.as_bytes()).into())
    }

    /// Hex key identifier, the first 16 bytes of the SPKI fingerprint.
    pub fn key_id(&self) -> Result<String> {
        let fingerprint = self.fingerprint_sha256()?;
        Ok(hex::encode(&fingerprint[..16]))
    }
}

impl From<RsaPrivateKey> for RsaKeyPair {
    fn from(private: RsaPrivateKey) -> Self {
        Self { private }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_respects_size() {
        let pair = RsaKeyPair::generate(2048).unwrap();
        assert_eq!(pair.size_bits(), 2048);
    }

    #[test]
    fn test_generate_rejects_zero_size() {
        let result = RsaKeyPair::generate(0);
        assert!(matches!(result, Err(Error::GenerationError(_))));
    }

    #[test]
    fn test_public_key_matches_private_components() {
        let pair = RsaKeyPair::generate(512).unwrap();
        let public = pair.public_key();

        assert_eq!(public.n(), pair.private_key().n());
        assert_eq!(public.e(), pair.private_key().e());
    }

    #[test]
    fn test_fingerprint_and_key_id() {
        let pair = RsaKeyPair::generate(512).unwrap();

        let fingerprint = pair.fingerprint_sha256().unwrap();
        let fingerprint2 = pair.fingerprint_sha256().unwrap();
        assert_eq!(fingerprint, fingerprint2);

        let key_id = pair.key_id().unwrap();
        assert_eq!(key_id.len(), 32);
        assert_eq!(key_id, hex::encode(&fingerprint[..16]));
    }

    #[test]
    fn test_pair_from_private_key() {
        let pair = RsaKeyPair::generate(512).unwrap();
        let rebuilt = RsaKeyPair::from(pair.private_key().clone());

        assert_eq!(pair.key_id().unwrap(), rebuilt.key_id().unwrap());
    }
}
