//! Compact binary key container.
//!
//! A self-describing byte form for same-system persistence, not an
//! interchange format. Field values are carried verbatim as big-endian
//! bytes and tagged with the shape that produced them, so a private payload
//! can never decode as a public one.

use rsa::{
    traits::{PrivateKeyParts, PublicKeyParts},
    BigUint, RsaPrivateKey, RsaPublicKey,
};
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::error::{Error, Result};

/// Container shape tag plus payload.
#[derive(Serialize, Deserialize)]
enum KeyRecord {
    Private(PrivateKeyRecord),
    Public(PublicKeyRecord),
}

/// Private key fields as big-endian bytes. Buffers are wiped on drop.
#[derive(Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
struct PrivateKeyRecord {
    n: Vec<u8>,
    e: Vec<u8>,
    d: Vec<u8>,
    primes: Vec<Vec<u8>>,
}

#[derive(Serialize, Deserialize)]
struct PublicKeyRecord {
    n: Vec<u8>,
    e: Vec<u8>,
}

/// Serialize a private key into the native container.
pub fn encode_private(key: &RsaPrivateKey) -> Result<Zeroizing<Vec<u8>>> {
    let record = KeyRecord::Private(PrivateKeyRecord {
        n: key.n().to_bytes_be(),
        e: key.e().to_bytes_be(),
        d: key.d().to_bytes_be(),
        primes: key.primes().iter().map(|p| p.to_bytes_be()).collect(),
    });
    bincode::serialize(&record)
        .map(Zeroizing::new)
        .map_err(|e| Error::EncodeError(format!("binary private key encoding failed: {e}")))
}

/// Serialize a public key into the native container.
pub fn encode_public(key: &RsaPublicKey) -> Result<Vec<u8>> {
    let record = KeyRecord::Public(PublicKeyRecord {
        n: key.n().to_bytes_be(),
        e: key.e().to_bytes_be(),
    });
    bincode::serialize(&record)
        .map_err(|e| Error::EncodeError(format!("binary public key encoding failed: {e}")))
}

/// Deserialize a private key from the native container.
///
/// The key is validated before it is returned; CRT values are recomputed
/// from the decoded primes.
pub fn decode_private(bytes: &[u8]) -> Result<RsaPrivateKey> {
    let record: KeyRecord = bincode::deserialize(bytes)
        .map_err(|e| Error::DecodeError(format!("malformed binary key container: {e}")))?;
    let record = match record {
        KeyRecord::Private(record) => record,
        KeyRecord::Public(_) => {
            return Err(Error::DecodeError(
                "binary container holds a public key, expected a private key".into(),
            ))
        }
    };

    let primes = record
        .primes
        .iter()
        .map(|p| BigUint::from_bytes_be(p))
        .collect();
    let mut key = RsaPrivateKey::from_components(
        BigUint::from_bytes_be(&record.n),
        BigUint::from_bytes_be(&record.e),
        BigUint::from_bytes_be(&record.d),
        primes,
    )
    .map_err(|e| Error::DecodeError(format!("invalid private key fields: {e}")))?;
    key.precompute()
        .map_err(|e| Error::DecodeError(format!("invalid private key fields: {e}")))?;
    key.validate()
        .map_err(|e| Error::DecodeError(format!("inconsistent private key: {e}")))?;
    Ok(key)
}

/// Deserialize a public key from the native container.
pub fn decode_public(bytes: &[u8]) -> Result<RsaPublicKey> {
    let record: KeyRecord = bincode::deserialize(bytes)
        .map_err(|e| Error::DecodeError(format!("malformed binary key container: {e}")))?;
    let record = match record {
        KeyRecord::Public(record) => record,
        KeyRecord::Private(_) => {
            return Err(Error::DecodeError(
                "binary container holds a private key, expected a public key".into(),
            ))
        }
    };

    RsaPublicKey::new(
        BigUint::from_bytes_be(&record.n),
        BigUint::from_bytes_be(&record.e),
    )
    .map_err(|e| Error::DecodeError(format!("invalid public key fields: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::RsaKeyPair;

    #[test]
    fn test_private_round_trip() {
        let pair = RsaKeyPair::generate(512).unwrap();
        let original = pair.private_key();

        let bytes = encode_private(original).unwrap();
        let decoded = decode_private(&bytes).unwrap();

        assert_eq!(decoded.n(), original.n());
        assert_eq!(decoded.e(), original.e());
        assert_eq!(decoded.d(), original.d());
        assert_eq!(decoded.primes(), original.primes());
    }

    #[test]
    fn test_public_round_trip() {
        let pair = RsaKeyPair::generate(512).unwrap();
        let original = pair.public_key();

        let bytes = encode_public(&original).unwrap();
        let decoded = decode_public(&bytes).unwrap();

        assert_eq!(decoded, original);
    }

    #[test]
    fn test_shape_mismatch_is_decode_error() {
        let pair = RsaKeyPair::generate(512).unwrap();

        let private_bytes = encode_private(pair.private_key()).unwrap();
        let result = decode_public(&private_bytes);
        assert!(matches!(result, Err(Error::DecodeError(_))));

        let public_bytes = encode_public(&pair.public_key()).unwrap();
        let result = decode_private(&public_bytes);
        assert!(matches!(result, Err(Error::DecodeError(_))));
    }

    #[test]
    fn test_truncated_container_is_decode_error() {
        let pair = RsaKeyPair::generate(512).unwrap();
        let bytes = encode_private(pair.private_key()).unwrap();

        let result = decode_private(&bytes[..bytes.len() / 2]);
        assert!(matches!(result, Err(Error::DecodeError(_))));
    }

    #[test]
    fn test_garbage_bytes_are_decode_error() {
        let result = decode_private(&[0xde, 0xad, 0xbe, 0xef]);
        assert!(matches!(result, Err(Error::DecodeError(_))));
    }

    #[test]
    fn test_corrupted_field_is_decode_error() {
        let pair = RsaKeyPair::generate(512).unwrap();
        let mut bytes = encode_private(pair.private_key()).unwrap().to_vec();

        // Flip a byte deep inside the serialized field data.
        let mid = bytes.len() / 2;
        bytes[mid] ^= 0xff;

        assert!(decode_private(&bytes).is_err());
    }
}
