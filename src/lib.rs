//! RSA key pair generation, persistence, and reload.
//!
//! This library produces RSA key pairs of a requested modulus size and moves
//! them in and out of two serialized forms: a compact binary container used
//! for same-system round-trips, and the standard text-armored containers
//! (PKCS#8 for private keys, SPKI for public keys) understood by common
//! cryptographic tooling.
//!
//! The private key is the sole source of truth. Public keys are always
//! derived from the private key, never loaded independently, so a stored
//! public artifact can never disagree with the pair it belongs to.

pub mod encoding;
pub mod error;
pub mod key;
pub mod store;

pub use error::{Error, Result};
pub use key::RsaKeyPair;
pub use store::{FileKeyStore, NamingScheme, SavedKeys};
