use std::{fs, path::Path};

use tracing::debug;
use zeroize::Zeroizing;

use super::{NamingScheme, SavedKeys};
use crate::{
    encoding::{binary, text},
    error::Result,
    key::RsaKeyPair,
};

/// Facade over the codecs and the filesystem.
///
/// Every operation opens one scoped file handle at a time and releases it on
/// all exit paths. Writes are independent: [`FileKeyStore::save`] does not
/// roll back artifacts that were already written when a later one fails.
/// Concurrent calls against distinct paths are safe; calls targeting the
/// same path race with last-writer-wins semantics.
#[derive(Clone, Copy, Debug, Default)]
pub struct FileKeyStore {
    naming: NamingScheme,
}

impl FileKeyStore {
    /// Create a store that derives artifact names with `naming`.
    pub fn new(naming: NamingScheme) -> Self {
        Self { naming }
    }

    /// The active naming scheme.
    pub fn naming(&self) -> NamingScheme {
        self.naming
    }

    /// Generate a fresh key pair. No persistence side effect.
    pub fn generate(&self, bits: usize) -> Result<RsaKeyPair> {
        RsaKeyPair::generate(bits)
    }

    /// Write the pair under the names the active scheme derives from `base`.
    ///
    /// [`NamingScheme::SeparateSuffixed`] writes four artifacts, binary and
    /// text-armored forms of both keys; [`NamingScheme::SingleCombined`]
    /// writes the text-armored private key only. The first failing write is
    /// returned immediately and artifacts already on disk stay in place.
    pub fn save(&self, pair: &RsaKeyPair, base: impl AsRef<Path>) -> Result<SavedKeys> {
        let base = base.as_ref();
        let private = pair.private_key();

        let private_bin_path = self.naming.private_bin(base);
        if let Some(path) = &private_bin_path {
            let bytes = binary::encode_private(private)?;
            fs::write(path, bytes.as_slice())?;
            debug!(path = %path.display(), "wrote binary private key");
        }

        let private_pem_path = self.naming.private_pem(base);
        let pem = text::encode_private(private)?;
        fs::write(&private_pem_path, pem.as_bytes())?;
        debug!(path = %private_pem_path.display(), "wrote text-armored private key");

        let public = pair.public_key();

        let public_bin_path = self.naming.public_bin(base);
        if let Some(path) = &public_bin_path {
            let bytes = binary::encode_public(&public)?;
            fs::write(path, &bytes)?;
            debug!(path = %path.display(), "wrote binary public key");
        }

        let public_pem_path = self.naming.public_pem(base);
        if let Some(path) = &public_pem_path {
            let pem = text::encode_public(&public)?;
            fs::write(path, pem.as_bytes())?;
            debug!(path = %path.display(), "wrote text-armored public key");
        }

        Ok(SavedKeys {
            key_id: pair.key_id()?,
            private_pem: private_pem_path,
            private_bin: private_bin_path,
            public_pem: public_pem_path,
            public_bin: public_bin_path,
        })
    }

    /// Write only the text-armored private key at the explicit `path`.
    ///
    /// The public key is always re-derivable from it, so no separate public
    /// artifact is required.
    pub fn save_minimal(&self, pair: &RsaKeyPair, path: impl AsRef<Path>) -> Result<()> {
        let pem = text::encode_private(pair.private_key())?;
        fs::write(path.as_ref(), pem.as_bytes())?;
        debug!(path = %path.as_ref().display(), "wrote text-armored private key");
        Ok(())
    }

    /// Load a pair from explicit paths.
    ///
    /// Only `private_path` is read. The public-key path is accepted so call
    /// sites can name both artifacts, but it is never authoritative: the
    /// public key is re-derived from the loaded private key.
    pub fn load(
        &self,
        private_path: impl AsRef<Path>,
        _public_path: impl AsRef<Path>,
    ) -> Result<RsaKeyPair> {
        self.load_private_pem(private_path.as_ref())
    }

    /// Load a pair from the private artifact the active scheme derives from
    /// `base`, the same name [`FileKeyStore::save`] would have used.
    pub fn load_by_name(&self, base: impl AsRef<Path>) -> Result<RsaKeyPair> {
        self.load_private_pem(&self.naming.private_pem(base.as_ref()))
    }

    fn load_private_pem(&self, path: &Path) -> Result<RsaKeyPair> {
        let pem = Zeroizing::new(fs::read_to_string(path)?);
        let private = text::decode_private(&pem)?;
        debug!(path = %path.display(), "loaded private key");
        Ok(RsaKeyPair::from(private))
    }
}
