//! File-backed persistence for key pairs.
//!
//! [`FileKeyStore`] orchestrates the two codecs and the filesystem under an
//! explicit [`NamingScheme`], so the convention used to save a pair is the
//! same one used to find it again.

mod file;

pub use file::FileKeyStore;

use std::path::{Path, PathBuf};

/// Recognized file naming conventions.
///
/// Making the convention an explicit value keeps `save` and `load_by_name`
/// symmetric by construction. Explicit caller-chosen paths are the third
/// convention and are served by [`FileKeyStore::load`] and
/// [`FileKeyStore::save_minimal`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NamingScheme {
    /// `<base>_private.key`, `<base>_private.pem`, `<base>_public.key`, and
    /// `<base>_public.pem`.
    #[default]
    SeparateSuffixed,
    /// A single `<base>.pem` private-key artifact; the public key is
    /// re-derived on load.
    SingleCombined,
}

impl NamingScheme {
    /// Path of the text-armored private key for `base`.
    pub fn private_pem(&self, base: &Path) -> PathBuf {
        match self {
            Self::SeparateSuffixed => append_to_name(base, "_private.pem"),
            Self::SingleCombined => append_to_name(base, ".pem"),
        }
    }

    /// Path of the binary private key, if the scheme writes one.
    pub fn private_bin(&self, base: &Path) -> Option<PathBuf> {
        match self {
            Self::SeparateSuffixed => Some(append_to_name(base, "_private.key")),
            Self::SingleCombined => None,
        }
    }

    /// Path of the text-armored public key, if the scheme writes one.
    pub fn public_pem(&self, base: &Path) -> Option<PathBuf> {
        match self {
            Self::SeparateSuffixed => Some(append_to_name(base, "_public.pem")),
            Self::SingleCombined => None,
        }
    }

    /// Path of the binary public key, if the scheme writes one.
    pub fn public_bin(&self, base: &Path) -> Option<PathBuf> {
        match self {
            Self::SeparateSuffixed => Some(append_to_name(base, "_public.key")),
            Self::SingleCombined => None,
        }
    }
}

/// Append a suffix to the final path component without touching any
/// existing extension.
fn append_to_name(base: &Path, suffix: &str) -> PathBuf {
    let mut name = base.as_os_str().to_os_string();
    name.push(suffix);
    PathBuf::from(name)
}

/// Report of the artifacts written by [`FileKeyStore::save`].
#[derive(Clone, Debug)]
pub struct SavedKeys {
    /// Hex identifier of the saved pair.
    pub key_id: String,
    /// Text-armored private key path.
    pub private_pem: PathBuf,
    /// Binary private key path, when the scheme writes one.
    pub private_bin: Option<PathBuf>,
    /// Text-armored public key path, when the scheme writes one.
    pub public_pem: Option<PathBuf>,
    /// Binary public key path, when the scheme writes one.
    pub public_bin: Option<PathBuf>,
}
