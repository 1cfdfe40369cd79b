//! Serialized key containers.
//!
//! Two codecs cover the two storage forms: [`binary`] is the compact native
//! container used for same-system round-trips, [`text`] the standard
//! text-armored containers used for interchange.

pub mod binary;
pub mod text;
