//! Generate RSA key pairs and persist them under a keys directory.
//!
//! The directory can be chosen with the KEYS_DIR environment variable and
//! defaults to `keys` in the working directory.

use std::{env, fs, path::Path};

use keybox::{FileKeyStore, NamingScheme};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let keys_dir_name = env::var("KEYS_DIR").unwrap_or_else(|_| "keys".to_string());
    let keys_dir = Path::new(&keys_dir_name);
    if !keys_dir.exists() {
        fs::create_dir_all(keys_dir)?;
    }

    let store = FileKeyStore::new(NamingScheme::SeparateSuffixed);

    for name in ["alice", "bob"] {
        println!("generating 2048-bit pair for {name}...");
        let pair = store.generate(2048)?;
        let saved = store.save(&pair, keys_dir.join(name))?;

        println!("  key id:  {}", saved.key_id);
        println!("  private: {}", saved.private_pem.display());
        if let Some(path) = &saved.public_pem {
            println!("  public:  {}", path.display());
        }
    }

    println!("done, keys saved under {keys_dir_name}/");
    Ok(())
}
