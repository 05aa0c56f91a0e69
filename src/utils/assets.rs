use std::fs;
use std::io;
use std::path::Path;

use base64::{Engine as _, engine::general_purpose};

/// The three icons embedded in the welcome email, base64-encoded once at
/// startup. A missing or unreadable file aborts startup from `main`.
#[derive(Debug, Clone)]
pub struct StaticAssets {
    pub phone_image: String,
    pub email_image: String,
    pub globe_image: String,
}

impl StaticAssets {
    pub fn load(dir: &Path) -> io::Result<Self> {
        Ok(Self {
            phone_image: encode_image(&dir.join("phone.png"))?,
            email_image: encode_image(&dir.join("email.png"))?,
            globe_image: encode_image(&dir.join("globe.png"))?,
        })
    }
}

fn encode_image(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(general_purpose::STANDARD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_encodes_all_three_icons() {
        let assets = StaticAssets::load(Path::new("assets")).unwrap();
        assert!(!assets.phone_image.is_empty());
        assert!(!assets.email_image.is_empty());
        assert!(!assets.globe_image.is_empty());
        // base64 of a PNG always starts with the encoded magic bytes
        assert!(assets.phone_image.starts_with("iVBOR"));
    }

    #[test]
    fn load_fails_on_missing_directory() {
        assert!(StaticAssets::load(Path::new("no-such-dir")).is_err());
    }
}
