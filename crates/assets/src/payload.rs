use serde::{Deserialize, Serialize};

use crate::AssetError;
use crate::kind::AssetKind;

/// Tag carried by a drag source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PayloadTag {
    AssetFile,
    Font,
}

impl PayloadTag {
    pub fn as_str(self) -> &'static str {
        match self {
            PayloadTag::AssetFile => "AssetFile",
            PayloadTag::Font => "Font",
        }
    }
}

/// Drag-and-drop payload: a tag plus an opaque byte buffer holding a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragPayload {
    pub tag: String,
    pub data: Vec<u8>,
}

impl DragPayload {
    pub fn new(tag: PayloadTag, path: &str) -> Self {
        Self {
            tag: tag.as_str().to_string(),
            data: path.as_bytes().to_vec(),
        }
    }

    /// Payload for an asset file, tagged for the kind of file it is.
    pub fn for_file(path: &str) -> Self {
        let tag = AssetKind::classify(path)
            .map(AssetKind::payload_tag)
            .unwrap_or(PayloadTag::AssetFile);
        Self::new(tag, path)
    }

    pub fn as_path(&self) -> Result<&str, AssetError> {
        std::str::from_utf8(&self.data).map_err(|_| AssetError::MalformedPayload)
    }

    /// Validate the payload for a drop target of `kind`: the tag must match
    /// and the path must carry one of the kind's extensions.
    pub fn accept(&self, kind: AssetKind) -> Result<&str, AssetError> {
        let expected = kind.payload_tag();
        if self.tag != expected.as_str() {
            return Err(AssetError::WrongPayload {
                expected,
                found: self.tag.clone(),
            });
        }
        let path = self.as_path()?;
        if !kind.matches(path) {
            return Err(AssetError::WrongKind {
                path: path.to_string(),
                kind,
            });
        }
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn texture_drop_accepted() {
        let payload = DragPayload::new(PayloadTag::AssetFile, "//Textures/grass.png");
        assert_eq!(payload.accept(AssetKind::Texture).unwrap(), "//Textures/grass.png");
    }

    #[test]
    fn wrong_extension_rejected() {
        let payload = DragPayload::new(PayloadTag::AssetFile, "//Sounds/hit.wav");
        assert!(matches!(
            payload.accept(AssetKind::Texture),
            Err(AssetError::WrongKind { .. })
        ));
    }

    #[test]
    fn font_target_requires_font_tag() {
        let payload = DragPayload::new(PayloadTag::AssetFile, "//Fonts/mono.ttf");
        assert!(matches!(
            payload.accept(AssetKind::Font),
            Err(AssetError::WrongPayload { .. })
        ));
        assert!(DragPayload::for_file("//Fonts/mono.ttf").accept(AssetKind::Font).is_ok());
    }

    #[test]
    fn non_utf8_payload_is_malformed() {
        let payload = DragPayload {
            tag: "AssetFile".into(),
            data: vec![0xff, 0xfe, 0x00],
        };
        assert!(matches!(payload.as_path(), Err(AssetError::MalformedPayload)));
    }
}
