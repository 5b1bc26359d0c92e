use std::collections::HashMap;

use crate::assets::manifest::AssetManifest;
use crate::assets::AssetError;

/// Registry of named textures, built from an AssetManifest.
/// Maps texture names to wire slots: slot order follows manifest list order,
/// which is also the order the host uploads images to its texture array.
pub struct TextureRegistry {
    slots: HashMap<String, u32>,
}

impl TextureRegistry {
    /// An empty registry. Every lookup fails until a manifest is loaded.
    pub fn new() -> Self {
        Self {
            slots: HashMap::new(),
        }
    }

    pub fn from_manifest(manifest: &AssetManifest) -> Self {
        let slots = manifest
            .textures
            .iter()
            .enumerate()
            .map(|(i, tex)| (tex.name.clone(), i as u32))
            .collect::<HashMap<_, _>>();
        log::debug!("texture registry: {} slots", slots.len());
        Self { slots }
    }

    /// Look up the wire slot for a named texture.
    pub fn slot(&self, name: &str) -> Result<u32, AssetError> {
        self.slots
            .get(name)
            .copied()
            .ok_or_else(|| AssetError::UnknownTexture(name.to_string()))
    }

    /// Number of registered textures.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl Default for TextureRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::manifest::TextureDescriptor;

    fn manifest(names: &[&str]) -> AssetManifest {
        AssetManifest {
            textures: names
                .iter()
                .map(|n| TextureDescriptor {
                    name: n.to_string(),
                    path: format!("img/{n}_hd.jpg"),
                })
                .collect(),
            skybox: None,
        }
    }

    #[test]
    fn slots_follow_manifest_order() {
        let reg = TextureRegistry::from_manifest(&manifest(&["sun", "mercury", "venus"]));
        assert_eq!(reg.slot("sun").unwrap(), 0);
        assert_eq!(reg.slot("venus").unwrap(), 2);
    }

    #[test]
    fn unknown_texture_is_an_error() {
        let reg = TextureRegistry::from_manifest(&manifest(&["sun"]));
        let err = reg.slot("vulcan").unwrap_err();
        assert!(matches!(err, AssetError::UnknownTexture(name) if name == "vulcan"));
    }

    #[test]
    fn empty_registry_rejects_everything() {
        let reg = TextureRegistry::new();
        assert!(reg.is_empty());
        assert!(reg.slot("sun").is_err());
    }
}
