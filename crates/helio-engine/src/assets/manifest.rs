use serde::{Deserialize, Serialize};

/// Asset manifest describing every texture the scene uses, plus the skybox.
/// Loaded from a JSON file at runtime; the host fetches the same file to
/// load the actual images, so paths are relative to the host's asset root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetManifest {
    /// Named textures. Slot order on the wire follows list order.
    pub textures: Vec<TextureDescriptor>,
    /// Optional skybox (the host builds an inward-facing box from it).
    #[serde(default)]
    pub skybox: Option<SkyboxDescriptor>,
}

/// A single named texture.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextureDescriptor {
    /// Lookup name used by game code (e.g., "earth").
    pub name: String,
    /// Relative path to the image file (e.g., "img/earth_hd.jpg").
    pub path: String,
}

/// Six skybox face paths in the order: front, back, up, down, right, left.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkyboxDescriptor {
    /// Edge length of the skybox cube in world units.
    #[serde(default = "default_skybox_size")]
    pub size: f32,
    pub faces: [String; 6],
}

fn default_skybox_size() -> f32 {
    1000.0
}

impl AssetManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_manifest() {
        let json = r#"{
            "textures": [
                { "name": "sun", "path": "img/sun_hd.jpg" },
                { "name": "earth", "path": "img/earth_hd.jpg" }
            ]
        }"#;
        let manifest = AssetManifest::from_json(json).unwrap();
        assert_eq!(manifest.textures.len(), 2);
        assert_eq!(manifest.textures[1].name, "earth");
        assert!(manifest.skybox.is_none());
    }

    #[test]
    fn parse_manifest_with_skybox() {
        let json = r#"{
            "textures": [],
            "skybox": {
                "faces": [
                    "img/skybox/space_ft.png",
                    "img/skybox/space_bk.png",
                    "img/skybox/space_up.png",
                    "img/skybox/space_dn.png",
                    "img/skybox/space_rt.png",
                    "img/skybox/space_lf.png"
                ]
            }
        }"#;
        let manifest = AssetManifest::from_json(json).unwrap();
        let skybox = manifest.skybox.unwrap();
        assert_eq!(skybox.size, 1000.0); // default
        assert_eq!(skybox.faces[0], "img/skybox/space_ft.png");
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(AssetManifest::from_json("{ not json").is_err());
    }
}
