//! Artwork package storage
//!
//! Package layout, one directory per artwork:
//!
//! ```text
//! gallery/
//!   common_Ethereal_Vortex_1722873600/
//!     artwork.svg
//!     metadata.json
//!     preview.html
//! ```

use crate::preview::render_preview;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mesmer_core::{Artwork, Rarity, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::path::PathBuf;
use tokio::fs;

/// Persistence seam for accepted artworks
#[async_trait]
pub trait ArtworkStore: Send + Sync {
    /// Persist one artwork package, returning the package name
    async fn persist(&self, artwork: &Artwork) -> Result<String>;
}

/// Metadata record written next to every artwork
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtworkMetadata {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub rarity: Rarity,
    pub style: String,
    pub animation_count: u64,
    pub complexity: u64,
    pub hypnotic_factor: u64,
    pub primary_colors: Vec<String>,
    pub loop_duration: Value,
    pub special_features: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub folder: String,
}

impl ArtworkMetadata {
    /// Build the record from an artwork's attribute map
    ///
    /// Attribute fields the service omitted fall back to the same
    /// defaults the marketplace assumes.
    pub fn build(artwork: &Artwork, timestamp: i64, folder: &str) -> Self {
        Self {
            id: artwork_id(&artwork.name, timestamp),
            name: artwork.name.clone(),
            description: artwork.description.clone(),
            price: artwork.price,
            rarity: artwork.rarity,
            style: artwork.style.clone(),
            animation_count: attr_u64(artwork, "animation_count", 10),
            complexity: attr_u64(artwork, "complexity", 7),
            hypnotic_factor: attr_u64(artwork, "hypnotic_factor", 8),
            primary_colors: attr_strings(artwork, "primary_colors"),
            loop_duration: artwork
                .attributes
                .get("loop_duration")
                .cloned()
                .unwrap_or_else(|| Value::from(20)),
            special_features: attr_strings(artwork, "special_features"),
            created_at: Utc::now(),
            folder: folder.to_string(),
        }
    }
}

/// Short content hash identifying an artwork package
fn artwork_id(name: &str, timestamp: i64) -> String {
    let digest = Sha256::digest(format!("{}{}", name, timestamp).as_bytes());
    hex::encode(digest)[..8].to_string()
}

fn attr_u64(artwork: &Artwork, key: &str, default: u64) -> u64 {
    artwork
        .attributes
        .get(key)
        .and_then(Value::as_u64)
        .unwrap_or(default)
}

fn attr_strings(artwork: &Artwork, key: &str) -> Vec<String> {
    artwork
        .attributes
        .get(key)
        .and_then(Value::as_array)
        .map(|values| {
            values
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

/// Package directory name: rarity, name, and creation timestamp
fn package_name(artwork: &Artwork, timestamp: i64) -> String {
    format!(
        "{}_{}_{}",
        artwork.rarity.to_string().to_lowercase(),
        artwork.name.replace(' ', "_"),
        timestamp
    )
}

/// Gallery rooted at a directory on the local filesystem
#[derive(Debug, Clone)]
pub struct FsGallery {
    root: PathBuf,
}

impl FsGallery {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &PathBuf {
        &self.root
    }
}

#[async_trait]
impl ArtworkStore for FsGallery {
    async fn persist(&self, artwork: &Artwork) -> Result<String> {
        let timestamp = Utc::now().timestamp();
        let folder = package_name(artwork, timestamp);
        let package_dir = self.root.join(&folder);
        fs::create_dir_all(&package_dir).await?;

        fs::write(package_dir.join("artwork.svg"), &artwork.svg).await?;

        let metadata = ArtworkMetadata::build(artwork, timestamp, &folder);
        fs::write(
            package_dir.join("metadata.json"),
            serde_json::to_string_pretty(&metadata)?,
        )
        .await?;

        fs::write(package_dir.join("preview.html"), render_preview(artwork)).await?;

        tracing::info!("Stored artwork package {}", folder);

        Ok(folder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_artwork() -> Artwork {
        let attributes = serde_json::json!({
            "animation_count": 12,
            "complexity": 7,
            "hypnotic_factor": 9,
            "primary_colors": ["#FF006E", "#3A86FF"],
            "loop_duration": 24,
            "special_features": ["parallax", "tunnel"]
        });

        Artwork {
            name: "Ethereal Vortex".to_string(),
            description: "A slow spiral that folds the viewer inward.".to_string(),
            style: "Hypnotic Spirals".to_string(),
            rarity: Rarity::Rare,
            price: 202.5,
            attributes: attributes.as_object().unwrap().clone(),
            svg: "<svg viewBox=\"0 0 1000 1000\"><animate/></svg>".to_string(),
        }
    }

    #[test]
    fn test_package_name() {
        let name = package_name(&sample_artwork(), 1722873600);
        assert_eq!(name, "rare_Ethereal_Vortex_1722873600");
    }

    #[test]
    fn test_artwork_id_is_short_hash() {
        let id = artwork_id("Ethereal Vortex", 1722873600);
        assert_eq!(id.len(), 8);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
        // Same inputs, same id
        assert_eq!(id, artwork_id("Ethereal Vortex", 1722873600));
        assert_ne!(id, artwork_id("Ethereal Vortex", 1722873601));
    }

    #[test]
    fn test_metadata_pulls_attributes() {
        let metadata = ArtworkMetadata::build(&sample_artwork(), 1722873600, "rare_x_1722873600");
        assert_eq!(metadata.animation_count, 12);
        assert_eq!(metadata.complexity, 7);
        assert_eq!(metadata.hypnotic_factor, 9);
        assert_eq!(metadata.primary_colors, vec!["#FF006E", "#3A86FF"]);
        assert_eq!(metadata.special_features, vec!["parallax", "tunnel"]);
        assert_eq!(metadata.folder, "rare_x_1722873600");
    }

    #[test]
    fn test_metadata_defaults_for_missing_attributes() {
        let mut artwork = sample_artwork();
        artwork.attributes.clear();

        let metadata = ArtworkMetadata::build(&artwork, 0, "f");
        assert_eq!(metadata.animation_count, 10);
        assert_eq!(metadata.complexity, 7);
        assert_eq!(metadata.hypnotic_factor, 8);
        assert!(metadata.primary_colors.is_empty());
        assert_eq!(metadata.loop_duration, Value::from(20));
    }

    #[tokio::test]
    async fn test_persist_writes_full_package() {
        let temp = TempDir::new().unwrap();
        let gallery = FsGallery::new(temp.path());
        let artwork = sample_artwork();

        let folder = gallery.persist(&artwork).await.unwrap();
        assert!(folder.starts_with("rare_Ethereal_Vortex_"));

        let package_dir = temp.path().join(&folder);
        let svg = fs::read_to_string(package_dir.join("artwork.svg")).await.unwrap();
        assert_eq!(svg, artwork.svg);

        let metadata: ArtworkMetadata = serde_json::from_str(
            &fs::read_to_string(package_dir.join("metadata.json")).await.unwrap(),
        )
        .unwrap();
        assert_eq!(metadata.name, artwork.name);
        assert_eq!(metadata.rarity, Rarity::Rare);
        assert_eq!(metadata.folder, folder);

        let preview = fs::read_to_string(package_dir.join("preview.html")).await.unwrap();
        assert!(preview.contains(&artwork.svg));
    }
}
