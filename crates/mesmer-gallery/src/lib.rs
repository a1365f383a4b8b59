//! # mesmer-gallery
//!
//! Filesystem packaging for accepted artworks.
//!
//! Every accepted piece becomes one self-contained directory under the
//! gallery root: the raw SVG, a metadata record, and a protected HTML
//! preview. The [`ArtworkStore`] trait is the seam the session loop
//! depends on, so tests can capture artworks without touching disk.

mod preview;
mod store;

pub use preview::render_preview;
pub use store::{ArtworkMetadata, ArtworkStore, FsGallery};
