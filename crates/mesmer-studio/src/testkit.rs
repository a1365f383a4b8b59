//! Shared test doubles for the pipeline

use async_trait::async_trait;
use mesmer_agent::{GenerationReply, GenerationRequest, GenerationService};
use mesmer_core::{Artwork, MesmerError, Result};
use mesmer_gallery::ArtworkStore;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Service double that pops scripted replies in order
///
/// Runs dry into a `Service` error, which doubles as the transport
/// failure case.
pub struct ScriptedService {
    replies: Mutex<VecDeque<GenerationReply>>,
}

impl ScriptedService {
    pub fn with_replies(replies: Vec<GenerationReply>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
        }
    }

    pub fn with_raw_replies(contents: Vec<String>) -> Self {
        Self::with_replies(
            contents
                .into_iter()
                .map(|content| GenerationReply {
                    content,
                    total_tokens: 0,
                })
                .collect(),
        )
    }
}

#[async_trait]
impl GenerationService for ScriptedService {
    async fn generate(&self, _request: &GenerationRequest) -> Result<GenerationReply> {
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| MesmerError::Service("scripted service is out of replies".to_string()))
    }
}

/// Store double that captures artworks instead of writing them
#[derive(Default, Clone)]
pub struct RecordingStore {
    stored: Arc<Mutex<Vec<Artwork>>>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stored(&self) -> Vec<Artwork> {
        self.stored.lock().unwrap().clone()
    }
}

#[async_trait]
impl ArtworkStore for RecordingStore {
    async fn persist(&self, artwork: &Artwork) -> Result<String> {
        let mut stored = self.stored.lock().unwrap();
        stored.push(artwork.clone());
        Ok(format!("package-{}", stored.len()))
    }
}

/// Markup with the standard structure and a given number of directives
pub fn sample_svg(animations: usize) -> String {
    let mut svg =
        String::from("<svg viewBox=\"0 0 1000 1000\" xmlns=\"http://www.w3.org/2000/svg\">");
    svg.push_str(&"<circle cx=\"500\" cy=\"500\" r=\"80\" fill=\"#FF006E\"/>".repeat(8));
    for i in 0..animations {
        svg.push_str(&format!(
            "<animate attributeName=\"opacity\" values=\"0;1;0\" dur=\"{}s\" repeatCount=\"indefinite\"/>",
            i + 3
        ));
    }
    svg.push_str("</svg>");
    svg
}

/// A well-formed reply wrapping `svg`
pub fn scripted_reply(svg: &str, animation_count: usize, total_tokens: u64) -> GenerationReply {
    let content = serde_json::json!({
        "artwork_name": "Ethereal Vortex",
        "description": "A slow spiral that folds the viewer inward.",
        "svg_code": svg,
        "attributes": {
            "animation_count": animation_count,
            "complexity": 6,
            "hypnotic_factor": 8,
            "primary_colors": ["#FF006E", "#FB5607"],
            "loop_duration": 20,
            "special_features": ["parallax", "tunnel"]
        }
    })
    .to_string();

    GenerationReply {
        content,
        total_tokens,
    }
}
