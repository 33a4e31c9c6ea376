//! Typed canvas hand-off for the rendering layer.
//!
//! # Responsibility
//! - Project registry works into display cards (image, title, author).
//! - Bundle cards, derived edges, and layout options as plain typed data.
//!
//! # Invariants
//! - Cards appear in registry order, one per work.
//! - Edges are exactly `derive_graph` output.
//! - Nothing here emits markup; renderers serialize or map as they see fit.

use crate::graph::derive::{derive_graph, Edge};
use crate::model::work::{Work, WorkId};
use crate::registry::work_registry::WorkRegistry;
use serde::{Deserialize, Serialize};

/// Flow direction of a hierarchical layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayoutDirection {
    /// Prerequisites on top, dependents below.
    #[default]
    #[serde(rename = "UD")]
    UpDown,
    #[serde(rename = "DU")]
    DownUp,
    #[serde(rename = "LR")]
    LeftRight,
    #[serde(rename = "RL")]
    RightLeft,
}

/// Where edge arrowheads are drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrowStyle {
    /// Arrowhead at the dependent.
    #[default]
    To,
    /// Arrowhead at the prerequisite.
    From,
    None,
}

/// Recognized rendering options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasOptions {
    pub direction: LayoutDirection,
    /// Distance between layers, in canvas pixels.
    pub level_separation: u32,
    /// Distance between siblings in one layer, in canvas pixels.
    pub node_spacing: u32,
    /// Whether the renderer may run a physics simulation after layout.
    pub physics: bool,
    pub arrows: ArrowStyle,
}

impl Default for CanvasOptions {
    fn default() -> Self {
        Self {
            direction: LayoutDirection::UpDown,
            level_separation: 150,
            node_spacing: 200,
            physics: false,
            arrows: ArrowStyle::To,
        }
    }
}

/// Visual shape of one card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CardShape {
    /// Cover image with the label underneath.
    Image { url: String },
    /// Plain text box.
    Box,
}

/// Display projection of one work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkCard {
    pub id: WorkId,
    pub title: String,
    pub author: Option<String>,
    pub image_url: Option<String>,
    /// Two-line label: title, then author (empty when unknown).
    pub label: String,
    pub shape: CardShape,
}

impl WorkCard {
    pub fn from_work(work: &Work) -> Self {
        let label = format!("{}\n{}", work.title, work.author.as_deref().unwrap_or(""));
        let shape = match work.cover() {
            Some(url) => CardShape::Image {
                url: url.to_string(),
            },
            None => CardShape::Box,
        };
        Self {
            id: work.id.clone(),
            title: work.title.clone(),
            author: work.author.clone(),
            image_url: work.image_url.clone(),
            label,
            shape,
        }
    }
}

/// Everything a renderer needs to draw the reading tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CanvasView {
    pub cards: Vec<WorkCard>,
    pub edges: Vec<Edge>,
    pub options: CanvasOptions,
}

impl CanvasView {
    pub fn from_registry(registry: &WorkRegistry, options: CanvasOptions) -> Self {
        Self {
            cards: registry.works().map(WorkCard::from_work).collect(),
            edges: derive_graph(registry).edges,
            options,
        }
    }

    pub fn card(&self, title: &str) -> Option<&WorkCard> {
        self.cards.iter().find(|card| card.title == title)
    }
}
