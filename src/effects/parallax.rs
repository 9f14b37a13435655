// SPDX-License-Identifier: MPL-2.0
//! Scroll-linked parallax offsets for hero blocks.

use crate::page::geometry::{PageLayout, ScrollViewport};
use crate::page::BlockId;
use std::collections::HashMap;

/// Lowest accepted parallax speed factor (no movement).
pub const MIN_SPEED: f32 = 0.0;
/// Highest accepted parallax speed factor (moves with the scroll).
pub const MAX_SPEED: f32 = 1.0;

/// Recomputes a vertical offset for each registered block on every scroll
/// notification. Registration is fixed at construction; blocks that leave
/// the viewport keep their last-applied offset.
#[derive(Debug, Clone)]
pub struct ParallaxController {
    targets: Vec<BlockId>,
    speed: f32,
    offsets: HashMap<BlockId, f32>,
}

impl ParallaxController {
    /// Builds the controller over a fixed target set. Speeds outside
    /// [`MIN_SPEED`]..=[`MAX_SPEED`] are clamped so a persisted config
    /// cannot request runaway movement.
    pub fn new(targets: Vec<BlockId>, speed: f32) -> Self {
        Self {
            targets,
            speed: speed.clamp(MIN_SPEED, MAX_SPEED),
            offsets: HashMap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Current vertical offset for a block. Zero until the block has been
    /// scrolled through at least once.
    pub fn offset(&self, id: BlockId) -> f32 {
        self.offsets.get(&id).copied().unwrap_or(0.0)
    }

    /// Recomputes offsets for every target at least partially inside the
    /// viewport. Geometry comes fresh from the layout on each invocation.
    pub fn on_scroll(&mut self, viewport: ScrollViewport, layout: &PageLayout) {
        for &id in &self.targets {
            let Some(extent) = layout.extent(id) else {
                continue;
            };
            if viewport.intersects(extent) {
                let offset = (viewport.offset - extent.top) * self.speed;
                self.offsets.insert(id, offset);
            }
        }
    }
}
