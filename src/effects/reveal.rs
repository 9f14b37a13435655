// SPDX-License-Identifier: MPL-2.0
//! One-way reveal animations for blocks entering the viewport.
//!
//! Three mutually exclusive policies, each with its own target set and
//! visibility threshold. Exactly one policy runs per session, chosen from
//! the config (or the `--reveal` flag) at startup. Crossing the threshold
//! flips a block's flag to revealed, once, forever — leaving and re-entering
//! the viewport never reverts it.

use crate::page::geometry::{PageLayout, ScrollViewport};
use crate::page::{BlockContent, BlockId, PageDocument, SectionKind};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RevealPolicy {
    /// Subtle fade-in; also covers the mailing-list section.
    FadeIn,
    /// Staggered slide-up; also covers the image gallery. The default.
    #[default]
    SlideUp,
    /// Spotlight-style reveal for content and press sections only.
    Theatrical,
}

impl RevealPolicy {
    /// Fraction of a block that must be visible before it reveals.
    pub fn threshold(self) -> f32 {
        match self {
            RevealPolicy::FadeIn => 0.10,
            RevealPolicy::SlideUp => 0.15,
            RevealPolicy::Theatrical => 0.20,
        }
    }

    /// Whether this policy animates the given block content.
    pub fn applies_to(self, content: &BlockContent) -> bool {
        match content {
            BlockContent::Hero { .. } => false,
            BlockContent::Section { kind, .. } => match self {
                RevealPolicy::FadeIn => true,
                RevealPolicy::SlideUp => !matches!(kind, SectionKind::MailingList),
                RevealPolicy::Theatrical => {
                    matches!(kind, SectionKind::Content | SectionKind::Press)
                }
            },
            BlockContent::Gallery { .. } => matches!(self, RevealPolicy::SlideUp),
        }
    }
}

impl fmt::Display for RevealPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RevealPolicy::FadeIn => "fade-in",
            RevealPolicy::SlideUp => "slide-up",
            RevealPolicy::Theatrical => "theatrical",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for RevealPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fade-in" => Ok(RevealPolicy::FadeIn),
            "slide-up" => Ok(RevealPolicy::SlideUp),
            "theatrical" => Ok(RevealPolicy::Theatrical),
            other => Err(format!(
                "unknown reveal policy '{other}' (expected fade-in, slide-up, or theatrical)"
            )),
        }
    }
}

/// Tracks the revealed flag for every block the active policy targets.
#[derive(Debug, Clone)]
pub struct RevealAnimator {
    policy: RevealPolicy,
    registry: Vec<BlockId>,
    revealed: HashSet<BlockId>,
}

impl RevealAnimator {
    /// Registers the policy's targets from the document. The registry is
    /// fixed for the lifetime of the page.
    pub fn new(policy: RevealPolicy, document: &PageDocument) -> Self {
        let registry = document
            .blocks
            .iter()
            .filter(|block| policy.applies_to(&block.content))
            .map(|block| block.id)
            .collect();

        Self {
            policy,
            registry,
            revealed: HashSet::new(),
        }
    }

    pub fn policy(&self) -> RevealPolicy {
        self.policy
    }

    /// A block is pending when the policy targets it and it has not yet
    /// been revealed. Untracked blocks are never pending.
    pub fn is_pending(&self, id: BlockId) -> bool {
        self.registry.contains(&id) && !self.revealed.contains(&id)
    }

    pub fn is_revealed(&self, id: BlockId) -> bool {
        self.revealed.contains(&id)
    }

    /// Flips the flag for every pending block whose visible fraction meets
    /// the policy threshold. One-directional: nothing is ever un-revealed.
    pub fn on_scroll(&mut self, viewport: ScrollViewport, layout: &PageLayout) {
        let threshold = self.policy.threshold();
        for &id in &self.registry {
            if self.revealed.contains(&id) {
                continue;
            }
            if let Some(extent) = layout.extent(id) {
                if viewport.visible_fraction(extent) >= threshold {
                    self.revealed.insert(id);
                }
            }
        }
    }
}
