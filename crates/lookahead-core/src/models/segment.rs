//! Composition segments and generated candidates.

use std::collections::BTreeSet;

use crate::config::defaults::{PLACEHOLDER_TAG, PREDICTION_TAG, RAW_TAG};

/// A tagged region of the host composition, in input offsets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segment {
    pub start: usize,
    pub end: usize,
    pub tags: BTreeSet<String>,
}

impl Segment {
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            tags: BTreeSet::new(),
        }
    }

    /// Zero-width segment at `position` that hosts prediction candidates.
    pub fn prediction_placeholder(position: usize) -> Self {
        let mut segment = Self::new(position, position);
        segment.tags.insert(PREDICTION_TAG.to_string());
        segment.tags.insert(PLACEHOLDER_TAG.to_string());
        segment.tags.remove(RAW_TAG);
        segment
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    pub fn is_prediction(&self) -> bool {
        self.has_tag(PREDICTION_TAG)
    }
}

/// A labeled text candidate anchored in the composition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub kind: String,
    pub start: usize,
    pub end: usize,
    pub text: String,
}

impl Candidate {
    /// A prediction candidate anchored at a zero-width position.
    pub fn prediction(position: usize, text: impl Into<String>) -> Self {
        Self {
            kind: PREDICTION_TAG.to_string(),
            start: position,
            end: position,
            text: text.into(),
        }
    }
}
