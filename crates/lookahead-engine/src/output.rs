//! Candidate output for a prediction segment.

use std::iter::FusedIterator;
use std::sync::Arc;

use lookahead_core::Candidate;

/// A finite, restartable sequence of prediction candidates.
///
/// Holds a snapshot of the engine's words; candidates are built lazily
/// on iteration, and every call to [`iter`](Self::iter) starts over.
#[derive(Debug, Clone)]
pub struct CandidateStream {
    words: Arc<[String]>,
    position: usize,
    limit: usize,
}

impl CandidateStream {
    /// `limit == 0` means unlimited.
    pub fn new(words: Arc<[String]>, position: usize, limit: usize) -> Self {
        Self {
            words,
            position,
            limit,
        }
    }

    pub fn len(&self) -> usize {
        match self.limit {
            0 => self.words.len(),
            limit => limit.min(self.words.len()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> CandidateIter<'_> {
        CandidateIter {
            stream: self,
            next: 0,
        }
    }
}

impl<'a> IntoIterator for &'a CandidateStream {
    type Item = Candidate;
    type IntoIter = CandidateIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct CandidateIter<'a> {
    stream: &'a CandidateStream,
    next: usize,
}

impl Iterator for CandidateIter<'_> {
    type Item = Candidate;

    fn next(&mut self) -> Option<Candidate> {
        if self.next >= self.stream.len() {
            return None;
        }
        let word = &self.stream.words[self.next];
        self.next += 1;
        Some(Candidate::prediction(self.stream.position, word.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.stream.len().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CandidateIter<'_> {}

impl FusedIterator for CandidateIter<'_> {}
