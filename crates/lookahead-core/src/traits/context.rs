use crate::models::{CommitRecord, Segment};

/// The host's editing context for one input session.
///
/// Calls arrive synchronously, one at a time. `notify_update` fires the
/// host's update notifier, which may call straight back into the
/// predictor session that triggered it.
pub trait InputContext {
    /// Length of the current raw input.
    fn input_len(&self) -> usize;

    fn composition_is_empty(&self) -> bool;

    /// Whether the last composition segment carries `tag`.
    fn last_segment_has_tag(&self, tag: &str) -> bool;

    /// Append a segment to the composition.
    fn push_segment(&mut self, segment: Segment);

    /// Drop the input and composition.
    fn clear(&mut self);

    fn is_option_enabled(&self, name: &str) -> bool;

    /// Most recent commit, if anything has been committed.
    fn last_commit(&self) -> Option<CommitRecord>;

    /// Fire the host's context-update notification.
    fn notify_update(&mut self);

    /// Whether this context delivers abort/cancel notifications.
    fn supports_abort_notifications(&self) -> bool {
        false
    }
}
