/// How the host committed a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitKind {
    /// Ordinary converted text.
    Text,
    /// A candidate produced by the predictor itself.
    Prediction,
    Punct,
    Raw,
    /// Key passed through to the application unconverted.
    Thru,
}

impl CommitKind {
    /// Whether a commit of this kind breaks the prediction chain.
    pub fn starts_fresh_context(self) -> bool {
        matches!(self, Self::Punct | Self::Raw | Self::Thru)
    }
}

/// The most recent entry of the host's commit history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    pub text: String,
    pub kind: CommitKind,
}

impl CommitRecord {
    pub fn new(text: impl Into<String>, kind: CommitKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}
