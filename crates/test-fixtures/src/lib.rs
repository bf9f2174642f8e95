//! Test doubles for the host collaborators: an in-memory input context,
//! configuration builders and a throwaway user data directory.

use std::collections::HashMap;
use std::sync::Arc;

use lookahead_core::{
    CommitKind, CommitRecord, InputContext, Schema, SchemaConfig, Segment, TomlSchemaConfig,
    UserDataResolver,
};

/// Called from [`MockContext::notify_update`], standing in for the host's
/// update notifier.
pub type UpdateHook = Box<dyn FnMut(&mut MockContext)>;

/// In-memory [`InputContext`] that records what the predictor does to it.
pub struct MockContext {
    pub input: String,
    pub segments: Vec<Segment>,
    pub commits: Vec<CommitRecord>,
    pub options: HashMap<String, bool>,
    pub abort_notifications: bool,
    /// Number of `notify_update` calls.
    pub update_count: usize,
    /// Number of `clear` calls.
    pub clear_count: usize,
    hook: Option<UpdateHook>,
}

impl Default for MockContext {
    fn default() -> Self {
        Self::new()
    }
}

impl MockContext {
    /// Empty context with the `prediction` option switched on.
    pub fn new() -> Self {
        let mut options = HashMap::new();
        options.insert("prediction".to_string(), true);
        Self {
            input: String::new(),
            segments: Vec::new(),
            commits: Vec::new(),
            options,
            abort_notifications: false,
            update_count: 0,
            clear_count: 0,
            hook: None,
        }
    }

    pub fn with_abort_notifications(mut self) -> Self {
        self.abort_notifications = true;
        self
    }

    pub fn set_option(&mut self, name: &str, value: bool) {
        self.options.insert(name.to_string(), value);
    }

    /// Install the notifier callback, replacing any previous one.
    pub fn on_update(&mut self, hook: impl FnMut(&mut MockContext) + 'static) {
        self.hook = Some(Box::new(hook));
    }

    /// Simulate the host committing `text`: composition and input are
    /// emptied and the commit is appended to history.
    pub fn commit(&mut self, text: &str, kind: CommitKind) {
        self.input.clear();
        self.segments.clear();
        self.commits.push(CommitRecord::new(text, kind));
    }

    /// Simulate typing raw input into a fresh segment.
    pub fn type_input(&mut self, text: &str) {
        let start = self.input.len();
        self.input.push_str(text);
        self.segments.push(Segment::new(start, self.input.len()));
    }

    /// Segments tagged `prediction`.
    pub fn prediction_segments(&self) -> Vec<&Segment> {
        self.segments.iter().filter(|s| s.is_prediction()).collect()
    }
}

impl InputContext for MockContext {
    fn input_len(&self) -> usize {
        self.input.len()
    }

    fn composition_is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    fn last_segment_has_tag(&self, tag: &str) -> bool {
        self.segments.last().is_some_and(|s| s.has_tag(tag))
    }

    fn push_segment(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    fn clear(&mut self) {
        self.clear_count += 1;
        self.input.clear();
        self.segments.clear();
    }

    fn is_option_enabled(&self, name: &str) -> bool {
        self.options.get(name).copied().unwrap_or(false)
    }

    fn last_commit(&self) -> Option<CommitRecord> {
        self.commits.last().cloned()
    }

    fn notify_update(&mut self) {
        self.update_count += 1;
        if let Some(mut hook) = self.hook.take() {
            hook(self);
            if self.hook.is_none() {
                self.hook = Some(hook);
            }
        }
    }

    fn supports_abort_notifications(&self) -> bool {
        self.abort_notifications
    }
}

/// Flat path → value configuration, for tests that need exact control
/// over which keys exist and what type they carry.
#[derive(Debug, Clone, Default)]
pub struct MapConfig {
    pub strings: HashMap<String, String>,
    pub ints: HashMap<String, i64>,
    pub bools: HashMap<String, bool>,
}

impl MapConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_string(mut self, path: &str, value: &str) -> Self {
        self.strings.insert(path.to_string(), value.to_string());
        self
    }

    pub fn with_int(mut self, path: &str, value: i64) -> Self {
        self.ints.insert(path.to_string(), value);
        self
    }

    pub fn into_schema(self, schema_id: &str) -> Schema {
        Schema::new(schema_id, Arc::new(self))
    }
}

impl SchemaConfig for MapConfig {
    fn get_string(&self, path: &str) -> Option<String> {
        self.strings.get(path).cloned()
    }

    fn get_int(&self, path: &str) -> Option<i64> {
        self.ints.get(path).copied()
    }

    fn get_bool(&self, path: &str) -> Option<bool> {
        self.bools.get(path).copied()
    }
}

/// Schema whose `predictor` table carries the given limits.
pub fn schema(schema_id: &str, max_candidates: i64, max_iterations: i64) -> Schema {
    schema_from_toml(
        schema_id,
        &format!("[predictor]\nmax_candidates = {max_candidates}\nmax_iterations = {max_iterations}\n"),
    )
}

/// Schema backed by arbitrary TOML.
///
/// # Panics
/// Panics if the TOML is malformed.
pub fn schema_from_toml(schema_id: &str, toml: &str) -> Schema {
    let config = TomlSchemaConfig::from_toml(toml)
        .unwrap_or_else(|e| panic!("bad fixture TOML for {schema_id}: {e}"));
    Schema::new(schema_id, Arc::new(config))
}

/// A temporary user data directory and a resolver rooted in it.
pub struct TempUserData {
    pub dir: tempfile::TempDir,
    pub resolver: UserDataResolver,
}

impl TempUserData {
    /// # Panics
    /// Panics if the temp directory cannot be created.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let resolver = UserDataResolver::for_predict_db(dir.path());
        Self { dir, resolver }
    }
}

impl Default for TempUserData {
    fn default() -> Self {
        Self::new()
    }
}
