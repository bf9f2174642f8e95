//! PredictionEngine — query, learn, and produce candidates over one store.

use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{debug, error, info};

use lookahead_core::{InputContext, PredictorConfig, ResourceResolver, Schema, Segment};
use lookahead_storage::{HandleCache, PredictionStore};

use crate::output::CandidateStream;

/// Result of the last successful query.
#[derive(Debug)]
struct EngineState {
    query: String,
    candidates: Arc<[String]>,
}

impl Default for EngineState {
    fn default() -> Self {
        Self {
            query: String::new(),
            candidates: Arc::from(Vec::<String>::new()),
        }
    }
}

/// One schema's view of a shared prediction store.
///
/// Shared by every session of the schema. The cached query and
/// candidates sit behind a lock and hold whichever session queried
/// last; sessions keep their own snapshot from
/// [`predict_words`](Self::predict_words) for rendering.
pub struct PredictionEngine {
    store: Arc<PredictionStore>,
    /// Consecutive predictions before a session stops. 0 = unlimited.
    max_iterations: u32,
    /// Candidates per output. 0 = unlimited.
    max_candidates: usize,
    state: Mutex<EngineState>,
}

impl PredictionEngine {
    pub fn new(store: Arc<PredictionStore>, max_iterations: u32, max_candidates: usize) -> Self {
        Self {
            store,
            max_iterations,
            max_candidates,
            state: Mutex::new(EngineState::default()),
        }
    }

    /// Build an engine from the schema's `predictor/*` settings.
    ///
    /// Returns `None` when the prediction database cannot be opened.
    pub fn create(
        schema: &Schema,
        resolver: &dyn ResourceResolver,
        handles: &HandleCache,
    ) -> Option<Self> {
        let config = PredictorConfig::from_schema(schema.config.as_ref());
        let location = resolver.resolve_path(&config.predict_db);
        match handles.get_or_open(&location) {
            Some(store) => {
                info!(
                    schema_id = %schema.schema_id,
                    location = %location.display(),
                    max_candidates = config.max_candidates,
                    max_iterations = config.max_iterations,
                    "prediction engine created"
                );
                Some(Self::new(store, config.max_iterations, config.max_candidates))
            }
            None => {
                error!(
                    schema_id = %schema.schema_id,
                    predict_db = %config.predict_db,
                    "failed to load predict db"
                );
                None
            }
        }
    }

    /// Look up predictions for `context_query` and cache them.
    ///
    /// A missing key clears the cache and returns false. A key whose
    /// list has been emptied by deletes is present in the store, yet it
    /// is deliberately reported as a miss too, because an empty list
    /// would put an empty placeholder segment in the composition.
    pub fn predict(&self, context_query: &str) -> bool {
        self.predict_words(context_query).is_some()
    }

    /// [`predict`](Self::predict), returning the ranked words on a hit.
    ///
    /// The returned snapshot belongs to the caller; later queries from
    /// other sessions replace the engine's cache but not the snapshot.
    pub fn predict_words(&self, context_query: &str) -> Option<Arc<[String]>> {
        debug!(query = context_query, "PredictionEngine::predict");
        match self.store.lookup(context_query) {
            Some(list) if !list.is_empty() => {
                let words: Arc<[String]> = list.words().into();
                let mut state = self.lock_state();
                state.query = context_query.to_string();
                state.candidates = words.clone();
                Some(words)
            }
            _ => {
                self.clear();
                None
            }
        }
    }

    /// Forget the cached query and candidates.
    pub fn clear(&self) {
        debug!("PredictionEngine::clear");
        let mut state = self.lock_state();
        state.query.clear();
        state.candidates = Arc::from(Vec::<String>::new());
        self.store.clear();
    }

    /// Append the zero-width placeholder segment that hosts prediction
    /// candidates at the end of the current input.
    pub fn create_predict_segment(&self, ctx: &mut dyn InputContext) -> Segment {
        let segment = Segment::prediction_placeholder(ctx.input_len());
        debug!(position = segment.end, "PredictionEngine::create_predict_segment");
        ctx.push_segment(segment.clone());
        segment
    }

    /// Candidates from the last successful query, anchored at `position`
    /// and truncated to `max_candidates`.
    pub fn build_output(&self, position: usize) -> CandidateStream {
        let words = self.lock_state().candidates.clone();
        self.output_for(words, position)
    }

    /// Candidates for a caller-held word snapshot, truncated to
    /// `max_candidates`.
    pub fn output_for(&self, words: Arc<[String]>, position: usize) -> CandidateStream {
        CandidateStream::new(words, position, self.max_candidates)
    }

    /// Reinforce or suppress `word` under `key` in the store.
    pub fn update_predict(&self, key: &str, word: &str, delete: bool) {
        self.store.update(key, word, delete);
    }

    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    pub fn max_candidates(&self) -> usize {
        self.max_candidates
    }

    /// Last successful query, empty after a miss or clear.
    pub fn query(&self) -> String {
        self.lock_state().query.clone()
    }

    pub fn candidates(&self) -> Vec<String> {
        self.lock_state().candidates.to_vec()
    }

    pub fn num_candidates(&self) -> usize {
        self.lock_state().candidates.len()
    }

    pub fn candidate(&self, index: usize) -> Option<String> {
        self.lock_state().candidates.get(index).cloned()
    }

    pub fn store(&self) -> &Arc<PredictionStore> {
        &self.store
    }

    fn lock_state(&self) -> MutexGuard<'_, EngineState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}
