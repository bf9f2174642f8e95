//! PredictorSession — the per-context prediction state machine.
//!
//! Selections and deletions are only recorded when they happen; the store
//! is updated on the next context update, once the context has advanced.
//! Each successful prediction bumps an iteration counter that stops
//! further predictions at `max_iterations` until a reset.

use std::cell::{Cell, RefCell};
use std::sync::Arc;

use tracing::{debug, info};

use lookahead_core::config::defaults::{PREDICTION_OPTION, PREDICTION_TAG, START_OF_INPUT_QUERY};
use lookahead_core::{InputContext, Segment};
use lookahead_engine::{CandidateStream, PredictionEngine};

use crate::events::{ContextEvent, KeyEvent, ProcessResult};

/// The user action awaiting the next context update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LastAction {
    #[default]
    None,
    Select { query: String, word: String },
    Delete { query: String, word: String },
}

/// Predictor state for one input context.
///
/// Event handlers take `&self` so the host may re-enter the session from
/// inside `notify_update`; the session is not `Sync`.
pub struct PredictorSession {
    engine: Arc<PredictionEngine>,
    abort_subscribed: bool,
    last_action: RefCell<LastAction>,
    self_updating: Cell<bool>,
    /// Set by Backspace/Escape, cleared by the next other key.
    dismissed: Cell<bool>,
    iteration_counter: Cell<u32>,
    /// Words of this session's last prediction. The engine's own cache
    /// is shared with other sessions of the schema.
    candidates: RefCell<Arc<[String]>>,
}

impl PredictorSession {
    /// Bind a session to `ctx`. Abort events are honoured only if the
    /// context advertises them.
    pub fn new(engine: Arc<PredictionEngine>, ctx: &dyn InputContext) -> Self {
        Self {
            engine,
            abort_subscribed: ctx.supports_abort_notifications(),
            last_action: RefCell::new(LastAction::None),
            self_updating: Cell::new(false),
            dismissed: Cell::new(false),
            iteration_counter: Cell::new(0),
            candidates: RefCell::new(no_candidates()),
        }
    }

    pub fn engine(&self) -> &Arc<PredictionEngine> {
        &self.engine
    }

    /// Route a host notification to its handler.
    pub fn dispatch(&self, ctx: &mut dyn InputContext, event: ContextEvent) {
        match event {
            ContextEvent::Update => self.on_context_update(ctx),
            ContextEvent::Select(word) => self.on_select(ctx, &word),
            ContextEvent::Delete(word) => self.on_delete(ctx, &word),
            ContextEvent::Abort if self.abort_subscribed => self.on_abort(),
            ContextEvent::Abort => debug!("context does not deliver abort notifications, ignoring"),
        }
    }

    /// React to a context change: learn from the pending action, then
    /// predict for the current context.
    pub fn on_context_update(&self, ctx: &mut dyn InputContext) {
        if self.self_updating.get() {
            debug!("ignoring context update raised by our own segment");
            return;
        }
        if !ctx.is_option_enabled(PREDICTION_OPTION)
            || self.dismissed.get()
            || !ctx.composition_is_empty()
        {
            return;
        }
        info!("PredictorSession::on_context_update");

        match context_query(ctx) {
            Some(query) => {
                self.predict_and_update(ctx, &query);
            }
            None => {
                // Punctuation or raw input ends the chain.
                self.apply_pending_action();
                self.reset_prediction();
            }
        }
    }

    /// Apply the pending action, then predict for `context_query` and, on
    /// success, append the placeholder segment. Returns whether a
    /// prediction was shown.
    pub fn predict_and_update(&self, ctx: &mut dyn InputContext, context_query: &str) -> bool {
        if self.self_updating.get() {
            return false;
        }
        self.apply_pending_action();

        let max_iterations = self.engine.max_iterations();
        if max_iterations > 0 && self.iteration_counter.get() >= max_iterations {
            debug!(
                iterations = self.iteration_counter.get(),
                max_iterations, "prediction limit reached"
            );
            self.candidates.replace(no_candidates());
            return false;
        }

        let Some(words) = self.engine.predict_words(context_query) else {
            self.candidates.replace(no_candidates());
            return false;
        };
        self.candidates.replace(words);

        {
            let _guard = SelfUpdate::enter(&self.self_updating);
            self.engine.create_predict_segment(ctx);
            ctx.notify_update();
        }
        self.iteration_counter.set(self.iteration_counter.get() + 1);
        true
    }

    /// Record a candidate selection for reinforcement on the next update.
    pub fn on_select(&self, ctx: &dyn InputContext, word: &str) {
        if !ctx.is_option_enabled(PREDICTION_OPTION) {
            return;
        }
        let action = match context_query(ctx) {
            Some(query) => LastAction::Select {
                query,
                word: word.to_string(),
            },
            None => LastAction::None,
        };
        self.last_action.replace(action);
    }

    /// Record a candidate deletion, then clear the context so the host's
    /// update notification applies it and refreshes the prediction.
    pub fn on_delete(&self, ctx: &mut dyn InputContext, word: &str) {
        if !ctx.is_option_enabled(PREDICTION_OPTION) {
            return;
        }
        let action = match context_query(ctx) {
            Some(query) => LastAction::Delete {
                query,
                word: word.to_string(),
            },
            None => LastAction::None,
        };
        self.last_action.replace(action);
        ctx.clear();
        ctx.notify_update();
    }

    /// Reset every transient field and the engine's cached result.
    pub fn on_abort(&self) {
        debug!("PredictorSession::on_abort");
        self.last_action.replace(LastAction::None);
        self.self_updating.set(false);
        self.dismissed.set(false);
        self.reset_prediction();
    }

    /// Backspace and Escape dismiss the prediction; any other key
    /// re-arms it.
    pub fn process_key_event(&self, ctx: &mut dyn InputContext, key: KeyEvent) -> ProcessResult {
        if !key.is_dismiss() {
            self.dismissed.set(false);
            return ProcessResult::Noop;
        }

        self.dismissed.set(true);
        self.last_action.replace(LastAction::None);
        self.reset_prediction();
        if !ctx.composition_is_empty() && ctx.last_segment_has_tag(PREDICTION_TAG) {
            ctx.clear();
            return ProcessResult::Accepted;
        }
        ProcessResult::Noop
    }

    /// Candidates of this session's last prediction for a prediction
    /// segment; `None` for any other segment.
    pub fn translate(&self, segment: &Segment) -> Option<CandidateStream> {
        segment.is_prediction().then(|| {
            let words = self.candidates.borrow().clone();
            self.engine.output_for(words, segment.end)
        })
    }

    /// Words of this session's last prediction, in rank order.
    pub fn candidates(&self) -> Vec<String> {
        self.candidates.borrow().to_vec()
    }

    pub fn last_action(&self) -> LastAction {
        self.last_action.borrow().clone()
    }

    pub fn iteration_counter(&self) -> u32 {
        self.iteration_counter.get()
    }

    pub fn is_self_updating(&self) -> bool {
        self.self_updating.get()
    }

    pub fn is_dismissed(&self) -> bool {
        self.dismissed.get()
    }

    fn reset_prediction(&self) {
        self.candidates.replace(no_candidates());
        self.iteration_counter.set(0);
        self.engine.clear();
    }

    fn apply_pending_action(&self) {
        match self.last_action.replace(LastAction::None) {
            LastAction::Select { query, word } => {
                debug!(%query, %word, "reinforcing selected prediction");
                self.engine.update_predict(&query, &word, false);
            }
            LastAction::Delete { query, word } => {
                debug!(%query, %word, "suppressing deleted prediction");
                self.engine.update_predict(&query, &word, true);
            }
            LastAction::None => {}
        }
    }
}

fn no_candidates() -> Arc<[String]> {
    Arc::from(Vec::<String>::new())
}

/// Context query for the current commit history.
///
/// `$` before anything is committed; `None` after punctuation, raw or
/// pass-through commits, which start a fresh context.
fn context_query(ctx: &dyn InputContext) -> Option<String> {
    match ctx.last_commit() {
        None => Some(START_OF_INPUT_QUERY.to_string()),
        Some(commit) if commit.kind.starts_fresh_context() => None,
        Some(commit) => Some(commit.text),
    }
}

/// Holds the self-updating flag for the duration of our own edit.
struct SelfUpdate<'a>(&'a Cell<bool>);

impl<'a> SelfUpdate<'a> {
    fn enter(flag: &'a Cell<bool>) -> Self {
        flag.set(true);
        Self(flag)
    }
}

impl Drop for SelfUpdate<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}
