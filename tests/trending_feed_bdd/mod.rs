//! Support modules for the trending feed BDD tests.

pub(crate) mod harness;
#[path = "../support/runtime.rs"]
pub(crate) mod runtime;
pub(crate) mod state;

pub(crate) use harness::{
    SEARCH_PATH, change_language, fixed_now, load_feed_windows, runtime_for, search_queries,
};
pub(crate) use state::FeedState;
