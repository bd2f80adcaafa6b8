//! Tokio runtime and Wiremock server shared by the feed BDD steps.

use std::cell::RefCell;
use std::rc::Rc;

use rstest_bdd::Slot;
use tokio::runtime::Runtime;
use trendfeed::FeedError;
use wiremock::MockServer;

/// Runtime handle that can live in an `rstest-bdd` Slot.
///
/// Steps are synchronous, so each one blocks on the shared runtime instead
/// of owning its own.
#[derive(Clone)]
pub struct SharedRuntime(Rc<RefCell<Runtime>>);

impl SharedRuntime {
    pub fn new(runtime: Runtime) -> Self {
        Self(Rc::new(RefCell::new(runtime)))
    }

    pub fn block_on<F: std::future::Future>(&self, future: F) -> F::Output {
        self.0.borrow().block_on(future)
    }
}

/// Starts the runtime and the mock GitHub server on first use.
///
/// # Errors
///
/// Returns [`FeedError::Io`] if the Tokio runtime cannot be created.
pub fn ensure_runtime_and_server(
    runtime: &Slot<SharedRuntime>,
    server: &Slot<MockServer>,
) -> Result<SharedRuntime, FeedError> {
    if runtime.with_ref(|_| ()).is_none() {
        let created = Runtime::new().map_err(|error| FeedError::Io {
            message: format!("failed to create Tokio runtime: {error}"),
        })?;
        runtime.set(SharedRuntime::new(created));
    }
    let shared_runtime = runtime.get().ok_or_else(|| FeedError::Io {
        message: "Tokio runtime missing from scenario state".to_owned(),
    })?;

    if server.with_ref(|_| ()).is_none() {
        server.set(shared_runtime.block_on(MockServer::start()));
    }

    Ok(shared_runtime)
}
