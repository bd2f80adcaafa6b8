//! Feed control and fetch result handlers for the TUI.
//!
//! Controls go through the controller's queued dispatcher; [`FeedApp::flush`]
//! then reduces the queue into the store and turns the newest fetch request
//! into a command. Results come back as `FetchComplete`/`FetchFailed` and are
//! reduced under the generation they were issued with, so responses for a
//! language or date jump the user has already left are dropped.

use std::any::Any;
use std::time::Instant;

use bubbletea_rs::Cmd;

use super::FeedApp;
use crate::feed::{FeedAction, FetchRequest, next_language};
use crate::github::models::RepositoryPage;
use crate::telemetry::TelemetryEvent;
use crate::tui::messages::AppMsg;

impl FeedApp {
    /// Dispatches feed control messages to the controller.
    pub(super) fn handle_feed_control_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        let preference = self.store.preference();
        match msg {
            AppMsg::LoadNext => {
                if !self.controller.load_next(&self.store.snapshot()) {
                    return None;
                }
            }
            AppMsg::CycleLanguage => {
                let next = next_language(preference.language());
                self.controller.update_language(next);
            }
            AppMsg::CycleDateJump => {
                let next = preference.date_jump.next();
                self.controller.update_date_jump(next);
            }
            AppMsg::ToggleViewType => {
                let next = preference.view_type.toggled();
                self.controller.update_view_type(next);
            }
            _ => {
                // Unreachable: caller filters to feed control messages.
                return None;
            }
        }
        self.flush()
    }

    /// Dispatches fetch results to their handlers.
    pub(super) fn handle_data_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::FetchComplete {
                generation,
                page,
                latency_ms,
            } => self.handle_fetch_complete(*generation, page, *latency_ms),
            AppMsg::FetchFailed {
                generation,
                message,
            } => self.handle_fetch_failed(*generation, message),
            _ => {
                // Unreachable: caller filters to data messages.
            }
        }
        None
    }

    fn handle_fetch_complete(&mut self, generation: u64, page: &RepositoryPage, latency_ms: u64) {
        if generation == self.store.generation() {
            let preference = self.store.preference();
            crate::tui::record_telemetry(TelemetryEvent::TrendingPageFetched {
                language: preference.language().map(ToOwned::to_owned),
                date_jump: preference.date_jump.to_string(),
                item_count: page.items.len(),
                latency_ms,
            });
        }
        self.store.reduce(FeedAction::FetchSucceeded {
            generation,
            page: page.clone(),
        });
    }

    fn handle_fetch_failed(&mut self, generation: u64, message: &str) {
        if generation == self.store.generation() {
            crate::tui::record_telemetry(TelemetryEvent::TrendingFetchFailed {
                message: message.to_owned(),
            });
        }
        self.store.reduce(FeedAction::FetchFailed {
            generation,
            message: message.to_owned(),
        });
    }

    /// Applies queued controller actions and returns the fetch to run.
    ///
    /// Preference updates are reduced first so the controller's `update`
    /// sees the new fetch key; any fetch it triggers is reduced in the same
    /// pass. Only the newest request is started: older ones in the same
    /// flush belong to a generation that is already stale.
    pub(crate) fn flush(&mut self) -> Option<Cmd> {
        let mut requests = self
            .store
            .process_dispatched(self.controller.dispatcher().drain());
        self.controller.update(&self.store.snapshot());
        requests.extend(
            self.store
                .process_dispatched(self.controller.dispatcher().drain()),
        );
        self.clamp_cursor();

        let newest = requests.pop()?;
        if !requests.is_empty() {
            tracing::debug!(
                "skipping {} superseded fetch request(s) in one flush",
                requests.len()
            );
        }
        Some(Self::fetch_cmd(newest))
    }

    /// Creates a command that loads one window and reports the result.
    fn fetch_cmd(request: FetchRequest) -> Cmd {
        Box::pin(async move {
            let FetchRequest {
                generation,
                filters,
            } = request;
            let start = Instant::now();
            let msg = match crate::tui::fetch_page(&filters).await {
                Ok(page) => {
                    let latency_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
                    AppMsg::FetchComplete {
                        generation,
                        page,
                        latency_ms,
                    }
                }
                Err(error) => {
                    tracing::warn!("fetching trending repositories failed: {error}");
                    AppMsg::from_error(generation, &error)
                }
            };
            Some(Box::new(msg) as Box<dyn Any + Send>)
        })
    }

    /// Creates a command that emits `Initialized` immediately.
    ///
    /// This synthetic startup event triggers the first render cycle and the
    /// initial fetch without waiting for user input.
    pub(super) fn immediate_init_cmd() -> Cmd {
        Box::pin(async { Some(Box::new(AppMsg::Initialized) as Box<dyn Any + Send>) })
    }
}
