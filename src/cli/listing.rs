//! Non-interactive listing of trending windows.

use std::io::{self, Write};

use trendfeed::feed::{SystemClock, TOKEN_WARNING, load_windows};
use trendfeed::telemetry::TelemetrySink;
use trendfeed::{
    ApiBase, FeedController, FeedError, FeedStore, OctocrabTrendingGateway, PersonalAccessToken,
    QueuedDispatcher, TrendfeedConfig, TrendingGateway, TrendingIntake,
};

use super::output::{io_error, write_feed};
use super::telemetry_sink;

/// Lists `config.pages` windows to stdout.
///
/// # Errors
///
/// Returns [`FeedError::Configuration`] (or a parse error) for unusable
/// settings and any gateway failure while loading a window.
pub async fn run(config: &TrendfeedConfig) -> Result<(), FeedError> {
    let sink = telemetry_sink(config);
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    run_with_gateway_builder(
        config,
        OctocrabTrendingGateway::for_token,
        sink.as_ref(),
        &mut stdout,
        &mut stderr,
    )
    .await
}

/// Lists windows using a custom gateway builder.
///
/// This function is exposed for testing with mock gateways. The token
/// warning goes to `warnings`, the feed itself to `writer`.
///
/// # Errors
///
/// Returns configuration errors before any request is made, or
/// [`FeedError::Io`] if writing fails. A gateway failure is returned after
/// the windows loaded before it have been written.
pub async fn run_with_gateway_builder<G, F, W, E>(
    config: &TrendfeedConfig,
    build_gateway: F,
    telemetry: &dyn TelemetrySink,
    writer: &mut W,
    warnings: &mut E,
) -> Result<(), FeedError>
where
    G: TrendingGateway,
    F: FnOnce(Option<&PersonalAccessToken>, &ApiBase) -> Result<G, FeedError>,
    W: Write,
    E: Write,
{
    let preference = config.preference()?;
    let pages = usize::try_from(config.require_pages()?).unwrap_or(usize::MAX);
    let api_base = config.api_base()?;
    let token = preference
        .token()
        .map(PersonalAccessToken::new)
        .transpose()?;

    let gateway = build_gateway(token.as_ref(), &api_base)?;
    let intake = TrendingIntake::new(&gateway).with_per_page(config.per_page);

    let mut store = FeedStore::new(preference);
    let mut controller = FeedController::with_clock(QueuedDispatcher::new(), SystemClock);
    // Windows loaded before a failure are still printed, followed by the error.
    let outcome = load_windows(&intake, &mut controller, &mut store, pages, telemetry).await;

    let view = controller.render(&store.snapshot());
    if view.show_token_warning {
        writeln!(warnings, "{TOKEN_WARNING}").map_err(|e| io_error(&e))?;
    }
    write_feed(writer, &view)?;
    outcome
}
