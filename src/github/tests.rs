//! Unit tests for the trending intake facade.

use chrono::{TimeZone, Utc};
use rstest::{fixture, rstest};

use super::models::test_support::minimal_repository;
use super::{FeedError, MockTrendingGateway, SearchResults, TrendingIntake};
use crate::feed::{DateRange, FetchFilters};

#[fixture]
fn filters() -> FetchFilters {
    let range = DateRange {
        start: Utc
            .with_ymd_and_hms(2026, 9, 16, 0, 0, 0)
            .single()
            .expect("valid start"),
        end: Utc
            .with_ymd_and_hms(2026, 10, 16, 0, 0, 0)
            .single()
            .expect("valid end"),
    };
    FetchFilters::new(range).with_language(Some("go"))
}

#[rstest]
#[tokio::test]
async fn load_returns_page_spanning_filter_window(filters: FetchFilters) {
    let mut gateway = MockTrendingGateway::new();
    gateway
        .expect_search_repositories()
        .withf(|query| query.language() == Some("go") && query.per_page() == 50)
        .times(1)
        .returning(|_| {
            Ok(SearchResults {
                total_count: 2,
                incomplete_results: false,
                items: vec![
                    minimal_repository(1, "golang/go", 900),
                    minimal_repository(2, "spf13/cobra", 300),
                ],
            })
        });

    let intake = TrendingIntake::new(&gateway).with_per_page(50);
    let page = intake.load(&filters).await.expect("load should succeed");

    assert_eq!(page.start, filters.date_range.start);
    assert_eq!(page.end, filters.date_range.end);
    let names: Vec<_> = page.items.iter().map(|repo| repo.full_name.as_str()).collect();
    assert_eq!(names, vec!["golang/go", "spf13/cobra"]);
}

#[rstest]
#[tokio::test]
async fn load_propagates_gateway_errors(filters: FetchFilters) {
    let mut gateway = MockTrendingGateway::new();
    gateway.expect_search_repositories().returning(|_| {
        Err(FeedError::Network {
            message: "connection reset".to_owned(),
        })
    });

    let intake = TrendingIntake::new(&gateway);
    let result = intake.load(&filters).await;

    assert!(
        matches!(result, Err(FeedError::Network { .. })),
        "expected Network error, got {result:?}"
    );
}
