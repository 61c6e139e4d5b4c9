//! Aggregation tests against live in-process API servers.

use std::net::SocketAddr;
use std::time::Duration;

use axum::Json;
use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;

use sustain_client::Aggregator;
use sustain_core::{Category, Initiative, Status};
use sustain_store::Store;

async fn spawn_server(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

fn record(title: &str, category: Category) -> Initiative {
    Initiative::seeded(title, "test description", category, Status::Active)
}

#[tokio::test]
async fn full_catalog_round_trips_in_category_order() {
    let store = Store::open_in_memory().unwrap();
    sustain_store::seed::seed(&store).unwrap();
    let addr = spawn_server(sustain_api::build_router(store.clone())).await;

    let merged = Aggregator::new(addr.to_string()).fetch_all().await;

    // The merge equals the per-category listings concatenated in
    // endpoint-iteration order.
    let mut expected = Vec::new();
    for category in Category::ALL {
        expected.extend(store.list_by_category(category).unwrap());
    }
    assert_eq!(merged, expected);
    assert_eq!(merged.len() as u64, store.count().unwrap());
}

#[tokio::test]
async fn one_failing_category_does_not_block_the_rest() {
    // Five categories served normally, WATER always 500.
    let mut router = Router::new();
    for category in Category::ALL {
        let path = format!("/api/{}", category.slug());
        if category == Category::Water {
            router = router.route(
                &path,
                get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
            );
        } else {
            let records = vec![record(category.slug(), category)];
            router = router.route(&path, get(move || async move { Json(records) }));
        }
    }
    let addr = spawn_server(router).await;

    let merged = Aggregator::new(addr.to_string()).fetch_all().await;

    assert_eq!(merged.len(), 5);
    assert!(merged.iter().all(|r| r.category != Category::Water));
    // Relative order of the surviving branches is preserved.
    let cats: Vec<Category> = merged.iter().map(|r| r.category).collect();
    assert_eq!(
        cats,
        vec![
            Category::Food,
            Category::Shelter,
            Category::Education,
            Category::Work,
            Category::Energy,
        ]
    );
}

#[tokio::test]
async fn total_failure_yields_empty_list() {
    // Grab an ephemeral port and release it so nothing is listening.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let merged = Aggregator::new(addr.to_string())
        .with_timeout(Duration::from_millis(500))
        .fetch_all()
        .await;

    assert!(merged.is_empty());
}

#[tokio::test]
async fn slow_branch_is_cut_off_by_timeout() {
    let mut router = Router::new();
    for category in Category::ALL {
        let path = format!("/api/{}", category.slug());
        if category == Category::Food {
            router = router.route(
                &path,
                get(|| async {
                    tokio::time::sleep(Duration::from_secs(5)).await;
                    Json(Vec::<Initiative>::new())
                }),
            );
        } else {
            let records = vec![record(category.slug(), category)];
            router = router.route(&path, get(move || async move { Json(records) }));
        }
    }
    let addr = spawn_server(router).await;

    let merged = Aggregator::new(addr.to_string())
        .with_timeout(Duration::from_millis(200))
        .fetch_all()
        .await;

    // The slow FOOD branch times out and contributes nothing.
    assert_eq!(merged.len(), 5);
    assert!(merged.iter().all(|r| r.category != Category::Food));
}

#[tokio::test]
async fn run_reaches_loaded_state() {
    let store = Store::open_in_memory().unwrap();
    let addr = spawn_server(sustain_api::build_router(store)).await;

    let state = Aggregator::new(addr.to_string()).run().await;

    // An empty store loads to an empty, non-loading terminal state.
    assert!(!state.is_loading());
    assert_eq!(state.records(), Some(&[][..]));
}
