// tests/list_controller_tests.rs - Behaviour of ListController
//
// Drives the controller the way ResourceList does: an operation issues a
// ticket, `run` awaits the fetch and settles it. Covers the request each
// operation sends, the phase transitions, and the rendering policy.

mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use admin_console::web_app::list::error::NO_DATA_ERROR;
use admin_console::web_app::list::{
    ConfigError, CreateAction, EmptyState, FetchError, ListConfig, ListController, ListPhase,
    ListResponse, PageRequest, RenderPlan, Settlement,
};
use common::*;

#[tokio::test]
async fn test_first_page_load() {
    let (builder, log) = recording_builder(|_| {
        Ok(ListResponse::new(vec![row(1, "A", "x"), row(2, "B", "x")], 12))
    });
    let mut list = ListController::initialize(builder).unwrap();
    assert_eq!(list.phase(), &ListPhase::Loading);

    let ticket = list.mount();
    assert_eq!(list.run(ticket).await, Some(Settlement::Applied));

    assert_eq!(requests(&log), vec![request(5, 0, "")]);
    assert_eq!(list.rows(), &[row(1, "A", "x"), row(2, "B", "x")]);
    assert_eq!(list.total_count(), 12);
    assert_eq!(list.phase(), &ListPhase::Loaded);
    assert!(matches!(list.render_plan(), RenderPlan::Table(rows) if rows.len() == 2));

    let info = list.page_info();
    assert_eq!(info.total_pages, 3);
    assert!(!info.can_go_prev);
    assert!(info.can_go_next);
}

#[tokio::test]
async fn test_each_operation_issues_exactly_one_fetch() {
    let (builder, log) = recording_builder(paged_response(40));
    let mut list = ListController::initialize(builder).unwrap();
    let ticket = list.mount();
    list.run(ticket).await;

    let ticket = list.change_page(2);
    list.run(ticket).await;
    assert_eq!(requests(&log).len(), 2);
    assert_eq!(requests(&log)[1], request(5, 10, ""));

    let ticket = list.change_page_size(25);
    list.run(ticket).await;
    assert_eq!(requests(&log).len(), 3);
    assert_eq!(requests(&log)[2], request(25, 0, ""));

    let ticket = list.change_page(1);
    list.run(ticket).await;
    let ticket = list.search("foo");
    list.run(ticket).await;
    assert_eq!(requests(&log).len(), 5);
    assert_eq!(requests(&log)[3], request(25, 25, ""));
    assert_eq!(requests(&log)[4], request(25, 0, "foo"));
}

#[tokio::test]
async fn test_search_resets_to_first_page() {
    let (builder, log) = recording_builder(paged_response(12));
    let mut list = ListController::initialize(builder).unwrap();
    let ticket = list.mount();
    list.run(ticket).await;

    let ticket = list.change_page(2);
    list.run(ticket).await;
    assert_eq!(list.query().page, 2);

    let ticket = list.search("foo");
    list.run(ticket).await;
    assert_eq!(list.query().page, 0);
    assert_eq!(requests(&log).last(), Some(&request(5, 0, "foo")));
}

#[tokio::test]
async fn test_refresh_clears_search_and_keeps_page_size() {
    let (builder, log) = recording_builder(paged_response(100));
    let mut list = ListController::initialize(builder).unwrap();
    let ticket = list.mount();
    list.run(ticket).await;

    let ticket = list.change_page_size(10);
    list.run(ticket).await;
    let ticket = list.search("gold");
    list.run(ticket).await;
    let ticket = list.change_page(3);
    list.run(ticket).await;

    let ticket = list.refresh();
    assert_eq!(list.phase(), &ListPhase::Loading);
    assert!(list.rows().is_empty());
    list.run(ticket).await;

    assert_eq!(requests(&log).last(), Some(&request(10, 0, "")));
    assert_eq!(list.query().search_term, "");
    assert_eq!(list.query().page_size, 10);
}

#[tokio::test]
async fn test_refresh_twice_equals_once() {
    let (builder, log) = recording_builder(paged_response(12));
    let mut list = ListController::initialize(builder).unwrap();
    let ticket = list.mount();
    list.run(ticket).await;
    let ticket = list.search("x");
    list.run(ticket).await;

    let ticket = list.refresh();
    list.run(ticket).await;
    let after_once = (
        list.query().clone(),
        list.rows().to_vec(),
        list.total_count(),
        list.phase().clone(),
    );

    let ticket = list.refresh();
    list.run(ticket).await;
    let after_twice = (
        list.query().clone(),
        list.rows().to_vec(),
        list.total_count(),
        list.phase().clone(),
    );

    assert_eq!(after_once, after_twice);
    let log = requests(&log);
    assert_eq!(log[log.len() - 1], log[log.len() - 2]);
}

#[tokio::test]
async fn test_error_then_retry() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let (builder, _log) = recording_builder(move |_| {
        if counter.fetch_add(1, Ordering::SeqCst) == 0 {
            Err(FetchError::Status {
                status: 503,
                message: "Service Unavailable".to_string(),
            })
        } else {
            Ok(ListResponse::new(vec![row(1, "A", "x")], 1))
        }
    });
    let mut list = ListController::initialize(builder).unwrap();
    let mut phases = vec![list.phase().clone()];

    let ticket = list.mount();
    list.run(ticket).await;
    phases.push(list.phase().clone());
    assert!(matches!(list.render_plan(), RenderPlan::Error(_)));
    assert!(list.rows().is_empty());

    let ticket = list.refresh();
    phases.push(list.phase().clone());
    list.run(ticket).await;
    phases.push(list.phase().clone());

    assert_eq!(
        phases,
        vec![
            ListPhase::Loading,
            ListPhase::Errored("Service Unavailable (status 503)".to_string()),
            ListPhase::Loading,
            ListPhase::Loaded,
        ]
    );
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_missing_payload_shows_generic_error() {
    let (builder, _log) = recording_builder(|_| Err(FetchError::NoData));
    let mut list = ListController::initialize(builder).unwrap();
    let ticket = list.mount();
    list.run(ticket).await;

    assert_eq!(list.phase(), &ListPhase::Errored(NO_DATA_ERROR.to_string()));
    assert_eq!(list.render_plan(), RenderPlan::Error(NO_DATA_ERROR));
}

#[tokio::test]
async fn test_empty_page_renders_no_data_message() {
    let (builder, _log) = recording_builder(|_| Ok(ListResponse::new(Vec::new(), 0)));
    let mut list = ListController::initialize(builder.no_data_message("Nothing here")).unwrap();
    let ticket = list.mount();
    list.run(ticket).await;

    assert_eq!(list.phase(), &ListPhase::Loaded);
    assert_eq!(list.render_plan(), RenderPlan::NoData("Nothing here"));
}

#[test]
fn test_default_no_data_message() {
    let (builder, _log) = recording_builder(|_| Ok(ListResponse::new(Vec::new(), 0)));
    let list = ListController::initialize(builder).unwrap();
    assert_eq!(list.config().no_data_message, "No items yet");
}

#[test]
fn test_empty_configuration_never_fetches() {
    let empty = EmptyState {
        title: "Key Managers".to_string(),
        content: "Nothing configured".to_string(),
        create: Some(CreateAction {
            label: "Add".to_string(),
            href: "/new".to_string(),
        }),
    };
    let mut list =
        ListController::initialize(ListConfig::<Row>::builder().empty_state(empty.clone())).unwrap();

    assert_eq!(list.phase(), &ListPhase::Idle);
    assert!(list.mount().is_none());
    assert!(list.refresh().is_none());
    assert!(list.change_page(1).is_none());
    assert!(list.search("x").is_none());
    assert_eq!(list.last_issued(), 0);
    assert_eq!(list.render_plan(), RenderPlan::Empty(&empty));
}

#[tokio::test]
async fn test_search_ignored_when_disabled() {
    let (builder, log) = recording_builder(paged_response(3));
    let mut list = ListController::initialize(builder.search_enabled(false)).unwrap();
    let ticket = list.mount();
    list.run(ticket).await;

    assert!(list.search("anything").is_none());
    assert_eq!(list.query().search_term, "");
    assert_eq!(requests(&log).len(), 1);
}

#[test]
fn test_invalid_page_sizes_rejected() {
    let (builder, _log) = recording_builder(paged_response(3));
    let mut list = ListController::initialize(builder).unwrap();
    list.mount();

    assert!(list.change_page_size(0).is_none());
    assert!(list.change_page_size(7).is_none());
    assert_eq!(list.query().page_size, 5);
    assert_eq!(list.last_issued(), 1);

    assert!(list.change_page_size(50).is_some());
    assert_eq!(list.query().page_size, 50);
}

#[test]
fn test_configuration_errors() {
    let both = ListConfig::builder()
        .static_items(vec![row(1, "A", "x")])
        .fetch_page(|_: PageRequest| {
            use futures::FutureExt;
            async { Ok(ListResponse::new(Vec::new(), 0)) }.boxed_local()
        })
        .build();
    assert_eq!(both.err(), Some(ConfigError::ConflictingSources));

    let empty = ListConfig::<Row>::builder().page_size_options(vec![]).build();
    assert_eq!(empty.err(), Some(ConfigError::NoPageSizeOptions));

    let zero = ListConfig::<Row>::builder().page_size_options(vec![0, 10]).build();
    assert_eq!(zero.err(), Some(ConfigError::ZeroPageSize));

    let unknown = ListConfig::<Row>::builder()
        .page_size_options(vec![10, 20])
        .initial_page_size(15)
        .build();
    assert_eq!(unknown.err(), Some(ConfigError::UnknownInitialPageSize(15)));

    let first_option = ListConfig::<Row>::builder()
        .page_size_options(vec![10, 20])
        .build()
        .unwrap();
    assert_eq!(first_option.initial_page_size, 10);
}

#[test]
fn test_static_list_windows_searches_and_never_fetches() {
    let items: Vec<Row> = (0..12)
        .map(|i| row(i, &format!("tier-{}", i), if i % 2 == 0 { "even" } else { "odd" }))
        .collect();
    let builder = ListConfig::builder()
        .static_items(items)
        .column(name_column())
        .local_search(|r: &Row, term: &str| r.group == term);
    let mut list = ListController::initialize(builder).unwrap();

    assert_eq!(list.phase(), &ListPhase::Loaded);
    assert_eq!(list.total_count(), 12);
    assert_eq!(list.rows().len(), 5);

    assert!(list.change_page(2).is_none());
    assert_eq!(list.rows().len(), 2);
    assert_eq!(list.rows()[0].id, 10);

    assert!(list.search("odd").is_none());
    assert_eq!(list.total_count(), 6);
    assert_eq!(list.query().page, 0);
    assert!(list.rows().iter().all(|r| r.group == "odd"));

    assert!(list.refresh().is_none());
    assert_eq!(list.total_count(), 12);
    assert_eq!(list.last_issued(), 0);
}

#[tokio::test]
async fn test_expanded_row_closes_on_next_fetch() {
    let (builder, _log) = recording_builder(paged_response(12));
    let mut list =
        ListController::initialize(builder.expand(|r: &Row| format!("{} in {}", r.name, r.group)))
            .unwrap();
    let ticket = list.mount();
    list.run(ticket).await;

    assert!(list.toggle_expanded(0));
    assert_eq!(
        list.config().expanded_content(&list.rows()[0]).as_deref(),
        Some("item-0 in g")
    );

    let ticket = list.change_page(1);
    assert!(!list.is_expanded(0));
    list.run(ticket).await;
    assert!(!list.is_expanded(0));
    assert_eq!(list.rows()[0].id, 5);
}
