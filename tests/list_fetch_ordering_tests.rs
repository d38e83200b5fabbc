// tests/list_fetch_ordering_tests.rs - Out-of-order fetch completion
//
// Fetches are held open on oneshot channels so the test decides the order
// in which they resolve. Only the most recently issued ticket may change
// what the list shows.

mod common;

use admin_console::web_app::list::{FetchError, ListController, ListPhase, ListResponse, Settlement};
use common::*;

fn respond(pending: &std::sync::Mutex<Vec<Responder>>, index: usize, rows: Vec<Row>, total: u64) {
    let tx = pending.lock().unwrap().remove(index);
    tx.send(Ok(ListResponse::new(rows, total))).unwrap();
}

#[tokio::test]
async fn test_late_response_for_older_query_is_discarded() {
    let (builder, pending) = deferred_builder();
    let mut list = ListController::initialize(builder).unwrap();

    // A: first page
    let ticket_a = list.mount().unwrap();
    let fetch_a = list.fetch(&ticket_a).unwrap();

    // B: search issued before A resolves
    let ticket_b = list.search("beta").unwrap();
    let fetch_b = list.fetch(&ticket_b).unwrap();
    assert!(ticket_b.seq() > ticket_a.seq());

    // B resolves first
    respond(&pending, 1, vec![row(2, "beta", "b")], 1);
    let outcome_b = fetch_b.await;
    assert_eq!(list.settle(&ticket_b, outcome_b), Settlement::Applied);

    // A resolves afterwards and must not overwrite B
    respond(&pending, 0, vec![row(1, "alpha", "a"), row(3, "gamma", "a")], 40);
    let outcome_a = fetch_a.await;
    assert_eq!(list.settle(&ticket_a, outcome_a), Settlement::Stale);

    assert_eq!(list.rows(), &[row(2, "beta", "b")]);
    assert_eq!(list.total_count(), 1);
    assert_eq!(list.query().search_term, "beta");
    assert_eq!(list.phase(), &ListPhase::Loaded);
}

#[tokio::test]
async fn test_stale_response_while_newer_is_in_flight() {
    let (builder, pending) = deferred_builder();
    let mut list = ListController::initialize(builder).unwrap();

    let ticket_a = list.mount().unwrap();
    let fetch_a = list.fetch(&ticket_a).unwrap();
    let ticket_b = list.change_page(1).unwrap();
    let _fetch_b = list.fetch(&ticket_b).unwrap();

    respond(&pending, 0, vec![row(1, "alpha", "a")], 9);
    let outcome_a = fetch_a.await;
    assert_eq!(list.settle(&ticket_a, outcome_a), Settlement::Stale);

    // Still waiting on B
    assert_eq!(list.phase(), &ListPhase::Loading);
    assert!(list.rows().is_empty());
}

#[tokio::test]
async fn test_stale_error_does_not_replace_current_rows() {
    let (builder, pending) = deferred_builder();
    let mut list = ListController::initialize(builder).unwrap();

    let ticket_a = list.mount().unwrap();
    let fetch_a = list.fetch(&ticket_a).unwrap();
    let ticket_b = list.refresh().unwrap();
    let fetch_b = list.fetch(&ticket_b).unwrap();

    respond(&pending, 1, vec![row(5, "epsilon", "e")], 1);
    let outcome_b = fetch_b.await;
    list.settle(&ticket_b, outcome_b);

    let tx = pending.lock().unwrap().remove(0);
    tx.send(Err(FetchError::Transport("connection reset".to_string())))
        .unwrap();
    let outcome_a = fetch_a.await;
    assert_eq!(list.settle(&ticket_a, outcome_a), Settlement::Stale);

    assert_eq!(list.phase(), &ListPhase::Loaded);
    assert_eq!(list.rows(), &[row(5, "epsilon", "e")]);
}

#[tokio::test]
async fn test_dropped_responder_becomes_transport_error() {
    let (builder, pending) = deferred_builder();
    let mut list = ListController::initialize(builder).unwrap();

    let ticket = list.mount().unwrap();
    let fetch = list.fetch(&ticket).unwrap();
    pending.lock().unwrap().clear();

    let outcome = fetch.await;
    assert_eq!(list.settle(&ticket, outcome), Settlement::Applied);
    assert_eq!(list.phase(), &ListPhase::Errored("cancelled".to_string()));
}
