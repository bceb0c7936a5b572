//! Feed driver behavior against a scripted paged source.

use glowcast_admin::pagination::{Feed, FeedPhase};
use glowcast_admin::services::feed::{advance, drain, refresh};

mod common;

use common::{ScriptedPages, related_page};

#[tokio::test]
async fn drain_collects_every_page_until_exhausted() {
    let source = ScriptedPages::new(vec![
        Ok((5, related_page(&["a", "b"]))),
        Ok((5, related_page(&["c", "d"]))),
        Ok((5, related_page(&["e"]))),
    ]);
    let mut feed = Feed::new(2);

    let pages = drain(&mut feed, |p| source.next(p.page)).await.unwrap();

    assert_eq!(pages, 3);
    assert_eq!(feed.len(), 5);
    assert_eq!(feed.total(), 5);
    assert!(!feed.has_more());
    assert_eq!(source.requested_pages(), vec![1, 2, 3]);
}

#[tokio::test]
async fn drain_dedups_overlapping_pages() {
    // The server shifted under us: page 2 repeats "b".
    let source = ScriptedPages::new(vec![
        Ok((4, related_page(&["a", "b"]))),
        Ok((4, related_page(&["b", "c"]))),
        Ok((4, related_page(&["d"]))),
    ]);
    let mut feed = Feed::new(2);

    drain(&mut feed, |p| source.next(p.page)).await.unwrap();

    let names: Vec<_> = feed.items().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(names, vec!["a", "b", "c", "d"]);
}

#[tokio::test]
async fn drain_terminates_on_a_server_stuck_repeating_a_page() {
    let source = ScriptedPages::new(vec![
        Ok((10, related_page(&["a", "b"]))),
        Ok((10, related_page(&["a", "b"]))),
    ]);
    let mut feed = Feed::new(2);

    let pages = drain(&mut feed, |p| source.next(p.page)).await.unwrap();

    assert_eq!(pages, 2);
    assert_eq!(feed.len(), 2);
    // Page 2 was requested once, not retried in a loop.
    assert_eq!(source.requested_pages(), vec![1, 2]);
}

#[tokio::test]
async fn failed_page_is_retried_at_the_same_cursor() {
    let source = ScriptedPages::new(vec![
        Ok((4, related_page(&["a", "b"]))),
        Err("coin service unavailable".to_string()),
        Ok((4, related_page(&["c", "d"]))),
    ]);
    let mut feed = Feed::new(2);

    advance(&mut feed, |p| source.next(p.page)).await.unwrap();
    let err = advance(&mut feed, |p| source.next(p.page))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("coin service unavailable"));
    assert_eq!(feed.phase(), FeedPhase::Failed);
    assert_eq!(feed.len(), 2);
    assert_eq!(feed.next_page(), 2);

    // User-triggered retry re-issues page 2 and succeeds.
    advance(&mut feed, |p| source.next(p.page)).await.unwrap();
    assert_eq!(feed.len(), 4);
    assert_eq!(source.requested_pages(), vec![1, 2, 2]);
}

#[tokio::test]
async fn advance_is_a_noop_once_exhausted() {
    let source = ScriptedPages::new(vec![Ok((1, related_page(&["a"])))]);
    let mut feed = Feed::new(2);

    assert!(advance(&mut feed, |p| source.next(p.page)).await.unwrap());
    assert!(!advance(&mut feed, |p| source.next(p.page)).await.unwrap());
    assert_eq!(source.requested_pages(), vec![1]);
}

#[tokio::test]
async fn refresh_replaces_the_previous_filter_context() {
    let source = ScriptedPages::new(vec![
        Ok((3, related_page(&["a", "b"]))),
        Ok((3, related_page(&["c"]))),
        Ok((1, related_page(&["z"]))),
    ]);
    let mut feed = Feed::new(2);

    drain(&mut feed, |p| source.next(p.page)).await.unwrap();
    assert_eq!(feed.len(), 3);

    // Filter changed; the list restarts from page 1.
    refresh(&mut feed, |p| source.next(p.page)).await.unwrap();
    let names: Vec<_> = feed.items().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(names, vec!["z"]);
    assert_eq!(feed.total(), 1);
    assert_eq!(source.requested_pages(), vec![1, 2, 1]);
}
