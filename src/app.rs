//! Application state.
//!
//! [`App`] is the single owner of the post list.  Fetch tasks never touch it
//! directly; their [`FetchMsg`]s are applied here on the UI thread.

use chrono::{DateTime, Utc};
use ratatui::widgets::ListState;
use tracing::debug;

use crate::fetch::FetchMsg;
use crate::source::Post;

/// Where the most recent fetch stands.
///
/// Every state renders differently, so "nothing fetched yet", "fetch
/// failed" and "fetched an empty page" can be told apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchStatus {
    NotFetched,
    Loading,
    Loaded {
        count: usize,
        fetched_at: DateTime<Utc>,
    },
    Failed {
        reason: String,
    },
}

/// Which screen is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    List,
    /// The post that was selected when the detail view was opened.
    Detail(Post),
}

pub struct App {
    /// Posts from the last successful fetch, in API order.
    pub posts: Vec<Post>,
    pub status: FetchStatus,
    /// List selection state for scrolling.
    pub list_state: ListState,
    pub screen: Screen,
    /// Whether the user has requested to quit.
    pub quit: bool,
    /// Set by the `r` key; the main loop starts a fetch and clears it.
    pub refresh_requested: bool,
    /// Fetches started but not yet applied.
    pub in_flight: usize,
    /// Link the main loop should hand to the system browser.
    pub open_requested: Option<String>,
    /// One-off message for the status bar, cleared by the next fetch.
    pub notice: Option<String>,
}

impl App {
    pub fn new() -> Self {
        Self {
            posts: Vec::new(),
            status: FetchStatus::NotFetched,
            list_state: ListState::default(),
            screen: Screen::List,
            quit: false,
            refresh_requested: false,
            in_flight: 0,
            open_requested: None,
            notice: None,
        }
    }

    /// Mark a fetch as in flight.  Posts already on screen stay visible.
    pub fn begin_fetch(&mut self) {
        self.in_flight += 1;
        self.notice = None;
        self.status = FetchStatus::Loading;
    }

    /// Apply the outcome of a fetch.
    ///
    /// A successful fetch replaces the post list wholesale; nothing is
    /// merged with what was there before.  A failed fetch leaves the list as
    /// it was and only records the error.
    ///
    /// The status stays [`FetchStatus::Loading`] until every started fetch
    /// has reported back; it then reflects the last one applied.
    pub fn apply(&mut self, msg: FetchMsg) {
        self.in_flight = self.in_flight.saturating_sub(1);

        let outcome = match msg {
            FetchMsg::Loaded { posts, fetched_at } => {
                debug!(count = posts.len(), "replacing post list");
                let count = posts.len();
                self.posts = posts;
                self.list_state
                    .select(if self.posts.is_empty() { None } else { Some(0) });
                FetchStatus::Loaded { count, fetched_at }
            }
            FetchMsg::Failed(e) => {
                debug!(error = %e, kept = self.posts.len(), "keeping previous post list");
                FetchStatus::Failed {
                    reason: e.to_string(),
                }
            }
        };

        self.status = if self.in_flight > 0 {
            FetchStatus::Loading
        } else {
            outcome
        };
    }

    pub fn selected_post(&self) -> Option<&Post> {
        self.list_state.selected().and_then(|i| self.posts.get(i))
    }

    // -- screens -------------------------------------------------------------

    /// Hand the selected post to the detail view.  No-op with nothing selected.
    pub fn open_detail(&mut self) {
        if let Some(post) = self.selected_post() {
            self.screen = Screen::Detail(post.clone());
        }
    }

    pub fn close_detail(&mut self) {
        self.screen = Screen::List;
        self.notice = None;
    }

    /// Ask for the detail post's link to be opened in the system browser.
    /// A post without a link only gets a notice.
    pub fn request_open(&mut self) {
        let Screen::Detail(post) = &self.screen else {
            return;
        };
        match &post.url {
            Some(url) => {
                self.open_requested = Some(url.clone());
                self.notice = None;
            }
            None => self.notice = Some("No link to open".into()),
        }
    }

    pub fn request_refresh(&mut self) {
        self.refresh_requested = true;
    }

    // -- navigation ----------------------------------------------------------

    pub fn select_next(&mut self) {
        if self.posts.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1).min(self.posts.len() - 1),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn select_previous(&mut self) {
        if self.posts.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn select_first(&mut self) {
        if !self.posts.is_empty() {
            self.list_state.select(Some(0));
        }
    }

    pub fn select_last(&mut self) {
        if !self.posts.is_empty() {
            self.list_state.select(Some(self.posts.len() - 1));
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::source::FetchError;
    use reqwest::StatusCode;

    pub(crate) fn make_post(id: &str, title: &str, url: Option<&str>) -> Post {
        Post {
            id: id.to_string(),
            score: 10,
            title: title.to_string(),
            url: url.map(String::from),
        }
    }

    pub(crate) fn sample_posts() -> Vec<Post> {
        vec![
            make_post("3", "Third", Some("https://c.com")),
            make_post("1", "First", None),
            make_post("2", "Second", Some("https://b.com")),
        ]
    }

    pub(crate) fn loaded(posts: Vec<Post>) -> FetchMsg {
        FetchMsg::Loaded {
            posts,
            fetched_at: Utc::now(),
        }
    }

    fn failed() -> FetchMsg {
        FetchMsg::Failed(FetchError::Status(StatusCode::SERVICE_UNAVAILABLE))
    }

    // -- construction --------------------------------------------------------

    #[test]
    fn new_app_starts_empty() {
        let app = App::new();
        assert!(app.posts.is_empty());
        assert!(!app.quit);
        assert_eq!(app.status, FetchStatus::NotFetched);
        assert_eq!(app.screen, Screen::List);
        assert!(app.list_state.selected().is_none());
    }

    // -- fetch status --------------------------------------------------------

    #[test]
    fn begin_fetch_sets_loading() {
        let mut app = App::new();
        app.begin_fetch();
        assert_eq!(app.status, FetchStatus::Loading);
    }

    #[test]
    fn empty_result_is_distinct_from_not_fetched() {
        let mut app = App::new();
        app.begin_fetch();
        app.apply(loaded(vec![]));

        assert!(app.posts.is_empty());
        assert!(matches!(app.status, FetchStatus::Loaded { count: 0, .. }));
        assert_ne!(app.status, FetchStatus::NotFetched);
        assert!(app.list_state.selected().is_none());
    }

    #[test]
    fn failure_on_first_fetch_leaves_list_empty() {
        let mut app = App::new();
        app.begin_fetch();
        app.apply(failed());

        assert!(app.posts.is_empty());
        assert!(matches!(app.status, FetchStatus::Failed { ref reason } if reason.contains("503")));
    }

    // -- apply ---------------------------------------------------------------

    #[test]
    fn loaded_keeps_api_order() {
        let mut app = App::new();
        app.apply(loaded(sample_posts()));

        let ids: Vec<_> = app.posts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["3", "1", "2"]);
        assert_eq!(app.list_state.selected(), Some(0));
    }

    #[test]
    fn second_fetch_replaces_instead_of_merging() {
        let mut app = App::new();
        app.apply(loaded(sample_posts()));
        app.apply(loaded(vec![make_post("9", "Only", None)]));

        assert_eq!(app.posts, vec![make_post("9", "Only", None)]);
        assert!(matches!(app.status, FetchStatus::Loaded { count: 1, .. }));
    }

    #[test]
    fn same_ids_are_not_deduplicated_across_fetches() {
        let mut app = App::new();
        app.apply(loaded(vec![make_post("1", "Old title", None)]));
        app.apply(loaded(vec![make_post("1", "New title", None)]));

        assert_eq!(app.posts.len(), 1);
        assert_eq!(app.posts[0].title, "New title");
    }

    #[test]
    fn failure_keeps_stale_list() {
        let mut app = App::new();
        app.apply(loaded(sample_posts()));
        app.list_state.select(Some(2));
        app.apply(failed());

        assert_eq!(app.posts, sample_posts());
        assert_eq!(app.list_state.selected(), Some(2));
        assert!(matches!(app.status, FetchStatus::Failed { .. }));
    }

    #[test]
    fn last_completion_wins() {
        let mut app = App::new();
        app.begin_fetch();
        app.begin_fetch();
        app.apply(loaded(vec![make_post("a", "A", None)]));
        app.apply(loaded(vec![make_post("b", "B", None)]));

        assert_eq!(app.posts[0].id, "b");
    }

    #[test]
    fn overlapping_fetches_stay_loading_until_all_report() {
        let mut app = App::new();
        app.begin_fetch();
        app.begin_fetch();
        app.apply(loaded(vec![make_post("a", "A", None)]));

        assert_eq!(app.status, FetchStatus::Loading);
        assert_eq!(app.posts[0].id, "a", "posts are replaced underneath");

        app.apply(failed());
        assert!(matches!(app.status, FetchStatus::Failed { .. }));
        assert_eq!(app.posts[0].id, "a");
        assert_eq!(app.in_flight, 0);
    }

    #[test]
    fn replacement_resets_selection() {
        let mut app = App::new();
        app.apply(loaded(sample_posts()));
        app.select_last();
        app.apply(loaded(vec![make_post("x", "X", None)]));

        assert_eq!(app.list_state.selected(), Some(0));
    }

    // -- detail --------------------------------------------------------------

    #[test]
    fn open_detail_forwards_selected_post() {
        let mut app = App::new();
        app.apply(loaded(sample_posts()));
        app.select_last();
        app.open_detail();

        assert_eq!(app.screen, Screen::Detail(make_post("2", "Second", Some("https://b.com"))));
    }

    #[test]
    fn open_detail_with_absent_url() {
        let mut app = App::new();
        app.apply(loaded(sample_posts()));
        app.select_next();
        app.open_detail();

        match &app.screen {
            Screen::Detail(post) => assert!(post.url.is_none()),
            other => panic!("expected detail, got {other:?}"),
        }
    }

    #[test]
    fn open_detail_without_selection_is_noop() {
        let mut app = App::new();
        app.open_detail();
        assert_eq!(app.screen, Screen::List);
    }

    #[test]
    fn detail_survives_list_replacement() {
        let mut app = App::new();
        app.apply(loaded(sample_posts()));
        app.open_detail();
        app.apply(loaded(vec![]));

        assert!(matches!(app.screen, Screen::Detail(ref p) if p.id == "3"));
        app.close_detail();
        assert_eq!(app.screen, Screen::List);
    }

    #[test]
    fn request_open_queues_link() {
        let mut app = App::new();
        app.apply(loaded(sample_posts()));
        app.open_detail();
        app.request_open();

        assert_eq!(app.open_requested.as_deref(), Some("https://c.com"));
        assert!(app.notice.is_none());
    }

    #[test]
    fn request_open_without_link_sets_notice() {
        let mut app = App::new();
        app.apply(loaded(vec![make_post("1", "Ask HN", None)]));
        app.open_detail();
        app.request_open();

        assert!(app.open_requested.is_none());
        assert_eq!(app.notice.as_deref(), Some("No link to open"));
        assert!(matches!(app.screen, Screen::Detail(_)));
        app.close_detail();
        assert!(app.notice.is_none(), "notice belongs to the detail view");
    }

    #[test]
    fn request_open_on_list_is_noop() {
        let mut app = App::new();
        app.apply(loaded(sample_posts()));
        app.request_open();

        assert!(app.open_requested.is_none());
        assert!(app.notice.is_none());
    }

    // -- navigation ----------------------------------------------------------

    #[test]
    fn navigation_on_empty_is_noop() {
        let mut app = App::new();
        app.select_next();
        app.select_previous();
        app.select_first();
        app.select_last();
        assert!(app.list_state.selected().is_none());
    }

    #[test]
    fn select_next_advances_and_clamps() {
        let mut app = App::new();
        app.apply(loaded(sample_posts()));

        app.select_next();
        assert_eq!(app.list_state.selected(), Some(1));
        app.select_next();
        assert_eq!(app.list_state.selected(), Some(2));
        app.select_next();
        assert_eq!(app.list_state.selected(), Some(2));
    }

    #[test]
    fn select_previous_moves_up_and_clamps() {
        let mut app = App::new();
        app.apply(loaded(sample_posts()));

        app.select_last();
        app.select_previous();
        assert_eq!(app.list_state.selected(), Some(1));
        app.select_first();
        app.select_previous();
        assert_eq!(app.list_state.selected(), Some(0));
    }

    #[test]
    fn select_next_from_no_selection_starts_at_zero() {
        let mut app = App::new();
        app.posts = sample_posts();
        app.select_next();
        assert_eq!(app.list_state.selected(), Some(0));
    }
}
