//! Terminal stand-in for a native paging container

use std::io::Write;
use std::sync::Mutex;

use ankurah_pager::{NavigationDirection, NeighborProvider, PageCarrier, PageContainer, Pager, Side, TransitionObserver};

/// Shows one page at a time by printing it
#[derive(Default)]
pub struct TerminalContainer {
    visible: Mutex<Option<PageCarrier<i64, String>>>,
}

impl TerminalContainer {
    /// Play a swipe gesture toward `side`. Returns false if there was no page to swipe to.
    pub fn swipe(&self, pager: &Pager<i64, String>, side: Side, completed: bool) -> bool {
        let Some(visible) = self.visible.lock().ok().and_then(|v| v.clone()) else {
            return false;
        };
        let neighbor = match side {
            Side::Previous => pager.page_before(&visible),
            Side::Next => pager.page_after(&visible),
        };
        let Some(neighbor) = neighbor else {
            return false;
        };
        if completed {
            self.show(neighbor, side_to_direction(side), true);
        }
        pager.did_finish_transition(completed);
        true
    }

    fn show(&self, page: PageCarrier<i64, String>, direction: NavigationDirection, animated: bool) {
        let arrow = match (direction, animated) {
            (_, false) => "  ",
            (NavigationDirection::Forward, true) => "->",
            (NavigationDirection::Reverse, true) => "<-",
        };
        let mut out = std::io::stdout().lock();
        if let Err(e) = writeln!(out, "{arrow} [ {} ]", page.page()) {
            tracing::warn!("failed to draw page: {}", e);
        }
        if let Ok(mut visible) = self.visible.lock() {
            *visible = Some(page);
        }
    }
}

fn side_to_direction(side: Side) -> NavigationDirection {
    match side {
        Side::Previous => NavigationDirection::Reverse,
        Side::Next => NavigationDirection::Forward,
    }
}

impl PageContainer<i64, String> for TerminalContainer {
    fn visible_cursor(&self) -> Option<i64> {
        self.visible.lock().ok()?.as_ref().and_then(|carrier| carrier.cursor().copied())
    }

    fn set_page(&self, page: PageCarrier<i64, String>, direction: NavigationDirection, animated: bool) {
        self.show(page, direction, animated);
    }
}
