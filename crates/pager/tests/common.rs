//! Test utilities for ankurah-pager integration tests
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use tracing::Level;

pub use ankurah_pager::ankurah_signals::{Mut, Peek, Subscribe};
pub use ankurah_pager::{
    DirectionClassifier, NavigationDirection, NeighborProvider, PageCarrier, PageContainer,
    PageResolver, Pager, TransitionObserver, TransitionState,
};

// Initialize tracing for tests
#[ctor::ctor]
fn init_tracing() {
    let level = std::env::var("LOG_LEVEL")
        .ok()
        .and_then(|level| level.parse::<Level>().ok())
        .unwrap_or(Level::INFO);
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_test_writer()
        .try_init();
}

// ============================================================================
// MockContainer
// ============================================================================

/// A programmatic transition the pager asked the container to perform
#[derive(Clone, Debug, PartialEq)]
pub struct SetPage {
    pub cursor: Option<i64>,
    pub page: String,
    pub direction: NavigationDirection,
    pub animated: bool,
}

/// Simulates a native paging container.
///
/// Holds the carrier on screen and records every `set_page` command. Gestures are
/// driven through [`MockContainer::swipe`], which plays the container's side of
/// the protocol: ask for a neighbor, show it if the swipe completes, then report.
#[derive(Default)]
pub struct MockContainer {
    visible: Mutex<Option<PageCarrier<i64, String>>>,
    commands: Mutex<Vec<SetPage>>,
}

impl MockContainer {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn visible(&self) -> Option<PageCarrier<i64, String>> {
        self.visible.lock().unwrap().clone()
    }

    pub fn visible_page(&self) -> Option<String> {
        self.visible().map(|carrier| carrier.into_page())
    }

    pub fn commands(&self) -> Vec<SetPage> {
        self.commands.lock().unwrap().clone()
    }

    /// Swipe one page toward `side`. Returns false if the pager offered no neighbor.
    pub fn swipe(&self, pager: &Pager<i64, String>, side: ankurah_pager::Side, completed: bool) -> bool {
        let Some(visible) = self.visible() else {
            return false;
        };
        let neighbor = match side {
            ankurah_pager::Side::Previous => pager.page_before(&visible),
            ankurah_pager::Side::Next => pager.page_after(&visible),
        };
        let Some(neighbor) = neighbor else {
            return false;
        };
        assert_eq!(pager.state(), TransitionState::Dragging, "neighbor prepared without dragging");
        if completed {
            *self.visible.lock().unwrap() = Some(neighbor);
        }
        pager.did_finish_transition(completed);
        true
    }

    pub fn forward(&self, pager: &Pager<i64, String>) -> bool {
        self.swipe(pager, ankurah_pager::Side::Next, true)
    }

    pub fn backward(&self, pager: &Pager<i64, String>) -> bool {
        self.swipe(pager, ankurah_pager::Side::Previous, true)
    }
}

impl PageContainer<i64, String> for MockContainer {
    fn visible_cursor(&self) -> Option<i64> {
        self.visible.lock().unwrap().as_ref().and_then(|carrier| carrier.cursor().copied())
    }

    fn set_page(&self, page: PageCarrier<i64, String>, direction: NavigationDirection, animated: bool) {
        self.commands.lock().unwrap().push(SetPage {
            cursor: page.cursor().copied(),
            page: page.page().clone(),
            direction,
            animated,
        });
        *self.visible.lock().unwrap() = Some(page);
    }
}

// ============================================================================
// Harness
// ============================================================================

/// A mounted pager over integers, with every binding value it observes recorded
pub struct Harness {
    pub binding: Mut<i64>,
    pub container: Arc<MockContainer>,
    pub pager: Pager<i64, String>,
    writes: Arc<Mutex<Vec<i64>>>,
    _guard: ankurah_pager::ankurah_signals::SubscriptionGuard,
}

impl Harness {
    /// Unbounded integers: `previous(c) = c-1`, `next(c) = c+1`, ordered by value
    pub fn integers(start: i64) -> Self {
        Self::with_resolver(start, integers())
    }

    /// Integers within `min..=max`
    pub fn bounded(start: i64, min: i64, max: i64) -> Self {
        Self::with_resolver(start, bounded(min, max))
    }

    pub fn with_resolver(start: i64, resolver: PageResolver<i64, String>) -> Self {
        let binding = Mut::new(start);
        let container = MockContainer::new();
        let pager = Pager::new(
            binding.clone(),
            resolver,
            DirectionClassifier::by_order(),
            container.clone(),
        );
        pager.mount();

        let writes = Arc::new(Mutex::new(Vec::new()));
        let writes_clone = writes.clone();
        let guard = binding.read().subscribe(move |cursor: i64| {
            writes_clone.lock().unwrap().push(cursor);
        });
        writes.lock().unwrap().clear();

        Self { binding, container, pager, writes, _guard: guard }
    }

    /// Binding values observed since the harness was mounted
    pub fn writes(&self) -> Vec<i64> {
        self.writes.lock().unwrap().clone()
    }

    pub fn bound(&self) -> i64 {
        self.binding.peek()
    }

    pub fn visible(&self) -> Option<i64> {
        self.container.visible_cursor()
    }

    /// Host sets the binding, followed by the host's own update pass
    pub fn set_externally(&self, cursor: i64) {
        self.binding.set(cursor);
        self.pager.reconcile();
    }
}

pub fn integers() -> PageResolver<i64, String> {
    PageResolver::new(
        |c: &i64| c.to_string(),
        |c: &i64| Some((c - 1).to_string()),
        |c: &i64| Some((c + 1).to_string()),
        |c: &i64| Some(c - 1),
        |c: &i64| Some(c + 1),
    )
}

pub fn bounded(min: i64, max: i64) -> PageResolver<i64, String> {
    PageResolver::new(
        |c: &i64| c.to_string(),
        move |c: &i64| (*c > min).then(|| (c - 1).to_string()),
        move |c: &i64| (*c < max).then(|| (c + 1).to_string()),
        move |c: &i64| (*c > min).then(|| c - 1),
        move |c: &i64| (*c < max).then(|| c + 1),
    )
}

/// Mount command every harness starts with
pub fn mounted_at(cursor: i64) -> SetPage {
    SetPage {
        cursor: Some(cursor),
        page: cursor.to_string(),
        direction: NavigationDirection::Forward,
        animated: false,
    }
}
