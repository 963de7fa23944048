//! Pager - lazily materialized page-by-page navigation bound to an Ankurah signal
//!
//! The [`Pager`] sits between a host's native paging container and a cursor
//! binding owned by the host. The container asks it for neighbor pages while the
//! user drags and tells it when a transition finishes; the pager writes completed
//! swipes back into the binding, and animates the container to whatever the host
//! writes into the binding itself.

pub mod builder;
pub mod resolver;
pub mod window;

use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;

use ankurah_signals::{Mut, Peek, Read, Subscribe};

pub use ankurah_signals;
pub use builder::{BuildError, PagerBuilder};
pub use resolver::{DirectionClassifier, PageResolver};
pub use window::{PageWindow, Side};

// ============================================================================
// Core Types
// ============================================================================

/// Values that identify which page is showing.
///
/// Equatable and usable as a lookup key; beyond that the pager treats them as opaque.
pub trait Cursor: Clone + Eq + Hash + Debug + Send + Sync + 'static {}

impl<T> Cursor for T where T: Clone + Eq + Hash + Debug + Send + Sync + 'static {}

/// Values the host renders as page content
pub trait Page: Send + Sync + 'static {}

impl<T> Page for T where T: Send + Sync + 'static {}

/// Animation direction of a page transition. Carries no meaning beyond the visual.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavigationDirection {
    /// Moving from left to right
    Forward,
    /// Moving from right to left
    Reverse,
}

/// A page paired with the cursor it was built for.
///
/// Created fresh for every navigation and dropped once it leaves the screen.
/// The cursor is `None` only when the resolver produced a neighbor page without
/// a neighbor cursor.
#[derive(Clone, Debug)]
pub struct PageCarrier<C, P> {
    cursor: Option<C>,
    page: P,
}

impl<C, P> PageCarrier<C, P> {
    pub fn new(cursor: Option<C>, page: P) -> Self {
        Self { cursor, page }
    }

    pub fn cursor(&self) -> Option<&C> {
        self.cursor.as_ref()
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn into_page(self) -> P {
        self.page
    }
}

/// Coordinator state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionState {
    /// One page on screen, no gesture in progress
    Idle,
    /// The container has prepared a neighbor for a possible swipe
    Dragging,
}

// ============================================================================
// Host Seams
// ============================================================================

/// The host's native paging container, as seen by the pager.
///
/// Gesture recognition, animation and page lifecycle stay on the host side.
pub trait PageContainer<C, P>: Send + Sync {
    /// Cursor of the carrier currently on screen, `None` if nothing tagged is showing
    fn visible_cursor(&self) -> Option<C>;

    /// Programmatically replace the visible page
    fn set_page(&self, page: PageCarrier<C, P>, direction: NavigationDirection, animated: bool);
}

/// Answers the container's requests for pages adjacent to the visible one
pub trait NeighborProvider<C, P> {
    /// Page before `visible`, or `None` to block a backward swipe
    fn page_before(&self, visible: &PageCarrier<C, P>) -> Option<PageCarrier<C, P>>;

    /// Page after `visible`, or `None` to block a forward swipe
    fn page_after(&self, visible: &PageCarrier<C, P>) -> Option<PageCarrier<C, P>>;
}

/// Receives the container's transition notifications
pub trait TransitionObserver {
    /// Called once a swipe animation ends; `completed` is false if the user released
    /// before the threshold and the original page stayed on screen
    fn did_finish_transition(&self, completed: bool);
}

// ============================================================================
// Pager
// ============================================================================

struct Coordinator<C: Cursor, P: Page> {
    cursor: Mut<C>,
    resolver: PageResolver<C, P>,
    direction: DirectionClassifier<C>,
    container: Arc<dyn PageContainer<C, P>>,
    state: Mut<TransitionState>,
}

impl<C: Cursor, P: Page> Coordinator<C, P> {
    fn neighbor(&self, visible: &PageCarrier<C, P>, side: Side) -> Option<PageCarrier<C, P>> {
        let Some(cursor) = visible.cursor() else {
            tracing::debug!("{:?} neighbor requested for untagged page", side);
            return None;
        };
        let carrier = window::neighbor(&self.resolver, cursor, side);
        tracing::debug!("{:?} neighbor of {:?}: {:?}", side, cursor, carrier.as_ref().map(|c| c.cursor()));
        if carrier.is_some() {
            self.state.set(TransitionState::Dragging);
        }
        carrier
    }

    fn finish(&self, completed: bool) {
        self.state.set(TransitionState::Idle);
        if !completed {
            tracing::debug!("transition cancelled");
            return;
        }
        let Some(visible) = self.container.visible_cursor() else {
            tracing::debug!("transition completed onto untagged page");
            return;
        };
        if self.cursor.peek() == visible {
            tracing::trace!("binding already at {:?}", visible);
            return;
        }
        tracing::debug!("transition completed, writing {:?}", visible);
        // The notification for this write finds `visible == cursor` and stops there
        self.cursor.set(visible);
    }

    fn reconcile(&self, cursor: C) {
        let Some(visible) = self.container.visible_cursor() else {
            tracing::trace!("no tagged page on screen, skipping reconcile to {:?}", cursor);
            return;
        };
        if visible == cursor {
            tracing::trace!("visible page already at {:?}", cursor);
            return;
        }
        let direction = self.direction.classify(&visible, &cursor);
        tracing::debug!("binding moved {:?} -> {:?}, transitioning {:?}", visible, cursor, direction);
        let page = self.resolver.content(&cursor);
        self.state.set(TransitionState::Idle);
        self.container.set_page(PageCarrier::new(Some(cursor), page), direction, true);
    }
}

/// Lazy pager coordinator bound to a host-owned cursor signal
pub struct Pager<C: Cursor, P: Page> {
    inner: Arc<Coordinator<C, P>>,
    _subscription: ankurah_signals::SubscriptionGuard,
}

impl<C: Cursor, P: Page> Pager<C, P> {
    /// Create a new pager
    ///
    /// # Arguments
    /// * `cursor` - Host-owned binding for the cursor on screen
    /// * `resolver` - Page and neighbor callbacks
    /// * `direction` - Animation direction for programmatic transitions
    /// * `container` - The host's paging container
    pub fn new(
        cursor: Mut<C>,
        resolver: PageResolver<C, P>,
        direction: DirectionClassifier<C>,
        container: Arc<dyn PageContainer<C, P>>,
    ) -> Self {
        let inner = Arc::new(Coordinator {
            cursor,
            resolver,
            direction,
            container,
            state: Mut::new(TransitionState::Idle),
        });

        // Writes to the binding reconcile the container. A host may write again from
        // inside a notification, so reconcile to the latest value, not the notified one.
        let inner_clone = inner.clone();
        let subscription = inner.cursor.read().subscribe(move |_: C| {
            inner_clone.reconcile(inner_clone.cursor.peek());
        });

        Self { inner, _subscription: subscription }
    }

    pub fn builder() -> PagerBuilder<C, P> {
        PagerBuilder::new()
    }

    /// Install the page for the current binding value without animation.
    ///
    /// Must be called once the container is ready to show pages.
    pub fn mount(&self) {
        let cursor = self.inner.cursor.peek();
        tracing::debug!("mounting at {:?}", cursor);
        let page = self.inner.resolver.content(&cursor);
        self.inner
            .container
            .set_page(PageCarrier::new(Some(cursor), page), NavigationDirection::Forward, false);
    }

    /// Bring the container in line with the binding's current value.
    ///
    /// Binding writes already trigger this; hosts with their own update pass may call it too.
    pub fn reconcile(&self) {
        self.inner.reconcile(self.inner.cursor.peek());
    }

    // Accessors
    pub fn cursor(&self) -> Read<C> {
        self.inner.cursor.read()
    }

    pub fn state(&self) -> TransitionState {
        self.inner.state.peek()
    }

    pub fn state_signal(&self) -> Read<TransitionState> {
        self.inner.state.read()
    }

    pub fn resolver(&self) -> &PageResolver<C, P> {
        &self.inner.resolver
    }

    /// Previous/current/next pages around the binding's current value
    pub fn window(&self) -> PageWindow<C, P> {
        PageWindow::resolve(&self.inner.resolver, &self.inner.cursor.peek())
    }
}

impl<C: Cursor, P: Page> NeighborProvider<C, P> for Pager<C, P> {
    fn page_before(&self, visible: &PageCarrier<C, P>) -> Option<PageCarrier<C, P>> {
        self.inner.neighbor(visible, Side::Previous)
    }

    fn page_after(&self, visible: &PageCarrier<C, P>) -> Option<PageCarrier<C, P>> {
        self.inner.neighbor(visible, Side::Next)
    }
}

impl<C: Cursor, P: Page> TransitionObserver for Pager<C, P> {
    fn did_finish_transition(&self, completed: bool) {
        self.inner.finish(completed)
    }
}
