//! Host-supplied page and direction callbacks
//!
//! Nothing here caches. Every call goes straight to the host closure, so the
//! closures are expected to be deterministic and free of side effects.

use std::sync::Arc;

use crate::NavigationDirection;

type ContentFn<C, P> = Arc<dyn Fn(&C) -> P + Send + Sync>;
type NeighborFn<C, P> = Arc<dyn Fn(&C) -> Option<P> + Send + Sync>;
type CursorFn<C> = Arc<dyn Fn(&C) -> Option<C> + Send + Sync>;
type ClassifyFn<C> = Arc<dyn Fn(&C, &C) -> NavigationDirection + Send + Sync>;

/// Produces pages and neighbor cursors for a cursor value.
///
/// `previous`/`previous_cursor` and `next`/`next_cursor` are expected to agree:
/// whenever a neighbor page exists its cursor exists too. This is not checked
/// at construction; see [`crate::window::check_consistency`].
pub struct PageResolver<C, P> {
    content: ContentFn<C, P>,
    previous: NeighborFn<C, P>,
    next: NeighborFn<C, P>,
    previous_cursor: CursorFn<C>,
    next_cursor: CursorFn<C>,
}

impl<C, P> PageResolver<C, P> {
    /// # Arguments
    /// * `content` - Page for the cursor on screen
    /// * `previous` - Page before the cursor, `None` at the start of the sequence
    /// * `next` - Page after the cursor, `None` at the end of the sequence
    /// * `previous_cursor` - Cursor before the cursor
    /// * `next_cursor` - Cursor after the cursor
    pub fn new(
        content: impl Fn(&C) -> P + Send + Sync + 'static,
        previous: impl Fn(&C) -> Option<P> + Send + Sync + 'static,
        next: impl Fn(&C) -> Option<P> + Send + Sync + 'static,
        previous_cursor: impl Fn(&C) -> Option<C> + Send + Sync + 'static,
        next_cursor: impl Fn(&C) -> Option<C> + Send + Sync + 'static,
    ) -> Self {
        Self {
            content: Arc::new(content),
            previous: Arc::new(previous),
            next: Arc::new(next),
            previous_cursor: Arc::new(previous_cursor),
            next_cursor: Arc::new(next_cursor),
        }
    }

    pub fn content(&self, cursor: &C) -> P {
        (self.content)(cursor)
    }

    pub fn previous(&self, cursor: &C) -> Option<P> {
        (self.previous)(cursor)
    }

    pub fn next(&self, cursor: &C) -> Option<P> {
        (self.next)(cursor)
    }

    pub fn previous_cursor(&self, cursor: &C) -> Option<C> {
        (self.previous_cursor)(cursor)
    }

    pub fn next_cursor(&self, cursor: &C) -> Option<C> {
        (self.next_cursor)(cursor)
    }
}

impl<C, P> Clone for PageResolver<C, P> {
    fn clone(&self) -> Self {
        Self {
            content: self.content.clone(),
            previous: self.previous.clone(),
            next: self.next.clone(),
            previous_cursor: self.previous_cursor.clone(),
            next_cursor: self.next_cursor.clone(),
        }
    }
}

/// Decides which way a programmatic transition from one cursor to another animates.
///
/// The pager never orders cursors on its own; the host decides.
pub struct DirectionClassifier<C> {
    classify: ClassifyFn<C>,
}

impl<C> DirectionClassifier<C> {
    pub fn new(classify: impl Fn(&C, &C) -> NavigationDirection + Send + Sync + 'static) -> Self {
        Self { classify: Arc::new(classify) }
    }

    /// Direction for moving from `old` to `new`
    pub fn classify(&self, old: &C, new: &C) -> NavigationDirection {
        (self.classify)(old, new)
    }
}

impl<C: Ord> DirectionClassifier<C> {
    /// Forward when `old < new`, reverse otherwise
    pub fn by_order() -> Self {
        Self::new(|old: &C, new: &C| if old < new { NavigationDirection::Forward } else { NavigationDirection::Reverse })
    }
}

impl<C> Clone for DirectionClassifier<C> {
    fn clone(&self) -> Self {
        Self { classify: self.classify.clone() }
    }
}
