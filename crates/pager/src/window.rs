//! Three-Slot Window Module
//!
//! Pure functions for resolving the previous/current/next window around a cursor.
//! Nothing is retained between calls; each call asks the resolver again.

use crate::resolver::PageResolver;
use crate::PageCarrier;

// ============================================================================
// Neighbor Resolution
// ============================================================================

/// Which neighbor of the visible page is being asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// One step backward in the sequence
    Previous,
    /// One step forward in the sequence
    Next,
}

/// Resolve the neighbor page on `side` of `cursor`.
///
/// Returns `None` when the resolver reports no page on that side. A page whose
/// cursor the resolver cannot name is still returned, untagged.
pub fn neighbor<C: std::fmt::Debug, P>(
    resolver: &PageResolver<C, P>,
    cursor: &C,
    side: Side,
) -> Option<PageCarrier<C, P>> {
    let page = match side {
        Side::Previous => resolver.previous(cursor),
        Side::Next => resolver.next(cursor),
    }?;
    let tag = match side {
        Side::Previous => resolver.previous_cursor(cursor),
        Side::Next => resolver.next_cursor(cursor),
    };
    if tag.is_none() {
        tracing::warn!("{:?} page of {:?} has no cursor; it will not update the binding", side, cursor);
    }
    Some(PageCarrier::new(tag, page))
}

// ============================================================================
// Consistency Check
// ============================================================================

/// Agreement between a neighbor page and its cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Consistency {
    /// Both present or both absent
    Consistent,
    /// A page exists but its cursor does not
    PageWithoutCursor,
    /// A cursor exists but its page does not
    CursorWithoutPage,
}

/// Check that the resolver's page and cursor callbacks agree for one side of `cursor`
pub fn check_consistency<C, P>(resolver: &PageResolver<C, P>, cursor: &C, side: Side) -> Consistency {
    let (has_page, has_cursor) = match side {
        Side::Previous => (resolver.previous(cursor).is_some(), resolver.previous_cursor(cursor).is_some()),
        Side::Next => (resolver.next(cursor).is_some(), resolver.next_cursor(cursor).is_some()),
    };
    match (has_page, has_cursor) {
        (true, false) => Consistency::PageWithoutCursor,
        (false, true) => Consistency::CursorWithoutPage,
        _ => Consistency::Consistent,
    }
}

// ============================================================================
// Window Snapshot
// ============================================================================

/// The previous/current/next pages around one cursor
#[derive(Debug, Clone)]
pub struct PageWindow<C, P> {
    pub previous: Option<PageCarrier<C, P>>,
    pub current: PageCarrier<C, P>,
    pub next: Option<PageCarrier<C, P>>,
}

impl<C: Clone + std::fmt::Debug, P> PageWindow<C, P> {
    /// Materialize all three slots for `cursor`
    pub fn resolve(resolver: &PageResolver<C, P>, cursor: &C) -> Self {
        Self {
            previous: neighbor(resolver, cursor, Side::Previous),
            current: PageCarrier::new(Some(cursor.clone()), resolver.content(cursor)),
            next: neighbor(resolver, cursor, Side::Next),
        }
    }
}

impl<C, P> PageWindow<C, P> {
    /// Number of pages present (1 to 3)
    pub fn len(&self) -> usize {
        1 + self.previous.is_some() as usize + self.next.is_some() as usize
    }

    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }

    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}
