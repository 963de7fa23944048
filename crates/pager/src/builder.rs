//! Step-by-step construction of a [`Pager`]
//!
//! Every parameter is required; there are no defaults.

use std::sync::Arc;

use ankurah_signals::Mut;

use crate::resolver::{DirectionClassifier, PageResolver};
use crate::{Cursor, NavigationDirection, Page, PageContainer, Pager};

type ContentFn<C, P> = Box<dyn Fn(&C) -> P + Send + Sync>;
type NeighborFn<C, P> = Box<dyn Fn(&C) -> Option<P> + Send + Sync>;
type CursorFn<C> = Box<dyn Fn(&C) -> Option<C> + Send + Sync>;

/// Error returned by [`PagerBuilder::build`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("missing required pager parameter `{0}`")]
    MissingParameter(&'static str),
}

pub struct PagerBuilder<C: Cursor, P: Page> {
    cursor: Option<Mut<C>>,
    content: Option<ContentFn<C, P>>,
    previous: Option<NeighborFn<C, P>>,
    next: Option<NeighborFn<C, P>>,
    previous_cursor: Option<CursorFn<C>>,
    next_cursor: Option<CursorFn<C>>,
    direction: Option<DirectionClassifier<C>>,
    container: Option<Arc<dyn PageContainer<C, P>>>,
}

impl<C: Cursor, P: Page> Default for PagerBuilder<C, P> {
    fn default() -> Self {
        Self {
            cursor: None,
            content: None,
            previous: None,
            next: None,
            previous_cursor: None,
            next_cursor: None,
            direction: None,
            container: None,
        }
    }
}

impl<C: Cursor, P: Page> PagerBuilder<C, P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binding for the cursor on screen
    pub fn cursor(mut self, cursor: Mut<C>) -> Self {
        self.cursor = Some(cursor);
        self
    }

    pub fn content(mut self, f: impl Fn(&C) -> P + Send + Sync + 'static) -> Self {
        self.content = Some(Box::new(f));
        self
    }

    pub fn previous(mut self, f: impl Fn(&C) -> Option<P> + Send + Sync + 'static) -> Self {
        self.previous = Some(Box::new(f));
        self
    }

    pub fn next(mut self, f: impl Fn(&C) -> Option<P> + Send + Sync + 'static) -> Self {
        self.next = Some(Box::new(f));
        self
    }

    pub fn previous_cursor(mut self, f: impl Fn(&C) -> Option<C> + Send + Sync + 'static) -> Self {
        self.previous_cursor = Some(Box::new(f));
        self
    }

    pub fn next_cursor(mut self, f: impl Fn(&C) -> Option<C> + Send + Sync + 'static) -> Self {
        self.next_cursor = Some(Box::new(f));
        self
    }

    /// Direction to animate when the binding moves from the first cursor to the second
    pub fn direction(mut self, f: impl Fn(&C, &C) -> NavigationDirection + Send + Sync + 'static) -> Self {
        self.direction = Some(DirectionClassifier::new(f));
        self
    }

    pub fn classifier(mut self, classifier: DirectionClassifier<C>) -> Self {
        self.direction = Some(classifier);
        self
    }

    pub fn container(mut self, container: Arc<dyn PageContainer<C, P>>) -> Self {
        self.container = Some(container);
        self
    }

    /// Build the pager, failing on the first missing parameter
    pub fn build(self) -> Result<Pager<C, P>, BuildError> {
        let cursor = self.cursor.ok_or(BuildError::MissingParameter("cursor"))?;
        let content = self.content.ok_or(BuildError::MissingParameter("content"))?;
        let previous = self.previous.ok_or(BuildError::MissingParameter("previous"))?;
        let next = self.next.ok_or(BuildError::MissingParameter("next"))?;
        let previous_cursor = self.previous_cursor.ok_or(BuildError::MissingParameter("previous_cursor"))?;
        let next_cursor = self.next_cursor.ok_or(BuildError::MissingParameter("next_cursor"))?;
        let direction = self.direction.ok_or(BuildError::MissingParameter("direction"))?;
        let container = self.container.ok_or(BuildError::MissingParameter("container"))?;

        let resolver = PageResolver::new(content, previous, next, previous_cursor, next_cursor);
        Ok(Pager::new(cursor, resolver, direction, container))
    }
}
