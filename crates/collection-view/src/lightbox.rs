//! Lightbox / Carousel State Machine
//!
//! One modal viewer shared by every listing page. The selection is kept by
//! id so it survives the filtered subset being recomputed; navigation wraps
//! around the subset the caller passes in.

use crate::entity::Listable;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lightbox<Id> {
    Closed,
    Open {
        selected: Id,
        /// Last known position in the subset, preferred when the subset
        /// holds the same id more than once
        hint: Option<usize>,
    },
}

impl<Id> Default for Lightbox<Id> {
    fn default() -> Self {
        Lightbox::Closed
    }
}

impl<Id: Clone + Eq + std::fmt::Debug> Lightbox<Id> {
    pub fn new() -> Self {
        Lightbox::Closed
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Lightbox::Open { .. })
    }

    pub fn selected_id(&self) -> Option<&Id> {
        match self {
            Lightbox::Open { selected, .. } => Some(selected),
            Lightbox::Closed => None,
        }
    }

    /// Open on an item
    pub fn open<T: Listable<Id = Id>>(&mut self, item: &T) {
        self.open_id(item.id());
    }

    /// Open on an id
    pub fn open_id(&mut self, id: Id) {
        *self = Lightbox::Open { selected: id, hint: None };
    }

    /// Open on the item at `index` of `subset`; out of range leaves the state as is
    pub fn open_at<T: Listable<Id = Id>>(&mut self, subset: &[T], index: usize) {
        if let Some(item) = subset.get(index) {
            *self = Lightbox::Open { selected: item.id(), hint: Some(index) };
        }
    }

    pub fn close(&mut self) {
        *self = Lightbox::Closed;
    }

    /// Position of the selected item in `subset`
    pub fn position<T: Listable<Id = Id>>(&self, subset: &[T]) -> Option<usize> {
        let Lightbox::Open { selected, hint } = self else {
            return None;
        };

        if let Some(i) = *hint {
            if subset.get(i).is_some_and(|item| &item.id() == selected) {
                return Some(i);
            }
        }
        subset.iter().position(|item| &item.id() == selected)
    }

    /// The selected item resolved against `subset`
    pub fn current<'a, T: Listable<Id = Id>>(&self, subset: &'a [T]) -> Option<&'a T> {
        self.position(subset).map(|i| &subset[i])
    }

    /// Advance one item, wrapping to the start
    pub fn next<T: Listable<Id = Id>>(&mut self, subset: &[T]) {
        self.step(subset, |i, len| (i + 1) % len);
    }

    /// Step back one item, wrapping to the end
    pub fn previous<T: Listable<Id = Id>>(&mut self, subset: &[T]) {
        self.step(subset, |i, len| (i + len - 1) % len);
    }

    fn step<T, F>(&mut self, subset: &[T], advance: F)
    where
        T: Listable<Id = Id>,
        F: Fn(usize, usize) -> usize,
    {
        if !self.is_open() {
            return;
        }
        let Some(i) = self.position(subset) else {
            tracing::debug!("[LIGHTBOX] {:?} not in current subset, ignoring navigation", self.selected_id());
            return;
        };

        let target = advance(i, subset.len());
        *self = Lightbox::Open { selected: subset[target].id(), hint: Some(target) };
    }
}
