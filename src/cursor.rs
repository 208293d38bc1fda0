use std::fmt::{self, Debug};
use std::iter;

use crate::util::Outcome;

pub(crate) type Enumeration = Box<dyn Iterator<Item = Outcome> + Send>;

/// Position inside the enumeration of every outcome of `draws` draws.
pub(crate) struct Cursor {
    draws: usize,
    outcomes: Enumeration,
}

impl Cursor {
    /// Pulls the next outcome of `k` draws out of `slot`, reopening it with
    /// `open` when it is closed or was opened for another `k`. The slot is
    /// closed again once the enumeration runs dry.
    pub(crate) fn advance<F>(slot: &mut Option<Cursor>, k: usize, open: F) -> Option<Outcome>
    where
        F: FnOnce() -> Enumeration,
    {
        if slot.as_ref().map_or(true, |c| c.draws != k) {
            *slot = Some(Cursor {
                draws: k,
                outcomes: open(),
            });
        }
        let next = slot.as_mut().and_then(|c| c.outcomes.next());
        if next.is_none() {
            *slot = None;
        }
        next
    }
}

impl Debug for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor").field("draws", &self.draws).finish()
    }
}

/// The single outcome of drawing nothing.
pub(crate) fn nothing() -> Enumeration {
    Box::new(iter::once(Outcome::new()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers() -> Enumeration {
        Box::new((0..3u32).map(|x| vec![x]))
    }

    #[test]
    fn reopens_after_exhaustion() {
        let mut slot = None;
        let drawn = (0..4)
            .map(|_| Cursor::advance(&mut slot, 1, numbers))
            .collect::<Vec<_>>();
        assert_eq!(drawn, vec![Some(vec![0]), Some(vec![1]), Some(vec![2]), None]);
        assert!(slot.is_none());
        assert_eq!(Cursor::advance(&mut slot, 1, numbers), Some(vec![0]));
    }

    #[test]
    fn reopens_when_draws_change() {
        let mut slot = None;
        Cursor::advance(&mut slot, 1, numbers);
        Cursor::advance(&mut slot, 1, numbers);
        assert_eq!(Cursor::advance(&mut slot, 2, numbers), Some(vec![0]));
        assert_eq!(slot.as_ref().map(|c| c.draws), Some(2));
    }

    #[test]
    fn nothing_is_drawn_once() {
        let mut slot = None;
        assert_eq!(Cursor::advance(&mut slot, 0, nothing), Some(vec![]));
        assert_eq!(Cursor::advance(&mut slot, 0, nothing), None);
    }
}
