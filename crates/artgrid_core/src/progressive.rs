use grid_logging::grid_debug;

use crate::{Artwork, SelectionStore};

/// "Select the first N rows" request that consumes rows as pages arrive.
///
/// Progress is counted here and never derived from the store, so manual
/// toggles made while a request is active do not disturb it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProgressiveSelection {
    #[default]
    Inactive,
    Active { target: usize, consumed: usize },
}

impl ProgressiveSelection {
    pub fn is_active(&self) -> bool {
        matches!(self, ProgressiveSelection::Active { .. })
    }

    /// `(consumed, target)` while a request is active.
    pub fn progress(&self) -> Option<(usize, usize)> {
        match *self {
            ProgressiveSelection::Active { target, consumed } => Some((consumed, target)),
            ProgressiveSelection::Inactive => None,
        }
    }

    /// Starts a new request, superseding any in-flight one.
    ///
    /// Clears the whole store on success. Returns `false` and leaves both
    /// controller and store untouched when `target` is zero.
    pub fn start(&mut self, target: usize, store: &mut SelectionStore) -> bool {
        if target == 0 {
            return false;
        }
        if let Some((consumed, previous)) = self.progress() {
            grid_debug!(
                "Progressive selection {}/{} superseded by new target {}",
                consumed,
                previous,
                target
            );
        }
        store.clear();
        *self = ProgressiveSelection::Active {
            target,
            consumed: 0,
        };
        grid_debug!("Progressive selection started: target={}", target);
        true
    }

    /// Consumes the leading records of a freshly loaded page.
    ///
    /// Must be called once per page arrival, not per render. Returns the
    /// number of records added to the store.
    pub fn on_page_loaded(&mut self, records: &[Artwork], store: &mut SelectionStore) -> usize {
        let ProgressiveSelection::Active { target, consumed } = *self else {
            return 0;
        };

        let remaining = target.saturating_sub(consumed);
        if remaining == 0 {
            *self = ProgressiveSelection::Inactive;
            return 0;
        }

        let taken = remaining.min(records.len());
        store.add_many(records[..taken].iter().map(|artwork| artwork.id));
        let consumed = consumed + taken;

        if consumed >= target {
            grid_debug!("Progressive selection complete: {}/{}", consumed, target);
            *self = ProgressiveSelection::Inactive;
        } else {
            grid_debug!("Progressive selection progress: {}/{}", consumed, target);
            *self = ProgressiveSelection::Active { target, consumed };
        }
        taken
    }

    pub fn cancel(&mut self) {
        *self = ProgressiveSelection::Inactive;
    }
}

/// Parses the free-text custom count. Anything but a positive integer is `None`.
pub fn parse_select_count(raw: &str) -> Option<usize> {
    match raw.trim().parse::<usize>() {
        Ok(count) if count > 0 => Some(count),
        _ => None,
    }
}
