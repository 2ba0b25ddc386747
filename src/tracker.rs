use log::debug;

use crate::section::SectionId;

/// One entry of an observer notification batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Visibility {
    pub section: SectionId,
    /// Whether at least the threshold fraction of the section is in view.
    pub intersecting: bool,
}

impl Visibility {
    /// Reads one observer entry. `None` for targets that are not sections.
    ///
    /// `is_intersecting` alone is true for any overlap with the viewport, so
    /// the ratio has to reach the threshold as well.
    pub fn from_entry(target_id: &str, ratio: f64, is_intersecting: bool, threshold: f64) -> Option<Self> {
        let section = SectionId::from_id(target_id)?;
        Some(Self { section, intersecting: is_intersecting && ratio >= threshold })
    }
}

/// Keeps the active section up to date from observer batches.
///
/// Sections leaving the viewport never clear the indicator; it holds the
/// last section that entered. Once detached every batch is ignored.
#[derive(Debug)]
pub struct SectionTracker {
    active: Option<SectionId>,
    attached: bool,
}

impl SectionTracker {
    pub fn new() -> Self {
        Self { active: None, attached: true }
    }

    /// Applies a batch in order and returns the new active section if the
    /// batch changed it.
    pub fn apply<I>(&mut self, batch: I) -> Option<SectionId>
    where
        I: IntoIterator<Item = Visibility>,
    {
        if !self.attached {
            debug!("Ignoring visibility batch after teardown");
            return None;
        }

        let previous = self.active;
        for entry in batch {
            if entry.intersecting {
                self.active = Some(entry.section);
            }
        }

        if self.active != previous {
            debug!("Active section is now {:?}", self.active.map(SectionId::id));
            self.active
        } else {
            None
        }
    }

    pub fn detach(&mut self) {
        self.attached = false;
    }
}

#[cfg(test)]
impl SectionTracker {
    fn active(&self) -> Option<SectionId> {
        self.active
    }

    fn is_attached(&self) -> bool {
        self.attached
    }
}

impl Default for SectionTracker {
    fn default() -> Self {
        Self::new()
    }
}
