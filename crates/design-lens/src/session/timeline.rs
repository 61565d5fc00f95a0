use std::time::Duration;

use serde::Serialize;
use tracing::debug;

use crate::config::ScanTiming;
use crate::critique::{Principle, PrincipleSelection, ScanCopy};

/// Principle currently highlighted on the analyzing screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanProgress {
    /// Zero-based position within the selection.
    pub index: usize,
    pub total: usize,
    pub principle: Principle,
    pub copy: ScanCopy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ScanEvent {
    Scanning(ScanProgress),
    Finished,
}

/// Fixed animation walking the selection in order: one dwell per principle, then a pause.
#[derive(Debug, Clone)]
pub struct ScanTimeline {
    principles: Vec<Principle>,
    timing: ScanTiming,
}

impl ScanTimeline {
    pub fn new(selection: &PrincipleSelection, timing: ScanTiming) -> Self {
        Self {
            principles: selection.as_slice().to_vec(),
            timing,
        }
    }

    pub fn total_duration(&self) -> Duration {
        self.timing.animation_for(self.principles.len())
    }

    fn progress(&self, index: usize, principle: Principle) -> ScanProgress {
        ScanProgress {
            index,
            total: self.principles.len(),
            principle,
            copy: principle.scan_copy(),
        }
    }

    /// Every event with its offset from the start of the animation.
    pub fn schedule(&self) -> Vec<(Duration, ScanEvent)> {
        let mut events: Vec<(Duration, ScanEvent)> = self
            .principles
            .iter()
            .enumerate()
            .map(|(index, principle)| {
                (
                    self.timing.principle_dwell * index as u32,
                    ScanEvent::Scanning(self.progress(index, *principle)),
                )
            })
            .collect();
        events.push((self.total_duration(), ScanEvent::Finished));
        events
    }

    /// Emits the events in real time.
    pub async fn play<F>(&self, mut on_event: F)
    where
        F: FnMut(ScanEvent),
    {
        for (index, principle) in self.principles.iter().enumerate() {
            debug!(
                index,
                total = self.principles.len(),
                principle = principle.label(),
                "scanning principle"
            );
            on_event(ScanEvent::Scanning(self.progress(index, *principle)));
            tokio::time::sleep(self.timing.principle_dwell).await;
        }

        tokio::time::sleep(self.timing.completion_pause).await;
        debug!("scan animation finished");
        on_event(ScanEvent::Finished);
    }
}
