use crate::types::{MoodControl, MoodState};

/// Owns the mood-selector controls for one session and is their only
/// mutator. Controls are built once from the configured moods and live for
/// the whole session; only their state changes.
pub struct MoodSelectorManager {
    controls: Vec<MoodControl>,
}

impl MoodSelectorManager {
    pub fn new(mood_ids: Vec<String>) -> Self {
        let controls = mood_ids
            .into_iter()
            .map(|mood_id| MoodControl {
                mood_id,
                state: MoodState::Idle,
            })
            .collect();
        Self { controls }
    }

    /// Marks `mood_id` as loading and returns every other control to idle,
    /// synchronously, so at most one control shows a pending state.
    /// Activation is accepted regardless of the control's current state.
    /// An id outside the configured set only performs the reset; nothing
    /// is marked loading.
    pub fn activate(&mut self, mood_id: &str) {
        for control in &mut self.controls {
            control.state = if control.mood_id == mood_id {
                MoodState::Loading
            } else {
                MoodState::Idle
            };
        }
    }

    /// Returns every control to idle. Runs once a request has settled,
    /// whatever its outcome.
    pub fn reset_all(&mut self) {
        for control in &mut self.controls {
            control.state = MoodState::Idle;
        }
    }

    /// The mood currently showing a pending state, if any.
    pub fn loading(&self) -> Option<&str> {
        self.controls
            .iter()
            .find(|control| control.state == MoodState::Loading)
            .map(|control| control.mood_id.as_str())
    }

    pub fn controls(&self) -> &[MoodControl] {
        &self.controls
    }

    pub fn count(&self) -> usize {
        self.controls.len()
    }
}
