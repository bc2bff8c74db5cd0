// State carried between scenario steps

use crate::error::{Result, ScenarioError};

/// Values produced by one step and consumed by later ones
#[derive(Debug, Default)]
pub struct ScenarioContext {
    last_created_idea_id: Option<String>,
}

impl ScenarioContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember the identifier of an idea the service confirmed as created
    pub fn record_created_idea(&mut self, idea_id: String) {
        self.last_created_idea_id = Some(idea_id);
    }

    /// Identifier of the most recently created idea, required by `step`
    pub fn last_created_idea_id(&self, step: &'static str) -> Result<&str> {
        self.last_created_idea_id
            .as_deref()
            .ok_or(ScenarioError::MissingIdeaId { step })
    }

    pub fn has_created_idea(&self) -> bool {
        self.last_created_idea_id.is_some()
    }
}
