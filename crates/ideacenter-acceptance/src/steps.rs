//! Ordered step descriptors of the idea lifecycle scenario

use ideacenter_client::{
    HttpReply, IdeaCenterClient, StatusCode,
    model::{ApiResponse, IdeaRequest},
};
use tracing::debug;

use crate::{
    context::ScenarioContext,
    error::{Result, ScenarioError},
    expect::{BodyExpectation, Expectation},
};

/// Identifier the service is not expected to know
pub const NON_EXISTING_IDEA_ID: &str = "non-existing-id-123";

/// Response texts asserted by the scenario
pub mod messages {
    pub const CREATED: &str = "Successfully created!";
    pub const EDITED: &str = "Edited successfully";
    pub const DELETED: &str = "The idea is deleted!";
    pub const NO_SUCH_IDEA: &str = "There is no such idea!";
}

pub fn valid_idea() -> IdeaRequest {
    IdeaRequest::new("Test Idea", "This is a test idea description", "")
}

pub fn edited_idea() -> IdeaRequest {
    IdeaRequest::new("Edited Idea", "This is an updated test idea description.", "")
}

pub fn empty_idea() -> IdeaRequest {
    IdeaRequest::new("", "", "")
}

fn placeholder_idea() -> IdeaRequest {
    IdeaRequest::new("Test", "Test", "")
}

/// Request issued by a step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepAction {
    CreateValidIdea,
    ListIdeas,
    EditLastCreatedIdea,
    DeleteLastCreatedIdea,
    CreateIdeaWithoutRequiredFields,
    EditNonExistingIdea,
    DeleteNonExistingIdea,
}

impl StepAction {
    /// Send the request, reading the created identifier from `context` when needed
    pub async fn perform(
        self,
        step: &'static str,
        client: &IdeaCenterClient,
        context: &ScenarioContext,
    ) -> Result<HttpReply> {
        let reply = match self {
            Self::CreateValidIdea => client.create_idea(&valid_idea()).await?,
            Self::ListIdeas => client.list_ideas().await?,
            Self::EditLastCreatedIdea => {
                let idea_id = context.last_created_idea_id(step)?;
                client.edit_idea(idea_id, &edited_idea()).await?
            }
            Self::DeleteLastCreatedIdea => {
                let idea_id = context.last_created_idea_id(step)?;
                client.delete_idea(idea_id).await?
            }
            Self::CreateIdeaWithoutRequiredFields => client.create_idea(&empty_idea()).await?,
            Self::EditNonExistingIdea => {
                client
                    .edit_idea(NON_EXISTING_IDEA_ID, &placeholder_idea())
                    .await?
            }
            Self::DeleteNonExistingIdea => client.delete_idea(NON_EXISTING_IDEA_ID).await?,
        };
        Ok(reply)
    }

    /// Apply side effects of a reply that already met its expectation
    pub fn record(
        self,
        step: &'static str,
        reply: &HttpReply,
        context: &mut ScenarioContext,
    ) -> Result<()> {
        if self == Self::CreateValidIdea {
            let response: ApiResponse = reply.json()?;
            let idea_id = response
                .idea_id
                .filter(|id| !id.is_empty())
                .ok_or(ScenarioError::NoIdeaIdReturned { step })?;
            debug!("Recorded created idea {}", idea_id);
            context.record_created_idea(idea_id);
        }
        Ok(())
    }
}

/// One ordered scenario case
#[derive(Clone, Copy, Debug)]
pub struct Step {
    pub name: &'static str,
    pub action: StepAction,
    pub expectation: Expectation,
}

impl Step {
    pub const fn new(name: &'static str, action: StepAction, expectation: Expectation) -> Self {
        Self {
            name,
            action,
            expectation,
        }
    }
}

/// The idea lifecycle in execution order
pub fn standard_steps() -> Vec<Step> {
    vec![
        Step::new(
            "create_new_idea_with_required_fields",
            StepAction::CreateValidIdea,
            Expectation::new(StatusCode::OK, BodyExpectation::Message(messages::CREATED)),
        ),
        Step::new(
            "get_all_ideas_returns_non_empty_array",
            StepAction::ListIdeas,
            Expectation::new(StatusCode::OK, BodyExpectation::NonEmptyList),
        ),
        Step::new(
            "edit_last_created_idea",
            StepAction::EditLastCreatedIdea,
            Expectation::new(StatusCode::OK, BodyExpectation::Message(messages::EDITED)),
        ),
        Step::new(
            "delete_last_created_idea",
            StepAction::DeleteLastCreatedIdea,
            Expectation::new(StatusCode::OK, BodyExpectation::Text(messages::DELETED)),
        ),
        // Only the status is checked here; the body is left unasserted
        Step::new(
            "create_idea_without_required_fields",
            StepAction::CreateIdeaWithoutRequiredFields,
            Expectation::new(StatusCode::BAD_REQUEST, BodyExpectation::StatusOnly),
        ),
        Step::new(
            "edit_non_existing_idea",
            StepAction::EditNonExistingIdea,
            Expectation::new(
                StatusCode::BAD_REQUEST,
                BodyExpectation::Text(messages::NO_SUCH_IDEA),
            ),
        ),
        Step::new(
            "delete_non_existing_idea",
            StepAction::DeleteNonExistingIdea,
            Expectation::new(
                StatusCode::BAD_REQUEST,
                BodyExpectation::Text(messages::NO_SUCH_IDEA),
            ),
        ),
    ]
}
