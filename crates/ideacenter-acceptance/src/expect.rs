//! Expected outcomes of scenario steps
//!
//! The status is always compared first; a body is never inspected when the
//! status is already wrong.

use ideacenter_client::{
    HttpReply, StatusCode,
    model::{ApiResponse, Idea},
};

use crate::error::{Result, ScenarioError};

/// What a step expects from the response body
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyExpectation {
    /// Body is not inspected
    StatusOnly,
    /// JSON envelope whose `msg` equals the text
    Message(&'static str),
    /// Raw body equal to the text
    Text(&'static str),
    /// JSON array with at least one idea
    NonEmptyList,
}

/// Expected status and body of a step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Expectation {
    pub status: StatusCode,
    pub body: BodyExpectation,
}

impl Expectation {
    pub const fn new(status: StatusCode, body: BodyExpectation) -> Self {
        Self { status, body }
    }

    pub fn check(&self, step: &'static str, reply: &HttpReply) -> Result<()> {
        if reply.status != self.status {
            return Err(ScenarioError::UnexpectedStatus {
                step,
                expected: self.status,
                actual: reply.status,
                body: reply.body.clone(),
            });
        }

        match self.body {
            BodyExpectation::StatusOnly => Ok(()),
            BodyExpectation::Message(expected) => {
                let response: ApiResponse = reply.json()?;
                expect_text(step, expected, &response.msg)
            }
            BodyExpectation::Text(expected) => expect_text(step, expected, &reply.body),
            BodyExpectation::NonEmptyList => {
                let ideas: Vec<Idea> = reply.json()?;
                if ideas.is_empty() {
                    Err(ScenarioError::EmptyCollection { step })
                } else {
                    Ok(())
                }
            }
        }
    }
}

fn expect_text(step: &'static str, expected: &str, actual: &str) -> Result<()> {
    if actual == expected {
        Ok(())
    } else {
        Err(ScenarioError::UnexpectedMessage {
            step,
            expected: expected.to_string(),
            actual: actual.to_string(),
        })
    }
}
