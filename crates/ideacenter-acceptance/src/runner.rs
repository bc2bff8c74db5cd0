//! Scenario driver
//!
//! [`ScenarioRunner::setup`] authenticates once and fails fast; no step runs
//! without a token. [`ScenarioRunner::run`] then executes every step exactly
//! once, in order, recording each outcome instead of stopping at the first
//! failure. Dropping the runner releases the HTTP session.

use std::fmt;

use ideacenter_client::{IdeaCenterClient, StatusCode, model::UserCreateRequest};
use tracing::{error, info, warn};

use crate::{
    config::AcceptanceConfig,
    context::ScenarioContext,
    error::{Result, ScenarioError},
    steps::{Step, standard_steps},
};

/// Result of a single step
#[derive(Debug)]
pub struct StepOutcome {
    pub name: &'static str,
    pub result: Result<()>,
}

impl StepOutcome {
    pub fn passed(&self) -> bool {
        self.result.is_ok()
    }
}

/// Outcomes of a scenario run, in execution order
#[derive(Debug, Default)]
pub struct ScenarioReport {
    pub outcomes: Vec<StepOutcome>,
}

impl ScenarioReport {
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(StepOutcome::passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &StepOutcome> {
        self.outcomes.iter().filter(|o| !o.passed())
    }

    pub fn outcome(&self, name: &str) -> Option<&StepOutcome> {
        self.outcomes.iter().find(|o| o.name == name)
    }
}

impl fmt::Display for ScenarioReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let passed = self.outcomes.iter().filter(|o| o.passed()).count();
        writeln!(f, "{}/{} steps passed", passed, self.outcomes.len())?;
        for outcome in &self.outcomes {
            match &outcome.result {
                Ok(()) => writeln!(f, "  ok     {}", outcome.name)?,
                Err(e) => writeln!(f, "  FAILED {}: {}", outcome.name, e)?,
            }
        }
        Ok(())
    }
}

/// Authenticated session plus the context threaded through the steps
pub struct ScenarioRunner {
    client: IdeaCenterClient,
    context: ScenarioContext,
}

impl ScenarioRunner {
    /// Build the client, optionally register the account, and authenticate
    pub async fn setup(config: &AcceptanceConfig) -> Result<Self> {
        config.validate()?;
        let client =
            IdeaCenterClient::new_without_auth(config.client_config()).map_err(ScenarioError::Setup)?;

        if config.register_user {
            register_user(&client, config).await;
        }

        client.authenticate().await.map_err(|e| {
            error!("Authentication against {} failed: {}", config.base_url, e);
            ScenarioError::Setup(e)
        })?;
        info!("Authenticated against {}", config.base_url);

        Ok(Self::with_client(client))
    }

    /// Wrap a client that is already authenticated
    pub fn with_client(client: IdeaCenterClient) -> Self {
        Self {
            client,
            context: ScenarioContext::new(),
        }
    }

    pub fn client(&self) -> &IdeaCenterClient {
        &self.client
    }

    pub fn context(&self) -> &ScenarioContext {
        &self.context
    }

    /// Perform one step and check its expectation
    pub async fn run_step(&mut self, step: &Step) -> Result<()> {
        let reply = step
            .action
            .perform(step.name, &self.client, &self.context)
            .await?;
        step.expectation.check(step.name, &reply)?;
        step.action.record(step.name, &reply, &mut self.context)
    }

    /// Run `steps` in order, each exactly once
    pub async fn run(&mut self, steps: &[Step]) -> ScenarioReport {
        let mut report = ScenarioReport::default();
        for step in steps {
            let result = self.run_step(step).await;
            match &result {
                Ok(()) => info!(step = step.name, "step passed"),
                Err(e) => error!(step = step.name, "step failed: {}", e),
            }
            report.outcomes.push(StepOutcome {
                name: step.name,
                result,
            });
        }
        report
    }

    /// Release the session
    pub fn teardown(self) {
        drop(self);
    }
}

impl Drop for ScenarioRunner {
    fn drop(&mut self) {
        info!("Releasing IdeaCenter session");
    }
}

/// Register the configured account; an existing account is not an error
async fn register_user(client: &IdeaCenterClient, config: &AcceptanceConfig) {
    let request = UserCreateRequest::new(&config.user_name, &config.email, &config.password);
    match client.create_user(&request).await {
        Ok(reply) if reply.status == StatusCode::OK => info!("Registered user {}", config.email),
        Ok(reply) => warn!(
            "User creation returned {} - might already exist",
            reply.status
        ),
        Err(e) => warn!("User creation request failed: {}", e),
    }
}

/// Set up, run the standard steps, and tear down
pub async fn run_scenario(config: &AcceptanceConfig) -> Result<ScenarioReport> {
    let mut runner = ScenarioRunner::setup(config).await?;
    let report = runner.run(&standard_steps()).await;
    runner.teardown();
    info!("Scenario finished: {}", report);
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_summary() {
        let report = ScenarioReport {
            outcomes: vec![
                StepOutcome {
                    name: "create",
                    result: Ok(()),
                },
                StepOutcome {
                    name: "edit",
                    result: Err(ScenarioError::MissingIdeaId { step: "edit" }),
                },
            ],
        };

        assert!(!report.is_success());
        assert_eq!(report.failures().count(), 1);
        assert!(report.outcome("create").unwrap().passed());
        assert!(report.outcome("missing").is_none());

        let text = report.to_string();
        assert!(text.starts_with("1/2 steps passed"));
        assert!(text.contains("FAILED edit: edit: no idea was created earlier in the scenario"));
    }

    #[test]
    fn test_empty_report_is_success() {
        assert!(ScenarioReport::default().is_success());
    }

    #[tokio::test]
    async fn test_setup_rejects_blank_config() {
        let config = AcceptanceConfig::new("http://127.0.0.1:9", "", "secret");
        assert!(matches!(
            ScenarioRunner::setup(&config).await,
            Err(ScenarioError::Config(_))
        ));
    }
}
