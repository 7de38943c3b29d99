//! Shared world state for initiative workflow BDD scenarios.

use std::sync::Arc;

use aula_governance::initiative::{
    adapters::memory::{
        InMemoryAuditLog, InMemoryEvaluationRepository, InMemoryInitiativeRepository,
    },
    domain::{Evaluation, Initiative},
    services::{
        EvaluationOutcome, EvaluationService, GovernanceServiceError, InitiativeService,
        TransitionOrchestrator,
    },
};
use aula_governance::settings::WorkflowConfig;
use mockable::DefaultClock;
use rstest::fixture;

/// Initiative service used by the BDD world.
pub type TestInitiativeService = InitiativeService<
    InMemoryInitiativeRepository,
    InMemoryEvaluationRepository,
    InMemoryAuditLog,
    DefaultClock,
>;

/// Evaluation service used by the BDD world.
pub type TestEvaluationService = EvaluationService<
    InMemoryInitiativeRepository,
    InMemoryEvaluationRepository,
    InMemoryAuditLog,
    DefaultClock,
>;

/// Transition orchestrator used by the BDD world.
pub type TestOrchestrator =
    TransitionOrchestrator<InMemoryInitiativeRepository, InMemoryAuditLog, DefaultClock>;

/// Scenario world for initiative workflow behaviour tests.
pub struct InitiativeWorkflowWorld {
    pub initiatives: TestInitiativeService,
    pub evaluations: TestEvaluationService,
    pub orchestrator: TestOrchestrator,
    pub current: Option<Initiative>,
    pub last_transition_result: Option<Result<Initiative, GovernanceServiceError>>,
    pub last_evaluation_result: Option<Result<EvaluationOutcome, GovernanceServiceError>>,
    pub listed_evaluations: Vec<Evaluation>,
}

impl InitiativeWorkflowWorld {
    /// Creates a world backed by empty in-memory stores.
    #[must_use]
    pub fn new() -> Self {
        let initiative_store = Arc::new(InMemoryInitiativeRepository::new());
        let evaluation_store = Arc::new(InMemoryEvaluationRepository::new());
        let audit = Arc::new(InMemoryAuditLog::new());
        let clock = Arc::new(DefaultClock);
        let workflow = WorkflowConfig::default();

        Self {
            initiatives: InitiativeService::new(
                Arc::clone(&initiative_store),
                Arc::clone(&evaluation_store),
                Arc::clone(&audit),
                Arc::clone(&clock),
                workflow,
            ),
            evaluations: EvaluationService::new(
                Arc::clone(&initiative_store),
                evaluation_store,
                Arc::clone(&audit),
                Arc::clone(&clock),
                workflow,
            ),
            orchestrator: TransitionOrchestrator::new(initiative_store, audit, clock),
            current: None,
            last_transition_result: None,
            last_evaluation_result: None,
            listed_evaluations: Vec::new(),
        }
    }

    /// Returns the initiative under test.
    ///
    /// # Errors
    ///
    /// Fails when no initiative has been created yet.
    pub fn current(&self) -> Result<&Initiative, eyre::Report> {
        self.current
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing initiative in scenario world"))
    }
}

impl Default for InitiativeWorkflowWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> InitiativeWorkflowWorld {
    InitiativeWorkflowWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
