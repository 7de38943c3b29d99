//! Command-line client for the initiative governance backend.
//!
//! Usage:
//!
//! ```text
//! governance [--config <file-stem>] <command>
//! ```
//!
//! Configuration is read from `governance.toml` (or the given stem) and
//! `GOVERNANCE__*` environment variables. Destructive commands ask for
//! confirmation on standard input unless `--yes` is passed.

use async_trait::async_trait;
use aula_governance::initiative::{
    adapters::{AutoConfirm, TracingAuditLog, http::HttpGovernanceClient},
    domain::{
        ConfirmationRequest, DocumentId, Initiative, InitiativeFilter, InitiativeId,
        InitiativeStatus, PageRequest, PlanId, UserId, transition,
    },
    ports::{ConfirmationPrompt, RepositoryError},
    services::{
        CreateEvaluationRequest, EvaluationService, GovernanceServiceError, InitiativeService,
        TransitionOrchestrator,
    },
};
use aula_governance::navigation::{Role, menu_for};
use aula_governance::settings::{ConfigError, GovernanceConfig};
use aula_governance::telemetry::{TelemetryError, init_tracing};
use clap::{Parser, Subcommand};
use mockable::DefaultClock;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use thiserror::Error;

/// Initiative governance client.
#[derive(Debug, Parser)]
#[command(name = "governance", version, about, long_about = None)]
struct Cli {
    /// Configuration file stem, extension optional
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the statuses reachable from a status
    Transitions {
        /// Current status
        status: InitiativeStatus,
    },

    /// List initiatives
    List {
        /// Only initiatives in this status
        #[arg(long)]
        status: Option<InitiativeStatus>,
        /// Only initiatives of this strategic plan
        #[arg(long)]
        plan_id: Option<i64>,
        /// Only initiatives of this user
        #[arg(long)]
        user_id: Option<i64>,
        /// Page number, starting at 1
        #[arg(long, default_value_t = 1)]
        page: u32,
    },

    /// Show one initiative with its evaluations
    Show {
        /// Initiative identifier
        id: i64,
    },

    /// Move an initiative to another status
    Transition {
        /// Initiative identifier
        id: i64,
        /// Target status
        status: InitiativeStatus,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Record an evaluation
    Evaluate {
        /// Initiative identifier
        initiative_id: i64,
        /// Score between 0 and 100
        #[arg(long)]
        score: f64,
        /// Evaluation summary
        #[arg(long)]
        summary: String,
        /// Evaluating user
        #[arg(long)]
        evaluator: Option<i64>,
        /// Supporting document
        #[arg(long)]
        document: Option<i64>,
    },

    /// Delete an initiative and, when configured, its evaluations
    Delete {
        /// Initiative identifier
        id: i64,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Print the dashboard menu of a role
    Menu {
        /// Role name
        role: Role,
    },
}

/// Errors that end the command.
#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error("failed to initialise backend client: {0}")]
    Client(#[from] RepositoryError),
    #[error(transparent)]
    Service(#[from] GovernanceServiceError),
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// Asks on standard error and reads the answer from standard input.
struct StdinPrompt;

#[async_trait]
impl ConfirmationPrompt for StdinPrompt {
    async fn confirm(&self, request: &ConfirmationRequest) -> bool {
        let message = request.message().to_owned();
        tokio::task::spawn_blocking(move || ask(&message))
            .await
            .unwrap_or(false)
    }
}

fn ask(message: &str) -> bool {
    let mut stderr = io::stderr().lock();
    if write!(stderr, "{message} [y/N] ")
        .and_then(|()| stderr.flush())
        .is_err()
    {
        return false;
    }

    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes" | "s" | "si" | "sí"
    )
}

type Client = HttpGovernanceClient;

struct App {
    initiatives: InitiativeService<Client, Client, TracingAuditLog, DefaultClock>,
    evaluations: EvaluationService<Client, Client, TracingAuditLog, DefaultClock>,
    transitions: TransitionOrchestrator<Client, TracingAuditLog, DefaultClock>,
    per_page: u32,
}

impl App {
    fn new(config: &GovernanceConfig) -> Result<Self, CliError> {
        let client = Arc::new(Client::new(&config.api)?);
        let audit = Arc::new(TracingAuditLog);
        let clock = Arc::new(DefaultClock);
        Ok(Self {
            initiatives: InitiativeService::new(
                Arc::clone(&client),
                Arc::clone(&client),
                Arc::clone(&audit),
                Arc::clone(&clock),
                config.workflow,
            ),
            evaluations: EvaluationService::new(
                Arc::clone(&client),
                Arc::clone(&client),
                Arc::clone(&audit),
                Arc::clone(&clock),
                config.workflow,
            ),
            transitions: TransitionOrchestrator::new(client, audit, clock),
            per_page: config.pagination.per_page,
        })
    }
}

fn prompt_for(yes: bool) -> &'static dyn ConfirmationPrompt {
    if yes { &AutoConfirm } else { &StdinPrompt }
}

fn write_initiative_row(out: &mut impl Write, initiative: &Initiative) -> io::Result<()> {
    writeln!(
        out,
        "{}\t{}\t{}",
        initiative.id(),
        initiative.status(),
        initiative.title()
    )
}

fn write_statuses(out: &mut impl Write, statuses: &[InitiativeStatus]) -> io::Result<()> {
    if statuses.is_empty() {
        return writeln!(out, "(terminal)");
    }
    for status in statuses {
        writeln!(out, "{status}")?;
    }
    Ok(())
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = match &cli.config {
        Some(path) => GovernanceConfig::load_from(path)?,
        None => GovernanceConfig::load()?,
    };
    init_tracing(&config.logging)?;

    let mut out = io::stdout().lock();
    match cli.command {
        Command::Transitions { status } => {
            write_statuses(&mut out, transition::allowed_transitions(status))?;
        }
        Command::Menu { role } => {
            for entry in menu_for(role) {
                writeln!(out, "{}\t{}", entry.label, entry.route)?;
            }
        }
        command => run_remote(command, &App::new(&config)?, &mut out).await?,
    }
    Ok(())
}

async fn run_remote(command: Command, app: &App, out: &mut impl Write) -> Result<(), CliError> {
    match command {
        Command::List {
            status,
            plan_id,
            user_id,
            page,
        } => {
            let filter = InitiativeFilter {
                status,
                plan_id: plan_id.map(PlanId::new),
                user_id: user_id.map(UserId::new),
            };
            let listing = app
                .initiatives
                .list(&filter, PageRequest::new(page, app.per_page))
                .await?;
            for initiative in &listing.data {
                write_initiative_row(out, initiative)?;
            }
            writeln!(
                out,
                "page {} of {} ({} total)",
                listing.current_page, listing.last_page, listing.total
            )?;
        }
        Command::Show { id } => {
            let initiative_id = InitiativeId::new(id);
            let initiative = app.initiatives.get(initiative_id).await?;
            write_initiative_row(out, &initiative)?;
            if let Some(summary) = initiative.summary() {
                writeln!(out, "summary: {summary}")?;
            }
            writeln!(out, "next:")?;
            write_statuses(out, transition::allowed_transitions(initiative.status()))?;
            for evaluation in app.evaluations.list_by_initiative(initiative_id).await? {
                writeln!(
                    out,
                    "evaluation {}\t{}\t{}",
                    evaluation.id(),
                    evaluation.score(),
                    evaluation.summary()
                )?;
            }
        }
        Command::Transition { id, status, yes } => {
            let updated = app
                .transitions
                .transition_confirmed(InitiativeId::new(id), status, prompt_for(yes))
                .await?;
            write_initiative_row(out, &updated)?;
        }
        Command::Evaluate {
            initiative_id,
            score,
            summary,
            evaluator,
            document,
        } => {
            let mut request =
                CreateEvaluationRequest::new(InitiativeId::new(initiative_id), summary, score);
            if let Some(user) = evaluator {
                request = request.with_evaluator_user(UserId::new(user));
            }
            if let Some(document_id) = document {
                request = request.with_document_id(DocumentId::new(document_id));
            }
            let outcome = app.evaluations.create(request).await?;
            writeln!(out, "evaluation {} recorded", outcome.evaluation.id())?;
            if let Some(evaluated) = outcome.evaluated_initiative {
                write_initiative_row(out, &evaluated)?;
            }
        }
        Command::Delete { id, yes } => {
            app.initiatives
                .delete(InitiativeId::new(id), prompt_for(yes))
                .await?;
            writeln!(out, "initiative {id} deleted")?;
        }
        Command::Transitions { .. } | Command::Menu { .. } => {}
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "command failed");
            writeln!(io::stderr(), "error: {err}").ok();
            ExitCode::FAILURE
        }
    }
}
