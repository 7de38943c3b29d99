//! `reqwest` client implementing the repository ports over REST.

use super::models::{
    Envelope, ErrorBody, EvaluationBody, EvaluationListing, EvaluationRecord, InitiativeBody,
    InitiativeRecord, ListQuery, TransitionBody,
};
use crate::initiative::{
    domain::{
        Evaluation, EvaluationId, Initiative, InitiativeFilter, InitiativeId, NewEvaluation,
        NewInitiative, Page, PageRequest,
    },
    ports::{EvaluationRepository, InitiativeRepository, RepositoryError, RepositoryResult},
};
use crate::settings::ApiConfig;
use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, Response, StatusCode, header::ACCEPT};
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;

/// Non-business HTTP failure reported by the backend.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("HTTP {status}: {message}")]
pub struct HttpStatusError {
    /// Response status code.
    pub status: u16,
    /// Message from the error payload, or the status reason phrase.
    pub message: String,
}

/// REST client for the governance backend.
#[derive(Debug, Clone)]
pub struct HttpGovernanceClient {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpGovernanceClient {
    /// Builds a client from API settings.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Network`] when the HTTP client cannot be
    /// constructed.
    pub fn new(config: &ApiConfig) -> RepositoryResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(RepositoryError::network)?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            token: config.token.clone(),
        })
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self
            .client
            .request(method, format!("{}/{path}", self.base_url))
            .header(ACCEPT, "application/json");
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Sends a request, mapping `404` to `None`.
    async fn send_optional(&self, builder: RequestBuilder) -> RepositoryResult<Option<Response>> {
        let response = builder.send().await.map_err(RepositoryError::network)?;
        let status = response.status();
        tracing::debug!(status = status.as_u16(), url = %response.url(), "backend responded");

        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if status.is_success() {
            return Ok(Some(response));
        }
        Err(failure(response).await)
    }

    /// Sends a request, mapping `404` to `not_found`.
    async fn send(
        &self,
        builder: RequestBuilder,
        not_found: RepositoryError,
    ) -> RepositoryResult<Response> {
        self.send_optional(builder).await?.ok_or(not_found)
    }

    async fn fetch_initiative(
        &self,
        builder: RequestBuilder,
        id: InitiativeId,
    ) -> RepositoryResult<Initiative> {
        let response = self
            .send(builder, RepositoryError::InitiativeNotFound(id))
            .await?;
        let record: Envelope<InitiativeRecord> = decode(response).await?;
        Initiative::try_from(record.into_inner())
    }

    async fn fetch_evaluation(
        &self,
        builder: RequestBuilder,
        id: EvaluationId,
    ) -> RepositoryResult<Evaluation> {
        let response = self
            .send(builder, RepositoryError::EvaluationNotFound(id))
            .await?;
        let record: Envelope<EvaluationRecord> = decode(response).await?;
        Evaluation::try_from(record.into_inner())
    }
}

/// Builds the error for a non-success, non-404 response.
async fn failure(response: Response) -> RepositoryError {
    let status = response.status();
    let body = response.json::<ErrorBody>().await.unwrap_or_default();
    let message = body
        .message
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| fallback_message(status));

    match status {
        StatusCode::BAD_REQUEST | StatusCode::CONFLICT | StatusCode::UNPROCESSABLE_ENTITY => {
            RepositoryError::Rejected {
                status: status.as_u16(),
                message,
            }
        }
        _ => RepositoryError::network(HttpStatusError {
            status: status.as_u16(),
            message,
        }),
    }
}

/// Message used when an error response carries no `message` field.
fn fallback_message(status: StatusCode) -> String {
    status.canonical_reason().map_or_else(
        || format!("HTTP {}", status.as_u16()),
        str::to_owned,
    )
}

/// A `404` from a collection endpoint means the base URL is wrong.
fn missing_endpoint() -> RepositoryError {
    RepositoryError::network(HttpStatusError {
        status: StatusCode::NOT_FOUND.as_u16(),
        message: fallback_message(StatusCode::NOT_FOUND),
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> RepositoryResult<T> {
    response
        .json::<T>()
        .await
        .map_err(RepositoryError::invalid_persisted_data)
}

#[async_trait]
impl InitiativeRepository for HttpGovernanceClient {
    async fn create(&self, initiative: &NewInitiative) -> RepositoryResult<Initiative> {
        let builder = self
            .request(Method::POST, "initiatives")
            .json(&InitiativeBody::for_create(initiative));
        let response = self.send(builder, missing_endpoint()).await?;
        let record: Envelope<InitiativeRecord> = decode(response).await?;
        Initiative::try_from(record.into_inner())
    }

    async fn find_by_id(&self, id: InitiativeId) -> RepositoryResult<Option<Initiative>> {
        let builder = self.request(Method::GET, &format!("initiatives/{id}"));
        let Some(response) = self.send_optional(builder).await? else {
            return Ok(None);
        };
        let record: Envelope<InitiativeRecord> = decode(response).await?;
        Initiative::try_from(record.into_inner()).map(Some)
    }

    async fn list(
        &self,
        filter: &InitiativeFilter,
        page: PageRequest,
    ) -> RepositoryResult<Page<Initiative>> {
        let builder = self
            .request(Method::GET, "initiatives")
            .query(&ListQuery::new(*filter, page));
        let response = self.send(builder, missing_endpoint()).await?;
        let listing: Page<InitiativeRecord> = decode(response).await?;
        let data = listing
            .data
            .into_iter()
            .map(Initiative::try_from)
            .collect::<RepositoryResult<Vec<_>>>()?;

        Ok(Page {
            data,
            current_page: listing.current_page,
            last_page: listing.last_page,
            next_page_url: listing.next_page_url,
            prev_page_url: listing.prev_page_url,
            total: listing.total,
        })
    }

    async fn update(&self, initiative: &Initiative) -> RepositoryResult<Initiative> {
        let id = initiative.id();
        let builder = self
            .request(Method::PUT, &format!("initiatives/{id}"))
            .json(&InitiativeBody::for_update(initiative));
        self.fetch_initiative(builder, id).await
    }

    async fn record_transition(&self, initiative: &Initiative) -> RepositoryResult<Initiative> {
        let id = initiative.id();
        let builder = self
            .request(Method::POST, &format!("initiatives/{id}/transition"))
            .json(&TransitionBody {
                status: initiative.status(),
            });
        self.fetch_initiative(builder, id)
            .await
            .map_err(|err| match err {
                RepositoryError::Rejected { status, message } => {
                    RepositoryError::TransitionRejected { status, message }
                }
                other => other,
            })
    }

    async fn delete(&self, id: InitiativeId) -> RepositoryResult<()> {
        let builder = self.request(Method::DELETE, &format!("initiatives/{id}"));
        self.send(builder, RepositoryError::InitiativeNotFound(id))
            .await?;
        Ok(())
    }
}

#[async_trait]
impl EvaluationRepository for HttpGovernanceClient {
    async fn create(&self, evaluation: &NewEvaluation) -> RepositoryResult<Evaluation> {
        let initiative_id = evaluation.initiative_id();
        let builder = self
            .request(Method::POST, "evaluations")
            .json(&EvaluationBody::for_create(evaluation));
        let response = self
            .send(builder, RepositoryError::InitiativeNotFound(initiative_id))
            .await?;
        let record: Envelope<EvaluationRecord> = decode(response).await?;
        Evaluation::try_from(record.into_inner())
    }

    async fn find_by_id(&self, id: EvaluationId) -> RepositoryResult<Option<Evaluation>> {
        let builder = self.request(Method::GET, &format!("evaluations/{id}"));
        let Some(response) = self.send_optional(builder).await? else {
            return Ok(None);
        };
        let record: Envelope<EvaluationRecord> = decode(response).await?;
        Evaluation::try_from(record.into_inner()).map(Some)
    }

    async fn list_by_initiative(
        &self,
        initiative_id: InitiativeId,
    ) -> RepositoryResult<Vec<Evaluation>> {
        let builder = self
            .request(Method::GET, "evaluations")
            .query(&[("iniciative_id", initiative_id.value())]);
        let Some(response) = self.send_optional(builder).await? else {
            return Ok(Vec::new());
        };
        let listing: EvaluationListing = decode(response).await?;
        let mut evaluations = listing
            .into_records()
            .into_iter()
            .map(Evaluation::try_from)
            .collect::<RepositoryResult<Vec<_>>>()?;
        evaluations.sort_by_key(|evaluation| (evaluation.created_at(), evaluation.id()));
        Ok(evaluations)
    }

    async fn update(&self, evaluation: &Evaluation) -> RepositoryResult<Evaluation> {
        let id = evaluation.id();
        let builder = self
            .request(Method::PUT, &format!("evaluations/{id}"))
            .json(&EvaluationBody::for_update(evaluation));
        self.fetch_evaluation(builder, id).await
    }

    async fn delete(&self, id: EvaluationId) -> RepositoryResult<()> {
        let builder = self.request(Method::DELETE, &format!("evaluations/{id}"));
        self.send(builder, RepositoryError::EvaluationNotFound(id))
            .await?;
        Ok(())
    }

    async fn delete_by_initiative(&self, initiative_id: InitiativeId) -> RepositoryResult<usize> {
        let evaluations = self.list_by_initiative(initiative_id).await?;
        for evaluation in &evaluations {
            EvaluationRepository::delete(self, evaluation.id()).await?;
        }
        Ok(evaluations.len())
    }
}
