//! Initiative aggregate root and its creation and edit payloads.

use super::{InitiativeDomainError, InitiativeId, InitiativeStatus, PlanId, Title, UserId};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Strategic improvement initiative tracked through the governance lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Initiative {
    id: InitiativeId,
    title: Title,
    plan_id: Option<PlanId>,
    user_id: Option<UserId>,
    status: InitiativeStatus,
    summary: Option<String>,
    estimated_impact: Option<String>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted initiative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedInitiativeData {
    /// Store-assigned identifier.
    pub id: InitiativeId,
    /// Validated title.
    pub title: Title,
    /// Owning strategic plan, if any.
    pub plan_id: Option<PlanId>,
    /// Responsible user, if any.
    pub user_id: Option<UserId>,
    /// Persisted lifecycle status.
    pub status: InitiativeStatus,
    /// Free-text summary.
    pub summary: Option<String>,
    /// Free-text estimate of the expected impact.
    pub estimated_impact: Option<String>,
    /// Planned start date.
    pub start_date: Option<NaiveDate>,
    /// Planned end date.
    pub end_date: Option<NaiveDate>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Latest modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Initiative {
    /// Materializes a newly stored initiative with its assigned identifier.
    #[must_use]
    pub fn from_new(id: InitiativeId, new: NewInitiative) -> Self {
        Self {
            id,
            title: new.title,
            plan_id: new.plan_id,
            user_id: new.user_id,
            status: InitiativeStatus::INITIAL,
            summary: new.summary,
            estimated_impact: new.estimated_impact,
            start_date: new.start_date,
            end_date: new.end_date,
            created_at: new.created_at,
            updated_at: new.created_at,
        }
    }

    /// Reconstructs an initiative from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedInitiativeData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            plan_id: data.plan_id,
            user_id: data.user_id,
            status: data.status,
            summary: data.summary,
            estimated_impact: data.estimated_impact,
            start_date: data.start_date,
            end_date: data.end_date,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the initiative identifier.
    #[must_use]
    pub const fn id(&self) -> InitiativeId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &Title {
        &self.title
    }

    /// Returns the owning plan, if any.
    #[must_use]
    pub const fn plan_id(&self) -> Option<PlanId> {
        self.plan_id
    }

    /// Returns the responsible user, if any.
    #[must_use]
    pub const fn user_id(&self) -> Option<UserId> {
        self.user_id
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> InitiativeStatus {
        self.status
    }

    /// Returns the summary, if any.
    #[must_use]
    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    /// Returns the estimated impact, if any.
    #[must_use]
    pub fn estimated_impact(&self) -> Option<&str> {
        self.estimated_impact.as_deref()
    }

    /// Returns the planned start date, if any.
    #[must_use]
    pub const fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    /// Returns the planned end date, if any.
    #[must_use]
    pub const fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Applies a field edit. The status is never part of an edit.
    pub fn apply_changes(&mut self, changes: InitiativeChanges, clock: &impl Clock) {
        let InitiativeChanges {
            title,
            plan_id,
            user_id,
            summary,
            estimated_impact,
            start_date,
            end_date,
        } = changes;

        if let Some(value) = title {
            self.title = value;
        }
        if let Some(value) = plan_id {
            self.plan_id = value;
        }
        if let Some(value) = user_id {
            self.user_id = value;
        }
        if let Some(value) = summary {
            self.summary = value;
        }
        if let Some(value) = estimated_impact {
            self.estimated_impact = value;
        }
        if let Some(value) = start_date {
            self.start_date = value;
        }
        if let Some(value) = end_date {
            self.end_date = value;
        }
        self.touch(clock);
    }

    /// Moves the initiative to `target` and returns the previous status.
    ///
    /// # Errors
    ///
    /// Returns [`InitiativeDomainError::IllegalTransition`] when `target` is
    /// not reachable from the current status. The initiative is left
    /// unchanged in that case.
    pub fn transition_to(
        &mut self,
        target: InitiativeStatus,
        clock: &impl Clock,
    ) -> Result<InitiativeStatus, InitiativeDomainError> {
        let current = self.status;
        if !current.can_transition_to(target) {
            return Err(InitiativeDomainError::IllegalTransition {
                id: self.id,
                from: current,
                to: target,
            });
        }

        self.status = target;
        self.touch(clock);
        Ok(current)
    }

    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}

/// Validated fields for an initiative that has not been stored yet.
///
/// New initiatives always start in [`InitiativeStatus::INITIAL`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInitiative {
    title: Title,
    plan_id: Option<PlanId>,
    user_id: Option<UserId>,
    summary: Option<String>,
    estimated_impact: Option<String>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    created_at: DateTime<Utc>,
}

impl NewInitiative {
    /// Creates a new initiative payload stamped with the current time.
    #[must_use]
    pub fn new(title: Title, clock: &impl Clock) -> Self {
        Self {
            title,
            plan_id: None,
            user_id: None,
            summary: None,
            estimated_impact: None,
            start_date: None,
            end_date: None,
            created_at: clock.utc(),
        }
    }

    /// Sets the owning strategic plan.
    #[must_use]
    pub const fn with_plan_id(mut self, plan_id: Option<PlanId>) -> Self {
        self.plan_id = plan_id;
        self
    }

    /// Sets the responsible user.
    #[must_use]
    pub const fn with_user_id(mut self, user_id: Option<UserId>) -> Self {
        self.user_id = user_id;
        self
    }

    /// Sets the summary.
    #[must_use]
    pub fn with_summary(mut self, summary: Option<String>) -> Self {
        self.summary = summary;
        self
    }

    /// Sets the estimated impact.
    #[must_use]
    pub fn with_estimated_impact(mut self, estimated_impact: Option<String>) -> Self {
        self.estimated_impact = estimated_impact;
        self
    }

    /// Sets the planned date range. No ordering is enforced.
    #[must_use]
    pub const fn with_dates(
        mut self,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Self {
        self.start_date = start_date;
        self.end_date = end_date;
        self
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &Title {
        &self.title
    }

    /// Returns the owning plan, if any.
    #[must_use]
    pub const fn plan_id(&self) -> Option<PlanId> {
        self.plan_id
    }

    /// Returns the responsible user, if any.
    #[must_use]
    pub const fn user_id(&self) -> Option<UserId> {
        self.user_id
    }

    /// Returns the summary, if any.
    #[must_use]
    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    /// Returns the estimated impact, if any.
    #[must_use]
    pub fn estimated_impact(&self) -> Option<&str> {
        self.estimated_impact.as_deref()
    }

    /// Returns the planned start date, if any.
    #[must_use]
    pub const fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    /// Returns the planned end date, if any.
    #[must_use]
    pub const fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Field edits for an existing initiative.
///
/// `None` leaves a field untouched. Nullable fields take `Some(None)` to
/// clear them. There is no status field: status only changes
/// through a validated transition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitiativeChanges {
    title: Option<Title>,
    plan_id: Option<Option<PlanId>>,
    user_id: Option<Option<UserId>>,
    summary: Option<Option<String>>,
    estimated_impact: Option<Option<String>>,
    start_date: Option<Option<NaiveDate>>,
    end_date: Option<Option<NaiveDate>>,
}

impl InitiativeChanges {
    /// Creates an empty edit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: Title) -> Self {
        self.title = Some(title);
        self
    }

    /// Replaces or clears the owning plan.
    #[must_use]
    pub const fn with_plan_id(mut self, plan_id: Option<PlanId>) -> Self {
        self.plan_id = Some(plan_id);
        self
    }

    /// Replaces or clears the responsible user.
    #[must_use]
    pub const fn with_user_id(mut self, user_id: Option<UserId>) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// Replaces or clears the summary.
    #[must_use]
    pub fn with_summary(mut self, summary: Option<String>) -> Self {
        self.summary = Some(summary);
        self
    }

    /// Replaces or clears the estimated impact.
    #[must_use]
    pub fn with_estimated_impact(mut self, estimated_impact: Option<String>) -> Self {
        self.estimated_impact = Some(estimated_impact);
        self
    }

    /// Replaces or clears the planned start date.
    #[must_use]
    pub const fn with_start_date(mut self, start_date: Option<NaiveDate>) -> Self {
        self.start_date = Some(start_date);
        self
    }

    /// Replaces or clears the planned end date.
    #[must_use]
    pub const fn with_end_date(mut self, end_date: Option<NaiveDate>) -> Self {
        self.end_date = Some(end_date);
        self
    }

    /// Returns whether the edit changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
