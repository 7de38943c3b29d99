//! Listing filters and paginated result sets.

use super::{InitiativeStatus, PlanId, UserId};
use serde::{Deserialize, Serialize};

/// Conjunctive filter for initiative listings.
///
/// Every provided field must match; omitted fields impose no constraint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitiativeFilter {
    /// Required status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<InitiativeStatus>,
    /// Required owning plan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<PlanId>,
    /// Required responsible user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
}

impl InitiativeFilter {
    /// Creates a filter that matches every initiative.
    #[must_use]
    pub const fn any() -> Self {
        Self {
            status: None,
            plan_id: None,
            user_id: None,
        }
    }

    /// Restricts the listing to one status.
    #[must_use]
    pub const fn with_status(mut self, status: InitiativeStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Restricts the listing to one plan.
    #[must_use]
    pub const fn with_plan_id(mut self, plan_id: PlanId) -> Self {
        self.plan_id = Some(plan_id);
        self
    }

    /// Restricts the listing to one responsible user.
    #[must_use]
    pub const fn with_user_id(mut self, user_id: UserId) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// Returns whether the given attributes satisfy every provided field.
    #[must_use]
    pub fn matches(
        &self,
        status: InitiativeStatus,
        plan_id: Option<PlanId>,
        user_id: Option<UserId>,
    ) -> bool {
        self.status.is_none_or(|wanted| wanted == status)
            && self.plan_id.is_none_or(|wanted| plan_id == Some(wanted))
            && self.user_id.is_none_or(|wanted| user_id == Some(wanted))
    }
}

/// Requested page of a listing. Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    per_page: u32,
}

impl PageRequest {
    /// Default page size used by the dashboard.
    pub const DEFAULT_PER_PAGE: u32 = 15;

    /// Creates a page request, clamping both values to at least one.
    #[must_use]
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
        }
    }

    /// Returns the first page with the given size.
    #[must_use]
    pub fn first(per_page: u32) -> Self {
        Self::new(1, per_page)
    }

    /// Returns the 1-based page number.
    #[must_use]
    pub const fn page(self) -> u32 {
        self.page
    }

    /// Returns the page size.
    #[must_use]
    pub const fn per_page(self) -> u32 {
        self.per_page
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first(Self::DEFAULT_PER_PAGE)
    }
}

/// One page of a listing, in the backend's pagination envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Records on this page.
    pub data: Vec<T>,
    /// 1-based number of this page.
    pub current_page: u32,
    /// Number of the last page. At least one, even for empty listings.
    pub last_page: u32,
    /// Link to the next page, when the backend provides one.
    pub next_page_url: Option<String>,
    /// Link to the previous page, when the backend provides one.
    pub prev_page_url: Option<String>,
    /// Total number of records across all pages.
    pub total: u64,
}

impl<T> Page<T> {
    /// Slices an already filtered and ordered listing into one page.
    #[must_use]
    pub fn from_sorted(records: Vec<T>, request: PageRequest) -> Self {
        let total = records.len();
        let per_page = usize::try_from(request.per_page()).unwrap_or(usize::MAX);
        let last_page = total.div_ceil(per_page).max(1);
        let skip = usize::try_from(request.page().saturating_sub(1))
            .unwrap_or(usize::MAX)
            .saturating_mul(per_page);
        let data = records.into_iter().skip(skip).take(per_page).collect();

        Self {
            data,
            current_page: request.page(),
            last_page: u32::try_from(last_page).unwrap_or(u32::MAX),
            next_page_url: None,
            prev_page_url: None,
            total: u64::try_from(total).unwrap_or(u64::MAX),
        }
    }

    /// Returns whether a later page exists.
    #[must_use]
    pub const fn has_more(&self) -> bool {
        self.current_page < self.last_page
    }
}
