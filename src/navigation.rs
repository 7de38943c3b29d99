//! Per-role dashboard navigation.
//!
//! Every role maps to one ordered menu in [`MENUS`]. Callers resolve the
//! role once and render whatever the table holds.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Dashboard user role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Platform administrator.
    Admin,
    /// Academic coordination.
    Academico,
    /// Strategic planning office.
    Estrategico,
    /// Technology office.
    Tecnologia,
    /// Teaching staff.
    Docente,
    /// Students.
    Estudiante,
}

impl Role {
    /// Every role, in table order.
    pub const ALL: [Self; 6] = [
        Self::Admin,
        Self::Academico,
        Self::Estrategico,
        Self::Tecnologia,
        Self::Docente,
        Self::Estudiante,
    ];

    /// Returns the wire name of the role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Academico => "academico",
            Self::Estrategico => "estrategico",
            Self::Tecnologia => "tecnologia",
            Self::Docente => "docente",
            Self::Estudiante => "estudiante",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role text that matches no known role.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role: {0}")]
pub struct UnknownRoleError(pub String);

impl TryFrom<&str> for Role {
    type Error = UnknownRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == normalized)
            .ok_or_else(|| UnknownRoleError(value.to_owned()))
    }
}

impl FromStr for Role {
    type Err = UnknownRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

/// One navigation link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    /// Text shown to the user.
    pub label: &'static str,
    /// Dashboard route the entry links to.
    pub route: &'static str,
}

const fn entry(label: &'static str, route: &'static str) -> MenuEntry {
    MenuEntry { label, route }
}

const DASHBOARD: MenuEntry = entry("Inicio", "/dashboard");
const PLANS: MenuEntry = entry("Planes estratégicos", "/dashboard/plans");
const INITIATIVES: MenuEntry = entry("Iniciativas", "/dashboard/initiatives");
const EVALUATIONS: MenuEntry = entry("Evaluaciones", "/dashboard/evaluations");
const DOCUMENTS: MenuEntry = entry("Documentos", "/dashboard/documents");
const USERS: MenuEntry = entry("Usuarios", "/dashboard/users");
const PROFILE: MenuEntry = entry("Perfil", "/dashboard/profile");

/// Role to menu table.
pub static MENUS: [(Role, &[MenuEntry]); 6] = [
    (
        Role::Admin,
        &[DASHBOARD, PLANS, INITIATIVES, EVALUATIONS, DOCUMENTS, USERS, PROFILE],
    ),
    (
        Role::Academico,
        &[DASHBOARD, INITIATIVES, EVALUATIONS, DOCUMENTS, PROFILE],
    ),
    (
        Role::Estrategico,
        &[DASHBOARD, PLANS, INITIATIVES, EVALUATIONS, PROFILE],
    ),
    (Role::Tecnologia, &[DASHBOARD, INITIATIVES, DOCUMENTS, PROFILE]),
    (Role::Docente, &[DASHBOARD, INITIATIVES, PROFILE]),
    (Role::Estudiante, &[DASHBOARD, PROFILE]),
];

/// Returns the ordered menu for `role`.
#[must_use]
pub fn menu_for(role: Role) -> &'static [MenuEntry] {
    MENUS
        .iter()
        .find_map(|(candidate, menu)| (*candidate == role).then_some(*menu))
        .unwrap_or_default()
}
