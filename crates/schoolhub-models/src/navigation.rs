//! Top-level sections of the app and the navigation endpoint's wire types.

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::{IntoParams, ToSchema};

use crate::identity::Role;

/// Top-level area of the app a viewer can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Login,
    Student,
    Teacher,
    Admin,
}

impl Section {
    /// Home section of a role.
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Student => Section::Student,
            Role::Teacher => Section::Teacher,
            Role::Admin => Section::Admin,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Login => "login",
            Section::Student => "student",
            Section::Teacher => "teacher",
            Section::Admin => "admin",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct NavigationQuery {
    /// Section the viewer is currently in
    pub section: Section,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum NavigationAction {
    Stay,
    Redirect,
}

/// Where the viewer should be: the current section on `stay`, the target on `redirect`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NavigationResponse {
    pub action: NavigationAction,
    pub section: Section,
}
