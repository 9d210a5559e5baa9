use crate::Requirement;

use serde::Serialize;

/// Screens of the console
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    Login,
    Register,
    Dashboard,
    Users,
    Unauthorized,
    NotFound,
}

impl View {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Register => "/register",
            Self::Dashboard => "/dashboard",
            Self::Users => "/users",
            Self::Unauthorized => "/unauthorized",
            Self::NotFound => "/404",
        }
    }

    pub fn requirement(&self) -> Requirement {
        match self {
            Self::Dashboard => Requirement::Authenticated,
            Self::Users => Requirement::Admin,
            Self::Login | Self::Register | Self::Unauthorized | Self::NotFound => {
                Requirement::Public
            }
        }
    }

    /// Match an already normalized path; unknown paths are `NotFound`.
    pub fn from_path(path: &str) -> Self {
        match path {
            "/login" => Self::Login,
            "/register" => Self::Register,
            "/dashboard" => Self::Dashboard,
            "/users" => Self::Users,
            "/unauthorized" => Self::Unauthorized,
            _ => Self::NotFound,
        }
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}
