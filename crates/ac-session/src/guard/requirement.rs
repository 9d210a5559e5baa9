use serde::Serialize;

/// Capability a view demands of the session before it may render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Requirement {
    /// Anyone may see it
    Public,
    /// A signed-in identity
    Authenticated,
    /// A signed-in identity with the admin role
    Admin,
}
