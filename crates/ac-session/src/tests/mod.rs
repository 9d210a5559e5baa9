
use ac_core::{Identity, Role};

pub(crate) fn identity(role: Role) -> Identity {
    Identity {
        id: 1,
        email: "jane@example.com".to_string(),
        full_name: Some("Jane Doe".to_string()),
        role,
        is_active: true,
    }
}
