#![allow(dead_code)]

use ac_core::TokenPair;

use serde_json::{Value, json};

pub const ACCESS_TOKEN: &str = "access-token-1";
pub const REFRESH_TOKEN: &str = "refresh-token-1";
pub const STALE_ACCESS_TOKEN: &str = "stale-access-token";

pub const USER_EMAIL: &str = "jane@example.com";
pub const ADMIN_EMAIL: &str = "root@example.com";
pub const PASSWORD: &str = "correct-horse";

/// Token pair as the login endpoint issues it
pub fn token_pair() -> TokenPair {
    TokenPair::new(ACCESS_TOKEN, REFRESH_TOKEN)
}

/// Token pair left over from an earlier run
pub fn stale_token_pair() -> TokenPair {
    TokenPair::new(STALE_ACCESS_TOKEN, "stale-refresh-token")
}

pub fn login_response() -> Value {
    json!({
        "access_token": ACCESS_TOKEN,
        "refresh_token": REFRESH_TOKEN,
        "token_type": "bearer"
    })
}

/// `UserResponse` body for a regular account
pub fn user_json() -> Value {
    json!({
        "id": 7,
        "email": USER_EMAIL,
        "full_name": "Jane Doe",
        "role": "user",
        "is_active": true
    })
}

/// `UserResponse` body for an administrator
pub fn admin_json() -> Value {
    json!({
        "id": 1,
        "email": ADMIN_EMAIL,
        "full_name": "Root Admin",
        "role": "admin",
        "is_active": true
    })
}
