pub mod identity;
pub mod new_user;
pub mod registration;
pub mod role;
pub mod token_pair;
pub mod user_update;
