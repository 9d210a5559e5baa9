pub mod error;
pub mod models;
pub mod validation;


pub use error::{CoreError, Result};
pub use models::identity::Identity;
pub use models::new_user::NewUser;
pub use models::registration::Registration;
pub use models::role::Role;
pub use models::token_pair::TokenPair;
pub use models::user_update::UserUpdate;
pub use validation::MIN_PASSWORD_LENGTH;
