pub(crate) mod error;
pub(crate) mod session_state;
pub(crate) mod session_status;
pub(crate) mod session_store;

pub use error::{Result as SessionResult, SessionError};
pub use session_state::SessionState;
pub use session_status::SessionStatus;
pub use session_store::SessionStore;
