use crate::user_commands::UserCommands;

use ac_session::View;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Sign in and remember the session
    Login {
        #[arg(long)]
        email: String,

        #[arg(long, env = "AC_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Forget the saved session
    Logout,

    /// Create an account (does not sign in)
    Register {
        #[arg(long)]
        email: String,

        #[arg(long)]
        full_name: String,

        /// At least 8 characters
        #[arg(long, env = "AC_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Show the signed-in profile
    Me,

    /// Resolve a console path through the route guard
    Open {
        /// Path such as /dashboard or /users
        path: String,
    },

    /// User administration (administrators only)
    Users {
        #[command(subcommand)]
        action: UserCommands,
    },
}

impl Commands {
    /// Console view the command stands for; `open` is routed by its path instead.
    pub fn view(&self) -> Option<View> {
        match self {
            Commands::Login { .. } | Commands::Logout => Some(View::Login),
            Commands::Register { .. } => Some(View::Register),
            Commands::Me => Some(View::Dashboard),
            Commands::Users { .. } => Some(View::Users),
            Commands::Open { .. } => None,
        }
    }
}
