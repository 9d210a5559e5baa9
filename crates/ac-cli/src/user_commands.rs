use clap::Subcommand;

#[derive(Subcommand)]
pub enum UserCommands {
    /// List users
    List {
        /// Number of users to skip
        #[arg(long, default_value_t = 0)]
        skip: u32,

        /// Page size (default: api.page_size from config)
        #[arg(long)]
        limit: Option<u32>,
    },

    /// Get a user by ID
    Get { id: i64 },

    /// Create a user
    Create {
        #[arg(long)]
        email: String,

        #[arg(long, env = "AC_PASSWORD", hide_env_values = true)]
        password: String,

        #[arg(long)]
        full_name: Option<String>,

        /// Role: user or admin (default: user)
        #[arg(long, value_parser = ["user", "admin"])]
        role: Option<String>,
    },

    /// Update a user; only the given fields change
    Update {
        id: i64,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        full_name: Option<String>,

        /// New password (empty leaves it unchanged)
        #[arg(long)]
        password: Option<String>,

        /// Role: user or admin
        #[arg(long, value_parser = ["user", "admin"])]
        role: Option<String>,

        /// Enable or disable the account
        #[arg(long)]
        active: Option<bool>,
    },

    /// Delete a user
    Delete { id: i64 },
}
