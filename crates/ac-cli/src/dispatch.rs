//! Runs one parsed command against an initialized session.
//!
//! Every command except `open` first passes the route guard for the view it
//! stands for, so the console refuses exactly what the UI would redirect away
//! from.

use crate::commands::Commands;
use crate::error::{CliError, Result as CliErrorResult};
use crate::user_commands::UserCommands;

use ac_core::{Identity, NewUser, Registration, Role, UserUpdate};
use ac_session::{GuardDecision, SessionError, SessionStore, TokenStore, View};

use log::debug;
use serde::Serialize;
use serde_json::{Value, json};

/// Profile view of the signed-in account
#[derive(Debug, Serialize)]
pub struct Profile {
    pub id: i64,
    pub email: String,
    pub display_name: String,
    pub role: Role,
    pub role_label: &'static str,
    pub is_active: bool,
}

impl From<&Identity> for Profile {
    fn from(identity: &Identity) -> Self {
        Self {
            id: identity.id,
            email: identity.email.clone(),
            display_name: identity.display_name().to_string(),
            role: identity.role,
            role_label: identity.role.label(),
            is_active: identity.is_active,
        }
    }
}

pub async fn execute<T: TokenStore>(
    session: &SessionStore<T>,
    command: Commands,
    page_size: u32,
) -> CliErrorResult<Value> {
    if let Some(view) = command.view() {
        authorize(session, view)?;
    }

    match command {
        Commands::Login { email, password } => {
            let identity = session.login(&email, &password).await?;
            Ok(serde_json::to_value(identity)?)
        }
        Commands::Logout => {
            session.logout()?;
            Ok(json!({ "signed_out": true }))
        }
        Commands::Register {
            email,
            full_name,
            password,
        } => {
            let registration = Registration::new(email, full_name, password);
            let identity = session.register(&registration).await?;
            Ok(serde_json::to_value(identity)?)
        }
        Commands::Me => {
            let identity = session
                .current_identity()
                .ok_or_else(|| CliError::redirected(View::Dashboard, View::Login))?;
            Ok(serde_json::to_value(Profile::from(&identity))?)
        }
        Commands::Open { path } => Ok(serde_json::to_value(session.navigate(&path))?),
        Commands::Users { action } => execute_user_command(session, action, page_size).await,
    }
}

/// Run the guard for `view`, turning redirects into errors.
fn authorize<T: TokenStore>(session: &SessionStore<T>, view: View) -> CliErrorResult<()> {
    let decision = session.check(view.requirement());
    debug!("Guard for {view}: {decision:?}");

    match decision {
        GuardDecision::Allow => Ok(()),
        GuardDecision::Defer => Err(SessionError::not_ready().into()),
        GuardDecision::RedirectToLogin => Err(CliError::redirected(view, View::Login)),
        GuardDecision::RedirectToUnauthorized => {
            Err(CliError::redirected(view, View::Unauthorized))
        }
    }
}

async fn execute_user_command<T: TokenStore>(
    session: &SessionStore<T>,
    action: UserCommands,
    page_size: u32,
) -> CliErrorResult<Value> {
    let token = session
        .access_token()
        .ok_or_else(|| CliError::redirected(View::Users, View::Login))?;
    let client = session.client();

    match action {
        UserCommands::List { skip, limit } => {
            let users = client
                .list_users(&token, skip, limit.unwrap_or(page_size))
                .await?;
            Ok(serde_json::to_value(users)?)
        }
        UserCommands::Get { id } => Ok(serde_json::to_value(client.get_user(&token, id).await?)?),
        UserCommands::Create {
            email,
            password,
            full_name,
            role,
        } => {
            let mut user = NewUser::new(email, password);
            if let Some(full_name) = full_name {
                user = user.with_full_name(full_name);
            }
            if let Some(role) = role {
                user = user.with_role(role.parse::<Role>()?);
            }
            user.validate()?;

            Ok(serde_json::to_value(client.create_user(&token, &user).await?)?)
        }
        UserCommands::Update {
            id,
            email,
            full_name,
            password,
            role,
            active,
        } => {
            let update = UserUpdate {
                email,
                full_name,
                password,
                is_active: active,
                role: role.as_deref().map(str::parse::<Role>).transpose()?,
            }
            .normalized()?;

            if update.is_empty() {
                return Err(CliError::usage("Nothing to update: pass at least one field"));
            }

            Ok(serde_json::to_value(
                client.update_user(&token, id, &update).await?,
            )?)
        }
        UserCommands::Delete { id } => {
            Ok(serde_json::to_value(client.delete_user(&token, id).await?)?)
        }
    }
}
