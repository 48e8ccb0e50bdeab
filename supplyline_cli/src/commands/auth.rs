use crate::error::MainError;
use crate::output::{opt, print_value};
use crate::state::AppState;
use clap::Subcommand;
use shared::supplyline::auth::LoginRequest;

#[derive(Subcommand, Debug)]
pub enum AuthCommands {
    /// Log in and print the access token for SUPPLYLINE__API__TOKEN
    Login {
        #[arg(long)]
        employee_number: String,
        #[arg(long, env = "SUPPLYLINE_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// End the current session
    Logout,

    /// Show whether the configured token is valid
    Status,
}

pub async fn run(cmd: AuthCommands, state: &AppState) -> Result<(), MainError> {
    match cmd {
        AuthCommands::Login {
            employee_number,
            password,
        } => {
            let response = state
                .client()
                .login(&LoginRequest {
                    employee_number,
                    password,
                })
                .await?;
            eprintln!("Logged in as {}", response.user.name);
            println!("{}", response.access_token);
            Ok(())
        }
        AuthCommands::Logout => {
            let ack = state.client().logout().await?;
            println!("{}", ack.message.unwrap_or_else(|| "Logged out".to_string()));
            Ok(())
        }
        AuthCommands::Status => {
            let status = state.client().auth_status().await?;
            print_value(state.format, &status, |s| {
                vec![
                    ("authenticated", s.authenticated.to_string()),
                    ("user", opt(s.user.as_ref().map(|u| u.name.as_str()))),
                    (
                        "employee number",
                        opt(s.user.as_ref().map(|u| u.employee_number.as_str())),
                    ),
                ]
            })
        }
    }
}
