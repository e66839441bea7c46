//! `portal` - command-line front end for the Career Recommendation Portal

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use portal_client::{
    AuthClient, Dashboard, FileStorage, LoginForm, RegistrationForm, TerminalNotifier,
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "portal", version, about = "Career Recommendation Portal client")]
struct Cli {
    /// Server root URL
    #[arg(
        long,
        env = "PORTAL_API_URL",
        default_value = "http://localhost:5000",
        global = true
    )]
    api_url: String,

    /// Directory holding the saved session
    #[arg(long, env = "PORTAL_STATE_DIR", global = true)]
    state_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create an account
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(short, long)]
        username: String,
        #[arg(short, long)]
        password: String,
        /// Defaults to the password
        #[arg(long)]
        confirm_password: Option<String>,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        address: String,
        #[arg(long)]
        age: String,
        /// YYYY-MM-DD
        #[arg(long)]
        date_of_birth: String,
    },

    /// Log in and save the session
    Login {
        #[arg(short, long)]
        username: String,
        #[arg(short, long)]
        password: String,
    },

    /// Forget the saved session
    Logout,

    /// Show the account behind the saved session
    Whoami,

    /// Show the dashboard
    Dashboard,
}

fn default_state_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "career-portal")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".portal"))
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let state_dir = cli.state_dir.unwrap_or_else(default_state_dir);
    tracing::debug!(state_dir = %state_dir.display(), api_url = %cli.api_url, "Starting");

    let mut client = AuthClient::new(
        cli.api_url,
        Arc::new(FileStorage::new(state_dir)),
        Arc::new(TerminalNotifier),
    )?;

    let ok = match cli.command {
        Command::Register {
            name,
            email,
            username,
            password,
            confirm_password,
            phone,
            address,
            age,
            date_of_birth,
        } => {
            let form = RegistrationForm {
                name,
                email,
                username,
                confirm_password: confirm_password.unwrap_or_else(|| password.clone()),
                password,
                phone,
                address,
                age,
                date_of_birth,
            };
            match form.validate() {
                Ok(data) => client.register(&data).await,
                Err(errors) => {
                    eprintln!("{errors}");
                    false
                }
            }
        }

        Command::Login { username, password } => {
            match (LoginForm { username, password }).validate() {
                Ok(credentials) => client.login(&credentials).await.is_some(),
                Err(errors) => {
                    eprintln!("{errors}");
                    false
                }
            }
        }

        Command::Logout => {
            client.logout();
            true
        }

        Command::Whoami => match client.current_user().await {
            Some(user) => {
                println!("{} <{}>", user.username, user.email);
                if let Some(name) = &user.name {
                    println!("name: {name}");
                }
                println!("role: {}", user.role.as_deref().unwrap_or("user"));
                true
            }
            None => {
                eprintln!("Not logged in");
                false
            }
        },

        Command::Dashboard => {
            let user = match client.current_user().await {
                Some(user) => Some(user),
                None => client.cached_user().cloned(),
            };
            match user {
                Some(user) => {
                    print!("{}", Dashboard::new(&user));
                    true
                }
                None => {
                    eprintln!("Please log in first");
                    false
                }
            }
        }
    };

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
