use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;
use schoolhub::cli::seeder::{SeedConfig, clear_seeded_data, seed};
use schoolhub::cli::{login_dry_run, send_notification};
use schoolhub_config::{PushConfig, RemoteConfig};
use schoolhub_push::ExpoGateway;
use schoolhub_remote::RemoteClient;

#[derive(Parser)]
#[command(name = "schoolhub-cli")]
#[command(about = "SchoolHub CLI - Administrative tools for SchoolHub", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send a push notification to device tokens
    Notify {
        /// Expo push token; repeat for several devices
        #[arg(short = 't', long = "token", required = true)]
        tokens: Vec<String>,

        #[arg(long)]
        title: String,

        #[arg(long)]
        body: String,
    },
    /// Sign in and print the section the app would open
    Login {
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Seed fake lectures and exams
    Seed {
        #[arg(short = 'l', long, default_value = "20")]
        lectures: usize,

        #[arg(short = 'x', long, default_value = "5")]
        exams: usize,

        /// Put every generated row in this class
        #[arg(short = 'c', long)]
        class: Option<String>,
    },
    /// Remove seeded lectures and exams
    ClearSeed,
}

/// Remote client for data commands; `SUPABASE_SERVICE_KEY` bypasses row security when set.
fn data_client() -> RemoteClient {
    let remote = RemoteClient::new(RemoteConfig::from_env());
    match std::env::var("SUPABASE_SERVICE_KEY") {
        Ok(key) if !key.trim().is_empty() => remote.as_user(key.trim()),
        _ => remote,
    }
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Notify {
            tokens,
            title,
            body,
        } => handle_notify(tokens, &title, &body).await,
        Commands::Login { email, password } => handle_login(email, password).await,
        Commands::Seed {
            lectures,
            exams,
            class,
        } => {
            handle_seed(SeedConfig {
                lectures,
                exams,
                class,
            })
            .await
        }
        Commands::ClearSeed => handle_clear_seed().await,
    }
}

async fn handle_notify(tokens: Vec<String>, title: &str, body: &str) {
    let gateway = ExpoGateway::new(PushConfig::from_env());

    match send_notification(&gateway, tokens, title, body).await {
        Ok(report) => {
            println!(
                "\nSent {} message(s): {} ok, {} error(s)",
                report.total_sent, report.success_count, report.error_count
            );
            match serde_json::to_string_pretty(&report) {
                Ok(json) => println!("{}", json),
                Err(e) => eprintln!("Failed to render report: {}", e),
            }
        }
        Err(e) => {
            eprintln!("\nError sending notification: {}", e);
            std::process::exit(1);
        }
    }
}

async fn handle_login(email: Option<String>, password: Option<String>) {
    let email = email.unwrap_or_else(|| {
        Input::new()
            .with_prompt("Email address")
            .interact_text()
            .expect("Failed to read email")
    });

    let password = password.unwrap_or_else(|| {
        Password::new()
            .with_prompt("Password")
            .interact()
            .expect("Failed to read password")
    });

    let remote = RemoteClient::new(RemoteConfig::from_env());
    match login_dry_run(remote, &email, &password).await {
        Ok(section) => {
            println!("\nSigned in as {}", email);
            println!("   Destination: {}", section);
        }
        Err(e) => {
            eprintln!("\nError signing in: {}", e);
            std::process::exit(1);
        }
    }
}

async fn handle_seed(config: SeedConfig) {
    if let Err(e) = seed(&data_client(), config).await {
        eprintln!("\nError seeding data: {}", e);
        std::process::exit(1);
    }
}

async fn handle_clear_seed() {
    if let Err(e) = clear_seeded_data(&data_client()).await {
        eprintln!("\nError clearing seeded data: {}", e);
        std::process::exit(1);
    }
}
