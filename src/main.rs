use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};

use myflix::api::{ApiClient, ApiError, Credentials, ErrorKind, Movie, Registration};
use myflix::config::Config;
use myflix::logging::init_tracing;
use myflix::session::{FileStore, SecureString, Session};
use myflix::ui::movies::{MovieListScreen, MovieListState};
use myflix::ui::profile::ProfileScreen;
use myflix::ui::{Navbar, Navigation};

const NOT_SIGNED_IN: &str = "Not signed in; run `myflix login` first.";

#[derive(Debug, Parser)]
#[command(name = "myflix", version, about = "Browse the myFlix movie catalog")]
struct Cli {
    /// Config file (default: platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the API base URL from the config
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Override the session file location
    #[arg(long, global = true)]
    session: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create a new account
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        birthday: Option<String>,
    },
    /// Log in and store the session
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    /// Clear the stored session
    Logout,
    /// Show the cached user
    Whoami,
    /// List all movies
    Movies,
    /// Show one movie by title
    Movie { title: String },
    /// Show a genre by name
    Genre { name: String },
    /// Show a director by name
    Director { name: String },
    /// List the signed-in user's favorite movie ids
    Favorites,
    /// Change a favorite
    #[command(subcommand)]
    Favorite(FavoriteCommand),
    /// Show or change the profile
    #[command(subcommand)]
    Profile(ProfileCommand),
}

#[derive(Debug, Subcommand)]
enum FavoriteCommand {
    /// Add a movie to favorites
    Add { movie_id: String },
    /// Remove a movie from favorites
    Remove { movie_id: String },
    /// Add or remove depending on the current state
    Toggle {
        movie_id: String,
        /// Undo the local change if the server rejects it
        #[arg(long)]
        rollback: bool,
    },
}

#[derive(Debug, Subcommand)]
enum ProfileCommand {
    /// Show the profile and favorites
    Show,
    /// Update profile fields
    Update(ProfileFields),
    /// Delete the account
    Delete {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Debug, Args)]
struct ProfileFields {
    #[arg(long)]
    username: Option<String>,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    password: Option<String>,
}

/// How a command ended, short of an internal error.
enum Outcome {
    Done,
    NotSignedIn,
    Failed(ApiError),
    /// A screen already turned the failure into a message.
    Reported(String),
}

impl From<Result<(), ApiError>> for Outcome {
    fn from(result: Result<(), ApiError>) -> Self {
        match result {
            Ok(()) => Outcome::Done,
            Err(ApiError::NoSession) => Outcome::NotSignedIn,
            Err(e) => Outcome::Failed(e),
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(Outcome::Done) => ExitCode::SUCCESS,
        Ok(Outcome::NotSignedIn) => {
            eprintln!("{}", NOT_SIGNED_IN);
            ExitCode::from(1)
        }
        Ok(Outcome::Failed(e)) => {
            tracing::debug!(error = %e, kind = ?e.kind(), "Command failed");
            eprintln!("{}", e.user_message());
            ExitCode::from(1)
        }
        Ok(Outcome::Reported(message)) => {
            eprintln!("{}", message);
            ExitCode::from(1)
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(1)
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<Outcome> {
    let config = load_config(&cli)?;
    let store = FileStore::new(config.session.resolve_path());
    let session = Session::new(Arc::new(store));
    let client = ApiClient::new(&config.api, session).context("Failed to create API client")?;

    let outcome: Outcome = match cli.command {
        Command::Register {
            username,
            password,
            email,
            birthday,
        } => {
            let details = Registration {
                username,
                password: SecureString::new(password),
                email,
                birthday,
            };
            client
                .register(&details)
                .await
                .map(|user| println!("Registered {} <{}>", user.username, user.email))
                .into()
        }
        Command::Login { username, password } => login(&client, username, password).await?,
        Command::Logout => {
            Navbar::logout(client.session())?;
            println!("Logged out.");
            Outcome::Done
        }
        Command::Whoami => {
            let user = client.cached_user();
            if user.is_empty() {
                Outcome::NotSignedIn
            } else {
                println!("{} <{}> ({} favorites)", user.username, user.email, user.favorite_movies.len());
                Outcome::Done
            }
        }
        Command::Movies => list_movies(&client).await,
        Command::Movie { title } => client
            .get_movie(&title)
            .await
            .map(|movie| print_movie(&client, &movie, true))
            .into(),
        Command::Genre { name } => client
            .get_genre(&name)
            .await
            .map(|genre| println!("{}\n\n{}", genre.name, genre.description))
            .into(),
        Command::Director { name } => client
            .get_director(&name)
            .await
            .map(|director| println!("{}\n\n{}", director.name, director.bio))
            .into(),
        Command::Favorites => {
            let user = client.cached_user();
            if user.username.is_empty() {
                Outcome::NotSignedIn
            } else {
                client
                    .get_favorites(&user.username)
                    .await
                    .map(|favorites| favorites.iter().for_each(|id| println!("{}", id)))
                    .into()
            }
        }
        Command::Favorite(command) => favorite(&client, command).await,
        Command::Profile(command) => profile(&client, command).await?,
    };

    Ok(outcome)
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::read_from(&path)?;

    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }
    if let Some(session) = &cli.session {
        config.session.path = Some(session.clone());
    }
    config.validate()?;
    Ok(config)
}

async fn login(client: &ApiClient, username: String, password: String) -> anyhow::Result<Outcome> {
    let credentials = Credentials::new(username, password);
    let login = match client.login(&credentials).await {
        Ok(login) => login,
        Err(e) => return Ok(Outcome::Failed(e)),
    };

    client
        .session()
        .persist_login(&login.token, &login.user)
        .context("Failed to store session")?;
    println!("Logged in as {}.", login.user.username);
    Ok(Outcome::Done)
}

async fn list_movies(client: &ApiClient) -> Outcome {
    let mut screen = MovieListScreen::new();
    if let Navigation::Redirect(_) = screen.init(client).await {
        return Outcome::NotSignedIn;
    }

    if let MovieListState::Failed { message } = screen.state() {
        return Outcome::Reported(message.clone());
    }

    for movie in screen.state().movies() {
        print_movie(client, movie, false);
    }
    Outcome::Done
}

fn print_movie(client: &ApiClient, movie: &Movie, detailed: bool) {
    let marker = if client.is_favorite(&movie.id) { "*" } else { " " };
    println!(
        "{} {}  {}  [{} / {}]",
        marker, movie.id, movie.title, movie.genre.name, movie.director.name
    );
    if detailed {
        println!("\n{}", movie.description);
    }
}

async fn favorite(client: &ApiClient, command: FavoriteCommand) -> Outcome {
    match command {
        FavoriteCommand::Add { movie_id } => client
            .add_favorite(&movie_id)
            .await
            .map(|_| println!("Added to favorites"))
            .into(),
        FavoriteCommand::Remove { movie_id } => client
            .remove_favorite(&movie_id)
            .await
            .map(|_| println!("Removed from favorites"))
            .into(),
        FavoriteCommand::Toggle { movie_id, rollback } => {
            let mut screen = MovieListScreen::new();
            let outcome = screen.toggle_favorite(client, &movie_id).await;
            match outcome.error {
                None => {
                    println!("{}", outcome.notice());
                    return Outcome::Done;
                }
                Some(ErrorKind::NoSession) => return Outcome::NotSignedIn,
                Some(_) => {}
            }
            if rollback && outcome.is_diverged() {
                match client.revert_favorite(&outcome) {
                    Ok(_) => println!("Local change reverted."),
                    Err(e) => return Outcome::Failed(e),
                }
            }
            Outcome::Reported(outcome.notice().to_string())
        }
    }
}

async fn profile(client: &ApiClient, command: ProfileCommand) -> anyhow::Result<Outcome> {
    let mut screen = ProfileScreen::new();
    if let Navigation::Redirect(_) = screen.init(client).await {
        return Ok(Outcome::NotSignedIn);
    }

    let outcome: Outcome = match command {
        ProfileCommand::Show => {
            if let Some(user) = screen.state().user() {
                println!("Username: {}", user.username);
                println!("Email:    {}", user.email);
            }
            // Only a failed favorites load sets a notice during init.
            if let Some(notice) = screen.state().notice() {
                return Ok(Outcome::Reported(notice.to_string()));
            }
            println!("Favorites:");
            for id in screen.state().favorites() {
                println!("  {}", id);
            }
            Outcome::Done
        }
        ProfileCommand::Update(fields) => {
            if fields.username.is_none() && fields.email.is_none() && fields.password.is_none() {
                println!("Nothing to update.");
                return Ok(Outcome::Done);
            }
            if let Some(username) = fields.username {
                screen.edit_username(username);
            }
            if let Some(email) = fields.email {
                screen.edit_email(email);
            }
            if let Some(password) = fields.password {
                screen.edit_password(password);
            }
            screen
                .update_user(client)
                .await
                .map(|()| println!("User updated!"))
                .into()
        }
        ProfileCommand::Delete { yes } => {
            if !yes && !confirm("Are you sure you want to delete your account? This action cannot be undone.")? {
                screen.cancel_delete();
                println!("Cancelled.");
                return Ok(Outcome::Done);
            }
            screen.request_delete();
            match screen.confirm_delete(client).await {
                Ok(_) => {
                    println!("Account deleted.");
                    Outcome::Done
                }
                Err(e) => Outcome::from(Err(e)),
            }
        }
    };

    Ok(outcome)
}

fn confirm(prompt: &str) -> anyhow::Result<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}
