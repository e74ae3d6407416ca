//! Terminal chat front-end for the BuildCraft API.

use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};

use buildcraft::client::api::DEFAULT_API_URL;
use buildcraft::client::render::render_message;
use buildcraft::client::{BuildApi, ChatSession, ClientError, HttpApi, SendError};
use buildcraft::config::DEFAULT_GAME;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error("stdin read failed: {0}")]
    Stdin(#[from] std::io::Error),
    #[error("API at {0} is not healthy")]
    Unhealthy(String),
}

#[derive(Parser, Debug)]
#[command(name = "buildcraft-chat", about = "Chat with the BuildCraft build advisor")]
struct Cli {
    #[arg(long, env = "BUILDCRAFT_API_URL", default_value = DEFAULT_API_URL)]
    base_url: String,

    #[arg(long, env = "BUILDCRAFT_GAME", default_value = DEFAULT_GAME)]
    game: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the API is up.
    Ping,
    /// Send a single prompt and print the reply.
    Ask {
        #[arg(required = true)]
        prompt: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let api = HttpApi::new(&cli.base_url)?;

    match cli.command {
        Some(Command::Ping) => run_ping(&api).await,
        Some(Command::Ask { prompt }) => run_ask(ChatSession::with_game(api, &cli.game), &prompt.join(" ")).await,
        None => run_repl(ChatSession::with_game(api, &cli.game)).await,
    }
}

async fn run_ping(api: &HttpApi) -> Result<(), CliError> {
    if !api.health().await {
        return Err(CliError::Unhealthy(api.base_url().to_owned()));
    }
    println!("ok");
    Ok(())
}

async fn run_ask(session: ChatSession<HttpApi>, prompt: &str) -> Result<(), CliError> {
    match session.send(prompt).await {
        Ok(reply) => print!("{}", render_message(&reply)),
        Err(SendError::Empty) => eprintln!("nothing to send"),
        Err(e) => eprintln!("{e}"),
    }
    Ok(())
}

async fn run_repl(session: ChatSession<HttpApi>) -> Result<(), CliError> {
    eprintln!("BuildCraft AI: describe a character, or /clear, /quit");
    if !session.health().await {
        eprintln!("warning: API is not reachable yet");
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "/quit" | "/exit" => break,
            "/clear" => {
                session.clear();
                eprintln!("(conversation cleared)");
            }
            _ => match session.send(&line).await {
                Ok(reply) => print!("{}", render_message(&reply)),
                Err(SendError::Empty) => {}
                Err(e) => eprintln!("{e}"),
            },
        }
    }
    Ok(())
}
