use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use posts_manager::{
    client::HttpPostsApi,
    manager::PostManager,
    models::posts::PostId,
    notify::ConsoleNotifier,
    view::render_posts,
    AppState, Config,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Manage posts through a small JSON API")]
struct Cli {
    /// Base URL of the posts API, e.g. http://localhost:8080
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the posts API server (default)
    Serve,
    /// Print every post
    List,
    /// Create a post
    Add {
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        content: Option<String>,
        #[arg(long)]
        published: Option<bool>,
        /// Fill the form with generated example values
        #[arg(long)]
        random: bool,
    },
    /// Delete a post by id
    Delete { id: PostId },
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

async fn serve(config: Config) -> anyhow::Result<()> {
    let port = config.port;
    let app = AppState::from_config(config)
        .await
        .context("🔥 Failed to initialise storage")?
        .into_router();

    let listener = tokio::net::TcpListener::bind(format!("[::]:{}", port))
        .await
        .with_context(|| format!("🔥 Failed to bind port {port}"))?;
    info!("🚀 Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = Config::init();
    let api_url = cli.api_url.unwrap_or_else(|| config.api_url.clone());

    let command = cli.command.unwrap_or(Command::Serve);
    if let Command::Serve = command {
        return serve(config).await;
    }

    let mut manager = PostManager::new(HttpPostsApi::new(api_url), ConsoleNotifier::stdout());
    manager.load_all().await;

    match command {
        Command::Serve | Command::List => {}
        Command::Add {
            title,
            content,
            published,
            random,
        } => {
            manager.open_create_dialog();
            if random {
                manager.fill_random();
            }
            let form = manager.form_mut();
            if let Some(title) = title {
                form.title = title;
            }
            if let Some(content) = content {
                form.content = content;
            }
            if published.is_some() {
                form.published = published;
            }

            let draft = manager.form().draft()?;
            manager.create(draft).await;
        }
        Command::Delete { id } => {
            let post = manager
                .posts()
                .iter()
                .find(|p| p.id == id)
                .cloned()
                .ok_or_else(|| anyhow!("no post with id {id}"))?;
            manager.delete(&post).await;
        }
    }

    println!("{}", render_posts(manager.posts()));
    Ok(())
}
