use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::{info, Level};

use azp_rewrite::{OpenAiChatModel, Rewriter};
use azp_web::{create_app, AppState, Config};

#[derive(Parser, Debug)]
#[command(author, version, about = "Herschrijft nieuwsartikelen vanuit AZ-perspectief", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the web tool.
    Serve {
        #[arg(long, default_value = "127.0.0.1")]
        addr: String,
        #[arg(long, default_value_t = 8000)]
        port: u16,
    },
    /// Rewrite a single article and print it to stdout.
    Rewrite { url: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Serve { addr, port } => serve(&addr, port).await,
        Command::Rewrite { url } => rewrite_once(&url).await,
    }
}

async fn serve(addr: &str, port: u16) -> anyhow::Result<()> {
    let config = Config::from_env();
    if !config.api_key_present() {
        tracing::warn!("OPENAI_API_KEY is not set; submissions will be rejected with a message");
    }
    let app = create_app(AppState::new(config));

    let bind = format!("{addr}:{port}");
    let listener = tokio::net::TcpListener::bind(&bind).await?;
    info!("azpress listening on http://{}", bind);
    axum::serve(listener, app).await?;
    Ok(())
}

async fn rewrite_once(url: &str) -> anyhow::Result<()> {
    let config = Config::from_env();
    let api_key = config
        .openai_api_key
        .clone()
        .ok_or_else(|| anyhow::anyhow!("OPENAI_API_KEY is not set"))?;

    let http = reqwest::Client::new();
    let downloaded = azp_extract::fetch_url(&http, url)
        .await
        .ok_or_else(|| anyhow::anyhow!("could not download {url}"))?;
    let text = azp_extract::extract_text(&downloaded);
    if azp_extract::word_count(&text) < 50 {
        anyhow::bail!("too little text extracted from {url}");
    }

    let article = azp_extract::source_article(url, text);
    let model = OpenAiChatModel::new(http, api_key, config.model, config.openai_base_url)?;
    let result = Rewriter::new(Arc::new(model)).rewrite(&article).await;

    if !result.title.is_empty() {
        println!("{}\n", result.title);
    }
    for paragraph in &result.body_paragraphs {
        println!("{paragraph}\n");
    }
    Ok(())
}
