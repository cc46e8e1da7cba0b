use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use research_agent::agent::ResearchAgent;
use research_agent::config::{Config, ConfigError};
use research_agent::llm::{ChatModel, OpenAiChatModel};
use research_agent::services::{HistoryService, ResearchService};
use research_agent::store::{AppwriteStore, ResearchStore};
use research_agent::tools::{NoteWriter, PageFetcher, TavilySearch, ToolRegistry};
use research_agent::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "research_agent=debug,tower_http=debug,axum=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(ConfigError::MissingVars(missing)) => {
            for name in &missing {
                error!(var = %name, "required environment variable is not set");
            }
            std::process::exit(1);
        }
        Err(e) => {
            error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let model: Arc<dyn ChatModel> = Arc::new(OpenAiChatModel::new(
        &config.openai.api_key,
        &config.openai.model,
    ));
    let tools = ToolRegistry::new(
        TavilySearch::new(&config.tavily.api_key),
        PageFetcher::new(),
        NoteWriter::new(),
    );
    let agent = ResearchAgent::new(model, tools);

    let store: Arc<dyn ResearchStore> = Arc::new(AppwriteStore::new(config.appwrite.clone()));
    let state = AppState {
        research: Arc::new(ResearchService::new(agent, store.clone())),
        history: Arc::new(HistoryService::new(store)),
        config: config.clone(),
    };

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, model = %config.openai.model, "research agent backend listening");

    axum::serve(listener, app).await?;
    Ok(())
}
