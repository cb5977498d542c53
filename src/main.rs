use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use examforge::application::services::ConversionService;
use examforge::infrastructure::docx::DocxWriter;
use examforge::infrastructure::observability::{TracingConfig, init_tracing};
use examforge::infrastructure::storage::LocalOutputStore;
use examforge::infrastructure::xml::MoodleXmlAdapter;
use examforge::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();
    init_tracing(TracingConfig::from(&settings.logging), settings.server.port);

    let quiz_source = Arc::new(MoodleXmlAdapter);
    let document_writer = Arc::new(DocxWriter);
    let output_store = Arc::new(LocalOutputStore::new(settings.storage.output_dir.clone())?);

    let conversion_service = Arc::new(ConversionService::new(
        quiz_source,
        document_writer,
        output_store,
    ));

    let state = AppState {
        conversion_service,
        settings: settings.clone(),
    };
    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
