//! starlike entry point
//!
//! Renders the given messages into an in-memory page with their stars set from
//! the user's current likes, clicks every star once through the like
//! controller, and prints the resulting markup.
//!
//! Run with:
//! ```bash
//! LIKES_BASE_URL=http://127.0.0.1:5001 LIKES_SESSION_COOKIE='session=...' \
//!     cargo run -p starlike-controller -- 5 7 12
//! ```
//!
//! Configuration is loaded from environment variables or a `.env` file.

use std::sync::Arc;

use starlike_common::{
    try_init_tracing_with_config, AppConfig, AppError, AppResult, TracingConfig,
};
use starlike_controller::{ClickOutcome, ControllerContext, LikeController};
use starlike_core::{LikesBackend, MessageId};
use starlike_dom::{like_icon, render_message_list, Document, MessageView};
use starlike_http::HttpLikesBackend;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(AppError::from(e).exit_code());
        }
    };

    // Initialize tracing
    if let Err(e) = try_init_tracing_with_config(TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    if let Err(e) = run(config).await {
        error!(error = %e, code = e.error_code(), "starlike failed");
        std::process::exit(e.exit_code());
    }
}

async fn run(config: AppConfig) -> AppResult<()> {
    let ids = parse_ids(std::env::args().skip(1))?;

    info!(
        env = ?config.app.env,
        base_url = %config.backend.base_url,
        messages = ids.len(),
        "Configuration loaded"
    );

    let backend: Arc<dyn LikesBackend> = Arc::new(HttpLikesBackend::from_config(&config.backend)?);
    let selectors = config.selectors.clone();
    let controller = Arc::new(LikeController::new(ControllerContext::new(
        backend,
        selectors.clone(),
    )));

    // Initial render reflects the server's view of the user's likes
    let likes = controller.fetch_user_likes().await?;
    let doc = Document::new();
    let views: Vec<_> = ids
        .into_iter()
        .map(|id| {
            let text = format!("message {id}");
            MessageView::new(id, text)
        })
        .collect();
    render_message_list(&doc, &views, &likes, &selectors).map_err(AppError::internal)?;

    let clicks = doc.subscribe_clicks();
    let listener = tokio::spawn(Arc::clone(&controller).listen(clicks));

    for container in doc.elements_by_class(&selectors.message_class) {
        match like_icon(&container, &selectors) {
            Some(icon) => {
                doc.click(&icon);
            }
            None => warn!("Message rendered without a like icon"),
        }
    }
    doc.close_clicks();

    let outcomes = listener.await.map_err(AppError::internal)?;
    for outcome in &outcomes {
        match outcome {
            ClickOutcome::Toggled { message_id, state } => {
                info!(message_id = %message_id, liked = state.is_liked(), "Star updated");
            }
            ClickOutcome::Ignored => {}
            ClickOutcome::Failed(e) => warn!(error = %e, "Star left unchanged"),
        }
    }

    println!("{}", doc.outer_html());

    Ok(())
}

fn parse_ids(args: impl Iterator<Item = String>) -> AppResult<Vec<MessageId>> {
    let ids = args
        .map(|arg| MessageId::parse(&arg))
        .collect::<Result<Vec<_>, _>>()
        .map_err(AppError::invalid_input)?;

    if ids.is_empty() {
        return Err(AppError::invalid_input("usage: starlike <message-id>..."));
    }
    Ok(ids)
}
