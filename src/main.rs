mod config;
mod engine;
mod file_logger;
mod format;
mod models;
mod options;
mod roles;
mod security;
mod segment;
mod ui;

use crate::config::Config;
use crate::engine::{Musebot, EMPTY_PROMPT_REPLY, FAULT_REPLY, MARKUP_REPLY};
use crate::file_logger::FileLogger;
use crate::models::{ChatRequest, ChatResponse, OptionsResponse};
use crate::options::{GenerationRequest, LengthBucket, OutputFormat};
use crate::roles::{Role, Tone};
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use dotenv::dotenv;
use std::net::SocketAddr;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Clone)]
struct AppState {
    bot: Arc<Musebot>,
    transcript: Arc<FileLogger>,
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env().expect("invalid environment configuration");
    let transcript =
        FileLogger::new(&config.transcript_path).expect("could not open transcript log");

    let state = AppState {
        bot: Arc::new(Musebot::new()),
        transcript: Arc::new(transcript),
    };

    let app = Router::new()
        .route("/", get(handle_index))
        .route("/options", get(handle_options))
        .route("/chat", post(handle_chat))
        .with_state(state);

    let addr: SocketAddr = format!("{}:{}", config.bind_host, config.port)
        .parse()
        .expect("invalid bind address");
    info!("Musebot listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

use axum_macros::debug_handler;

#[debug_handler]
async fn handle_index() -> Html<String> {
    Html(ui::index_page())
}

#[debug_handler]
async fn handle_options() -> Json<OptionsResponse> {
    Json(OptionsResponse {
        roles: Role::ALL.iter().map(Role::name).collect(),
        tones: Tone::ALL.iter().map(Tone::name).collect(),
        formats: OutputFormat::ALL.iter().map(OutputFormat::name).collect(),
        lengths: LengthBucket::ALL.iter().map(LengthBucket::name).collect(),
    })
}

#[debug_handler]
async fn handle_chat(
    axum::extract::State(state): axum::extract::State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let request = GenerationRequest::from_wire(payload);

    if request.prompt.is_empty() {
        return Json(ChatResponse {
            reply: EMPTY_PROMPT_REPLY.to_string(),
        });
    }
    if !security::validate_prompt(&request.prompt) {
        state.transcript.log_rejected(&request.prompt);
        return Json(ChatResponse {
            reply: MARKUP_REPLY.to_string(),
        });
    }

    state
        .transcript
        .log_prompt(request.role.name(), &request.prompt);

    // The pipeline is total by construction; if it ever panics anyway, the
    // caller still gets a reply instead of an error status.
    let reply = match std::panic::catch_unwind(AssertUnwindSafe(|| state.bot.generate(&request))) {
        Ok(reply) => reply,
        Err(_) => {
            error!("generation panicked, returning fallback reply");
            state.transcript.log_error("generation fault");
            FAULT_REPLY.to_string()
        }
    };

    state.transcript.log_reply(&reply);
    Json(ChatResponse { reply })
}
