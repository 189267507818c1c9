use dotenvy::dotenv;
use tracing::{error, info};
use uuid::Uuid;

fn init_logging() {
    // .env first so RUST_LOG / LOG_FORMAT apply
    dotenv().ok();
    common::utils::logging::init_logging_from_env();
    info!(service = "getsuite", event = "logger_init", "tracing subscriber initialized");
}

fn main() -> std::process::ExitCode {
    init_logging();

    // identity for correlating lifecycle events of this process
    let service_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    // panics go through tracing instead of stderr
    std::panic::set_hook(Box::new(move |info| {
        error!(
            service = "getsuite",
            event = "panic",
            %service_id,
            pid,
            message = %info,
            "unhandled panic occurred"
        );
    }));

    // config file, or environment defaults when it is absent
    let cfg = match configs::AppConfig::load_or_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(service = "getsuite", event = "config_invalid", error = %e, "invalid configuration");
            return std::process::ExitCode::FAILURE;
        }
    };
    let worker_threads = cfg.server.worker_threads;

    // build the tokio runtime with the configured worker count
    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = worker_threads { builder.worker_threads(w); }

    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "getsuite", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return std::process::ExitCode::FAILURE;
        }
    };

    info!(
        service = "getsuite",
        event = "start",
        %service_id,
        pid,
        version,
        threads = worker_threads.unwrap_or_default(),
        "mock record api starting"
    );

    // serve until Ctrl+C
    match rt.block_on(server::run(cfg)) {
        Ok(()) => {
            info!(service = "getsuite", event = "stop", %service_id, pid, "server stopped normally");
            std::process::ExitCode::SUCCESS
        }
        Err(e) => {
            error!(service = "getsuite", event = "run_failed", error = %e, "server::run returned error");
            std::process::ExitCode::FAILURE
        }
    }
}
