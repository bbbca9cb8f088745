//! Server-side rendering for Spin/WASI.

use brew_observability::{LogSink, LoggingConfig, StructuredLogger};
use leptos::{config::get_configuration, task::Executor as LeptosExecutor};
use leptos_wasi::{
    handler::HandlerError,
    prelude::{IncomingRequest, ResponseOutparam, WasiExecutor},
};
use wasi::exports::http::incoming_handler::Guest;
use wasi::http::proxy::export;
use wasi::http::types::{Fields, OutgoingBody, OutgoingResponse};

use crate::app::{shell, App};

struct BrewServer;

impl Guest for BrewServer {
    fn handle(request: IncomingRequest, response_out: ResponseOutparam) {
        let logger = LoggingConfig::default().logger("storefront-ssr", LogSink::Stderr);

        let executor = WasiExecutor::new(leptos_wasi::executor::Mode::Stalled);
        if let Err(e) = LeptosExecutor::init_local_custom_executor(executor.clone()) {
            logger
                .error_builder("executor init failed")
                .field("error", format!("{e:?}"))
                .emit();
            send_status(response_out, 500);
            return;
        }
        executor.run_until(async {
            if let Err(e) = handle_request(request, response_out, &logger).await {
                logger
                    .error_builder("request failed")
                    .field("error", format!("{e:?}"))
                    .emit();
            }
        })
    }
}

async fn handle_request(
    request: IncomingRequest,
    response_out: ResponseOutparam,
    logger: &StructuredLogger,
) -> Result<(), HandlerError> {
    use leptos_wasi::prelude::Handler;

    let leptos_options = match get_configuration(None) {
        Ok(conf) => conf.leptos_options,
        Err(e) => {
            logger
                .error_builder("leptos configuration invalid")
                .field("error", e.to_string())
                .emit();
            send_status(response_out, 500);
            return Ok(());
        }
    };

    Handler::build(request, response_out)?
        // Generate routes from App
        .generate_routes(App)
        // Handle with shell
        .handle_with_context(move || shell(leptos_options.clone()), || {})
        .await?;

    Ok(())
}

/// Answer with an empty body and `status`.
fn send_status(response_out: ResponseOutparam, status: u16) {
    let response = OutgoingResponse::new(Fields::new());
    let _ = response.set_status_code(status);
    let body = response.body();
    ResponseOutparam::set(response_out, Ok(response));
    if let Ok(body) = body {
        let _ = OutgoingBody::finish(body, None);
    }
}

export!(BrewServer with_types_in wasi);
