//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: request logging, inspection,
//! method validation and the index/404 decision.

use crate::config::AppState;
use crate::http;
use crate::inspector::InspectedRequest;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    Ok(respond(&req, &state))
}

/// Run the inspector, then route the request once it hands control back.
///
/// The inspector never writes to the response, so it gets a unit handle.
/// An inspection failure takes the error path (500).
pub fn respond<B>(req: &Request<B>, state: &AppState) -> Response<Full<Bytes>> {
    if state.config.logging.access_log {
        logger::log_request(req.method(), req.uri(), req.version());
    }

    if !state.config.inspector.enabled {
        return route_request(req);
    }

    let inspected = InspectedRequest::from_hyper(req);
    let mut routed = None;

    if let Err(e) = state
        .inspector
        .inspect(&inspected, &mut (), || routed = Some(route_request(req)))
    {
        logger::log_error(&format!("Inspection of '{}' failed: {e}", inspected.url));
        return http::build_500_response();
    }

    routed.unwrap_or_else(http::build_500_response)
}

/// Route request based on method and path
fn route_request<B>(req: &Request<B>) -> Response<Full<Bytes>> {
    let method = req.method();
    if method != Method::GET && method != Method::HEAD {
        logger::log_warning(&format!("Method not allowed: {method}"));
        return http::build_405_response();
    }

    let path = req.uri().path();
    if path == "/" || path.starts_with("/index.html") {
        http::build_index_response(method == Method::HEAD)
    } else {
        http::build_404_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn state_with(configure: impl FnOnce(&mut Config)) -> AppState {
        let mut cfg = Config::load_from("this-config-file-does-not-exist").unwrap();
        cfg.logging.access_log = false;
        configure(&mut cfg);
        AppState::new(&cfg)
    }

    fn request(method: &str, uri: &str, user_agent: Option<&str>) -> Request<()> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(ua) = user_agent {
            builder = builder.header("user-agent", ua);
        }
        builder.body(()).unwrap()
    }

    #[test]
    fn test_index_is_inspected_and_served() {
        let state = state_with(|_| {});
        let resp = respond(&request("GET", "/index.html", Some("curl/8.4.0")), &state);
        assert_eq!(resp.status(), 200);
    }

    #[test]
    fn test_inspected_response_is_the_routed_one() {
        let state = state_with(|_| {});
        let resp = respond(&request("GET", "/index.html", Some("curl/8.4.0")), &state);
        let routed = http::build_index_response(false);
        assert_eq!(resp.headers(), routed.headers());
    }

    #[test]
    fn test_root_and_unknown_paths() {
        let state = state_with(|_| {});
        assert_eq!(respond(&request("GET", "/", None), &state).status(), 200);
        assert_eq!(
            respond(&request("GET", "/missing.css", Some("curl/8.4.0")), &state).status(),
            404
        );
    }

    #[test]
    fn test_method_not_allowed_after_inspection() {
        let state = state_with(|_| {});
        let resp = respond(&request("POST", "/index.html", None), &state);
        assert_eq!(resp.status(), 405);
    }

    #[test]
    fn test_parser_failure_takes_error_path() {
        let state = state_with(|cfg| cfg.inspector.max_user_agent_length = 4);
        let resp = respond(&request("GET", "/index.html", Some("curl/8.4.0")), &state);
        assert_eq!(resp.status(), 500);

        // Off-index requests never reach the parser
        let resp = respond(&request("GET", "/", Some("curl/8.4.0")), &state);
        assert_eq!(resp.status(), 200);
    }

    #[test]
    fn test_disabled_inspector_skips_parsing() {
        let state = state_with(|cfg| {
            cfg.inspector.enabled = false;
            cfg.inspector.max_user_agent_length = 4;
        });
        let resp = respond(&request("GET", "/index.html", Some("curl/8.4.0")), &state);
        assert_eq!(resp.status(), 200);
    }
}
