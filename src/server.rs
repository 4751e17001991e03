//! HTTP service: `GET /<identifier>.png` returns that identicon.
//!
//! Built on axum. Every request renders on the blocking pool with its own
//! surface, so renders never share state.

use std::net::SocketAddr;

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use axum::Router;
use log::{debug, error, info};
use tokio::net::TcpListener;

use crate::error::{IdenticonError, Result};
use crate::render::{encode_png, render};
use crate::types::{Code, Settings};

/// Suffix every identicon path must carry.
pub const SUFFIX: &str = ".png";

/// What the service renders for each request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServeOptions {
    pub size: u16,
    pub settings: Settings,
}

impl Default for ServeOptions {
    fn default() -> Self {
        Self {
            size: 1024,
            settings: Settings::default(),
        }
    }
}

/// Why a request path does not name an identicon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// The decoded path is not exactly one segment.
    Segments(usize),
    MissingSuffix,
}

/// Extract the identifier from a decoded path segment such as `alice.png`.
///
/// An escaped `/` (`%2F`) splits the path just like a literal one.
pub fn route(segment: &str) -> std::result::Result<String, RouteError> {
    let segments = segment.split('/').count();
    if segments != 1 {
        return Err(RouteError::Segments(segments));
    }

    segment
        .strip_suffix(SUFFIX)
        .map(str::to_string)
        .ok_or(RouteError::MissingSuffix)
}

/// Render and encode the identicon for `identifier`.
pub fn respond(identifier: &str, options: &ServeOptions) -> Response {
    info!("creating identicon for '{}'", identifier);
    let image = render(Code::derive(identifier), options.size, &options.settings);

    match encode_png(&image) {
        Ok(bytes) => ([(header::CONTENT_TYPE, "image/png")], bytes).into_response(),
        Err(e) => {
            error!("unable to encode image: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

async fn identicon(
    State(options): State<ServeOptions>,
    segment: std::result::Result<Path<String>, PathRejection>,
) -> Response {
    let identifier = match segment {
        Ok(Path(segment)) => match route(&segment) {
            Ok(identifier) => identifier,
            Err(e) => {
                debug!("rejecting {:?}: {:?}", segment, e);
                return StatusCode::BAD_REQUEST.into_response();
            }
        },
        Err(e) => {
            debug!("rejecting path: {}", e);
            return StatusCode::BAD_REQUEST.into_response();
        }
    };

    match tokio::task::spawn_blocking(move || respond(&identifier, &options)).await {
        Ok(response) => response,
        Err(e) => {
            error!("render task failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

async fn bad_request() -> StatusCode {
    StatusCode::BAD_REQUEST
}

/// The service's routes. Any method is accepted; anything that is not a
/// single path segment is a bad request.
pub fn router(options: ServeOptions) -> Router {
    Router::new()
        .route("/{file}", any(identicon))
        .fallback(bad_request)
        .with_state(options)
}

/// A bound listener serving identicons.
pub struct Server {
    listener: TcpListener,
    options: ServeOptions,
}

impl Server {
    /// Bind to `0.0.0.0:port`. Port 0 picks a free port.
    pub async fn bind(port: u16, options: ServeOptions) -> Result<Self> {
        let listener = TcpListener::bind(("0.0.0.0", port))
            .await
            .map_err(|e| IdenticonError::Http {
                message: format!("unable to listen on port {}: {}", port, e),
            })?;
        Ok(Self { listener, options })
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Serve until the process stops. Failing requests are answered and
    /// logged; they never stop the server.
    pub async fn run(self) -> Result<()> {
        info!("Listening on port {}", self.local_addr()?.port());

        axum::serve(self.listener, router(self.options))
            .await
            .map_err(|e| IdenticonError::Http {
                message: format!("server stopped: {}", e),
            })
    }
}
