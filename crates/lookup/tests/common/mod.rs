//! In-process HTTP stand-ins for the address services.

#![allow(dead_code)]

use axum::{
    Router,
    extract::Path,
    http::{StatusCode, header},
    routing::get,
};
use std::time::Duration;

pub const PAULISTA_BRASILAPI: &str = r#"{"cep":"01310-100","street":"Avenida Paulista","neighborhood":"Bela Vista","city":"São Paulo","state":"SP","service":"open-cep"}"#;

pub const PAULISTA_VIACEP: &str = r#"{"cep":"01310-100","logradouro":"Avenida Paulista","complemento":"de 612 a 1510 - lado par","bairro":"Bela Vista","localidade":"São Paulo","uf":"SP","ibge":"3550308"}"#;

pub const VIACEP_NOT_FOUND: &str = r#"{"erro": true}"#;

pub const BRASILAPI_NOT_FOUND: &str = r#"{"name":"CepPromiseError","message":"Todos os serviços de CEP retornaram erro.","type":"service_error"}"#;

/// Canned answer for one route.
#[derive(Clone, Copy)]
pub struct Reply {
    pub status: StatusCode,
    pub body: &'static str,
    pub delay: Duration,
}

impl Reply {
    pub fn ok(body: &'static str) -> Self {
        Self {
            status: StatusCode::OK,
            body,
            delay: Duration::ZERO,
        }
    }

    pub fn status(status: StatusCode, body: &'static str) -> Self {
        Self {
            status,
            body,
            delay: Duration::ZERO,
        }
    }

    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// Router answering both provider paths.
pub fn router(brasilapi: Reply, viacep: Reply) -> Router {
    Router::new()
        .route(
            "/api/cep/v1/{code}",
            get(move |Path(_code): Path<String>| respond(brasilapi)),
        )
        .route(
            "/ws/{code}/json/",
            get(move |Path(_code): Path<String>| respond(viacep)),
        )
}

/// Router whose BrasilAPI route echoes the requested code back as `cep`.
pub fn echo_router() -> Router {
    Router::new().route(
        "/api/cep/v1/{code}",
        get(|Path(code): Path<String>| async move {
            (
                [(header::CONTENT_TYPE, "application/json")],
                format!(r#"{{"cep":"{code}","street":"","neighborhood":"","city":"","state":""}}"#),
            )
        }),
    )
}

async fn respond(reply: Reply) -> (StatusCode, [(header::HeaderName, &'static str); 1], &'static str) {
    tokio::time::sleep(reply.delay).await;
    (
        reply.status,
        [(header::CONTENT_TYPE, "application/json")],
        reply.body,
    )
}

/// Serve `router` on an ephemeral local port and return its base URL.
pub async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock server");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("mock server");
    });
    format!("http://{addr}")
}
