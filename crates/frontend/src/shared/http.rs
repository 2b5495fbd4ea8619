//! JSON-запросы к бэкенду с Bearer-токеном из localStorage.
//!
//! Ошибки приводятся к строке: сообщение из тела `{ "message": ... }`,
//! иначе код статуса.

use contracts::shared::error::ErrorResponse;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::api_utils::api_url;
use crate::system::auth::storage;

fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    match storage::get_access_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

async fn error_message(response: Response) -> String {
    let status = response.status();
    match response.json::<ErrorResponse>().await {
        Ok(body) if !body.message.trim().is_empty() => body.message,
        _ => format!("Erro HTTP {}", status),
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if !response.ok() {
        return Err(error_message(response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|e| format!("Resposta inválida do servidor: {}", e))
}

async fn send(request: Result<Request, gloo_net::Error>) -> Result<Response, String> {
    request
        .map_err(|e| format!("Falha ao montar a requisição: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Falha de conexão com o servidor: {}", e))
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = with_auth(Request::get(&api_url(path)))
        .send()
        .await
        .map_err(|e| format!("Falha de conexão com o servidor: {}", e))?;
    read_json(response).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, String> {
    let response = send(with_auth(Request::post(&api_url(path))).json(body)).await?;
    read_json(response).await
}

pub async fn put_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, String> {
    let response = send(with_auth(Request::put(&api_url(path))).json(body)).await?;
    read_json(response).await
}

/// POST без тела ответа (204/200/201)
pub async fn post_empty<B: Serialize>(path: &str, body: &B) -> Result<(), String> {
    let response = send(with_auth(Request::post(&api_url(path))).json(body)).await?;
    if !response.ok() {
        return Err(error_message(response).await);
    }
    Ok(())
}
