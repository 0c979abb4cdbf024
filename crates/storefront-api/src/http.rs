// Shared response handling for both upstream clients.
//
// Success bodies are read as text first so deserialization failures can
// carry a body preview. Non-2xx responses are probed for a `{ message }`
// JSON shape before falling back to the status text. A 401 clears the
// session token and surfaces `Error::SessionExpired`.

use serde::de::DeserializeOwned;

use crate::Error;
use crate::transport::Session;

#[derive(serde::Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

pub(crate) async fn handle_response<T: DeserializeOwned>(
    resp: reqwest::Response,
    session: Option<&Session>,
) -> Result<T, Error> {
    let status = resp.status();
    if status.is_success() {
        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            let preview: String = body.chars().take(200).collect();
            Error::Deserialization {
                message: format!("{e} (body preview: {preview:?})"),
                body,
            }
        })
    } else {
        Err(parse_error(status, resp, session).await)
    }
}

pub(crate) async fn handle_empty(
    resp: reqwest::Response,
    session: Option<&Session>,
) -> Result<(), Error> {
    let status = resp.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(parse_error(status, resp, session).await)
    }
}

async fn parse_error(
    status: reqwest::StatusCode,
    resp: reqwest::Response,
    session: Option<&Session>,
) -> Error {
    if status == reqwest::StatusCode::UNAUTHORIZED {
        if let Some(session) = session {
            session.clear();
        }
        return Error::SessionExpired;
    }

    let raw = resp.text().await.unwrap_or_default();

    let message = serde_json::from_str::<ErrorBody>(&raw)
        .ok()
        .and_then(|e| e.message)
        .unwrap_or_else(|| {
            if raw.is_empty() {
                status.to_string()
            } else {
                raw
            }
        });

    Error::Http {
        status: status.as_u16(),
        message,
    }
}

/// Normalize a base URL so relative joins append instead of replacing
/// the last path segment.
pub(crate) fn normalize_base_url(raw: &str) -> Result<url::Url, Error> {
    let mut url = url::Url::parse(raw)?;
    let path = url.path().trim_end_matches('/').to_owned();
    url.set_path(&format!("{path}/"));
    Ok(url)
}
