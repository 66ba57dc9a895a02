use crate::{Action, Booth};
use booth::Identity;
use http_body_util::{BodyExt, Full, LengthLimitError, Limited};
use hyper::{
    body::{Body, Bytes},
    header::{HeaderValue, CONTENT_TYPE},
    Method, Request, Response, StatusCode,
};

pub const APPLICATION_JSON: &str = "application/json";

/// Largest accepted action payload. This leaves ample room for a maximal poll draft.
pub const MAX_BODY_SIZE: usize = 64 * 1024;

/// Routes a request to the booth. `GET /` renders the current screen while `POST /`
/// applies the JSON-encoded [`Action`] in the body first.
pub async fn try_respond<B, I>(req: Request<B>, booth: &Booth<I>) -> Result<Response<Full<Bytes>>, StatusCode>
where
    B: Body,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
    I: Identity,
{
    // For now, we only serve the root endpoint.
    if req.uri().path() != "/" {
        return Err(StatusCode::NOT_FOUND);
    }

    let action = match req.method() {
        &Method::GET => Action::Render,
        &Method::POST => {
            let body = Limited::new(req.into_body(), MAX_BODY_SIZE);
            let bytes = body
                .collect()
                .await
                .map_err(|err| {
                    if err.is::<LengthLimitError>() {
                        log::warn!("action payload exceeds {MAX_BODY_SIZE} bytes");
                        StatusCode::PAYLOAD_TOO_LARGE
                    } else {
                        StatusCode::BAD_REQUEST
                    }
                })?
                .to_bytes();
            serde_json::from_slice(&bytes).map_err(|err| {
                log::warn!("malformed action: {err}");
                StatusCode::BAD_REQUEST
            })?
        }
        _ => return Err(StatusCode::METHOD_NOT_ALLOWED),
    };

    // Construct new body
    let view = booth.on_action(action, chrono::Utc::now()).await;
    let bytes = serde_json::to_vec(&view).map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    let mut res = Response::new(Full::new(Bytes::from(bytes)));
    assert!(res.headers_mut().insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON)).is_none());
    Ok(res)
}
