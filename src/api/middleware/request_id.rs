use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use uuid::Uuid;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Attaches an `x-request-id` to request and response, minting a fresh
/// uuid when the caller supplied none (or an unparseable one).
pub async fn request_id_middleware(mut req: Request, next: Next) -> Response {
    let request_id = match req
        .headers()
        .get(REQUEST_ID_HEADER)
        .cloned()
        .filter(|v| v.to_str().is_ok())
    {
        Some(value) => value,
        None => {
            let minted = Uuid::new_v4().to_string();
            // A uuid string is always a valid header value.
            HeaderValue::from_str(&minted).expect("uuid is valid ASCII")
        }
    };

    req.headers_mut()
        .insert(REQUEST_ID_HEADER, request_id.clone());

    let mut response = next.run(req).await;
    response.headers_mut().insert(REQUEST_ID_HEADER, request_id);

    response
}
