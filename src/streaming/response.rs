use futures_util::StreamExt;
use http_body_util::StreamBody;
use tokio::sync::mpsc;

use crate::constants::{
    CONTENT_TYPE_TEXT, HEADER_ACCESS_CONTROL_ALLOW_HEADERS, HEADER_ACCESS_CONTROL_ALLOW_METHODS,
    HEADER_ACCESS_CONTROL_ALLOW_ORIGIN, HEADER_CACHE_CONTROL, HEADER_CONNECTION,
};
use crate::error::RelayError;

/// Builds a chunked `text/plain` response fed by an mpsc receiver. Fragments
/// are flushed to the client as they are sent; dropping the receiver ends the
/// body.
pub fn create_text_stream_response(
    rx: mpsc::UnboundedReceiver<Result<bytes::Bytes, std::io::Error>>,
) -> Result<warp::reply::Response, RelayError> {
    use bytes::Bytes;

    let stream = tokio_stream::wrappers::UnboundedReceiverStream::new(rx);
    // Same shape warp's own wrap_stream builds internally
    let mapped_stream = stream.map(|item: Result<Bytes, std::io::Error>| {
        item.map(warp::hyper::body::Frame::data)
            .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)
    });

    let body_impl = StreamBody::new(mapped_stream);
    let boxed_body = http_body_util::BodyExt::boxed(body_impl);

    let temp_response = warp::http::Response::builder()
        .status(warp::http::StatusCode::OK)
        .header("content-type", CONTENT_TYPE_TEXT)
        .header("cache-control", HEADER_CACHE_CONTROL)
        .header("connection", HEADER_CONNECTION)
        .header(
            "access-control-allow-origin",
            HEADER_ACCESS_CONTROL_ALLOW_ORIGIN,
        )
        .header(
            "access-control-allow-methods",
            HEADER_ACCESS_CONTROL_ALLOW_METHODS,
        )
        .header(
            "access-control-allow-headers",
            HEADER_ACCESS_CONTROL_ALLOW_HEADERS,
        )
        .body(boxed_body)
        .map_err(|_| RelayError::internal_server_error("failed to build streaming response"))?;

    // SAFETY: `warp::reply::Response` is an alias for the same
    // `http::Response` over hyper's boxed body; source and target are
    // layout-identical, only the type alias differs.
    Ok(unsafe {
        std::mem::transmute::<
            warp::http::Response<
                http_body_util::combinators::BoxBody<
                    bytes::Bytes,
                    Box<dyn std::error::Error + Send + Sync>,
                >,
            >,
            warp::reply::Response,
        >(temp_response)
    })
}
