use std::fmt::Display;

use axum::{
    body::Body,
    extract::Request,
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::Response,
};
use http_body_util::{BodyExt, LengthLimitError, Limited};
use serde::{
    de::{DeserializeOwned, IgnoredAny},
    Deserialize, Serialize,
};
use serde_json::error::Category;
use tracing::warn;

use crate::{
    domain::models::envelope::JsonResponse,
    services::{EncodeError, JsonError, Toolkit},
};

impl Toolkit {
    /// Reads the request body (up to `max_json_size` bytes) and decodes it
    /// with [`Toolkit::decode_json`].
    pub async fn read_json<T: DeserializeOwned>(&self, request: Request) -> Result<T, JsonError> {
        let limit = self.config().max_json_size;

        let declared = request
            .headers()
            .get(header::CONTENT_LENGTH)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse::<usize>().ok());
        if declared.is_some_and(|length| length > limit) {
            warn!("JSON body declares more than {} bytes", limit);
            return Err(JsonError::TooLarge { limit });
        }

        let bytes = match Limited::new(request.into_body(), limit).collect().await {
            Ok(collected) => collected.to_bytes(),
            Err(e) if e.is::<LengthLimitError>() => {
                warn!("JSON body exceeded {} bytes", limit);
                return Err(JsonError::TooLarge { limit });
            }
            Err(e) => return Err(JsonError::Other(e.to_string())),
        };

        self.decode_json(&bytes)
    }

    /// Decodes exactly one JSON value from `bytes`.
    ///
    /// Fields the target type ignores are rejected unless
    /// `allow_unknown_fields` is set, and anything after the first value is an
    /// error.
    pub fn decode_json<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, JsonError> {
        if bytes.iter().all(|b| is_json_whitespace(*b)) {
            return Err(JsonError::Empty);
        }

        // The whole value must be well formed before any field is typed.
        let mut check = serde_json::Deserializer::from_slice(bytes);
        IgnoredAny::deserialize(&mut check).map_err(|e| syntax_error(e, bytes))?;

        let mut de = serde_json::Deserializer::from_slice(bytes);
        let mut unknown: Vec<String> = Vec::new();
        let mut track = serde_path_to_error::Track::new();

        let result: Result<T, serde_json::Error> = serde_ignored::deserialize(
            serde_path_to_error::Deserializer::new(&mut de, &mut track),
            |path| unknown.push(path.to_string()),
        );

        // Fields are seen in document order, so an unknown field recorded
        // here came before whatever made decoding fail.
        let first_unknown = if self.config().allow_unknown_fields {
            None
        } else {
            unknown.into_iter().next()
        };

        let value = match (result, first_unknown) {
            (_, Some(field)) => return Err(JsonError::UnknownField(field)),
            (Ok(value), None) => value,
            (Err(e), None) => return Err(normalize(e, track.path(), bytes)),
        };

        de.end().map_err(|_| JsonError::MultipleValues)?;

        Ok(value)
    }

    /// Serializes `data` into a response with `status`. The first value of
    /// each key in `headers` is copied onto the response, then
    /// `Content-Type: application/json` is set.
    pub fn write_json<T: Serialize + ?Sized>(
        &self,
        status: StatusCode,
        data: &T,
        headers: Option<&HeaderMap>,
    ) -> Result<Response, EncodeError> {
        let body = serde_json::to_vec(data)?;

        let mut response = Response::builder().status(status).body(Body::from(body))?;

        if let Some(extra) = headers {
            for key in extra.keys() {
                if let Some(value) = extra.get(key) {
                    response.headers_mut().insert(key.clone(), value.clone());
                }
            }
        }

        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );

        Ok(response)
    }

    /// Wraps `err` in the error envelope. `status` defaults to 400.
    pub fn error_json(
        &self,
        err: impl Display,
        status: Option<StatusCode>,
    ) -> Result<Response, EncodeError> {
        let payload = JsonResponse::<()>::error(err.to_string());
        self.write_json(status.unwrap_or(StatusCode::BAD_REQUEST), &payload, None)
    }
}

fn is_json_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}

fn normalize(error: serde_json::Error, path: serde_path_to_error::Path, bytes: &[u8]) -> JsonError {
    let position = byte_offset(bytes, error.line(), error.column());

    match error.classify() {
        Category::Syntax | Category::Eof | Category::Io => syntax_error(error, bytes),
        Category::Data => {
            let message = error.to_string();

            if is_type_mismatch(&message) {
                if path.iter().next().is_none() {
                    JsonError::IncorrectTypeAt { position }
                } else {
                    JsonError::IncorrectType {
                        field: path.to_string(),
                    }
                }
            } else if let Some(field) = denied_field(&message) {
                JsonError::UnknownField(field)
            } else {
                JsonError::Other(message)
            }
        }
    }
}

fn syntax_error(error: serde_json::Error, bytes: &[u8]) -> JsonError {
    match error.classify() {
        Category::Syntax => JsonError::BadlyFormed {
            position: byte_offset(bytes, error.line(), error.column()),
        },
        Category::Eof => JsonError::Truncated,
        Category::Io | Category::Data => JsonError::Unmarshal(error.to_string()),
    }
}

fn is_type_mismatch(message: &str) -> bool {
    ["invalid type:", "invalid value:", "invalid length"]
        .iter()
        .any(|prefix| message.starts_with(prefix))
}

// Targets with `#[serde(deny_unknown_fields)]` report "unknown field `x`, ...".
fn denied_field(message: &str) -> Option<String> {
    let rest = message.strip_prefix("unknown field `")?;
    rest.split('`').next().map(|s| s.to_string())
}

fn byte_offset(bytes: &[u8], line: usize, column: usize) -> usize {
    let line_start: usize = bytes
        .split(|b| *b == b'\n')
        .take(line.saturating_sub(1))
        .map(|l| l.len() + 1)
        .sum();
    (line_start + column).min(bytes.len())
}
