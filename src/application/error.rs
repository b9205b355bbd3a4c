#[derive(Debug)]
pub enum ApplicationError {
    BadRequest(String),
    PayloadTooLarge(String),
    UnsupportedMediaType(String),
    BadGateway(String),
    InternalError(String),
}
