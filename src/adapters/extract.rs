use std::sync::Arc;

use axum::extract::{FromRef, FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::{application::error::ApplicationError, services::Toolkit};

/// JSON body extractor that goes through [`Toolkit::read_json`], so size
/// limits, unknown-field policy and error messages match the toolkit's
/// configuration. Rejections are rendered as the error envelope.
#[derive(Debug, Clone)]
pub struct StrictJson<T>(pub T);

impl<T, S> FromRequest<S> for StrictJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
    Arc<Toolkit>: FromRef<S>,
{
    type Rejection = ApplicationError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let toolkit = Arc::<Toolkit>::from_ref(state);
        let value = toolkit.read_json(req).await?;
        Ok(StrictJson(value))
    }
}
