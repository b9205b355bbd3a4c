use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreateSlugRequest {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SlugResponse {
    pub slug: String,
}
