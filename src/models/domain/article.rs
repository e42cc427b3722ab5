use serde::{Deserialize, Serialize};
use validator::Validate;

/// Plain-text article body handed over by the extraction layer. Immutable
/// input to every pipeline operation.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Validate)]
pub struct Article {
    pub title: String,
    #[validate(length(min = 1, message = "article text cannot be empty"))]
    pub text: String,
    /// Lead image URL, passed through to the renderer untouched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Article {
    pub fn new(title: &str, text: &str) -> Self {
        Article {
            title: title.to_string(),
            text: text.to_string(),
            image: None,
        }
    }

    pub fn with_image(mut self, url: &str) -> Self {
        self.image = Some(url.to_string());
        self
    }
}
