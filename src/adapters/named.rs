use crate::domain::ports::ProductIdentifier;
use crate::utils::error::Result;

/// A product name typed in by the user.
#[derive(Debug, Clone)]
pub struct NamedProduct {
    name: String,
}

impl NamedProduct {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[async_trait::async_trait]
impl ProductIdentifier for NamedProduct {
    async fn identify(&self) -> Result<String> {
        Ok(self.name.trim().to_lowercase())
    }

    fn source_ref(&self) -> String {
        "manual input".to_string()
    }
}
