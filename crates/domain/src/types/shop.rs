use serde::{Deserialize, Serialize};

/// A storefront linked to the merchant account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shop {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sales_channel: Option<String>,
}

impl std::fmt::Display for Shop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.sales_channel {
            Some(channel) => write!(f, "{} (ID {}, {})", self.title, self.id, channel),
            None => write!(f, "{} (ID {})", self.title, self.id),
        }
    }
}
