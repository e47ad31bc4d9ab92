// subscription-backend/src/domain/subscription_provider.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// 決済プロバイダー
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubscriptionProvider {
    Google,
    Apple,
    Stripe,
}

impl SubscriptionProvider {
    /// タグ文字列から変換（完全一致のみ）
    pub fn from_tag(s: &str) -> Option<Self> {
        match s {
            "GOOGLE" => Some(Self::Google),
            "APPLE" => Some(Self::Apple),
            "STRIPE" => Some(Self::Stripe),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Google => "GOOGLE",
            Self::Apple => "APPLE",
            Self::Stripe => "STRIPE",
        }
    }

    pub fn all() -> Vec<Self> {
        vec![Self::Google, Self::Apple, Self::Stripe]
    }
}

impl fmt::Display for SubscriptionProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SubscriptionProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| {
            format!(
                "Invalid provider: '{}'. Valid providers are: {}",
                s,
                Self::all()
                    .iter()
                    .map(|p| p.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            )
        })
    }
}

impl From<SubscriptionProvider> for String {
    fn from(provider: SubscriptionProvider) -> Self {
        provider.as_str().to_string()
    }
}
