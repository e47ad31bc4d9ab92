// src/api/dto/subscription_dto.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// --- Request DTOs ---

/// サブスクリプション作成（再開）リクエスト
///
/// 信頼できない入力のため全フィールドを任意とし、検証はバリデータが行う。
/// `provider` はこの時点では列挙値に解決されていない生の文字列。
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateSubscriptionDto {
    pub user_id: Option<i32>,
    pub name: Option<String>,
    pub provider: Option<String>,
    pub expiration_date: Option<DateTime<Utc>>,
}
