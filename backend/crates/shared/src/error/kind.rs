//! Error Kind - Classification of errors
//!
//! Defines the [`ErrorKind`] enum. The remote RescueConnect API reports
//! failures as HTTP status codes, so every kind maps to exactly one status
//! and every status can be folded back into a kind.

use serde::Serialize;

/// エラー種別
///
/// API の応答とクライアント内部の失敗を同じ分類に載せます。
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// assert_eq!(ErrorKind::Unauthorized.status_code(), 401);
/// assert_eq!(ErrorKind::from_status(403), ErrorKind::Forbidden);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorKind {
    /// 400 - 入力が不正
    BadRequest,
    /// 401 - 認証が必要、または資格情報が誤り
    Unauthorized,
    /// 403 - ロールが許可されていない
    Forbidden,
    /// 404 - リソースが見つからない
    NotFound,
    /// 408 - タイムアウト
    RequestTimeout,
    /// 409 - 既に登録済み
    Conflict,
    /// 422 - 処理不可能なエンティティ
    UnprocessableEntity,
    /// 429 - レート制限超過
    TooManyRequests,
    /// 500 - 内部エラー
    InternalServerError,
    /// 503 - サービス利用不可（ネットワーク到達不能を含む）
    ServiceUnavailable,
}

impl ErrorKind {
    /// 対応する HTTP ステータス
    #[inline]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::BadRequest => 400,
            Self::Unauthorized => 401,
            Self::Forbidden => 403,
            Self::NotFound => 404,
            Self::RequestTimeout => 408,
            Self::Conflict => 409,
            Self::UnprocessableEntity => 422,
            Self::TooManyRequests => 429,
            Self::InternalServerError => 500,
            Self::ServiceUnavailable => 503,
        }
    }

    /// リモート API のステータスコードから種別を決定
    ///
    /// 未知の 4xx は `BadRequest`、未知の 5xx（およびそれ以外）は
    /// `InternalServerError` に丸めます。
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::from_status(404), ErrorKind::NotFound);
    /// assert_eq!(ErrorKind::from_status(418), ErrorKind::BadRequest);
    /// assert_eq!(ErrorKind::from_status(502), ErrorKind::InternalServerError);
    /// ```
    pub const fn from_status(status: u16) -> Self {
        match status {
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            408 => Self::RequestTimeout,
            409 => Self::Conflict,
            422 => Self::UnprocessableEntity,
            429 => Self::TooManyRequests,
            503 => Self::ServiceUnavailable,
            400..=499 => Self::BadRequest,
            _ => Self::InternalServerError,
        }
    }

    /// HTTP の reason phrase
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BadRequest => "Bad Request",
            Self::Unauthorized => "Unauthorized",
            Self::Forbidden => "Forbidden",
            Self::NotFound => "Not Found",
            Self::RequestTimeout => "Request Timeout",
            Self::Conflict => "Conflict",
            Self::UnprocessableEntity => "Unprocessable Entity",
            Self::TooManyRequests => "Too Many Requests",
            Self::InternalServerError => "Internal Server Error",
            Self::ServiceUnavailable => "Service Unavailable",
        }
    }

    /// 5xx 系（`error` レベルでログに残す）
    #[inline]
    pub const fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
