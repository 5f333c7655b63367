//! エラー型定義

use thiserror::Error;

/// 共通エラー型
///
/// すべてオーケストレータ境界で捕捉され、user_message() の
/// 固定文言に変換されてUIへ渡る。パース済みレスポンス内の
/// 列挙値ズレはエラーではなく normalizer が黙って補正する。
#[derive(Error, Debug)]
pub enum Error {
    /// ローカルでの画像読み込み・エンコード失敗
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// リモート呼び出しの失敗（ネットワーク、非2xx、空レスポンス）
    #[error("API error: {0}")]
    Api(String),

    /// レスポンステキストを期待の形にパースできない
    #[error("Parse error: {0}")]
    Parse(String),

    /// APIキーがリモートで拒否された
    #[error("Invalid API key")]
    InvalidApiKey,
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// HTTPエラーレスポンスをエラー型へ分類する
    ///
    /// Gemini APIはキー不正時に400でエラー本文に
    /// API_KEY_INVALID マーカーを含めて返す
    pub fn from_api_response(status: u16, body: &str) -> Error {
        if body.contains("API_KEY_INVALID") || body.contains("API key not valid") {
            Error::InvalidApiKey
        } else {
            Error::Api(format!("status {}: {}", status, body))
        }
    }

    /// ユーザー向けの固定メッセージ
    ///
    /// ApiとParseはユーザーにとって区別できず、取るべき行動も
    /// 同じため同一文言。InvalidApiKeyのみ再試行では直らない旨を伝える。
    pub fn user_message(&self) -> &'static str {
        match self {
            Error::Encoding(_) => "不明なエラーが発生しました。もう一度お試しください。",
            Error::Api(_) | Error::Parse(_) => {
                "画像を解析できませんでした。明るい場所で撮影した鮮明な写真でもう一度お試しください。"
            }
            Error::InvalidApiKey => "APIキーが無効です。アプリの設定を確認してください。",
        }
    }
}
