//! # 受信イベント
//!
//! EventBridge 経由で配送される S3 Object Created イベントの serde モデル。
//!
//! ## 設計方針
//!
//! - **必須フィールドの欠落は契約違反**: バケット名・オブジェクトキーの
//!   欠落はデシリアライズエラーとなり、Lambda ランタイムの呼び出しエラー
//!   として伝播する。ここでは回復しない
//! - **サイズは省略可能**: イベントに含まれない場合は 0 として扱う

use serde::Deserialize;

/// S3 Object Created イベント
///
/// EventBridge のエンベロープのうち、ハンドラが参照する `detail` のみを
/// モデル化する。未知のフィールドは無視される。
#[derive(Debug, Clone, Deserialize)]
pub struct ObjectCreatedEvent {
    /// イベント詳細
    pub detail: ObjectCreatedDetail,
}

/// イベント詳細（バケットとオブジェクト）
#[derive(Debug, Clone, Deserialize)]
pub struct ObjectCreatedDetail {
    /// 対象バケット
    pub bucket: BucketRef,
    /// 対象オブジェクト
    pub object: ObjectRef,
}

/// バケット参照
#[derive(Debug, Clone, Deserialize)]
pub struct BucketRef {
    /// バケット名
    pub name: String,
}

/// オブジェクト参照
#[derive(Debug, Clone, Deserialize)]
pub struct ObjectRef {
    /// オブジェクトキー
    pub key:  String,
    /// オブジェクトサイズ（バイト）
    ///
    /// イベントに含まれない場合は 0 として扱う。上流のデータ品質の
    /// 問題になり得るが、既定値として維持する。
    #[serde(default)]
    pub size: u64,
}
