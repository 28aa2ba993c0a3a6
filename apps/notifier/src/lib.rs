//! # Notifier ライブラリ
//!
//! Notifier のハンドラとユースケースを公開する。
//! 統合テストから内部モジュールへのアクセスを提供する。

pub mod config;
pub mod event;
pub mod handler;
pub mod usecase;
