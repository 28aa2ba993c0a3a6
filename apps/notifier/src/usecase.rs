//! # ユースケース層
//!
//! 通知メールの生成と送信を実装する。
//!
//! ## 設計方針
//!
//! - **依存性注入**: 送信実装を `Arc<dyn NotificationSender>` で外部から注入
//! - **薄いハンドラ**: ハンドラは薄く保ち、メール生成・送信はユースケースに集約

pub mod notification;

pub use notification::{NotificationService, TemplateRenderer};
