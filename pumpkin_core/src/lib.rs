//! Tic-tac-toe core logic.
//!
//! このクレートは盤面とゲーム進行を扱う `engine` と、最善手を探索する `ai` を提供します。
//! UI（`tty` / `wasm`）から利用されることを想定しています。

#![forbid(unsafe_code)]

/// ゲームルール・盤面・進行を提供するモジュール。
pub mod engine;

/// AI（手選択アルゴリズム）を提供するモジュール。
pub mod ai;

/// `tracing` の出力先設定。
pub mod logging;
