/// 盤面（セル、勝ち筋判定、空きマス列挙）の実装。
pub mod board;
/// ゲーム進行（手番、終局判定など）の実装。
pub mod game;
/// セッション中の勝敗集計。
pub mod tally;
pub mod types;

pub type Board = board::Board;
pub type Game = game::Game;
pub type Mark = types::Mark;
pub type Outcome = board::Outcome;
pub type PlaceError = board::PlaceError;
pub type PlayError = game::PlayError;
pub type Square = types::Square;
pub type Tally = tally::Tally;

pub use types::{LINES, Line};
