/// ミニマックス（αβ付き）完全探索AI。
pub mod minimax;
/// 空きマスからランダムに1手選ぶAI。
pub mod random;
pub mod types;

pub use minimax::{SearchConfig, SearchError, SearchResult, best_moves, best_moves_with};
