use crate::ai::types::Ai;
use crate::engine::board::Board;
use crate::engine::types::{Mark, Square};
use rand::SeedableRng as _;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom as _;
use thiserror::Error;
use tracing::{debug, instrument};

mod context;
mod eval;
mod search;

pub use context::SearchStats;

/// 探索窓の無限大として扱う値（評価値の絶対値は `SCORE_WIN` を超えない）。
const INF: i32 = 1_000;

/// 勝ちの基準点。深さ `d` での勝ちは `SCORE_WIN - d` になる。
const SCORE_WIN: i32 = 10;

/// 空き盤面での最善手（中央と4隅）。
const OPENING_SQUARES: [Square; 5] = [
    Square::from_index_unchecked(0),
    Square::from_index_unchecked(2),
    Square::from_index_unchecked(4),
    Square::from_index_unchecked(6),
    Square::from_index_unchecked(8),
];

/// 探索の設定。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SearchConfig {
    /// αβ枝刈りを行うか。
    alpha_beta: bool,
    /// 空き盤面では探索せず `OPENING_SQUARES` を返すか。
    opening_shortcut: bool,
}

impl Default for SearchConfig {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl SearchConfig {
    /// αβ枝刈りが有効かを返す。
    #[inline]
    #[must_use]
    pub const fn alpha_beta(self) -> bool {
        self.alpha_beta
    }

    /// 枝刈りと初手の省略を両方有効にした設定を返す。
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            alpha_beta: true,
            opening_shortcut: true,
        }
    }

    /// 初手の省略が有効かを返す。
    #[inline]
    #[must_use]
    pub const fn opening_shortcut(self) -> bool {
        self.opening_shortcut
    }

    /// αβ枝刈りの有無を切り替えた設定を返す。
    #[inline]
    #[must_use]
    pub const fn with_alpha_beta(self, enabled: bool) -> Self {
        Self {
            alpha_beta: enabled,
            ..self
        }
    }

    /// 初手の省略の有無を切り替えた設定を返す。
    #[inline]
    #[must_use]
    pub const fn with_opening_shortcut(self, enabled: bool) -> Self {
        Self {
            opening_shortcut: enabled,
            ..self
        }
    }
}

/// 探索に失敗した理由。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum SearchError {
    /// すでに勝敗がついている盤面を探索しようとした。
    #[error("cannot search a board that is already decided")]
    PrecompletedSearch,
}

/// 探索結果。
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SearchResult {
    /// 最善の評価値を達成する手（昇順、空にならない）。
    moves: Vec<Square>,
    /// ルートの評価値（コンピュータ側が正）。
    score: i32,
    /// 探索統計。
    stats: SearchStats,
}

impl SearchResult {
    /// 最善手の集合を取り出す。
    #[inline]
    #[must_use]
    pub fn into_moves(self) -> Vec<Square> {
        self.moves
    }

    /// 最善の評価値を達成する手を返す。
    #[inline]
    #[must_use]
    pub fn moves(&self) -> &[Square] {
        &self.moves
    }

    /// ルートの評価値を返す。
    ///
    /// 正ならコンピュータの勝ち、負なら人間の勝ち、0 なら引き分け。
    /// 絶対値が大きいほど早く決着する。
    #[inline]
    #[must_use]
    pub const fn score(&self) -> i32 {
        self.score
    }

    /// 探索統計を返す。
    #[inline]
    #[must_use]
    pub const fn stats(&self) -> SearchStats {
        self.stats
    }
}

/// ミニマックス完全探索で最善手を選ぶAI。
///
/// 同点の最善手が複数あれば乱数で1つ選ぶ。
#[derive(Debug)]
#[non_exhaustive]
pub struct Agent {
    /// 探索の設定。
    config: SearchConfig,
    /// 同点手の選択に使う乱数生成器。
    rng: StdRng,
}

impl Agent {
    /// 探索の設定を返す。
    #[inline]
    #[must_use]
    pub const fn config(&self) -> SearchConfig {
        self.config
    }

    /// 既定の設定と `seed` で初期化する。
    #[inline]
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_config(seed, SearchConfig::new())
    }

    /// `config` と `seed` を指定して初期化する。
    #[inline]
    #[must_use]
    pub fn with_config(seed: u64, config: SearchConfig) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Ai for Agent {
    #[inline]
    fn select_move(&mut self, board: Board, mover: Mark) -> Option<Square> {
        let result = best_moves_with(&board, mover, self.config).ok()?;
        result.moves().choose(&mut self.rng).copied()
    }
}

/// 既定の設定で `mover` の最善手を探索する。
///
/// # Errors
///
/// 盤面がすでに終局している場合、`SearchError::PrecompletedSearch` を返す。
///
#[inline]
pub fn best_moves(board: &Board, mover: Mark) -> Result<SearchResult, SearchError> {
    best_moves_with(board, mover, SearchConfig::new())
}

/// `config` に従って `mover` の最善手を探索する。
///
/// 呼び出し側の盤面は変更しない。
///
/// # Errors
///
/// 盤面がすでに終局している場合、`SearchError::PrecompletedSearch` を返す。
///
#[inline]
#[instrument(level = "debug", skip(board))]
pub fn best_moves_with(
    board: &Board,
    mover: Mark,
    config: SearchConfig,
) -> Result<SearchResult, SearchError> {
    let result = search::search_root(*board, mover, config)?;
    debug!(
        score = result.score(),
        candidates = result.moves().len(),
        nodes = result.stats().nodes(),
        cutoffs = result.stats().cutoffs(),
        "search finished"
    );
    Ok(result)
}
