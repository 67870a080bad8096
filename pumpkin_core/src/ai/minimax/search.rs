use crate::engine::board::Board;
use crate::engine::types::{Mark, Square};

use super::context::SearchContext;
use super::eval::terminal_score;
use super::{INF, OPENING_SQUARES, SearchConfig, SearchError, SearchResult};

/// 盤面への仮着手。スコープを抜けると必ず取り消す。
struct Trial<'board> {
    /// 仮着手した盤面。
    board: &'board mut Board,
    /// 仮着手したマス。
    square: Square,
}

impl<'board> Trial<'board> {
    /// 仮着手した盤面への可変参照を返す。
    const fn board_mut(&mut self) -> &mut Board {
        &mut *self.board
    }

    /// `square` に `mark` を仮着手する。埋まっていれば `None`。
    fn place(board: &'board mut Board, square: Square, mark: Mark) -> Option<Self> {
        board.place(square, mark).ok()?;
        Some(Self { board, square })
    }
}

impl Drop for Trial<'_> {
    fn drop(&mut self) {
        self.board.clear(self.square);
    }
}

/// 最大化側（コンピュータ）かどうか。
const fn is_maximizing(mover: Mark) -> bool {
    matches!(mover, Mark::Opponent)
}

/// `score` が現在の最善 `best` より `mover` にとって良いか。
const fn improves(mover: Mark, score: i32, best: i32) -> bool {
    if is_maximizing(mover) {
        score > best
    } else {
        score < best
    }
}

/// 最悪値（どの評価値でも更新される初期値）。
const fn worst_score(mover: Mark) -> i32 {
    if is_maximizing(mover) {
        i32::MIN
    } else {
        i32::MAX
    }
}

/// ルート探索。同点の最善手をすべて集める。
///
/// ルートでは窓を `best - 1`（最小化側は `best + 1`）までしか狭めない。
/// 同点の兄弟は正確な値のまま返り、劣る兄弟は `best` に届かないので、
/// 集めた手の集合は枝刈りなしの探索と一致する。
pub(super) fn search_root(
    board: Board,
    mover: Mark,
    config: SearchConfig,
) -> Result<SearchResult, SearchError> {
    if board.evaluate().is_terminal() {
        return Err(SearchError::PrecompletedSearch);
    }

    let mut ctx = SearchContext::new(config);
    ctx.stats_mut().inc_nodes();

    if config.opening_shortcut() && board.is_blank() {
        return Ok(SearchResult {
            moves: OPENING_SQUARES.to_vec(),
            score: 0,
            stats: ctx.stats(),
        });
    }

    let mut scratch = board;
    let mut best = worst_score(mover);
    let mut best_moves: Vec<Square> = Vec::new();
    let mut alpha = INF.wrapping_neg();
    let mut beta = INF;

    for square in board.available_moves() {
        let score = {
            let Some(mut trial) = Trial::place(&mut scratch, square, mover) else {
                continue;
            };
            minimax(
                trial.board_mut(),
                mover.opponent(),
                1,
                alpha,
                beta,
                &mut ctx,
            )
        };

        if improves(mover, score, best) {
            best = score;
            best_moves.clear();
            best_moves.push(square);
        } else if score == best {
            best_moves.push(square);
        }

        if config.alpha_beta() {
            if is_maximizing(mover) {
                alpha = alpha.max(best.saturating_sub(1));
            } else {
                beta = beta.min(best.saturating_add(1));
            }
        }
    }

    debug_assert_eq!(scratch, board, "trial moves must be undone");
    debug_assert!(!best_moves.is_empty(), "ongoing board must have a move");

    Ok(SearchResult {
        moves: best_moves,
        score: best,
        stats: ctx.stats(),
    })
}

/// ミニマックス（αβ付き）。評価値はコンピュータ側が正。
///
/// `board` は仮着手のたびに書き換えるが、戻るときには元の盤面に戻っている。
fn minimax(
    board: &mut Board,
    mover: Mark,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    ctx: &mut SearchContext,
) -> i32 {
    ctx.stats_mut().inc_nodes();

    if let Some(score) = terminal_score(board.evaluate(), depth) {
        return score;
    }

    let next_depth = depth.saturating_add(1);
    let mut best = worst_score(mover);

    for square in board.available_moves() {
        let score = {
            let Some(mut trial) = Trial::place(board, square, mover) else {
                continue;
            };
            minimax(
                trial.board_mut(),
                mover.opponent(),
                next_depth,
                alpha,
                beta,
                ctx,
            )
        };

        if improves(mover, score, best) {
            best = score;
        }

        if is_maximizing(mover) {
            alpha = alpha.max(best);
        } else {
            beta = beta.min(best);
        }

        if ctx.config().alpha_beta() && beta <= alpha {
            ctx.stats_mut().inc_cutoffs();
            break;
        }
    }

    best
}
