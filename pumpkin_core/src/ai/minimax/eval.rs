use crate::engine::board::Outcome;
use crate::engine::types::Mark;

use super::SCORE_WIN;

/// 終局していれば、深さで補正した評価値（コンピュータ側が正）を返す。
///
/// 早い勝ちほど高く、遅い負けほどましになる。
pub(super) fn terminal_score(outcome: Outcome, depth: u8) -> Option<i32> {
    let plies = i32::from(depth);
    match outcome {
        Outcome::Ongoing => None,
        Outcome::Tie => Some(0),
        Outcome::Win {
            mark: Mark::Opponent,
            ..
        } => Some(SCORE_WIN.wrapping_sub(plies)),
        Outcome::Win {
            mark: Mark::Player, ..
        } => Some(plies.wrapping_sub(SCORE_WIN)),
    }
}
