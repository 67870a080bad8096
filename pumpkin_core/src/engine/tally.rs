use crate::engine::board::Outcome;
use crate::engine::types::Mark;
use tracing::debug;

/// 解放に必要な既定の連続不敗数。
pub const DEFAULT_REQUIRED_STREAK: u32 = 3;

/// 1局の結果（人間視点）。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Verdict {
    /// 負け。連続記録は途切れる。
    Loss,
    /// 引き分け。連続記録に数える。
    Tie,
    /// 勝ち。
    Win,
}

/// `Tally::record` の結果。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Recorded {
    /// この局を解放条件の達成局として数えたか。
    unlocked_now: bool,
    /// 記録した結果。
    verdict: Verdict,
}

impl Recorded {
    /// この局で初めて解放条件を満たしたかを返す。
    #[inline]
    #[must_use]
    pub const fn unlocked_now(self) -> bool {
        self.unlocked_now
    }

    /// 記録した結果を返す。
    #[inline]
    #[must_use]
    pub const fn verdict(self) -> Verdict {
        self.verdict
    }
}

/// セッション中の勝敗集計（永続化しない）。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Tally {
    losses: u32,
    required_streak: u32,
    streak: u32,
    ties: u32,
    wins: u32,
}

impl Default for Tally {
    #[inline]
    fn default() -> Self {
        Self::new(DEFAULT_REQUIRED_STREAK)
    }
}

impl Tally {
    /// 解放条件を満たしているか（連続不敗数が必要数以上か）を返す。
    #[inline]
    #[must_use]
    pub const fn is_unlocked(self) -> bool {
        self.streak >= self.required_streak
    }

    /// 負け数。
    #[inline]
    #[must_use]
    pub const fn losses(self) -> u32 {
        self.losses
    }

    /// `required_streak` 連続不敗で解放される集計を生成する（0は1とみなす）。
    #[inline]
    #[must_use]
    pub const fn new(required_streak: u32) -> Self {
        Self {
            losses: 0,
            required_streak: if required_streak == 0 { 1 } else { required_streak },
            streak: 0,
            ties: 0,
            wins: 0,
        }
    }

    /// 解放までの進捗（0..=100）を返す。
    #[inline]
    #[must_use]
    pub fn progress_percent(self) -> u8 {
        let scaled = u64::from(self.streak).saturating_mul(100);
        let percent = scaled
            .checked_div(u64::from(self.required_streak))
            .unwrap_or(100)
            .min(100);
        u8::try_from(percent).unwrap_or(100)
    }

    /// 終局結果を記録する。進行中の局面なら何もせず `None` を返す。
    #[inline]
    pub fn record(&mut self, outcome: Outcome) -> Option<Recorded> {
        let verdict = match outcome {
            Outcome::Ongoing => return None,
            Outcome::Tie => Verdict::Tie,
            Outcome::Win {
                mark: Mark::Player, ..
            } => Verdict::Win,
            Outcome::Win {
                mark: Mark::Opponent,
                ..
            } => Verdict::Loss,
        };

        let was_unlocked = self.is_unlocked();
        match verdict {
            Verdict::Win => {
                self.wins = self.wins.saturating_add(1);
                self.streak = self.streak.saturating_add(1);
            }
            Verdict::Tie => {
                self.ties = self.ties.saturating_add(1);
                self.streak = self.streak.saturating_add(1);
            }
            Verdict::Loss => {
                self.losses = self.losses.saturating_add(1);
                self.streak = 0;
            }
        }

        let unlocked_now = !was_unlocked && self.is_unlocked();
        debug!(?verdict, streak = self.streak, unlocked_now, "recorded game");
        Some(Recorded {
            unlocked_now,
            verdict,
        })
    }

    /// 解放に必要な連続不敗数。
    #[inline]
    #[must_use]
    pub const fn required_streak(self) -> u32 {
        self.required_streak
    }

    /// 現在の連続不敗数。
    #[inline]
    #[must_use]
    pub const fn streak(self) -> u32 {
        self.streak
    }

    /// 引き分け数。
    #[inline]
    #[must_use]
    pub const fn ties(self) -> u32 {
        self.ties
    }

    /// 勝ち数。
    #[inline]
    #[must_use]
    pub const fn wins(self) -> u32 {
        self.wins
    }
}

#[cfg(test)]
mod tests {
    use super::{Tally, Verdict};
    use crate::engine::board::Outcome;
    use crate::engine::types::{LINES, Mark};

    fn win(mark: Mark) -> Outcome {
        Outcome::Win {
            mark,
            line: LINES[0],
        }
    }

    #[test]
    fn ongoing_outcome_is_not_recorded() {
        let mut tally = Tally::default();
        assert_eq!(tally.record(Outcome::Ongoing), None);
        assert_eq!(tally, Tally::default());
    }

    #[test]
    fn ties_and_wins_extend_the_streak_until_unlock() {
        let mut tally = Tally::default();

        let first = tally.record(Outcome::Tie);
        assert_eq!(first.map(|r| r.verdict()), Some(Verdict::Tie));
        assert_eq!(tally.progress_percent(), 33);

        let second = tally.record(win(Mark::Player));
        assert_eq!(second.map(|r| r.unlocked_now()), Some(false));
        assert_eq!(tally.progress_percent(), 66);

        let third = tally.record(Outcome::Tie);
        assert_eq!(third.map(|r| r.unlocked_now()), Some(true));
        assert!(tally.is_unlocked());
        assert_eq!(tally.progress_percent(), 100);

        let fourth = tally.record(Outcome::Tie);
        assert_eq!(fourth.map(|r| r.unlocked_now()), Some(false));
        assert_eq!(tally.progress_percent(), 100);
        assert_eq!((tally.wins(), tally.ties(), tally.losses()), (1, 3, 0));
    }

    #[test]
    fn loss_resets_the_streak() {
        let mut tally = Tally::new(2);
        assert!(tally.record(Outcome::Tie).is_some());
        let loss = tally.record(win(Mark::Opponent));
        assert_eq!(loss.map(|r| r.verdict()), Some(Verdict::Loss));
        assert_eq!(tally.streak(), 0);
        assert_eq!(tally.progress_percent(), 0);
        assert_eq!(tally.losses(), 1);
        assert!(!tally.is_unlocked());
    }

    #[test]
    fn zero_requirement_is_treated_as_one() {
        let mut tally = Tally::new(0);
        assert_eq!(tally.required_streak(), 1);
        assert!(!tally.is_unlocked());
        let recorded = tally.record(Outcome::Tie);
        assert_eq!(recorded.map(|r| r.unlocked_now()), Some(true));
    }
}
