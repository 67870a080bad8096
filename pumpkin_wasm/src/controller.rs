//! ブラウザ UI から呼ばれるゲーム進行（ターゲット非依存）。

use pumpkin_core::ai::types::Ai as _;
use pumpkin_core::engine::tally::Recorded;
use pumpkin_core::{ai, engine};

/// コンピュータ手番の遅延（ミリ秒）。
pub const AI_DELAY_MS: f64 = 300.0;

/// 人間（🎃） vs コンピュータ（🦇）の1セッション。コンピュータが先手。
#[derive(Debug)]
pub struct Controller {
    agent: ai::minimax::Agent,
    game: engine::Game,
    last_recorded: Option<Recorded>,
    /// 次にコンピュータが打てる時刻。負なら未設定。
    next_ai_due_ms: f64,
    tally: engine::Tally,
}

impl Controller {
    /// コンピュータ手番の遅延を今から開始する。
    pub fn arm_ai_delay(&mut self, now_ms: f64) {
        self.next_ai_due_ms = now_ms + AI_DELAY_MS;
    }

    /// マスの表示記号（空きなら空文字）。
    pub fn cell_symbol(&self, index: u8) -> &'static str {
        engine::Square::from_index(index)
            .and_then(|square| self.game.board().cell(square))
            .map_or("", engine::Mark::symbol)
    }

    /// 盤面座標でのクリック。人間の手番で空きマスなら着手し true。
    pub fn click(&mut self, x: u8, y: u8) -> bool {
        engine::Square::from_xy(x, y).is_some_and(|square| self.play_human(square))
    }

    /// マス番号（0..=8）でのクリック。人間の手番で空きマスなら着手し true。
    pub fn click_index(&mut self, index: u8) -> bool {
        engine::Square::from_index(index).is_some_and(|square| self.play_human(square))
    }

    /// 現在のゲーム。
    pub const fn game(&self) -> engine::Game {
        self.game
    }

    /// 人間の手番かどうか（入力を受け付けるか）。
    pub fn is_human_turn(&self) -> bool {
        !self.game.is_over() && self.game.side_to_move() == engine::Mark::Player
    }

    /// 直前の終局で解放条件を初めて満たしたか。
    pub fn just_unlocked(&self) -> bool {
        self.last_recorded.is_some_and(Recorded::unlocked_now)
    }

    /// `seed` で同点手の選び方を決めてセッションを始める。
    pub fn new(seed: u64) -> Self {
        Self {
            agent: ai::minimax::Agent::new(seed),
            game: engine::Game::initial(),
            last_recorded: None,
            next_ai_due_ms: -1.0,
            tally: engine::Tally::default(),
        }
    }

    /// 盤面を空にして次のゲームを始める（集計は引き継ぐ）。
    pub fn new_game(&mut self) {
        self.game.reset();
        self.last_recorded = None;
        self.next_ai_due_ms = -1.0;
    }

    /// 終局時の補足メッセージ。
    pub fn result_detail(&self) -> &'static str {
        match self.game.outcome() {
            engine::Outcome::Tie => "You held off the 🦇! Draws count toward your streak.",
            engine::Outcome::Win {
                mark: engine::Mark::Player,
                ..
            } => "The 🦇 started first and still fell.",
            engine::Outcome::Win { .. } => "This CPU is ruthless. Try again!",
            _ => "",
        }
    }

    /// 状態表示用の文字列を返す。
    pub fn status_text(&self) -> &'static str {
        match self.game.outcome() {
            engine::Outcome::Ongoing => {
                if self.game.side_to_move() == engine::Mark::Player {
                    "Your turn (🎃)"
                } else {
                    "CPU thinking…"
                }
            }
            engine::Outcome::Tie => "It's a draw.",
            engine::Outcome::Win {
                mark: engine::Mark::Player,
                ..
            } => "You win! 🎃",
            _ => "You lost…",
        }
    }

    /// セッション中の集計。
    pub const fn tally(&self) -> engine::Tally {
        self.tally
    }

    /// コンピュータ手番を 1 手だけ進める（遅延つき）。着手したら true。
    ///
    /// - `now_ms`: `performance.now()` 相当の単調増加時刻（ミリ秒）。
    pub fn tick_ai(&mut self, now_ms: f64) -> bool {
        if self.game.is_over() || self.game.side_to_move() != engine::Mark::Opponent {
            return false;
        }

        // 手番に入った直後は、まず遅延タイマーをセットして待つ。
        if self.next_ai_due_ms < 0.0 {
            self.arm_ai_delay(now_ms);
            return false;
        }
        if now_ms < self.next_ai_due_ms {
            return false;
        }

        let Some(square) = self
            .agent
            .select_move(self.game.board(), engine::Mark::Opponent)
        else {
            return false;
        };

        let moved = self.apply(square);
        if moved {
            self.next_ai_due_ms = -1.0;
        }
        moved
    }

    /// 勝ち筋のマス番号（勝敗がついていなければ `None`）。
    pub fn winning_line(&self) -> Option<[u8; 3]> {
        match self.game.outcome() {
            engine::Outcome::Win { line, .. } => Some(line.map(engine::Square::index)),
            _ => None,
        }
    }

    /// 着手して、終局なら集計に記録する。
    fn apply(&mut self, square: engine::Square) -> bool {
        let Ok(outcome) = self.game.play(square) else {
            return false;
        };
        if outcome.is_terminal() {
            self.last_recorded = self.tally.record(outcome);
        }
        true
    }

    /// 人間の着手。
    fn play_human(&mut self, square: engine::Square) -> bool {
        if !self.is_human_turn() {
            return false;
        }

        let moved = self.apply(square);
        if moved {
            // 次のコンピュータ手番は、初回 tick で遅延を開始する。
            self.next_ai_due_ms = -1.0;
        }
        moved
    }
}
