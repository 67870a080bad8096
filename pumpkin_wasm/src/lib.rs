//! WASM (Canvas) 向けの最小 UI。
//!
//! - ゲーム進行は `controller`（ターゲット非依存）にあり、ネイティブでもテストできる。
//! - `wasm32` ターゲットのみで `wasm-bindgen` / `web-sys` を有効化し、`App` を公開する。

pub mod controller;

pub use controller::{AI_DELAY_MS, Controller};

#[cfg(target_arch = "wasm32")]
mod wasm32_app {
    use crate::controller::Controller;
    use pumpkin_core::engine;
    use wasm_bindgen::JsValue;
    use wasm_bindgen::prelude::*;
    use web_sys::CanvasRenderingContext2d;

    /// 盤面描画のオフセット。
    const OFFSET: f64 = 8.0;

    /// ブラウザ上で進行するアプリ状態。
    #[wasm_bindgen]
    #[derive(Debug)]
    pub struct App {
        controller: Controller,
    }

    #[wasm_bindgen]
    impl App {
        /// コンピュータ先手で開始する。同点手の選択はページ読み込みごとに変わる。
        #[wasm_bindgen(constructor)]
        pub fn new() -> Self {
            // 0..2^53 の整数として取り出す。
            let seed = (js_sys::Math::random() * 9_007_199_254_740_992.0) as u64;
            Self {
                controller: Controller::new(seed),
            }
        }

        /// コンピュータ手番の遅延を今から開始する。
        pub fn arm_ai_delay(&mut self, now_ms: f64) {
            self.controller.arm_ai_delay(now_ms);
        }

        /// クリック入力（盤面座標）。合法なら着手し true。
        pub fn click(&mut self, x: u8, y: u8) -> bool {
            self.controller.click(x, y)
        }

        /// クリック入力（マス番号 0..=8）。合法なら着手し true。
        pub fn click_index(&mut self, index: u8) -> bool {
            self.controller.click_index(index)
        }

        pub fn is_game_over(&self) -> bool {
            self.controller.game().is_over()
        }

        pub fn is_unlocked(&self) -> bool {
            self.controller.tally().is_unlocked()
        }

        /// 直前の終局で解放条件を初めて満たしたか（ダイアログ表示用）。
        pub fn just_unlocked(&self) -> bool {
            self.controller.just_unlocked()
        }

        pub fn losses(&self) -> u32 {
            self.controller.tally().losses()
        }

        /// 盤面を空にして次のゲームを始める。
        pub fn new_game(&mut self) {
            self.controller.new_game();
        }

        /// 連続記録の進捗（0..=100）。
        pub fn progress_percent(&self) -> u8 {
            self.controller.tally().progress_percent()
        }

        pub fn result_detail(&self) -> String {
            self.controller.result_detail().to_owned()
        }

        pub fn status_text(&self) -> String {
            self.controller.status_text().to_owned()
        }

        pub fn streak(&self) -> u32 {
            self.controller.tally().streak()
        }

        /// コンピュータ手番を 1 手だけ進める（0.3 秒遅延）。着手したら true。
        pub fn tick_ai(&mut self, now_ms: f64) -> bool {
            self.controller.tick_ai(now_ms)
        }

        pub fn ties(&self) -> u32 {
            self.controller.tally().ties()
        }

        /// 勝ち筋のマス番号（勝敗がついていなければ空）。
        pub fn winning_line(&self) -> Vec<u8> {
            self.controller
                .winning_line()
                .map_or_else(Vec::new, |line| line.to_vec())
        }

        pub fn wins(&self) -> u32 {
            self.controller.tally().wins()
        }

        /// Canvas へ盤面を描画する。
        ///
        /// - `cell_size`: 1マスのピクセルサイズ（例: 96.0）
        pub fn render(&self, ctx: &CanvasRenderingContext2d, cell_size: f64) {
            let board_len = f64::from(engine::Square::BOARD_LEN);
            let full = board_len * cell_size + OFFSET * 2.0;

            ctx.set_fill_style(&JsValue::from_str("#1b1028"));
            ctx.fill_rect(0.0, 0.0, full, full);

            let line = self.controller.winning_line().unwrap_or([u8::MAX; 3]);
            let font = format!("{}px serif", (cell_size * 0.6).round());
            ctx.set_font(&font);
            ctx.set_text_align("center");
            ctx.set_text_baseline("middle");

            for square in engine::Square::ALL {
                let left = OFFSET + f64::from(square.x()) * cell_size;
                let top = OFFSET + f64::from(square.y()) * cell_size;

                let fill = if line.contains(&square.index()) {
                    "#ff8c1a"
                } else {
                    "#2e1f47"
                };
                ctx.set_fill_style(&JsValue::from_str(fill));
                ctx.fill_rect(left, top, cell_size, cell_size);

                ctx.set_stroke_style(&JsValue::from_str("#000000"));
                ctx.stroke_rect(left, top, cell_size, cell_size);

                let symbol = self.controller.cell_symbol(square.index());
                if !symbol.is_empty() {
                    let cx = left + cell_size / 2.0;
                    let cy = top + cell_size / 2.0;
                    let _: Result<(), JsValue> = ctx.fill_text(symbol, cx, cy);
                }
            }
        }
    }

    impl Default for App {
        fn default() -> Self {
            Self::new()
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm32_app::App;
