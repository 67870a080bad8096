//! 端末で動作する最小 UI（人間 🎃 vs コンピュータ 🦇）。

use clap::{Parser, ValueEnum};
use pumpkin_core::ai::types::Ai as _;
use pumpkin_core::logging::{self, LogFormat};
use pumpkin_core::{ai, engine};
use std::io::{self, BufRead as _, Write as _};
use std::thread;
use std::time::Duration;
use tracing::{Level, info, warn};

/// ログの出力形式（コマンドライン用）。
#[derive(Copy, Clone, Debug, ValueEnum)]
enum LogFormatArg {
    Json,
    Text,
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Json => Self::Json,
            LogFormatArg::Text => Self::Text,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "pumpkin", about = "Tic-tac-toe against a computer that never loses")]
struct Args {
    /// Seed for choosing among equally good computer moves (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Let the human move first instead of the computer
    #[arg(long)]
    human_first: bool,

    /// Delay before each computer move, in milliseconds
    #[arg(long, default_value_t = 300)]
    think_ms: u64,

    #[arg(long, default_value_t = Level::WARN)]
    log_level: Level,

    #[arg(long, value_enum, default_value_t = LogFormatArg::Text)]
    log_format: LogFormatArg,
}

/// 1行入力の解釈結果。
#[derive(Debug, Eq, PartialEq)]
enum Command {
    NewGame,
    Place(engine::Square),
    Quit,
    Unknown,
}

impl Command {
    /// `1`..`9`（テンキー配置ではなく左上から行優先）、`n`、`q` を解釈する。
    fn parse(line: &str) -> Self {
        match line.trim() {
            "q" | "quit" => Self::Quit,
            "n" | "new" => Self::NewGame,
            other => other
                .parse::<u8>()
                .ok()
                .and_then(|number| number.checked_sub(1))
                .and_then(engine::Square::from_index)
                .map_or(Self::Unknown, Self::Place),
        }
    }
}

#[derive(Debug)]
struct App {
    agent: ai::minimax::Agent,
    game: engine::Game,
    tally: engine::Tally,
    think: Duration,
}

impl App {
    fn new(args: &Args) -> Self {
        let seed = args.seed.unwrap_or_else(rand::random);
        info!(seed, "starting session");
        let first = if args.human_first {
            engine::Mark::Player
        } else {
            engine::Mark::Opponent
        };

        Self {
            agent: ai::minimax::Agent::new(seed),
            game: engine::Game::new(first),
            tally: engine::Tally::default(),
            think: Duration::from_millis(args.think_ms),
        }
    }

    /// 盤面を文字列にする。空きマスには入力用の番号を出す。
    fn render(&self) -> String {
        let board = self.game.board();
        let highlight = match self.game.outcome() {
            engine::Outcome::Win { line, .. } => Some(line),
            _ => None,
        };

        let mut out = String::new();
        for square in engine::Square::ALL {
            let text = match board.cell(square) {
                Some(mark) => mark.symbol().to_owned(),
                None => format!("{} ", square.index() + 1),
            };
            let winning = highlight.is_some_and(|line| line.contains(&square));
            if winning {
                out.push_str(&format!("[{text}]"));
            } else {
                out.push_str(&format!(" {text} "));
            }
            if square.x() + 1 == engine::Square::BOARD_LEN {
                out.push('\n');
            } else {
                out.push('|');
            }
        }
        out
    }

    fn status_text(&self) -> String {
        let tally = self.tally;
        let record = format!(
            "W={} T={} L={} streak={} ({}%)",
            tally.wins(),
            tally.ties(),
            tally.losses(),
            tally.streak(),
            tally.progress_percent()
        );

        match self.game.outcome() {
            engine::Outcome::Ongoing => match self.game.side_to_move() {
                engine::Mark::Player => format!("Your turn (🎃) | {record}"),
                _ => format!("CPU thinking… | {record}"),
            },
            engine::Outcome::Tie => format!("It's a draw. | {record}"),
            engine::Outcome::Win {
                mark: engine::Mark::Player,
                ..
            } => format!("You win! 🎃 | {record}"),
            _ => format!("You lost… | {record}"),
        }
    }

    /// 着手し、終局なら集計する。
    fn try_play(&mut self, square: engine::Square) -> Result<(), engine::PlayError> {
        let outcome = self.game.play(square)?;
        if let Some(recorded) = self.tally.record(outcome)
            && recorded.unlocked_now()
        {
            info!(streak = self.tally.streak(), "streak goal reached");
            println!(
                "🎉 {} games without a loss. You beat the 🦇!",
                self.tally.required_streak()
            );
        }
        Ok(())
    }

    fn step_ai_once(&mut self) {
        if self.game.is_over() || self.game.side_to_move() != engine::Mark::Opponent {
            return;
        }

        thread::sleep(self.think);
        let Some(square) = self
            .agent
            .select_move(self.game.board(), engine::Mark::Opponent)
        else {
            return;
        };

        if let Err(err) = self.try_play(square) {
            warn!(%err, "computer move rejected");
        }
    }
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    let _: bool = logging::init(args.log_format.into(), args.log_level);

    let mut app = App::new(&args);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        app.step_ai_once();

        print!("\n{}{}\n", app.render(), app.status_text());
        if app.game.is_over() {
            print!("Enter to play again, q to quit: ");
        } else {
            print!("Square 1-9 (n = new game, q = quit): ");
        }
        io::stdout().flush()?;

        let Some(line) = lines.next().transpose()? else {
            break;
        };

        match Command::parse(&line) {
            Command::Quit => break,
            Command::NewGame => app.game.reset(),
            _ if app.game.is_over() => app.game.reset(),
            Command::Place(square) => {
                if let Err(err) = app.try_play(square) {
                    println!("{err}");
                }
            }
            Command::Unknown => println!("Type a number from 1 to 9."),
        }
    }

    Ok(())
}
