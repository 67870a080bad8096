use tracing::Level;

/// ログの出力形式。
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
#[non_exhaustive]
pub enum LogFormat {
    /// 1イベント1行の JSON。
    Json,
    /// 人が読むためのテキスト。
    #[default]
    Text,
}

/// 標準エラー出力へ書き出すグローバル subscriber を設定する。
///
/// すでに設定済みなら何もせず `false` を返す。
#[inline]
pub fn init(format: LogFormat, level: Level) -> bool {
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr);

    let installed = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    };

    installed.is_ok()
}
