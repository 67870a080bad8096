use super::SearchConfig;

/// 探索統計。
#[derive(Default, Clone, Copy, Debug, Eq, PartialEq)]
pub struct SearchStats {
    /// ベータカット等で枝刈りした回数。
    cutoffs: u64,
    /// 探索したノード数（ルートを含む）。
    nodes: u64,
}

impl SearchStats {
    /// 枝刈りした回数を返す。
    #[inline]
    #[must_use]
    pub const fn cutoffs(&self) -> u64 {
        self.cutoffs
    }

    /// 枝刈り回数を加算する。
    pub(super) const fn inc_cutoffs(&mut self) {
        self.cutoffs = self.cutoffs.wrapping_add(1);
    }

    /// 探索ノード数を加算する。
    pub(super) const fn inc_nodes(&mut self) {
        self.nodes = self.nodes.wrapping_add(1);
    }

    /// 探索したノード数を返す。
    #[inline]
    #[must_use]
    pub const fn nodes(&self) -> u64 {
        self.nodes
    }
}

/// 1回の探索の間だけ使うコンテキスト。
#[derive(Debug)]
pub(super) struct SearchContext {
    /// 探索の設定。
    config: SearchConfig,
    /// 探索統計。
    stats: SearchStats,
}

impl SearchContext {
    /// 探索の設定を返す。
    pub(super) const fn config(&self) -> SearchConfig {
        self.config
    }

    /// 探索コンテキストを生成する。
    pub(super) fn new(config: SearchConfig) -> Self {
        Self {
            config,
            stats: SearchStats::default(),
        }
    }

    /// 探索統計を返す。
    pub(super) const fn stats(&self) -> SearchStats {
        self.stats
    }

    /// 探索統計への可変参照を返す。
    pub(super) const fn stats_mut(&mut self) -> &mut SearchStats {
        &mut self.stats
    }
}
