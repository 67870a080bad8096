/// マスに置かれる印（どちらの陣営か）。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Mark {
    /// コンピュータ側（🦇）。探索では最大化側。
    Opponent,
    /// 人間側（🎃）。探索では最小化側。
    Player,
}

impl Mark {
    /// 相手側の印を返す。
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Opponent => Self::Player,
            Self::Player => Self::Opponent,
        }
    }

    /// 表示用の記号を返す。
    #[inline]
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Opponent => "🦇",
            Self::Player => "🎃",
        }
    }
}

/// 盤面上のマス（0..=8のインデックス、行優先）。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Square(
    /// `y * 3 + x` に対応する0..=8の値。
    u8,
);

impl Square {
    /// 盤の一辺の長さ。
    pub const BOARD_LEN: u8 = 3;

    /// マスの総数。
    pub const COUNT: usize = 9;

    /// 全マスを昇順で並べたもの。
    pub const ALL: [Self; Self::COUNT] = [
        Self(0),
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
        Self(8),
    ];

    /// インデックスから `Square` を生成する（範囲チェックなし）。
    #[inline]
    pub(crate) const fn from_index_unchecked(index: u8) -> Self {
        Self(index)
    }

    /// 0..=8 のインデックスから `Square` を生成する。
    #[inline]
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index >= Self::BOARD_LEN.wrapping_mul(Self::BOARD_LEN) {
            return None;
        }

        Some(Self(index))
    }

    /// 盤面座標（x, y）から `Square` を生成する。
    #[inline]
    #[must_use]
    pub const fn from_xy(x: u8, y: u8) -> Option<Self> {
        if x >= Self::BOARD_LEN || y >= Self::BOARD_LEN {
            return None;
        }

        let idx = match y.checked_mul(Self::BOARD_LEN) {
            Some(value) => value,
            None => return None,
        };

        match idx.checked_add(x) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }

    /// 0..=8 のインデックスを返す。
    #[inline]
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// 配列添字としてのインデックスを返す。
    #[inline]
    #[must_use]
    pub const fn slot(self) -> usize {
        self.0 as usize
    }

    /// x 座標（0..=2）を返す。
    #[inline]
    #[must_use]
    pub const fn x(self) -> u8 {
        match self.0.checked_rem(Self::BOARD_LEN) {
            Some(value) => value,
            None => u8::MIN,
        }
    }

    /// y 座標（0..=2）を返す。
    #[inline]
    #[must_use]
    pub const fn y(self) -> u8 {
        match self.0.checked_div(Self::BOARD_LEN) {
            Some(value) => value,
            None => u8::MIN,
        }
    }
}

/// 勝ち筋（3マスの並び）。
pub type Line = [Square; 3];

/// 8本の勝ち筋（横3本、縦3本、斜め2本の順）。
pub const LINES: [Line; 8] = [
    [Square(0), Square(1), Square(2)],
    [Square(3), Square(4), Square(5)],
    [Square(6), Square(7), Square(8)],
    [Square(0), Square(3), Square(6)],
    [Square(1), Square(4), Square(7)],
    [Square(2), Square(5), Square(8)],
    [Square(0), Square(4), Square(8)],
    [Square(2), Square(4), Square(6)],
];

#[cfg(test)]
mod tests {
    use super::{LINES, Mark, Square};

    #[test]
    fn square_coordinates_round_trip() {
        for square in Square::ALL {
            let rebuilt = Square::from_xy(square.x(), square.y());
            assert_eq!(rebuilt, Some(square));
        }
        assert_eq!(Square::from_xy(3, 0), None);
        assert_eq!(Square::from_xy(0, 3), None);
        assert_eq!(Square::from_index(9), None);
        assert_eq!(Square::from_index(4).map(Square::x), Some(1));
    }

    #[test]
    fn every_square_lies_on_at_least_two_lines() {
        for square in Square::ALL {
            let hits = LINES.iter().filter(|line| line.contains(&square)).count();
            let expected = match square.index() {
                4 => 4,
                0 | 2 | 6 | 8 => 3,
                _ => 2,
            };
            assert_eq!(hits, expected, "square={square:?}");
        }
    }

    #[test]
    fn opponent_is_an_involution() {
        assert_eq!(Mark::Player.opponent(), Mark::Opponent);
        assert_eq!(Mark::Opponent.opponent().opponent(), Mark::Opponent);
    }
}
