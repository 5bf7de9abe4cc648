use crate::domain::byte_source::byte_sequence::ByteSequence;

// --- 構造体定義 ---

/// 正方形画像に収まるよう切り詰められたバイト列。
///
/// 長さ N の入力に対して一辺 `dimension = isqrt(N)` を計算し、
/// 先頭から `dimension * dimension` 個だけを元の順序のまま保持します。
/// 残りのバイトは警告なしで破棄されます（verbose 時のみ寸法を表示）。
#[derive(Debug, PartialEq)]
pub struct SquareGrid {
    dimension: u32,
    values: Vec<u8>,
}

// --- 実装ブロック ---

impl SquareGrid {
    /// バイト列を最大の平方数の長さに切り詰めて保持します（コンストラクタ）。
    ///
    /// 平方根は浮動小数点ではなく整数平方根で計算するため、
    /// 完全平方数の近辺でも桁落ちによるずれは起きません。
    /// エラー条件はなく、空の入力からは寸法 0 の空のグリッドができます。
    pub fn new(sequence: ByteSequence, verbose: bool) -> Self {
        let dimension = sequence.len().isqrt();
        let mut values = sequence.into_values();
        values.truncate(dimension * dimension);

        if verbose {
            println!(
                "生成される画像の寸法は {} x {} ピクセルです。",
                dimension, dimension
            );
        }

        Self {
            dimension: dimension as u32,
            values,
        }
    }

    // --- 便利メソッド ---

    /// 保持しているピクセル値の個数（= dimension^2）を返します。
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// グリッドが空かどうか。
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    // --- ゲッターメソッド ---

    pub fn dimension(&self) -> u32 {
        self.dimension
    }

    pub fn values(&self) -> &[u8] {
        &self.values
    }
}

// --- テストモジュール ---

#[cfg(test)]
mod tests {
    use super::*;

    fn ascending(len: usize) -> ByteSequence {
        ByteSequence::new((0..len).map(|i| (i % 256) as u8).collect())
    }

    /// 様々な長さに対して、保持される個数が常に isqrt(N)^2 であることをテスト
    #[test]
    fn keeps_exactly_isqrt_squared_elements() {
        for n in [0usize, 1, 2, 3, 4, 8, 9, 10, 15, 16, 99, 100, 10_000] {
            let expected_dim = n.isqrt();
            let grid = SquareGrid::new(ascending(n), false);

            assert_eq!(grid.dimension() as usize, expected_dim, "入力長 {} の寸法", n);
            assert_eq!(grid.len(), expected_dim * expected_dim, "入力長 {} の要素数", n);
        }
    }

    /// 保持される要素が入力の先頭部分を元の順序で並べたものであることをテスト
    #[test]
    fn kept_elements_are_an_ordered_prefix() {
        // 10バイトの入力 -> 寸法3、先頭9バイトが残る
        let input: Vec<u8> = vec![5, 4, 3, 2, 1, 0, 9, 8, 7, 6];
        let grid = SquareGrid::new(ByteSequence::new(input.clone()), false);

        assert_eq!(grid.dimension(), 3);
        assert_eq!(grid.values(), &input[..9]);
    }

    /// 完全平方数の長さでは1バイトも捨てられないことをテスト
    #[test]
    fn perfect_square_input_is_kept_entirely() {
        let grid = SquareGrid::new(ascending(1024 * 1024), false);
        assert_eq!(grid.dimension(), 1024);
        assert_eq!(grid.len(), 1024 * 1024);
    }

    /// 空の入力からは寸法0の空のグリッドができることをテスト
    #[test]
    fn empty_input_yields_empty_grid() {
        let grid = SquareGrid::new(ByteSequence::new(Vec::new()), false);
        assert_eq!(grid.dimension(), 0);
        assert!(grid.is_empty());
    }
}
