use rand::Rng;

// --- 定数定義 ---

// Numerical Recipes in C に掲載されている線形合同法の乗数と加数。
const LCG_A: u64 = 1_664_525;
const LCG_C: u64 = 1_013_904_223;
// 法は 2^32 ではなく 2^32 - 1。この値を変えると出力画像に現れる
// 縞模様が変わってしまうため、そのまま維持すること。
const LCG_M: u64 = 0xFFFF_FFFF;

// --- 構造体定義 ---

/// 意図的に品質の低い乱数値を生成する線形合同法（LCG）の生成器。
///
/// 暗号学的に安全な乱数と比較したとき、可視化した画像にどのような
/// 構造的パターンが現れるかを示すために使用します。
/// 遷移関数は決定的で、同じシードからは常に同じバイト列が得られます。
#[derive(Debug)]
pub struct WeakLcg {
    state: u64,
}

impl WeakLcg {
    /// 指定された32ビット値をシードとして生成器を作成します。
    pub fn from_seed(seed: u32) -> Self {
        Self { state: seed as u64 }
    }

    /// 一様乱数でシードした生成器を作成します。
    /// シード自体は毎回異なるため、出力の「形」だけが決定的になります。
    pub fn from_entropy() -> Self {
        Self::from_seed(rand::thread_rng().gen::<u32>())
    }

    /// 内部状態を1ステップ進め、状態の下位8ビットを返します。
    pub fn next_byte(&mut self) -> u8 {
        self.state = (self.state * LCG_A + LCG_C) % LCG_M;
        (self.state & 0xFF) as u8
    }
}

// --- テストモジュール ---
