pub mod byte_sequence;
pub mod generation_mode;
pub mod source_error;
pub mod weak_lcg;

/// 生成モードで一辺の指定がない場合に使う、デフォルトの一辺あたりの生成数。
/// 実際の生成バイト数は GEN_DIM * GEN_DIM = 1,048,576 になる。
pub const GEN_DIM: u32 = 1024;
