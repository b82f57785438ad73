//! 锚点排序键
//!
//! 阅读材料编号为 `Passage <罗马数字>`，答题说明编号为 `Instruction <整数>`。

use phf::phf_map;

use crate::error::SequenceError;

const PASSAGE_PREFIX: &str = "Passage ";
const INSTRUCTION_PREFIX: &str = "Instruction ";

/// 表外罗马数字的排序键，排在最前
pub const UNKNOWN_PASSAGE_ORDINAL: u32 = 0;

static ROMAN_ORDINALS: phf::Map<&'static str, u32> = phf_map! {
    "I" => 1,
    "II" => 2,
    "III" => 3,
    "IV" => 4,
    "V" => 5,
    "VI" => 6,
    "VII" => 7,
    "VIII" => 8,
    "IX" => 9,
    "X" => 10,
};

/// 阅读材料排序键
///
/// 去掉 `Passage ` 前缀后查表，表中只有 I 到 X；查不到返回
/// [`UNKNOWN_PASSAGE_ORDINAL`]。
pub fn passage_ordinal(id: &str) -> u32 {
    let token = id.strip_prefix(PASSAGE_PREFIX).unwrap_or(id);
    ROMAN_ORDINALS
        .get(token)
        .copied()
        .unwrap_or(UNKNOWN_PASSAGE_ORDINAL)
}

/// 答题说明排序键
///
/// 去掉 `Instruction ` 前缀后按有符号十进制整数解析，解析失败直接报错。
pub fn instruction_ordinal(id: &str) -> Result<i64, SequenceError> {
    let token = id.strip_prefix(INSTRUCTION_PREFIX).unwrap_or(id);
    token
        .trim()
        .parse::<i64>()
        .map_err(|source| SequenceError::InvalidInstructionOrdinal {
            id: id.to_string(),
            source,
        })
}
