// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use rand::Rng;
use serde_json::{Map, Value};
use std::ops::Range;
use thiserror::Error;

use crate::domain::models::analysis::PercentageTriple;
use crate::domain::services::percentages::{renormalize, PercentageError};
use crate::utils::json_extract::extract_first_object;

/// 估算值的取值范围，只是占位用的区间
pub const ESTIMATE_TRUE_RANGE: Range<u8> = 40..65;
pub const ESTIMATE_FALSE_RANGE: Range<u8> = 5..20;
pub const ESTIMATE_UNKNOWN_RANGE: Range<u8> = 20..55;

/// 兜底回复解析错误
#[derive(Error, Debug, PartialEq)]
pub enum FallbackParseError {
    #[error("no JSON object found in model reply")]
    NoJson,
    #[error("field `{0}` is missing or not a number")]
    MissingField(&'static str),
    #[error(transparent)]
    InvalidValue(#[from] PercentageError),
}

/// 解析兜底模型回复中的百分比
///
/// 取回复中第一个 JSON 对象，要求 `true`/`false`/`unknown` 均为数字，
/// 然后按统一规则归一化。任何一步失败都视为整体失败，不做部分恢复。
pub fn parse_percentage_reply(reply: &str) -> Result<PercentageTriple, FallbackParseError> {
    let object = extract_first_object(reply).ok_or(FallbackParseError::NoJson)?;

    let likely_true = numeric_field(&object, "true")?;
    let likely_false = numeric_field(&object, "false")?;
    let unknown = numeric_field(&object, "unknown")?;

    Ok(renormalize(likely_true, likely_false, unknown)?)
}

fn numeric_field(object: &Map<String, Value>, key: &'static str) -> Result<f64, FallbackParseError> {
    object
        .get(key)
        .and_then(Value::as_f64)
        .ok_or(FallbackParseError::MissingField(key))
}

/// 生成随机估算结果
pub fn synthetic_estimate<R: Rng>(rng: &mut R) -> PercentageTriple {
    let likely_true = rng.random_range(ESTIMATE_TRUE_RANGE);
    let likely_false = rng.random_range(ESTIMATE_FALSE_RANGE);
    let unknown = rng.random_range(ESTIMATE_UNKNOWN_RANGE);

    // Ranges are positive and finite, so this cannot fail
    renormalize(likely_true as f64, likely_false as f64, unknown as f64)
        .unwrap_or_else(|_| PercentageTriple::from_parts(0, 0, 100))
}
