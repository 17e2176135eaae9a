// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;

use crate::domain::models::analysis::{PercentageTriple, RawPercentages};

/// 百分比归一化错误
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum PercentageError {
    #[error("percentage value {0} is negative or not finite")]
    InvalidValue(f64),
    #[error("percentage values sum to a non-finite total")]
    NonFiniteTotal,
}

/// 将三个非负数归一化为和为 100 的整数三元组
///
/// 前两项按 `100 / sum` 缩放后四舍五入，第三项取 `100 - 前两项`，
/// 因此舍入误差全部落在第三项上。和为 0 时视为完全未知 `(0, 0, 100)`；
/// 前两项舍入后超过 100 时，从较大的一项中扣除多出的部分。
pub fn renormalize(
    likely_true: f64,
    likely_false: f64,
    unknown: f64,
) -> Result<PercentageTriple, PercentageError> {
    for value in [likely_true, likely_false, unknown] {
        if !value.is_finite() || value < 0.0 {
            return Err(PercentageError::InvalidValue(value));
        }
    }

    let total = likely_true + likely_false + unknown;
    if !total.is_finite() {
        return Err(PercentageError::NonFiniteTotal);
    }
    if total == 0.0 {
        return Ok(PercentageTriple::from_parts(0, 0, 100));
    }

    let scale = 100.0 / total;
    let mut first = (likely_true * scale).round() as i64;
    let mut second = (likely_false * scale).round() as i64;

    let overflow = first + second - 100;
    if overflow > 0 {
        if first >= second {
            first -= overflow;
        } else {
            second -= overflow;
        }
    }
    let third = 100 - first - second;

    Ok(PercentageTriple::from_parts(
        first as u8,
        second as u8,
        third as u8,
    ))
}

/// 归一化原始百分比
pub fn renormalize_raw(raw: RawPercentages) -> Result<PercentageTriple, PercentageError> {
    renormalize(raw.likely_true, raw.likely_false, raw.unknown)
}
