// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use uuid::Uuid;

use crate::utils::errors::ErrorKind;

/// 真/假/未知 百分比三元组
///
/// 只能通过 [`crate::domain::services::percentages::renormalize`] 构造，
/// 三项之和恒为 100
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PercentageTriple {
    #[serde(rename = "true")]
    likely_true: u8,
    #[serde(rename = "false")]
    likely_false: u8,
    unknown: u8,
}

impl PercentageTriple {
    pub(crate) fn from_parts(likely_true: u8, likely_false: u8, unknown: u8) -> Self {
        debug_assert_eq!(
            likely_true as u16 + likely_false as u16 + unknown as u16,
            100
        );
        Self {
            likely_true,
            likely_false,
            unknown,
        }
    }

    pub fn likely_true(&self) -> u8 {
        self.likely_true
    }

    pub fn likely_false(&self) -> u8 {
        self.likely_false
    }

    pub fn unknown(&self) -> u8 {
        self.unknown
    }

    pub fn sum(&self) -> u16 {
        self.likely_true as u16 + self.likely_false as u16 + self.unknown as u16
    }
}

/// 未经归一化的百分比，来自后端或模型输出
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RawPercentages {
    #[serde(rename = "true")]
    pub likely_true: f64,
    #[serde(rename = "false")]
    pub likely_false: f64,
    pub unknown: f64,
}

/// 结构化的事实核查结果
///
/// 模型输出的字段形态并不固定，文本字段同时接受字符串和其他 JSON 值，
/// 未识别的字段保存在 `extra` 中原样返回
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactCheck {
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "lenient_list", skip_serializing_if = "Vec::is_empty")]
    pub claims: Vec<Value>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub bias: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub credibility: Option<String>,
    #[serde(default, deserialize_with = "lenient_score", skip_serializing_if = "Option::is_none")]
    pub reliability_score: Option<f64>,
    #[serde(default, deserialize_with = "lenient_list", skip_serializing_if = "Vec::is_empty")]
    pub verification_sources: Vec<Value>,
    /// 模型回复无法解析为 JSON 时的原始文本
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_analysis: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FactCheck {
    /// 以原始文本包装的诊断结果
    pub fn raw(text: impl Into<String>) -> Self {
        Self {
            raw_analysis: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn is_raw(&self) -> bool {
        self.raw_analysis.is_some()
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

fn lenient_list<'de, D>(deserializer: D) -> Result<Vec<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items,
        Some(single) => vec![single],
    })
}

/// 评分接受数字、"7"、"7/10"、"7.5 out of 10" 等形式
fn lenient_score<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s
            .trim()
            .split(|c: char| c == '/' || c.is_whitespace())
            .next()
            .and_then(|head| head.parse::<f64>().ok()),
        _ => None,
    })
}

/// 分析结果：结构化核查或百分比三元组
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AnalysisData {
    Results(PercentageTriple),
    FactCheck(FactCheck),
}

/// 结果来源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    /// 后端实时分析
    Live,
    /// 后端失败后由模型兜底
    AiFallback,
    /// 全部失败后的估算值
    Estimated,
}

impl Provenance {
    pub fn label(&self) -> &'static str {
        match self {
            Provenance::Live => "live analysis",
            Provenance::AiFallback => "AI fallback",
            Provenance::Estimated => "estimated",
        }
    }
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 来源可信度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Credibility {
    High,
    Medium,
    Low,
}

/// 返回给调用方的完整分析报告
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// 报告标识，与日志中的记录对应
    pub id: Uuid,
    pub data: AnalysisData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparisons: Option<Value>,
    pub provenance: Provenance,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<ErrorKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_detail: Option<String>,
    pub article_title: String,
    pub credibility: Credibility,
    pub bias: String,
    pub is_news_site: bool,
    /// 后端调用实际尝试次数
    pub backend_attempts: u32,
}
