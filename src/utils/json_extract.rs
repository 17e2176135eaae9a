// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

/// 整段被 markdown 代码块包裹的回复，例如 ```json ... ```
static FENCED_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^\s*```[A-Za-z0-9_+-]*[ \t]*\r?\n?(.*?)\r?\n?\s*```\s*$")
        .expect("fenced block regex must compile")
});

/// 去除模型回复外层的 markdown 代码块标记
///
/// 未被包裹的文本只做首尾空白裁剪
pub fn strip_code_fences(reply: &str) -> &str {
    match FENCED_BLOCK.captures(reply).and_then(|caps| caps.get(1)) {
        Some(inner) => inner.as_str().trim(),
        None => reply.trim(),
    }
}

/// 从自由文本中找出第一个格式良好的 JSON 对象
///
/// 依次尝试每个 `{` 起始位置，用流式反序列化读取一个完整的值；
/// 位于对象之前或之后的说明文字都会被忽略
pub fn extract_first_object(text: &str) -> Option<Map<String, Value>> {
    for (idx, ch) in text.char_indices() {
        if ch != '{' {
            continue;
        }
        let mut stream = serde_json::Deserializer::from_str(&text[idx..]).into_iter::<Value>();
        if let Some(Ok(Value::Object(map))) = stream.next() {
            return Some(map);
        }
    }
    None
}

/// 宽松解析模型输出
///
/// 先去掉代码块包裹并尝试整体解析，失败后再在文本中搜索第一个 JSON 对象
pub fn parse_lenient(reply: &str) -> Option<Value> {
    let stripped = strip_code_fences(reply);
    if let Ok(value @ Value::Object(_)) = serde_json::from_str::<Value>(stripped) {
        return Some(value);
    }
    extract_first_object(stripped).map(Value::Object)
}
