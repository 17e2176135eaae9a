// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 发送给生成式模型的提示词

/// 后端失败后的兜底核查提示，要求只返回 true/false/unknown 三个整数
pub fn percentage_fallback_prompt(title: &str, text: &str) -> String {
    format!(
        "Analyze this news article for factual accuracy. Determine the percentage likelihood \
that the main claims are true, false, or unknown. Provide your analysis in JSON format with \
exactly these keys: \"true\", \"false\", \"unknown\" - each as an integer percentage (0-100) \
that sums to 100. Do not include any other text or explanation, just the JSON object.\n\n\
Article title: {title}\n\n\
Article content:\n{text}"
    )
}

/// 独立分析服务使用的结构化核查提示
pub fn fact_check_prompt(content: &str) -> String {
    format!(
        "You are a fact-checking assistant. Please analyze the following news article content \
and provide a detailed analysis.\n\n\
Your analysis should include:\n\
1. A brief, neutral summary of the article's main points.\n\
2. A list of the key factual claims made in the article that can be verified.\n\
3. An assessment of the article's tone (e.g., neutral, biased, sensationalist).\n\
4. An analysis of the political bias (e.g., Left-leaning, Center, Right-leaning, Neutral).\n\
5. An assessment of the source's credibility (e.g., High, Medium, Low) based on journalistic standards.\n\
6. An overall reliability score on a scale of 1-10.\n\
7. A list of sources that could be used to verify the article's claims.\n\n\
Please provide the response in a clean JSON format with exactly these keys: \"summary\", \
\"claims\", \"tone\", \"bias\", \"credibility\", \"reliabilityScore\", and \"verificationSources\".\n\n\
Article content: {content}"
    )
}

pub fn summary_prompt(text: &str) -> String {
    format!(
        "Please provide a concise, neutral summary of the following article. The summary should \
be about 3-4 sentences long and capture the main points of the text.\n\n\
Article:\n---\n{text}\n---\n\nSummary:"
    )
}

pub fn translation_prompt(text: &str, target_lang: &str) -> String {
    format!(
        "Translate the following article to {target_lang}. Please ensure the translation is \
accurate and natural-sounding.\n\n\
Article:\n---\n{text}\n---\n\nTranslation to {target_lang}:"
    )
}
