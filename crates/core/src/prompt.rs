//! Prompt construction for the completion service.
//!
//! Pure string assembly: given the same inputs, every builder returns the
//! same prompt, and the raw source text is always embedded verbatim so the
//! model sees exactly what the user submitted.

use crate::platform::{prompt_config, type_template, Platform};

// ---------------------------------------------------------------------------
// Platform-note mode
// ---------------------------------------------------------------------------

/// Build the note-generation prompt for fetched content.
///
/// Substitutes the content (with title and source label) into the platform's
/// optimization prompt, appends the platform's writing rules, and — when
/// `content_type` names a known template on that platform — a structure hint
/// block with examples. Unknown platform keys fall back to the baseline
/// platform.
pub fn build_note_prompt(
    content: &str,
    title: &str,
    source_label: &str,
    platform_key: Option<&str>,
    content_type: Option<&str>,
) -> String {
    let platform = Platform::parse_or_baseline(platform_key);
    let config = prompt_config(platform);

    let source_block = if title.trim().is_empty() {
        format!("（{source_label}）\n{content}")
    } else {
        format!("（{source_label}）{title}\n{content}")
    };

    let mut prompt = config
        .optimization_prompt
        .replace("{content}", &source_block);

    prompt.push_str("\n\n平台写作规范：\n");
    prompt.push_str(&format!("- 标题结构：{}\n", config.rules.title_structure));
    prompt.push_str(&format!("- 语言风格：{}\n", config.rules.tone));
    prompt.push_str(&format!(
        "- 可参考的高互动词：{}\n",
        config.rules.keywords.join("、")
    ));
    prompt.push_str(&format!("- 避免：{}", config.rules.avoid.join("、")));

    if let Some(t) = content_type.and_then(|key| type_template(platform, key)) {
        prompt.push_str(&format!(
            "\n\n参考「{}」类内容的结构：\n{}\n示例：\n",
            t.key, t.template
        ));
        for example in t.examples {
            prompt.push_str(&format!("- {example}\n"));
        }
    }

    prompt
}

// ---------------------------------------------------------------------------
// Style-rewrite mode
// ---------------------------------------------------------------------------

/// Instruction fragment for a recognized rewrite style label.
///
/// The label is free text from the request, so this is a closed set with a
/// generic fallback rather than a catalog lookup.
fn rewrite_style_fragment(style_label: &str) -> &'static str {
    match style_label.trim() {
        "生活化" => "改写成生活化的口吻，像在和朋友聊天，多用日常场景和第一人称",
        "专业" => "改写成专业严谨的表述，用词准确，观点有论据支撑",
        "幽默" => "改写成轻松幽默的风格，适度自嘲和玩梗，但不损伤原意",
        "文艺" => "改写成文艺清新的笔调，画面感强，允许适度修辞",
        "简洁" => "改写成极简风格，删掉一切冗余修饰，只留信息骨架",
        "情感" => "改写成情感共鸣向的表达，放大原文中的情绪线索",
        _ => "在保留原意的前提下优化表达与结构，使其更适合社交平台阅读",
    }
}

/// Build the style-rewrite prompt.
///
/// Wraps the source text with the selected style instruction and a fixed
/// six-point requirements list.
pub fn build_rewrite_prompt(text: &str, style_label: &str) -> String {
    format!(
        "请改写以下内容。\n\n\
         改写方向：{fragment}\n\n\
         原文：\n{text}\n\n\
         改写要求：\n\
         1. 保留原文的核心信息和事实\n\
         2. 适配社交平台的阅读习惯\n\
         3. 语气自然，不要有翻译腔\n\
         4. 结构清晰，分段合理\n\
         5. 给出一个有吸引力的标题\n\
         6. 总长度与原文相当，不超过800字",
        fragment = rewrite_style_fragment(style_label),
    )
}

// ---------------------------------------------------------------------------
// Translation
// ---------------------------------------------------------------------------

/// Build the translation prompt for the completion service.
///
/// Kept here with the other builders so the translation handler stays a
/// thin orchestrator.
pub fn build_translation_prompt(text: &str, from_name: &str, to_name: &str) -> String {
    format!(
        "请将以下{from_name}文本翻译成{to_name}。\n\n\
         原文：\n{text}\n\n\
         要求：\n\
         1. 忠实原意，不增删信息\n\
         2. 译文自然流畅，符合{to_name}的表达习惯\n\
         3. 专有名词保留原文并在括号中给出译名\n\
         4. 只输出译文，不要解释",
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
