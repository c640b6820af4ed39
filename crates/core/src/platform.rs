//! Target platforms and their prompt configuration bundles.
//!
//! Each platform carries a system-role instruction, content rules, a set of
//! content-type templates, and one optimization prompt with a `{content}`
//! placeholder. Dispatch is an exhaustive match over the closed [`Platform`]
//! enum, so there is no "unknown key" path once a request string has been
//! parsed (unparseable strings fall back to the baseline platform).

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Platform
// ---------------------------------------------------------------------------

/// Distribution platform a piece of content is optimized for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Xiaohongshu,
    Video,
    Wechat,
}

/// Baseline platform used when a request names no platform or an unknown one.
pub const BASELINE_PLATFORM: Platform = Platform::Xiaohongshu;

impl Platform {
    /// Parse a request-supplied platform key.
    pub fn parse(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "xiaohongshu" | "xhs" => Some(Platform::Xiaohongshu),
            "video" | "douyin" => Some(Platform::Video),
            "wechat" | "weixin" => Some(Platform::Wechat),
            _ => None,
        }
    }

    /// Parse with fallback to [`BASELINE_PLATFORM`].
    pub fn parse_or_baseline(key: Option<&str>) -> Self {
        key.and_then(Platform::parse).unwrap_or(BASELINE_PLATFORM)
    }

    /// Canonical key used in request/response payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Xiaohongshu => "xiaohongshu",
            Platform::Video => "video",
            Platform::Wechat => "wechat",
        }
    }

    /// Chinese display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Platform::Xiaohongshu => "小红书",
            Platform::Video => "短视频",
            Platform::Wechat => "公众号",
        }
    }

    /// All platforms, in catalog order.
    pub const ALL: [Platform; 3] = [Platform::Xiaohongshu, Platform::Video, Platform::Wechat];
}

// ---------------------------------------------------------------------------
// Prompt configuration records
// ---------------------------------------------------------------------------

/// Writing rules baked into every prompt for a platform.
#[derive(Debug)]
pub struct ContentRules {
    /// How titles should be structured on this platform.
    pub title_structure: &'static str,
    /// Overall language register.
    pub tone: &'static str,
    /// High-engagement keywords worth weaving in.
    pub keywords: &'static [&'static str],
    /// Emotion tags the copy may lean on.
    pub emotion_tags: &'static [&'static str],
    /// Phrasings to avoid.
    pub avoid: &'static [&'static str],
}

/// Template and example titles for one content type on one platform.
#[derive(Debug)]
pub struct TypeTemplate {
    /// Content-type key, e.g. `美食`.
    pub key: &'static str,
    /// Structural template shown to the model as a hint.
    pub template: &'static str,
    /// Example outputs in the expected register.
    pub examples: &'static [&'static str],
}

/// Full prompt bundle for one platform.
#[derive(Debug)]
pub struct PlatformPromptConfig {
    /// System-role instruction for the completion call.
    pub system_prompt: &'static str,
    pub rules: ContentRules,
    /// Content-type templates, in catalog order.
    pub type_templates: &'static [TypeTemplate],
    /// Rewrite instruction. Contains exactly one `{content}` placeholder.
    pub optimization_prompt: &'static str,
}

/// Look up the prompt bundle for a platform.
pub fn prompt_config(platform: Platform) -> &'static PlatformPromptConfig {
    match platform {
        Platform::Xiaohongshu => &XIAOHONGSHU_CONFIG,
        Platform::Video => &VIDEO_CONFIG,
        Platform::Wechat => &WECHAT_CONFIG,
    }
}

/// Look up a content-type template on a platform, if the key is known.
pub fn type_template(platform: Platform, key: &str) -> Option<&'static TypeTemplate> {
    let key = key.trim();
    prompt_config(platform)
        .type_templates
        .iter()
        .find(|t| t.key == key)
}

// ---------------------------------------------------------------------------
// Xiaohongshu
// ---------------------------------------------------------------------------

static XIAOHONGSHU_CONFIG: PlatformPromptConfig = PlatformPromptConfig {
    system_prompt: "你是一位深耕小红书多年的爆款笔记写手，擅长把原始素材改写成自然、真诚、高互动的种草笔记。",
    rules: ContentRules {
        title_structure: "2-3个emoji + 悬念式或数字式标题，20字以内",
        tone: "口语化、亲切，像朋友之间的分享",
        keywords: &["真的绝了", "亲测", "无脑冲", "天花板", "干货满满", "谁懂啊"],
        emotion_tags: &["惊喜", "种草", "踩雷预警", "强烈安利"],
        avoid: &["营销腔", "夸大功效", "绝对化用语", "超过5行的长段落"],
    },
    type_templates: &[
        TypeTemplate {
            key: "美食",
            template: "开头一句场景钩子 → 店名/菜名 + 位置 → 2-3个必点推荐（每个配一句真实口感描述）→ 人均价格 → 避雷提醒 → 3-5个话题标签",
            examples: &[
                "🍜 挖到一家本地人才知道的苍蝇馆子！",
                "🧋 这家店的隐藏菜单真的谁懂啊",
            ],
        },
        TypeTemplate {
            key: "旅行",
            template: "目的地一句话定调 → 行程骨架（D1/D2…）→ 2-3个拍照机位 + 最佳时间 → 交通/住宿实用信息 → 踩坑提醒 → 话题标签",
            examples: &[
                "🏔️ 三天两夜人均800拿下小众川西",
                "🌊 这个海岛还没被网红攻占，抓紧去",
            ],
        },
        TypeTemplate {
            key: "穿搭",
            template: "身材/场景定位 → 整套搭配拆解（单品 + 链接位留白）→ 显瘦/显高小心机 → 不同场合替换方案 → 话题标签",
            examples: &[
                "👗 155小个子通勤穿搭公式，照抄就行",
                "🧥 一件风衣的5种穿法，同事问了三次链接",
            ],
        },
        TypeTemplate {
            key: "知识",
            template: "痛点提问开头 → 干货分点（每点一行小标题 + 2-3句展开）→ 一个立刻能用的行动建议 → 收藏引导 → 话题标签",
            examples: &[
                "📚 后悔没早点知道的3个记笔记方法",
                "💡 普通人也能上手的时间管理，亲测有效",
            ],
        },
    ],
    optimization_prompt: "请将下面的原始内容改写成一篇小红书笔记。\n\n原始内容：\n{content}\n\n要求：\n1. 标题带emoji、有钩子，20字以内\n2. 正文口语化、分短段，多用换行\n3. 保留原文的关键信息和事实，不要编造\n4. 结尾带互动引导和3-5个话题标签",
};

// ---------------------------------------------------------------------------
// Short video
// ---------------------------------------------------------------------------

static VIDEO_CONFIG: PlatformPromptConfig = PlatformPromptConfig {
    system_prompt: "你是一位短视频编导，擅长把素材改写成节奏紧凑、前3秒抓人的口播文案。",
    rules: ContentRules {
        title_structure: "冲突感或悬念前置，15字以内，适合作为封面大字",
        tone: "短句、强节奏，读出来顺口",
        keywords: &["最后一条最重要", "千万别划走", "直接抄作业", "记得点赞收藏"],
        emotion_tags: &["好奇", "紧迫", "反转", "共鸣"],
        avoid: &["书面语长句", "铺垫超过两句", "一次讲超过3个重点"],
    },
    type_templates: &[
        TypeTemplate {
            key: "知识",
            template: "3秒钩子（提问或反常识结论）→ 分3点讲清楚（每点一句话结论 + 一句话解释）→ 结尾行动指令 + 关注引导",
            examples: &[
                "为什么你越努力越穷？第三点扎心了",
                "这3个习惯，正在悄悄拉开人和人的差距",
            ],
        },
        TypeTemplate {
            key: "测评",
            template: "结论前置（值不值得买一句话说死）→ 3个实测维度 → 缺点必须讲一个 → 适合人群 → 结尾互动提问",
            examples: &[
                "别买！这玩意我替你们踩过坑了",
                "百元内天花板？实测一周后我改口了",
            ],
        },
        TypeTemplate {
            key: "剧情",
            template: "开场直接进冲突 → 两次递进 → 一个反转 → 结尾留钩子引导看下一条",
            examples: &[
                "我把辞职信拍在老板桌上，他的反应让我愣住了",
            ],
        },
    ],
    optimization_prompt: "请将下面的原始内容改写成一条60秒以内的短视频口播文案。\n\n原始内容：\n{content}\n\n要求：\n1. 前3秒必须有钩子\n2. 全程短句，每句不超过20字\n3. 保留原文的关键事实\n4. 结尾带一句互动引导",
};

// ---------------------------------------------------------------------------
// WeChat official account
// ---------------------------------------------------------------------------

static WECHAT_CONFIG: PlatformPromptConfig = PlatformPromptConfig {
    system_prompt: "你是一位公众号主笔，擅长把素材整理成结构清晰、观点明确、值得转发的深度文章。",
    rules: ContentRules {
        title_structure: "观点式或悬念式标题，可用副标题补充，25字以内",
        tone: "克制、有信息密度，允许适度书面语",
        keywords: &["深度", "复盘", "方法论", "长期主义"],
        emotion_tags: &["认同", "启发", "收藏"],
        avoid: &["标题党过度承诺", "通篇金句不给论据", "无小标题的大段文字"],
    },
    type_templates: &[
        TypeTemplate {
            key: "知识",
            template: "导语点题 → 3-4个小标题分层展开（观点 + 论据/例子）→ 结尾总结 + 延伸思考",
            examples: &[
                "关于高效学习，我想推翻自己三年前的结论",
            ],
        },
        TypeTemplate {
            key: "行业分析",
            template: "现象切入 → 数据或事实支撑 → 底层逻辑拆解 → 趋势判断 → 给读者的行动建议",
            examples: &[
                "这个行业正在发生的三个变化，和你有关",
            ],
        },
    ],
    optimization_prompt: "请将下面的原始内容整理改写成一篇公众号文章。\n\n原始内容：\n{content}\n\n要求：\n1. 标题明确传达核心观点\n2. 用小标题分层，每层观点 + 论据\n3. 保留并核实原文关键信息，不要虚构数据\n4. 结尾给出总结或行动建议",
};

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
