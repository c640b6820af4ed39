//! Static catalog of card/presentation styles.
//!
//! The catalog is a literal table of [`StyleDefinition`] records plus pure
//! lookup and ranking functions. Suitability scores rate each style 1-10
//! per platform and drive [`recommend_for_platform`]; content-type tags
//! drive [`recommend_for_content_type`]. [`render_design_prompt`] turns a
//! definition into the natural-language design brief sent to the model by
//! the card routes.

use serde::Serialize;

use crate::platform::Platform;

// ---------------------------------------------------------------------------
// Definition records
// ---------------------------------------------------------------------------

/// Named color slots of a style.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ColorPalette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub background: &'static str,
}

/// Size/weight/line-height for one text role.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TextSpec {
    pub size: &'static str,
    pub weight: &'static str,
    pub line_height: &'static str,
}

/// Typography spec per text role.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Typography {
    pub title: TextSpec,
    pub subtitle: TextSpec,
    pub body: TextSpec,
}

/// Overall layout family of a style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutKind {
    Card,
    Full,
    Split,
    Overlay,
}

/// Layout descriptors.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Layout {
    pub kind: LayoutKind,
    pub spacing: &'static str,
    pub corner_radius: &'static str,
    pub shadow: &'static str,
}

/// Suitability scores (1-10) per platform.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PlatformScores {
    pub xiaohongshu: u8,
    pub video: u8,
    pub wechat: u8,
}

impl PlatformScores {
    /// Score for one platform.
    pub fn for_platform(&self, platform: Platform) -> u8 {
        match platform {
            Platform::Xiaohongshu => self.xiaohongshu,
            Platform::Video => self.video,
            Platform::Wechat => self.wechat,
        }
    }
}

/// One entry in the style catalog.
#[derive(Debug, Serialize)]
pub struct StyleDefinition {
    /// Unique catalog key.
    pub key: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    /// Ordered descriptive feature tags.
    pub features: &'static [&'static str],
    pub palette: ColorPalette,
    pub typography: Typography,
    pub layout: Layout,
    pub principles: &'static [&'static str],
    /// Non-binding technical hints for renderers.
    pub tech_hints: &'static [&'static str],
    pub scores: PlatformScores,
    /// Content-type tags this style suits.
    pub content_types: &'static [&'static str],
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// Minimum platform score for a style to be recommended.
pub const RECOMMEND_THRESHOLD: u8 = 7;

static CATALOG: &[StyleDefinition] = &[
    StyleDefinition {
        key: "minimal-ins",
        name: "简约ins风",
        category: "简约",
        features: &["大量留白", "低饱和配色", "细线条分隔", "单一视觉焦点"],
        palette: ColorPalette {
            primary: "#2E2E2E",
            secondary: "#8C8C8C",
            accent: "#D4B896",
            background: "#FAF8F5",
        },
        typography: Typography {
            title: TextSpec { size: "28px", weight: "600", line_height: "1.3" },
            subtitle: TextSpec { size: "16px", weight: "400", line_height: "1.5" },
            body: TextSpec { size: "14px", weight: "400", line_height: "1.8" },
        },
        layout: Layout {
            kind: LayoutKind::Card,
            spacing: "宽松，外边距24px起",
            corner_radius: "12px",
            shadow: "0 2px 12px rgba(0,0,0,0.06)",
        },
        principles: &["少即是多", "层级靠字重不靠颜色", "一屏只讲一件事"],
        tech_hints: &["3:4竖版优先", "正文不超过3段"],
        scores: PlatformScores { xiaohongshu: 9, video: 6, wechat: 7 },
        content_types: &["穿搭", "家居", "摄影", "生活方式"],
    },
    StyleDefinition {
        key: "magazine",
        name: "杂志编辑风",
        category: "编辑",
        features: &["衬线大标题", "栏式排版", "首字下沉", "图文混排"],
        palette: ColorPalette {
            primary: "#1A1A1A",
            secondary: "#555555",
            accent: "#B23A48",
            background: "#FFFFFF",
        },
        typography: Typography {
            title: TextSpec { size: "32px", weight: "700", line_height: "1.2" },
            subtitle: TextSpec { size: "18px", weight: "500", line_height: "1.4" },
            body: TextSpec { size: "15px", weight: "400", line_height: "1.75" },
        },
        layout: Layout {
            kind: LayoutKind::Split,
            spacing: "紧凑栏距，段间距分明",
            corner_radius: "0",
            shadow: "无",
        },
        principles: &["标题即观点", "排版服务阅读节奏", "黑白为主一处点色"],
        tech_hints: &["适合长文切片", "引文用侧边竖线"],
        scores: PlatformScores { xiaohongshu: 8, video: 5, wechat: 9 },
        content_types: &["深度阅读", "人物", "品牌故事", "行业分析"],
    },
    StyleDefinition {
        key: "journal",
        name: "手帐拼贴风",
        category: "可爱",
        features: &["胶带贴纸元素", "手写体点缀", "网格纸底纹", "不规则边框"],
        palette: ColorPalette {
            primary: "#4A4A4A",
            secondary: "#9B8579",
            accent: "#E8A0BF",
            background: "#FFF9F0",
        },
        typography: Typography {
            title: TextSpec { size: "24px", weight: "600", line_height: "1.4" },
            subtitle: TextSpec { size: "15px", weight: "400", line_height: "1.5" },
            body: TextSpec { size: "13px", weight: "400", line_height: "1.9" },
        },
        layout: Layout {
            kind: LayoutKind::Card,
            spacing: "元素错落，留手写批注位",
            corner_radius: "8px",
            shadow: "纸片投影 0 1px 4px rgba(0,0,0,0.12)",
        },
        principles: &["真实感大于精致感", "装饰不压内容", "一页一个主题"],
        tech_hints: &["适合打卡类连载", "日期角标固定右上"],
        scores: PlatformScores { xiaohongshu: 9, video: 7, wechat: 5 },
        content_types: &["日常记录", "学习打卡", "旅行"],
    },
    StyleDefinition {
        key: "business",
        name: "商务简报风",
        category: "商务",
        features: &["深色标题栏", "数据卡片", "图表占位", "强对齐网格"],
        palette: ColorPalette {
            primary: "#0F2B46",
            secondary: "#4F6D7A",
            accent: "#2F80ED",
            background: "#F5F7FA",
        },
        typography: Typography {
            title: TextSpec { size: "26px", weight: "700", line_height: "1.3" },
            subtitle: TextSpec { size: "16px", weight: "500", line_height: "1.4" },
            body: TextSpec { size: "14px", weight: "400", line_height: "1.6" },
        },
        layout: Layout {
            kind: LayoutKind::Full,
            spacing: "8px网格对齐",
            corner_radius: "6px",
            shadow: "0 1px 6px rgba(15,43,70,0.10)",
        },
        principles: &["结论先行", "一图一观点", "数字放大字母缩小"],
        tech_hints: &["16:9横版可切PPT", "重点数据用accent色"],
        scores: PlatformScores { xiaohongshu: 5, video: 4, wechat: 9 },
        content_types: &["行业分析", "职场干货", "知识"],
    },
    StyleDefinition {
        key: "lifestyle",
        name: "生活暖调风",
        category: "生活",
        features: &["暖色滤镜感", "大图压字", "圆润图形", "轻描边标签"],
        palette: ColorPalette {
            primary: "#5C4033",
            secondary: "#A47551",
            accent: "#E9B384",
            background: "#FFF6EC",
        },
        typography: Typography {
            title: TextSpec { size: "26px", weight: "600", line_height: "1.35" },
            subtitle: TextSpec { size: "16px", weight: "400", line_height: "1.5" },
            body: TextSpec { size: "14px", weight: "400", line_height: "1.8" },
        },
        layout: Layout {
            kind: LayoutKind::Overlay,
            spacing: "图占七成字占三成",
            corner_radius: "16px",
            shadow: "0 4px 16px rgba(92,64,51,0.12)",
        },
        principles: &["氛围感优先", "文字短促像随手记", "色不过三"],
        tech_hints: &["压字区域需半透明遮罩"],
        scores: PlatformScores { xiaohongshu: 8, video: 8, wechat: 6 },
        content_types: &["美食", "日常记录", "好物分享"],
    },
    StyleDefinition {
        key: "healing",
        name: "治愈系",
        category: "情感",
        features: &["奶油色系", "大圆角", "插画元素", "柔和渐变"],
        palette: ColorPalette {
            primary: "#6B705C",
            secondary: "#A5A58D",
            accent: "#FFB4A2",
            background: "#FEFAE0",
        },
        typography: Typography {
            title: TextSpec { size: "24px", weight: "500", line_height: "1.5" },
            subtitle: TextSpec { size: "15px", weight: "400", line_height: "1.6" },
            body: TextSpec { size: "14px", weight: "300", line_height: "2.0" },
        },
        layout: Layout {
            kind: LayoutKind::Card,
            spacing: "极宽松，行间留呼吸感",
            corner_radius: "24px",
            shadow: "0 2px 20px rgba(107,112,92,0.08)",
        },
        principles: &["情绪大于信息", "短句分行像诗", "不用感叹号堆情绪"],
        tech_hints: &["适合晚间发布场景"],
        scores: PlatformScores { xiaohongshu: 8, video: 9, wechat: 6 },
        content_types: &["情感", "晚安文案", "旅行"],
    },
    StyleDefinition {
        key: "tech",
        name: "科技深色风",
        category: "科技",
        features: &["深色底", "霓虹描边", "等宽数字", "发光分隔线"],
        palette: ColorPalette {
            primary: "#E6EDF3",
            secondary: "#8B949E",
            accent: "#58A6FF",
            background: "#0D1117",
        },
        typography: Typography {
            title: TextSpec { size: "28px", weight: "700", line_height: "1.25" },
            subtitle: TextSpec { size: "16px", weight: "500", line_height: "1.4" },
            body: TextSpec { size: "14px", weight: "400", line_height: "1.7" },
        },
        layout: Layout {
            kind: LayoutKind::Full,
            spacing: "模块化卡片栅格",
            corner_radius: "10px",
            shadow: "内发光 0 0 0 1px rgba(88,166,255,0.25)",
        },
        principles: &["参数用表格不用散文", "对比色只给关键指标", "暗底亮字保证对比度"],
        tech_hints: &["代码/参数用等宽字体"],
        scores: PlatformScores { xiaohongshu: 6, video: 8, wechat: 8 },
        content_types: &["数码", "测评", "知识"],
    },
    StyleDefinition {
        key: "retro",
        name: "复古胶片风",
        category: "复古",
        features: &["胶片颗粒", "日期水印", "褪色暖黄", "宽画幅黑边"],
        palette: ColorPalette {
            primary: "#3F3A34",
            secondary: "#7D7468",
            accent: "#C96F4A",
            background: "#EFE6D8",
        },
        typography: Typography {
            title: TextSpec { size: "26px", weight: "600", line_height: "1.3" },
            subtitle: TextSpec { size: "15px", weight: "400", line_height: "1.5" },
            body: TextSpec { size: "13px", weight: "400", line_height: "1.8" },
        },
        layout: Layout {
            kind: LayoutKind::Overlay,
            spacing: "上下黑边压字",
            corner_radius: "4px",
            shadow: "无",
        },
        principles: &["做旧但不脏", "时间地点元素增强叙事", "字体不超过两种"],
        tech_hints: &["颗粒噪点强度控制在15%以下"],
        scores: PlatformScores { xiaohongshu: 7, video: 7, wechat: 6 },
        content_types: &["摄影", "旅行", "音乐"],
    },
];

/// All styles, in catalog order.
pub fn all_styles() -> &'static [StyleDefinition] {
    CATALOG
}

// ---------------------------------------------------------------------------
// Lookup & recommendation
// ---------------------------------------------------------------------------

/// Look up a style by its unique key.
pub fn lookup(key: &str) -> Option<&'static StyleDefinition> {
    CATALOG.iter().find(|s| s.key == key.trim())
}

/// Styles suited to a platform: score >= [`RECOMMEND_THRESHOLD`], sorted
/// descending by that platform's score. Ties keep catalog order (stable
/// sort). Empty when nothing qualifies.
pub fn recommend_for_platform(platform: Platform) -> Vec<&'static StyleDefinition> {
    let mut matches: Vec<&StyleDefinition> = CATALOG
        .iter()
        .filter(|s| s.scores.for_platform(platform) >= RECOMMEND_THRESHOLD)
        .collect();
    matches.sort_by_key(|s| std::cmp::Reverse(s.scores.for_platform(platform)));
    matches
}

/// Styles whose content-type tags match a query, case-insensitively and in
/// either direction (tag contains query, or query contains tag).
pub fn recommend_for_content_type(query: &str) -> Vec<&'static StyleDefinition> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }
    CATALOG
        .iter()
        .filter(|s| {
            s.content_types.iter().any(|tag| {
                let tag = tag.to_lowercase();
                tag.contains(&query) || query.contains(&tag)
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Design prompt rendering
// ---------------------------------------------------------------------------

/// Render the design brief for a style, or `None` for unknown keys.
///
/// Deterministic interpolation of the definition into a fixed template —
/// no randomness, so identical calls produce identical briefs.
pub fn render_design_prompt(key: &str) -> Option<String> {
    let s = lookup(key)?;
    Some(format!(
        "请按「{name}」风格设计内容卡片。\n\
         风格类别：{category}\n\
         视觉特征：{features}\n\
         配色：主色 {primary}，辅色 {secondary}，强调色 {accent}，背景 {background}\n\
         字体：标题 {title_size}/{title_weight}，副标题 {subtitle_size}/{subtitle_weight}，正文 {body_size}/{body_weight}\n\
         版式：{layout_kind}，间距{spacing}，圆角 {radius}，阴影 {shadow}\n\
         设计原则：{principles}\n\
         技术提示：{hints}",
        name = s.name,
        category = s.category,
        features = s.features.join("、"),
        primary = s.palette.primary,
        secondary = s.palette.secondary,
        accent = s.palette.accent,
        background = s.palette.background,
        title_size = s.typography.title.size,
        title_weight = s.typography.title.weight,
        subtitle_size = s.typography.subtitle.size,
        subtitle_weight = s.typography.subtitle.weight,
        body_size = s.typography.body.size,
        body_weight = s.typography.body.weight,
        layout_kind = match s.layout.kind {
            LayoutKind::Card => "卡片式",
            LayoutKind::Full => "满版式",
            LayoutKind::Split => "分栏式",
            LayoutKind::Overlay => "图文叠加式",
        },
        spacing = s.layout.spacing,
        radius = s.layout.corner_radius,
        shadow = s.layout.shadow,
        principles = s.principles.join("；"),
        hints = s.tech_hints.join("；"),
    ))
}

// ---------------------------------------------------------------------------
// Preview / generation template mapping
// ---------------------------------------------------------------------------

/// Forward mapping: preview style key -> actual generation template key.
///
/// The reverse direction is derived by [`preview_keys_for`], never
/// hand-maintained, so a generation template cannot silently drift away
/// from every preview that claims to show it.
pub static PREVIEW_TO_ACTUAL: &[(&str, &str)] = &[
    ("minimal-ins", "card-minimal"),
    ("journal", "card-minimal"),
    ("magazine", "card-editorial"),
    ("business", "card-editorial"),
    ("lifestyle", "card-photo"),
    ("healing", "card-photo"),
    ("retro", "card-photo"),
    ("tech", "card-dark"),
];

/// Actual generation template for a preview key.
pub fn actual_template(preview_key: &str) -> Option<&'static str> {
    PREVIEW_TO_ACTUAL
        .iter()
        .find(|(preview, _)| *preview == preview_key)
        .map(|(_, actual)| *actual)
}

/// All preview keys that resolve to a generation template, derived from the
/// forward mapping.
pub fn preview_keys_for(actual_key: &str) -> Vec<&'static str> {
    PREVIEW_TO_ACTUAL
        .iter()
        .filter(|(_, actual)| *actual == actual_key)
        .map(|(preview, _)| *preview)
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
