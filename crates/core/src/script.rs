//! Script assembly for the short-video and voice-over routes.
//!
//! Composes a multi-section script from bounded fragment pools without any
//! model call. The caller supplies the RNG, so handlers get variety from
//! `rand::rng()` while tests seed a `StdRng` and assert structure. Both
//! script kinds share this one assembler; only the kind-specific opening
//! and call-to-action pools differ.

use rand::Rng;

use crate::platform::Platform;

// ---------------------------------------------------------------------------
// Section headers (fixed order in output)
// ---------------------------------------------------------------------------

pub const SECTION_OPENING: &str = "【开场】";
pub const SECTION_MAIN: &str = "【主体内容】";
pub const SECTION_INTERACTION: &str = "【互动引导】";
pub const SECTION_CLOSING: &str = "【结尾】";
pub const SECTION_EXTRA: &str = "【补充要求】";

/// Marker appended to fragments cut at the length bound.
pub const ELLIPSIS: &str = "…";

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

/// Which route is asking for a script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptKind {
    ShortVideo,
    VoiceOver,
}

/// Inputs to one assembly run.
#[derive(Debug)]
pub struct ScriptRequest<'a> {
    pub topic: &'a str,
    pub platform: Platform,
    /// Free-text style key; unknown keys use the default bundle.
    pub style: &'a str,
    /// Free-text duration tag; unknown tags use the medium default.
    pub duration: &'a str,
    pub kind: ScriptKind,
    /// Appended verbatim under [`SECTION_EXTRA`] when non-blank.
    pub extra_requirements: Option<&'a str>,
}

// ---------------------------------------------------------------------------
// Fragment pools
// ---------------------------------------------------------------------------

struct StyleBundle {
    key: &'static str,
    intros: &'static [&'static str],
    transitions: &'static [&'static str],
    endings: &'static [&'static str],
    points: &'static [&'static str],
    sub_points: &'static [&'static str],
}

static STYLE_BUNDLES: &[StyleBundle] = &[
    StyleBundle {
        key: "轻松幽默",
        intros: &[
            "先说好，这期没有广告，纯属我自己忍不住想聊{topic}",
            "关于{topic}，我本来不想说的，但实在憋不住了",
        ],
        transitions: &["咱们一条一条来", "别急，好戏在后头"],
        endings: &["就先聊到这，咱们评论区接着唠", "行了，再说下去要被你们举报啰嗦了"],
        points: &[
            "{topic}最容易被忽略的一点，其实是大家都觉得自己已经懂了，结果一上手全是坑",
            "我替你们试过了，{topic}里那个最热门的做法，真实体验和宣传完全是两回事",
            "说个反常识的：{topic}这件事，越是新手越容易在第一步花冤枉钱",
            "如果只能记住一句话，那就是{topic}别跟风，先想清楚自己要什么",
        ],
        sub_points: &[
            "这里有个小细节，九成的人都没注意到",
            "别问我怎么知道的，说多了都是泪",
        ],
    },
    StyleBundle {
        key: "专业干货",
        intros: &[
            "这期把{topic}一次性讲透，建议先收藏再看",
            "关于{topic}，网上的说法很乱，我按自己的实操经验帮你捋一遍",
        ],
        transitions: &["下面按步骤拆解", "核心就三件事，逐个说"],
        endings: &["以上方法都经过实测，按顺序执行就行", "把这套流程跑一遍，你会回来谢我的"],
        points: &[
            "先搞清楚{topic}的底层逻辑，再谈技巧，顺序反了就会一直在低水平重复",
            "{topic}的关键指标只有两三个，盯住它们，其他数据都是噪音",
            "给{topic}设一个明确的验收标准，没有标准的努力只是自我感动",
            "工具层面，{topic}用最基础的组合就够了，别在选工具上浪费时间",
        ],
        sub_points: &[
            "这一步建议记下来，后面会反复用到",
            "常见误区：把手段当成了目的",
        ],
    },
    StyleBundle {
        key: "情感共鸣",
        intros: &[
            "你有没有过这种时刻：明明是{topic}这样的小事，却突然被击中了",
            "今天想认真聊聊{topic}，因为后台太多人提到它了",
        ],
        transitions: &["我想起几件小事", "慢慢说，你慢慢听"],
        endings: &["愿你也能在{topic}里找到自己的答案", "今晚就到这里，晚安"],
        points: &[
            "{topic}之所以让人反复纠结，是因为我们都把它当成了对自己的评判",
            "很多人不是不懂{topic}，只是没有人告诉他们：慢一点也可以",
            "在{topic}这件事上，你不需要和任何人比较，你的节奏就是最好的节奏",
        ],
        sub_points: &[
            "如果你也是这样，别慌，这很正常",
            "允许自己偶尔做得不够好",
        ],
    },
    StyleBundle {
        key: "悬念反转",
        intros: &[
            "关于{topic}，我先放个结论，你八成不信：大部分人从一开始就做反了",
            "三个月前我还在劝人入坑{topic}，今天我要把这期视频当成道歉",
        ],
        transitions: &["先别划走，反转在后面", "看到这你可能觉得没什么，重点来了"],
        endings: &["下期揭晓另一个真相，不想错过就点个关注", "信不信由你，反正我已经改了"],
        points: &[
            "所有人都告诉你{topic}要趁早，但没人告诉你，时机不对时趁早等于白做",
            "{topic}里最贵的那个选项，实测下来反而是性价比最高的，原因很简单",
            "我曾经以为{topic}靠坚持，后来发现，会停下来的人走得更远",
        ],
        sub_points: &[
            "注意，这里和你想的不一样",
            "这个细节是整件事的转折点",
        ],
    },
];

/// Default bundle for unknown style keys.
const DEFAULT_STYLE_KEY: &str = "轻松幽默";

fn style_bundle(key: &str) -> &'static StyleBundle {
    let key = key.trim();
    STYLE_BUNDLES
        .iter()
        .find(|b| b.key == key)
        .unwrap_or(&STYLE_BUNDLES[0])
}

/// Opening lines per (kind, platform). Voice-over narration opens without
/// the on-camera greeting idioms.
fn opening_pool(kind: ScriptKind, platform: Platform) -> &'static [&'static str] {
    match (kind, platform) {
        (ScriptKind::ShortVideo, Platform::Xiaohongshu) => &[
            "姐妹们，今天必须跟你们聊聊{topic}！",
            "谁懂啊，{topic}这件事我真的研究明白了",
        ],
        (ScriptKind::ShortVideo, Platform::Video) => &[
            "千万别划走，{topic}这条视频能帮你省下大几百",
            "这可能是全网把{topic}讲得最实在的一条",
        ],
        (ScriptKind::ShortVideo, Platform::Wechat) => &[
            "今天这条，把{topic}一次讲清楚",
            "花一分钟，搞懂{topic}的来龙去脉",
        ],
        (ScriptKind::VoiceOver, _) => &[
            "你好，这一期我们来聊{topic}",
            "在开始之前，请先想一个问题：你真的了解{topic}吗",
            "这是一段关于{topic}的声音笔记",
        ],
    }
}

/// Interaction call-to-action pools per (kind, platform).
fn cta_pool(kind: ScriptKind, platform: Platform) -> &'static [&'static str] {
    match (kind, platform) {
        (ScriptKind::ShortVideo, Platform::Xiaohongshu) => &[
            "你们还想看{topic}的哪方面？评论区告诉我",
            "觉得有用的话点个收藏，翻笔记的时候不迷路",
        ],
        (ScriptKind::ShortVideo, Platform::Video) => &[
            "在评论区扣1，下期出{topic}的进阶版",
            "点赞过千，我把完整清单放到置顶评论",
        ],
        (ScriptKind::ShortVideo, Platform::Wechat) => &[
            "转发给那个正在为{topic}发愁的朋友",
            "在看点一下，下篇更新不迷路",
        ],
        (ScriptKind::VoiceOver, _) => &[
            "如果你对{topic}有自己的看法，欢迎留言告诉我",
            "你可以把这段音频分享给需要的人",
        ],
    }
}

// ---------------------------------------------------------------------------
// Duration structure
// ---------------------------------------------------------------------------

/// Section/point budget for one duration tag.
#[derive(Debug, Clone, Copy)]
pub struct DurationStructure {
    pub key: &'static str,
    /// Number of numbered point lines in the main section.
    pub sections: usize,
    /// Points per section; > 1 adds one sub-point line under each point.
    pub points_per_section: usize,
    /// Character bound per point line before truncation.
    pub max_chars_per_point: usize,
}

static DURATIONS: &[DurationStructure] = &[
    DurationStructure { key: "15s", sections: 2, points_per_section: 1, max_chars_per_point: 20 },
    DurationStructure { key: "30s", sections: 3, points_per_section: 1, max_chars_per_point: 25 },
    DurationStructure { key: "60s", sections: 3, points_per_section: 2, max_chars_per_point: 32 },
    DurationStructure { key: "3min", sections: 5, points_per_section: 2, max_chars_per_point: 40 },
];

/// Medium default used for unknown duration tags.
const DEFAULT_DURATION_KEY: &str = "60s";

/// Resolve a duration tag to its structure, falling back to the medium
/// default.
pub fn resolve_duration(tag: &str) -> &'static DurationStructure {
    let tag = tag.trim();
    DURATIONS
        .iter()
        .find(|d| d.key == tag)
        .or_else(|| DURATIONS.iter().find(|d| d.key == DEFAULT_DURATION_KEY))
        .unwrap_or(&DURATIONS[0])
}

// ---------------------------------------------------------------------------
// Assembly
// ---------------------------------------------------------------------------

/// Truncate to `max_chars` characters, appending [`ELLIPSIS`] when cut.
///
/// Char-based, not byte-based: the pools are CJK text.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max_chars).collect();
    cut.push_str(ELLIPSIS);
    cut
}

fn pick<'a>(rng: &mut impl Rng, pool: &[&'a str]) -> &'a str {
    if pool.is_empty() {
        return "";
    }
    pool[rng.random_range(0..pool.len())]
}

/// Assemble a script from the request's pools.
///
/// Output shape is invariant across RNG draws: the five section headers in
/// fixed order (extra only when supplied), one numbered line per resolved
/// section, one sub-point line per point when the structure asks for it.
pub fn assemble(request: &ScriptRequest<'_>, rng: &mut impl Rng) -> String {
    let topic = request.topic.trim();
    let bundle = style_bundle(request.style);
    let structure = resolve_duration(request.duration);

    let fill = |fragment: &str| fragment.replace("{topic}", topic);

    let opening = fill(pick(rng, opening_pool(request.kind, request.platform)));
    let intro = fill(pick(rng, bundle.intros));
    let transition = fill(pick(rng, bundle.transitions));
    let ending = fill(pick(rng, bundle.endings));
    let cta = fill(pick(rng, cta_pool(request.kind, request.platform)));

    let mut out = String::new();

    out.push_str(SECTION_OPENING);
    out.push('\n');
    out.push_str(&opening);
    out.push('\n');
    out.push_str(&intro);
    out.push_str("\n\n");

    out.push_str(SECTION_MAIN);
    out.push('\n');
    out.push_str(&transition);
    out.push('\n');
    for i in 1..=structure.sections {
        let point = truncate_chars(&fill(pick(rng, bundle.points)), structure.max_chars_per_point);
        out.push_str(&format!("{i}. {point}\n"));
        if structure.points_per_section > 1 {
            let sub = truncate_chars(
                &fill(pick(rng, bundle.sub_points)),
                structure.max_chars_per_point / 2,
            );
            out.push_str(&format!("   - {sub}\n"));
        }
    }
    out.push('\n');

    out.push_str(SECTION_INTERACTION);
    out.push('\n');
    out.push_str(&cta);
    out.push_str("\n\n");

    out.push_str(SECTION_CLOSING);
    out.push('\n');
    out.push_str(&ending);

    if let Some(extra) = request.extra_requirements {
        if !extra.trim().is_empty() {
            out.push_str("\n\n");
            out.push_str(SECTION_EXTRA);
            out.push('\n');
            out.push_str(extra);
        }
    }

    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
