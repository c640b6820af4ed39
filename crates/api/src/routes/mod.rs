pub mod auth;
pub mod cards;
pub mod health;
pub mod notes;
pub mod rewrite;
pub mod scripts;
pub mod styles;
pub mod translate;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /notes/generate                生成笔记（抓取链接）
/// /notes/generate-deep           生成笔记（深度抓取 + 轮询）
/// /notes/search                  生成笔记（搜索结果）
///
/// /rewrite                       风格改写
///
/// /scripts/short-video           短视频脚本（无模型调用）
/// /scripts/voice-over            口播脚本（无模型调用）
///
/// /translate                     翻译
/// /translate/languages           支持的语言表
///
/// /cards                         卡片文案生成
///
/// /styles                        风格目录
/// /styles/recommend              平台/内容类型推荐
/// /styles/{key}                  风格详情
/// /styles/{key}/prompt           风格设计提示词
///
/// /auth/login                    登录（代理后端）
/// /auth/register                 注册（代理后端）
/// /keys/activate                 卡密激活（代理后端）
/// /keys/consume                  卡密核销（代理后端）
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/notes", notes::router())
        .nest("/rewrite", rewrite::router())
        .nest("/scripts", scripts::router())
        .nest("/translate", translate::router())
        .nest("/cards", cards::router())
        .nest("/styles", styles::router())
        .nest("/auth", auth::router())
        .nest("/keys", auth::keys_router())
}
