//! 认证模块
//!
//! 管理用户认证状态，与路由系统解耦。
//! 路由服务通过注入的认证信号来检查认证状态。

use bookify::{AppRoute, BookifyApi, ClientConfig, Session, SessionStore};
use leptos::prelude::*;

use crate::web::router::hard_navigate;
use crate::web::{FetchClient, LocalStorage};

/// 认证状态
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    /// 持久化的会话（token 与用户资料）
    pub session: Option<Session>,
    /// 是否已认证，即存储中有完整的会话
    pub is_authenticated: bool,
}

/// 认证上下文
///
/// 包含读写信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub state: ReadSignal<AuthState>,
    pub set_state: WriteSignal<AuthState>,
}

impl AuthContext {
    pub fn new() -> Self {
        let (state, set_state) = signal(AuthState::default());
        Self { state, set_state }
    }

    /// 获取认证状态信号（用于路由服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().is_authenticated)
    }

    /// 当前用户名
    pub fn username(&self) -> Signal<Option<String>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.session.as_ref().map(|s| s.user.username.clone())))
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 从 Context 获取客户端配置
pub fn use_config() -> ClientConfig {
    use_context::<ClientConfig>().expect("ClientConfig should be provided")
}

/// 基于浏览器 LocalStorage 的会话存储
pub fn session_store(config: &ClientConfig) -> SessionStore<LocalStorage> {
    SessionStore::with_keys(LocalStorage, &config.token_key, &config.user_key)
}

/// 构造带当前 token 的 API 客户端
pub fn use_api() -> BookifyApi<FetchClient> {
    let config = use_config();
    let token = session_store(&config).token();
    BookifyApi::new(FetchClient, &config.api_base_url).with_token(token)
}

/// 从 LocalStorage 恢复认证状态
pub fn init_auth(ctx: &AuthContext, config: &ClientConfig) {
    // load() 会清除只剩一半的会话，认证状态只看完整会话
    let session = session_store(config).load();
    let is_authenticated = session.is_some();
    ctx.set_state.set(AuthState {
        session,
        is_authenticated,
    });
}

/// 注销并清除状态
///
/// 清空存储后整页跳转到登录页，丢弃页面上残留的图书与评论数据。
/// 认证信号保持不变，随整页跳转一起丢弃。
pub fn logout(config: &ClientConfig) {
    session_store(config).clear();
    log::info!("logged out");
    hard_navigate(AppRoute::Login);
}
