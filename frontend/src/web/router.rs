//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API，所有对 window.history 的操作都集中在此模块。
//! 守卫规则来自核心库的 `AppRoute::guard`，这里只负责把判定结果落到地址栏和信号上。

use bookify::{AppRoute, RouteDecision};
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// 推送 History 状态
fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 替换 History 状态（用于重定向）
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 整页跳转
///
/// 会丢弃所有内存中的状态，登录/注册成功后使用。
pub fn hard_navigate(route: AppRoute) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_href(route.to_path()) {
            log::error!("[Router] hard navigation to {} failed: {:?}", route, e);
        }
    }
}

/// 路由器服务
///
/// 封装所有路由操作，通过 Signal 驱动界面更新。
/// 通过注入认证检查信号实现与认证系统的解耦。
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    /// 认证状态（注入的信号）
    is_authenticated: Signal<bool>,
}

impl RouterService {
    fn new(is_authenticated: Signal<bool>) -> Self {
        let requested = AppRoute::from_path(&current_path());
        let decision = requested.guard(is_authenticated.get_untracked());
        // 首次加载的重定向不应留下可以"后退"回去的历史记录
        if decision.is_redirect() {
            log::info!("[Router] {} is not reachable, showing {}", requested, decision.route());
            replace_history_state(decision.route().to_path());
        }
        let (current_route, set_route) = signal(decision.route());

        Self {
            current_route,
            set_route,
            is_authenticated,
        }
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// **核心方法：导航与守卫**
    ///
    /// 流程：请求 -> 验证(Guard) -> 更新地址栏 -> 加载
    pub fn navigate(&self, path: &str) {
        let target = AppRoute::from_path(path);
        self.navigate_to_route(target, true);
    }

    /// 导航到指定路由
    ///
    /// `use_push` 为 true 时使用 pushState，否则 replaceState。
    fn navigate_to_route(&self, target: AppRoute, use_push: bool) {
        let decision = target.guard(self.is_authenticated.get_untracked());
        if let RouteDecision::Redirect(redirect) = decision {
            log::info!("[Router] {} denied, redirecting to {}", target, redirect);
        }

        let route = decision.route();
        if use_push {
            push_history_state(route.to_path());
        } else {
            replace_history_state(route.to_path());
        }
        self.set_route.set(route);
    }

    /// 初始化浏览器后退/前进按钮监听
    fn init_popstate_listener(&self) {
        let service = *self;

        let closure = Closure::<dyn Fn()>::new(move || {
            let target = AppRoute::from_path(&current_path());
            // popstate 时地址栏已经变了，重定向只能替换
            service.navigate_to_route(target, false);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 认证状态变化时重新评估当前路由
    fn setup_auth_redirect(&self) {
        let current_route = self.current_route;
        let set_route = self.set_route;
        let is_authenticated = self.is_authenticated;

        Effect::new(move |_| {
            let is_auth = is_authenticated.get();
            let route = current_route.get_untracked();

            if let RouteDecision::Redirect(redirect) = route.guard(is_auth) {
                log::info!(
                    "[Router] auth state changed (authenticated: {}), redirecting to {}",
                    is_auth,
                    redirect
                );
                push_history_state(redirect.to_path());
                set_route.set(redirect);
            }
        });
    }
}

/// 提供路由服务到 Context 并初始化
fn provide_router(is_authenticated: Signal<bool>) -> RouterService {
    let router = RouterService::new(is_authenticated);

    router.init_popstate_listener();
    router.setup_auth_redirect();

    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
///
/// 提供路由上下文，应在 App 根部使用。
#[component]
pub fn Router(
    /// 认证状态信号
    is_authenticated: Signal<bool>,
    children: Children,
) -> impl IntoView {
    provide_router(is_authenticated);

    children()
}

/// 路由出口组件
///
/// 根据当前路由状态渲染对应的组件。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}

/// 应用内链接
///
/// 拦截点击并走路由守卫，不触发整页刷新。
#[component]
pub fn Link(
    route: AppRoute,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let router = use_router();

    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        router.navigate(route.to_path());
    };

    view! {
        <a href=route.to_path() class=class on:click=on_click>
            {children()}
        </a>
    }
}
