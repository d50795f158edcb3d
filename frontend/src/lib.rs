//! Bookify 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `bookify::route`: 路由定义与守卫（领域模型，位于核心库）
//! - `web::router`: 路由服务（核心引擎）
//! - `auth`: 认证状态管理
//! - `components`: UI 组件层

mod auth;
mod components {
    mod add_book_dialog;
    mod add_review_dialog;
    mod book_card;
    pub mod catalog;
    mod field_error;
    mod icons;
    pub mod login;
    mod notice_toast;
    mod reviews_modal;
    pub mod signup;
    mod star_rating;
}

use crate::auth::{AuthContext, init_auth};
use crate::components::catalog::CatalogPage;
use crate::components::login::LoginPage;
use crate::components::signup::SignupPage;

use bookify::{AppRoute, ClientConfig};
use leptos::prelude::*;

// 浏览器原生 API 封装模块
pub(crate) mod web;

use web::router::{Link, Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Home => view! { <CatalogPage /> }.into_any(),
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Signup => view! { <SignupPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                    <Link route=AppRoute::Home class="btn btn-primary mt-6">"Back to Library"</Link>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 客户端配置（构建时环境变量）
    let config = ClientConfig::from_build_env();
    log::info!("Bookify starting, API at {}", config.api_base_url);

    // 2. 创建认证上下文并从 LocalStorage 恢复会话
    let auth_ctx = AuthContext::new();
    init_auth(&auth_ctx, &config);
    provide_context(config);
    provide_context(auth_ctx);

    // 3. 获取认证状态信号，用于注入路由服务
    let is_authenticated = auth_ctx.is_authenticated_signal();

    view! {
        <Router is_authenticated=is_authenticated>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
