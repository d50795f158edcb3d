use bookify::AppRoute;
use bookify::auth::{self as flows, LOGIN_SUCCESS, LoginForm};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::{session_store, use_api, use_config};
use crate::components::icons::{ArrowRight, Eye, EyeOff, Lock, Mail};
use crate::web::router::{hard_navigate, use_router};

/// 表单上方的提示条，`(内容, 是否成功)`
pub(crate) type FormMessage = Option<(String, bool)>;

#[component]
pub(crate) fn FormAlert(message: ReadSignal<FormMessage>) -> impl IntoView {
    move || {
        message.get().map(|(text, ok)| {
            let class = if ok {
                "alert alert-success text-sm py-2"
            } else {
                "alert alert-error text-sm py-2"
            };
            view! {
                <div role="alert" class=class>
                    <span>{text}</span>
                </div>
            }
        })
    }
}

/// 带显示/隐藏切换的密码输入框
#[component]
pub(crate) fn PasswordInput(
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
    #[prop(default = "Enter your password")] placeholder: &'static str,
) -> impl IntoView {
    let (visible, set_visible) = signal(false);

    view! {
        <label class="input input-bordered flex items-center gap-2">
            <Lock attr:class="h-4 w-4 opacity-60" />
            <input
                class="grow"
                type=move || if visible.get() { "text" } else { "password" }
                placeholder=placeholder
                on:input=move |ev| set_value.set(event_target_value(&ev))
                prop:value=value
            />
            <button
                type="button"
                class="btn btn-ghost btn-xs btn-circle"
                on:click=move |_| set_visible.update(|v| *v = !*v)
            >
                {move || if visible.get() {
                    view! { <EyeOff attr:class="h-4 w-4 opacity-60" /> }.into_any()
                } else {
                    view! { <Eye attr:class="h-4 w-4 opacity-60" /> }.into_any()
                }}
            </button>
        </label>
    }
}

/// 跳转前等待的毫秒数
pub(crate) fn redirect_delay_ms(delay: std::time::Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let config = use_config();
    let delay_ms = redirect_delay_ms(config.auth_redirect_delay);
    let api = StoredValue::new(use_api());
    let store = StoredValue::new(session_store(&config));
    let router = use_router();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (message, set_message) = signal(FormMessage::None);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }

        let form = LoginForm {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        if let Err(msg) = form.validate() {
            set_message.set(Some((msg.to_string(), false)));
            return;
        }

        set_is_submitting.set(true);
        set_message.set(None);

        let api = api.get_value();
        let store = store.get_value();
        spawn_local(async move {
            match flows::login(&api, &store, &form).await {
                Ok(session) => {
                    log::info!("signed in as {}", session.user.username);
                    set_message.try_set(Some((LOGIN_SUCCESS.to_string(), true)));
                    // 保持按钮禁用直到整页跳转
                    TimeoutFuture::new(delay_ms).await;
                    hard_navigate(AppRoute::auth_success_redirect());
                }
                Err(msg) => {
                    set_message.try_set(Some((msg, false)));
                    set_is_submitting.try_set(false);
                }
            }
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <div class="flex flex-col items-center gap-2">
                        <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                            <Lock attr:class="h-8 w-8" />
                        </div>
                        <h1 class="text-3xl font-bold">"Welcome Back"</h1>
                        <p class="text-base-content/70">"Sign in to your account"</p>
                    </div>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit novalidate>
                        <FormAlert message=message />

                        <div class="form-control">
                            <label class="input input-bordered flex items-center gap-2">
                                <Mail attr:class="h-4 w-4 opacity-60" />
                                <input
                                    class="grow"
                                    type="email"
                                    placeholder="Enter your email"
                                    on:input=move |ev| set_email.set(event_target_value(&ev))
                                    prop:value=email
                                />
                            </label>
                        </div>
                        <div class="form-control">
                            <PasswordInput value=password set_value=set_password />
                        </div>
                        <div class="form-control mt-6">
                            <button type="submit" class="btn btn-primary gap-2" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Signing In..." }.into_any()
                                } else {
                                    view! { "Sign In" <ArrowRight attr:class="h-5 w-5" /> }.into_any()
                                }}
                            </button>
                        </div>

                        <div class="divider text-base-content/50">"or"</div>

                        <p class="text-center text-sm text-base-content/70">"Don't have an account?"</p>
                        <button
                            type="button"
                            class="btn btn-outline"
                            on:click=move |_| router.navigate(AppRoute::Signup.to_path())
                        >
                            "Create Account"
                        </button>
                    </form>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn redirect_delay_in_millis() {
        assert_eq!(redirect_delay_ms(Duration::from_secs(1)), 1000);
        assert_eq!(redirect_delay_ms(Duration::from_secs(u64::MAX)), u32::MAX);
    }
}
