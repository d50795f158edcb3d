use leptos::prelude::*;

/// 表单字段下方的错误提示，没有错误时不渲染
#[component]
pub fn FieldError(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    move || {
        message.get().map(|msg| {
            view! {
                <label class="label">
                    <span class="label-text-alt text-error">{msg}</span>
                </label>
            }
        })
    }
}

/// 有错误时给输入框加上错误样式
pub fn input_class(base: &'static str, message: Signal<Option<String>>) -> impl Fn() -> String {
    move || {
        if message.with(Option::is_some) {
            format!("{} input-error", base)
        } else {
            base.to_string()
        }
    }
}
