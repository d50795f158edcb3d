//! 添加图书对话框
//!
//! 打开状态由父组件持有，以便页头按钮和空状态按钮都能打开它。
//! 关闭时（取消、Esc、提交成功）表单会被重置；提交失败时保持输入不变。

mod form_state;

use bookify::catalog::{FIELD_AUTHOR, FIELD_ISBN, FIELD_PUBLISHED_YEAR, FIELD_TITLE};
use bookify::shared::NewBook;
use bookify::shared::date::current_year;
use leptos::prelude::*;

use crate::components::field_error::{FieldError, input_class};
use crate::components::icons::XIcon;
use form_state::FormState;

#[component]
pub fn AddBookDialog(
    open: RwSignal<bool>,
    /// 创建请求进行中
    #[prop(into)]
    submitting: Signal<bool>,
    #[prop(into)] on_submit: Callback<NewBook>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let state = FormState::new();
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();

    Effect::new(move |_| {
        let is_open = open.get();
        if let Some(dialog) = dialog_ref.get() {
            if is_open {
                if !dialog.open() {
                    let _ = dialog.show_modal();
                }
            } else if dialog.open() {
                dialog.close();
            }
        }
        if !is_open {
            state.reset();
        }
    });

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        match state.to_draft().validate(current_year()) {
            Ok(book) => {
                state.errors.set(Default::default());
                on_submit.run(book);
            }
            Err(errors) => {
                log::debug!("book form rejected: {}", errors);
                state.errors.set(errors);
            }
        }
    };

    let title_err = state.error(FIELD_TITLE);
    let author_err = state.error(FIELD_AUTHOR);
    let isbn_err = state.error(FIELD_ISBN);
    let year_err = state.error(FIELD_PUBLISHED_YEAR);

    view! {
        <dialog class="modal" node_ref=dialog_ref on:close=move |_| open.set(false)>
            {children.map(|c| c())}
            <div class="modal-box max-w-lg">
                <div class="flex items-center justify-between mb-4">
                    <h3 class="font-bold text-2xl">"Add New Book"</h3>
                    <button class="btn btn-ghost btn-sm btn-circle" on:click=move |_| open.set(false)>
                        <XIcon attr:class="h-4 w-4" />
                    </button>
                </div>

                <form on:submit=on_form_submit class="space-y-2" novalidate>
                    <div class="form-control">
                        <label for="book_title" class="label">
                            <span class="label-text">"Title *"</span>
                        </label>
                        <input id="book_title"
                            type="text"
                            placeholder="Enter book title"
                            on:input=move |ev| state.title.set(event_target_value(&ev))
                            prop:value=move || state.title.get()
                            class=input_class("input input-bordered w-full", title_err)
                        />
                        <FieldError message=title_err />
                    </div>

                    <div class="form-control">
                        <label for="book_author" class="label">
                            <span class="label-text">"Author *"</span>
                        </label>
                        <input id="book_author"
                            type="text"
                            placeholder="Enter author name"
                            on:input=move |ev| state.author.set(event_target_value(&ev))
                            prop:value=move || state.author.get()
                            class=input_class("input input-bordered w-full", author_err)
                        />
                        <FieldError message=author_err />
                    </div>

                    <div class="grid grid-cols-2 gap-4">
                        <div class="form-control">
                            <label for="book_isbn" class="label">
                                <span class="label-text">"ISBN"</span>
                            </label>
                            <input id="book_isbn"
                                type="text"
                                placeholder="Enter ISBN (optional)"
                                on:input=move |ev| state.isbn.set(event_target_value(&ev))
                                prop:value=move || state.isbn.get()
                                class=input_class("input input-bordered w-full", isbn_err)
                            />
                            <FieldError message=isbn_err />
                        </div>
                        <div class="form-control">
                            <label for="book_year" class="label">
                                <span class="label-text">"Published Year"</span>
                            </label>
                            <input id="book_year"
                                type="number"
                                placeholder="Enter publication year (optional)"
                                on:input=move |ev| state.published_year.set(event_target_value(&ev))
                                prop:value=move || state.published_year.get()
                                class=input_class("input input-bordered w-full", year_err)
                            />
                            <FieldError message=year_err />
                        </div>
                    </div>

                    <div class="form-control">
                        <label for="book_description" class="label">
                            <span class="label-text">"Description"</span>
                        </label>
                        <textarea id="book_description"
                            rows="4"
                            placeholder="Enter book description (optional)"
                            on:input=move |ev| state.description.set(event_target_value(&ev))
                            prop:value=move || state.description.get()
                            class="textarea textarea-bordered w-full"
                        ></textarea>
                    </div>

                    <div class="modal-action">
                        <button type="button" class="btn btn-ghost" on:click=move |_| open.set(false)>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                            {move || if submitting.get() {
                                view! { <span class="loading loading-spinner"></span> "Adding..." }.into_any()
                            } else {
                                "Add Book".into_any()
                            }}
                        </button>
                    </div>
                </form>
            </div>
            <form method="dialog" class="modal-backdrop">
                <button>"close"</button>
            </form>
        </dialog>
    }
}
