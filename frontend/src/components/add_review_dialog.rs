//! 添加评论对话框

use bookify::ValidationErrors;
use bookify::reviews::{FIELD_RATING, FIELD_REVIEWER_NAME, ReviewDraft};
use bookify::shared::{Book, NewReview};
use leptos::prelude::*;

use crate::components::field_error::{FieldError, input_class};
use crate::components::icons::XIcon;
use crate::components::star_rating::StarRating;

#[component]
pub fn AddReviewDialog(
    open: RwSignal<bool>,
    /// 被评论的图书
    #[prop(into)]
    book: Signal<Option<Book>>,
    #[prop(into)] submitting: Signal<bool>,
    #[prop(into)] on_submit: Callback<NewReview>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let reviewer_name = RwSignal::new(String::new());
    let rating = RwSignal::new(0u8);
    let comment = RwSignal::new(String::new());
    let errors = RwSignal::new(ValidationErrors::new());
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
            reviewer_name.set(String::new());
            rating.set(0);
            comment.set(String::new());
            errors.set(ValidationErrors::new());
        }
    });

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let draft = ReviewDraft {
            reviewer_name: reviewer_name.get_untracked(),
            rating: rating.get_untracked(),
            comment: comment.get_untracked(),
        };
        match draft.validate() {
            Ok(review) => {
                errors.set(ValidationErrors::new());
                on_submit.run(review);
            }
            Err(e) => errors.set(e),
        }
    };

    let name_err = Signal::derive(move || {
        errors.with(|e| e.get(FIELD_REVIEWER_NAME).map(str::to_string))
    });
    let rating_err =
        Signal::derive(move || errors.with(|e| e.get(FIELD_RATING).map(str::to_string)));

    view! {
        <dialog class="modal" node_ref=dialog_ref on:close=move |_| open.set(false)>
            {children.map(|c| c())}
            <div class="modal-box max-w-md">
                <div class="flex items-center justify-between mb-4">
                    <h3 class="font-bold text-2xl">"Add Review"</h3>
                    <button class="btn btn-ghost btn-sm btn-circle" on:click=move |_| open.set(false)>
                        <XIcon attr:class="h-4 w-4" />
                    </button>
                </div>

                {move || book.get().map(|b| view! {
                    <div class="bg-base-200 rounded-lg p-3 mb-4">
                        <h4 class="font-semibold">{b.title}</h4>
                        <p class="text-sm text-base-content/70">"by " {b.author}</p>
                    </div>
                })}

                <form on:submit=on_form_submit class="space-y-2" novalidate>
                    <div class="form-control">
                        <label for="reviewer_name" class="label">
                            <span class="label-text">"Your Name *"</span>
                        </label>
                        <input id="reviewer_name"
                            type="text"
                            placeholder="Enter your name"
                            on:input=move |ev| reviewer_name.set(event_target_value(&ev))
                            prop:value=move || reviewer_name.get()
                            class=input_class("input input-bordered w-full", name_err)
                        />
                        <FieldError message=name_err />
                    </div>

                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">"Rating *"</span>
                        </label>
                        <StarRating
                            rating=Signal::derive(move || f64::from(rating.get()))
                            interactive=true
                            on_change=Callback::new(move |value: u8| rating.set(value))
                            show_value=false
                            size="h-8 w-8"
                        />
                        <FieldError message=rating_err />
                    </div>

                    <div class="form-control">
                        <label for="review_comment" class="label">
                            <span class="label-text">"Comment"</span>
                        </label>
                        <textarea id="review_comment"
                            rows="4"
                            placeholder="Share your thoughts about this book (optional)"
                            on:input=move |ev| comment.set(event_target_value(&ev))
                            prop:value=move || comment.get()
                            class="textarea textarea-bordered w-full"
                        ></textarea>
                    </div>

                    <div class="modal-action">
                        <button type="button" class="btn btn-ghost" on:click=move |_| open.set(false)>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                            {move || if submitting.get() { "Submitting..." } else { "Submit Review" }}
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
