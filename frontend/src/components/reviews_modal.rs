//! 评论列表弹窗
//!
//! 只负责展示 `ReviewPanel` 的状态，分页请求由目录页发起。

use bookify::reviews::ReviewPanel;
use bookify::shared::date::display_date;
use bookify::shared::{Book, Review};
use leptos::prelude::*;

use crate::components::icons::{MessageCircle, UserIcon, XIcon};
use crate::components::star_rating::StarRating;

#[component]
fn ReviewCard(review: Review) -> impl IntoView {
    let rating = review.rating;
    view! {
        <div class="card card-compact bg-base-100 border border-base-300 hover:shadow-md transition-shadow">
            <div class="card-body">
                <div class="flex items-start justify-between">
                    <div class="flex items-center gap-3">
                        <div class="avatar placeholder">
                            <div class="bg-secondary text-secondary-content rounded-full w-10 flex items-center justify-center">
                                <UserIcon attr:class="h-5 w-5" />
                            </div>
                        </div>
                        <div>
                            <h4 class="font-semibold">{review.reviewer_name}</h4>
                            <p class="text-sm text-base-content/60">{display_date(&review.created_at)}</p>
                        </div>
                    </div>
                    <StarRating rating=rating />
                </div>
                {review.comment.filter(|c| !c.is_empty()).map(|c| view! {
                    <p class="text-base-content/80 leading-relaxed">{c}</p>
                })}
            </div>
        </div>
    }
}

#[component]
pub fn ReviewsModal(
    panel: RwSignal<ReviewPanel>,
    #[prop(into)] book: Signal<Option<Book>>,
    #[prop(into)] on_load_more: Callback<()>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();
    let is_open = Memo::new(move |_| panel.with(ReviewPanel::is_open));

    Effect::new(move |_| {
        let open = is_open.get();
        if let Some(dialog) = dialog_ref.get() {
            if open {
                if !dialog.open() {
                    let _ = dialog.show_modal();
                }
            } else if dialog.open() {
                dialog.close();
            }
        }
    });

    let loading = move || panel.with(ReviewPanel::is_loading);
    let loading_more = move || panel.with(ReviewPanel::is_loading_more);
    let has_more = move || panel.with(ReviewPanel::has_more);
    let reviews = move || panel.with(|p| p.reviews().to_vec());

    view! {
        <dialog
            class="modal"
            node_ref=dialog_ref
            on:close=move |_| {
                if is_open.get_untracked() {
                    on_close.run(());
                }
            }
        >
            {children.map(|c| c())}
            <div class="modal-box max-w-2xl max-h-[80vh] flex flex-col p-0">
                <div class="flex items-center justify-between p-6 border-b border-base-300">
                    <div>
                        <h3 class="font-bold text-2xl">{move || book.get().map(|b| b.title).unwrap_or_default()}</h3>
                        <p class="text-base-content/70">"Reviews"</p>
                    </div>
                    <button class="btn btn-ghost btn-sm btn-circle" on:click=move |_| on_close.run(())>
                        <XIcon attr:class="h-4 w-4" />
                    </button>
                </div>

                <div class="flex-1 overflow-y-auto p-6">
                    <Show
                        when=move || !loading()
                        fallback=|| view! {
                            <div class="flex items-center justify-center py-8">
                                <span class="loading loading-spinner loading-lg text-primary"></span>
                            </div>
                        }
                    >
                        <Show
                            when=move || panel.with(|p| !p.reviews().is_empty())
                            fallback=|| view! {
                                <div class="text-center py-8">
                                    <MessageCircle attr:class="h-16 w-16 text-base-content/20 mx-auto mb-4" />
                                    <p class="text-base-content/60">"No reviews yet for this book."</p>
                                </div>
                            }
                        >
                            <div class="space-y-4">
                                <For
                                    each=reviews
                                    key=|r| r.id
                                    children=|review| view! { <ReviewCard review=review /> }
                                />
                                <Show when=move || has_more() || loading_more()>
                                    <div class="text-center pt-4">
                                        <button
                                            class="btn btn-ghost text-primary"
                                            disabled=loading_more
                                            on:click=move |_| on_load_more.run(())
                                        >
                                            {move || if loading_more() {
                                                view! { <span class="loading loading-spinner loading-sm"></span> "Loading..." }.into_any()
                                            } else {
                                                "Load More Reviews".into_any()
                                            }}
                                        </button>
                                    </div>
                                </Show>
                            </div>
                        </Show>
                    </Show>
                </div>
            </div>
            <form method="dialog" class="modal-backdrop">
                <button>"close"</button>
            </form>
        </dialog>
    }
}
