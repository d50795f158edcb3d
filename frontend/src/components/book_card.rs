use bookify::shared::Book;
use leptos::prelude::*;

use crate::components::icons::{BookOpen, Calendar, ChevronDown, ChevronUp, MessageCircle, Plus};

/// 超过此长度的简介默认折叠
const COLLAPSE_THRESHOLD: usize = 150;

fn is_collapsible(description: &str) -> bool {
    description.chars().count() > COLLAPSE_THRESHOLD
}

#[component]
pub fn BookCard(
    book: Book,
    #[prop(into)] on_view_reviews: Callback<Book>,
    #[prop(into)] on_add_review: Callback<Book>,
) -> impl IntoView {
    let (expanded, set_expanded) = signal(false);

    let year = book.published_year;
    let isbn = book.isbn.clone();
    let description = book.description.clone().filter(|d| !d.is_empty());
    let collapsible = description.as_deref().is_some_and(is_collapsible);

    let view_book = book.clone();
    let review_book = book.clone();

    view! {
        <div class="card bg-base-100 shadow-lg hover:shadow-xl transition-all duration-300 border border-base-200 hover:border-primary/30">
            <div class="card-body">
                <div class="flex items-start justify-between gap-4">
                    <div class="flex-1 min-w-0">
                        <h3 class="card-title text-xl line-clamp-2">{book.title.clone()}</h3>
                        <p class="text-base-content/70 font-medium">"by " {book.author.clone()}</p>
                        {year.map(|y| view! {
                            <div class="flex items-center text-sm text-base-content/60 mt-1">
                                <Calendar attr:class="h-4 w-4 mr-1" />
                                {y}
                            </div>
                        })}
                        {isbn.map(|isbn| view! {
                            <p class="text-sm text-base-content/60">"ISBN: " {isbn}</p>
                        })}
                    </div>
                    <div class="p-3 bg-primary/10 rounded-lg text-primary">
                        <BookOpen attr:class="h-8 w-8" />
                    </div>
                </div>

                {description.map(|text| view! {
                    <div>
                        <p class=move || {
                            if expanded.get() {
                                "text-base-content/80 leading-relaxed"
                            } else {
                                "text-base-content/80 leading-relaxed line-clamp-3"
                            }
                        }>
                            {text}
                        </p>
                        <Show when=move || collapsible>
                            <button
                                class="btn btn-link btn-sm px-0 gap-1"
                                on:click=move |_| set_expanded.update(|e| *e = !*e)
                            >
                                {move || if expanded.get() {
                                    view! { "Show less" <ChevronUp attr:class="h-4 w-4" /> }.into_any()
                                } else {
                                    view! { "Show more" <ChevronDown attr:class="h-4 w-4" /> }.into_any()
                                }}
                            </button>
                        </Show>
                    </div>
                })}

                <div class="card-actions justify-between pt-4 border-t border-base-200">
                    <button
                        class="btn btn-ghost btn-sm gap-2 text-primary"
                        on:click=move |_| on_view_reviews.run(view_book.clone())
                    >
                        <MessageCircle attr:class="h-4 w-4" /> "View Reviews"
                    </button>
                    <button
                        class="btn btn-primary btn-sm gap-2"
                        on:click=move |_| on_add_review.run(review_book.clone())
                    >
                        <Plus attr:class="h-4 w-4" /> "Add Review"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_only_past_threshold() {
        assert!(!is_collapsible(&"a".repeat(COLLAPSE_THRESHOLD)));
        assert!(is_collapsible(&"a".repeat(COLLAPSE_THRESHOLD + 1)));
    }

    #[test]
    fn counts_characters_not_bytes() {
        // 100 个汉字是 300 字节
        assert!(!is_collapsible(&"书".repeat(100)));
    }
}
