//! 图书目录页
//!
//! 页面上的异步流程都在这里编排：加载目录、添加图书、查看/分页评论、添加评论。
//! 组件可能在请求返回前被卸载，所以回调里写信号一律使用 `try_*`。

use bookify::catalog::BookCatalog;
use bookify::notice::{NoticeBoard, NoticeKind};
use bookify::reviews::{PageRequest, ReviewPanel};
use bookify::shared::{Book, NewBook, NewReview};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::{logout, use_api, use_auth, use_config};
use crate::components::add_book_dialog::AddBookDialog;
use crate::components::add_review_dialog::AddReviewDialog;
use crate::components::book_card::BookCard;
use crate::components::icons::{BookIcon, BookOpen, LogOut, Plus, Search};
use crate::components::notice_toast::{NoticeToast, notice_for_layer};
use crate::components::reviews_modal::ReviewsModal;

#[component]
pub fn CatalogPage() -> impl IntoView {
    let auth = use_auth();
    let config = StoredValue::new(use_config());
    let api = StoredValue::new(use_api());

    // ===== 页面状态 =====
    let catalog = RwSignal::new(BookCatalog::new());
    let search = RwSignal::new(String::new());
    let notices = RwSignal::new(NoticeBoard::new());
    let panel = RwSignal::new(ReviewPanel::new(config.with_value(|c| c.review_page_size)));
    // 评论弹窗展示的图书
    let reviews_book = RwSignal::new(Option::<Book>::None);
    // 添加评论的目标图书
    let review_target = RwSignal::new(Option::<Book>::None);
    let show_add_book = RwSignal::new(false);
    let show_add_review = RwSignal::new(false);
    let book_submitting = RwSignal::new(false);
    let review_submitting = RwSignal::new(false);

    // ===== 通知 =====
    let notify = move |kind: NoticeKind, message: String| {
        let Some(notice) = notices.try_update(|board| board.post(kind, message)) else {
            return;
        };
        let delay = config.with_value(|c| notice.dismiss_after(c));
        set_timeout(
            move || {
                notices.try_update(|board| board.dismiss(notice.id));
            },
            delay,
        );
    };

    // ===== 目录加载 =====
    Effect::new(move |_| {
        let api = api.get_value();
        let limit = config.with_value(|c| c.book_page_size);
        catalog.update(BookCatalog::begin_load);
        spawn_local(async move {
            match api.list_books(0, limit).await {
                Ok(books) => {
                    log::debug!("loaded {} books", books.len());
                    catalog.try_update(|c| c.loaded(books));
                }
                Err(e) => {
                    catalog.try_update(BookCatalog::load_failed);
                    notify(NoticeKind::LoadError, e.to_string());
                }
            }
        });
    });

    let handle_add_book = move |book: NewBook| {
        if book_submitting.get_untracked() {
            return;
        }
        book_submitting.set(true);
        let api = api.get_value();
        spawn_local(async move {
            match api.create_book(&book).await {
                Ok(created) => {
                    catalog.try_update(|c| c.insert_created(created));
                    show_add_book.try_set(false);
                    notify(NoticeKind::Success, "Book added successfully!".to_string());
                }
                Err(e) => notify(NoticeKind::MutationError, e.to_string()),
            }
            book_submitting.try_set(false);
        });
    };

    // ===== 评论 =====
    let fetch_reviews = move |req: PageRequest| {
        let api = api.get_value();
        spawn_local(async move {
            match req.fetch(&api).await {
                Ok(page) => {
                    panel.try_update(|p| p.apply(&req, page));
                }
                Err(e) => {
                    if panel.try_update(|p| p.fail(&req)).unwrap_or(false) {
                        notify(NoticeKind::LoadError, e.to_string());
                    }
                }
            }
        });
    };

    let handle_view_reviews = move |book: Book| {
        let book_id = book.id;
        reviews_book.set(Some(book));
        if let Some(req) = panel.try_update(|p| p.open(book_id)) {
            fetch_reviews(req);
        }
    };

    let handle_load_more = move |_: ()| {
        if let Some(Some(req)) = panel.try_update(ReviewPanel::load_more) {
            fetch_reviews(req);
        }
    };

    let handle_close_reviews = move |_: ()| {
        panel.update(ReviewPanel::close);
        reviews_book.set(None);
    };

    let handle_add_review = move |book: Book| {
        review_target.set(Some(book));
        show_add_review.set(true);
    };

    let handle_submit_review = move |review: NewReview| {
        let Some(book) = review_target.get_untracked() else {
            return;
        };
        if review_submitting.get_untracked() {
            return;
        }
        review_submitting.set(true);
        let api = api.get_value();
        spawn_local(async move {
            match api.create_review(book.id, &review).await {
                Ok(_) => {
                    show_add_review.try_set(false);
                    notify(NoticeKind::Success, "Review added successfully!".to_string());
                    // 评论弹窗正显示这本书时重新拉取第一页
                    if let Some(Some(req)) = panel.try_update(|p| p.refresh_for(book.id)) {
                        fetch_reviews(req);
                    }
                }
                Err(e) => notify(NoticeKind::MutationError, e.to_string()),
            }
            review_submitting.try_set(false);
        });
    };

    let on_logout = move |_| config.with_value(logout);

    let dismiss_notice = move |id: u64| notices.update(|board| board.dismiss(id));
    // 任一模态对话框打开时，提示改由对话框渲染
    let dialog_open = Memo::new(move |_| {
        show_add_book.get() || show_add_review.get() || panel.with(ReviewPanel::is_open)
    });
    let page_notice =
        Signal::derive(move || notices.with(|b| notice_for_layer(b, dialog_open.get())));
    let dialog_notice = Signal::derive(move || notices.with(|b| notice_for_layer(b, false)));

    // ===== 派生值 =====
    let visible = Memo::new(move |_| search.with(|term| catalog.with(|c| c.visible(term))));
    let loading = move || catalog.with(BookCatalog::is_loading);
    let username = auth.username();
    let welcome = move || {
        format!("Welcome, {}", username.get().unwrap_or_else(|| "User".to_string()))
    };

    view! {
        <div class="min-h-screen bg-base-200 font-sans">
            <NoticeToast notice=page_notice on_dismiss=dismiss_notice />

            <div class="navbar bg-base-100 shadow-sm px-4 md:px-8">
                <div class="flex-1 gap-3">
                    <div class="p-2 bg-primary rounded-lg text-primary-content">
                        <BookIcon attr:class="h-6 w-6" />
                    </div>
                    <span class="text-2xl font-bold text-primary">"BOOKIFY"</span>
                </div>
                <div class="flex-none gap-4">
                    <span class="text-sm text-base-content/70 hidden md:inline">{welcome}</span>
                    <button class="btn btn-primary gap-2" on:click=move |_| show_add_book.set(true)>
                        <Plus attr:class="h-5 w-5" /> "Add Book"
                    </button>
                    <button class="btn btn-outline gap-2" on:click=on_logout>
                        <LogOut attr:class="h-4 w-4" /> "Logout"
                    </button>
                </div>
            </div>

            <main class="max-w-7xl mx-auto p-4 md:p-8 space-y-8">
                <label class="input input-bordered flex items-center gap-2 max-w-md shadow-sm">
                    <Search attr:class="h-5 w-5 text-base-content/40" />
                    <input
                        type="text"
                        class="grow"
                        placeholder="Search books by title or author..."
                        on:input=move |ev| search.set(event_target_value(&ev))
                        prop:value=move || search.get()
                    />
                </label>

                <Show
                    when=move || !loading()
                    fallback=|| view! {
                        <div class="flex items-center justify-center py-12">
                            <span class="loading loading-spinner loading-lg text-primary"></span>
                            <span class="ml-3 text-base-content/70">"Loading books..."</span>
                        </div>
                    }
                >
                    <Show
                        when=move || visible.with(|v| !v.is_empty())
                        fallback=move || {
                            let term = search.get();
                            let (heading, hint) = BookCatalog::empty_state(&term);
                            let searching = !term.is_empty();
                            view! {
                                <div class="text-center py-12">
                                    <BookOpen attr:class="h-24 w-24 text-base-content/20 mx-auto mb-6" />
                                    <h3 class="text-xl font-semibold text-base-content/70 mb-2">{heading}</h3>
                                    <p class="text-base-content/60 mb-6">{hint}</p>
                                    <Show when=move || !searching>
                                        <button class="btn btn-primary gap-2" on:click=move |_| show_add_book.set(true)>
                                            <Plus attr:class="h-5 w-5" /> "Add Your First Book"
                                        </button>
                                    </Show>
                                </div>
                            }
                        }
                    >
                        <h2 class="text-lg font-semibold">
                            {move || BookCatalog::summary(&search.get(), visible.with(Vec::len))}
                        </h2>
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                            <For
                                each=move || visible.get()
                                key=|book| book.id
                                children=move |book| view! {
                                    <BookCard
                                        book=book
                                        on_view_reviews=handle_view_reviews
                                        on_add_review=handle_add_review
                                    />
                                }
                            />
                        </div>
                    </Show>
                </Show>
            </main>

            <AddBookDialog
                open=show_add_book
                submitting=book_submitting
                on_submit=handle_add_book
            >
                <NoticeToast notice=dialog_notice on_dismiss=dismiss_notice />
            </AddBookDialog>
            <AddReviewDialog
                open=show_add_review
                book=review_target
                submitting=review_submitting
                on_submit=handle_submit_review
            >
                <NoticeToast notice=dialog_notice on_dismiss=dismiss_notice />
            </AddReviewDialog>
            <ReviewsModal
                panel=panel
                book=reviews_book
                on_load_more=handle_load_more
                on_close=handle_close_reviews
            >
                <NoticeToast notice=dialog_notice on_dismiss=dismiss_notice />
            </ReviewsModal>
        </div>
    }
}
