use bookify::notice::{Notice, NoticeBoard};
use leptos::prelude::*;

use crate::components::icons::XIcon;

/// 当前应在某一层显示的提示
///
/// 模态对话框位于浏览器顶层，页面上的提示会被遮住，
/// 因此对话框打开时由对话框自己渲染提示，页面层不再显示。
pub fn notice_for_layer(board: &NoticeBoard, covered: bool) -> Option<Notice> {
    if covered {
        None
    } else {
        board.current().cloned()
    }
}

/// 右上角的通知提示框，可手动关闭
#[component]
pub fn NoticeToast(
    #[prop(into)] notice: Signal<Option<Notice>>,
    #[prop(into)] on_dismiss: Callback<u64>,
) -> impl IntoView {
    move || {
        notice.get().map(|n| {
            let class = if n.is_error() {
                "alert alert-error shadow-lg"
            } else {
                "alert alert-success shadow-lg"
            };
            let id = n.id;
            view! {
                <div class="toast toast-top toast-end z-[60]">
                    <div role="alert" class=class>
                        <span>{n.message}</span>
                        <button
                            type="button"
                            class="btn btn-ghost btn-xs btn-circle"
                            aria-label="Dismiss"
                            on:click=move |_| on_dismiss.run(id)
                        >
                            <XIcon attr:class="h-4 w-4" />
                        </button>
                    </div>
                </div>
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookify::notice::NoticeKind;

    #[test]
    fn covered_layer_hides_notice() {
        let mut board = NoticeBoard::new();
        board.post(NoticeKind::MutationError, "Failed to create book");

        assert!(notice_for_layer(&board, true).is_none());
        let shown = notice_for_layer(&board, false).unwrap();
        assert_eq!(shown.message, "Failed to create book");
    }

    #[test]
    fn dismissed_notice_is_gone_from_every_layer() {
        let mut board = NoticeBoard::new();
        let notice = board.post(NoticeKind::Success, "Book added successfully!");
        board.dismiss(notice.id);

        assert!(notice_for_layer(&board, false).is_none());
        assert!(notice_for_layer(&board, true).is_none());
    }
}
