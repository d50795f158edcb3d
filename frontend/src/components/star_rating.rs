//! 星级评分组件
//!
//! 只读模式用于展示平均分/单条评分；交互模式用于评论表单，支持悬停预览。

use leptos::prelude::*;

use crate::components::icons::Star;

pub const MAX_STARS: u8 = 5;

/// 第 `star` 颗星在给定分值下是否点亮
fn is_lit(star: u8, value: f64) -> bool {
    f64::from(star) <= value
}

#[component]
pub fn StarRating(
    /// 当前分值
    #[prop(into)]
    rating: Signal<f64>,
    /// 是否可以点击选择
    #[prop(optional)]
    interactive: bool,
    /// 选中某颗星时回调（仅交互模式）
    #[prop(optional)]
    on_change: Option<Callback<u8>>,
    /// 是否在星星后面显示一位小数的分值
    #[prop(default = true)]
    show_value: bool,
    #[prop(default = "h-4 w-4")] size: &'static str,
) -> impl IntoView {
    let (hover, set_hover) = signal(0u8);
    let shown = move || match hover.get() {
        0 => rating.get(),
        h => f64::from(h),
    };

    let stars = (1..=MAX_STARS)
        .map(|star| {
            let class = move || {
                let tone = if is_lit(star, shown()) {
                    "fill-warning text-warning"
                } else {
                    "text-base-content/30"
                };
                let cursor = if interactive {
                    "cursor-pointer transition-transform hover:scale-110"
                } else {
                    ""
                };
                format!("{} {} {}", size, tone, cursor)
            };

            view! {
                <span
                    on:click=move |_| {
                        if interactive {
                            if let Some(cb) = on_change {
                                cb.run(star);
                            }
                        }
                    }
                    on:mouseenter=move |_| {
                        if interactive {
                            set_hover.set(star);
                        }
                    }
                    on:mouseleave=move |_| {
                        if interactive {
                            set_hover.set(0);
                        }
                    }
                >
                    <Star attr:class=class />
                </span>
            }
        })
        .collect_view();

    view! {
        <div class="flex items-center gap-1">
            {stars}
            <Show when=move || show_value>
                <span class="ml-1 text-sm text-base-content/70">
                    {move || format!("{:.1}", rating.get())}
                </span>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fractional_rating_lights_whole_stars_only() {
        let lit: Vec<bool> = (1..=MAX_STARS).map(|s| is_lit(s, 4.5)).collect();
        assert_eq!(lit, vec![true, true, true, true, false]);
    }

    #[test]
    fn zero_rating_lights_nothing() {
        assert!((1..=MAX_STARS).all(|s| !is_lit(s, 0.0)));
    }
}
