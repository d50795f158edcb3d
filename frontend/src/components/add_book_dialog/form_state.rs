//! 表单状态管理模块
//!
//! 将零散的 signal 整合为 `FormState` 结构体，负责：
//! - 数据的持有
//! - 数据的重置
//! - 数据到草稿对象的转换

use bookify::ValidationErrors;
use bookify::catalog::BookDraft;
use leptos::prelude::*;

/// 表单状态结构体
///
/// 使用 `RwSignal` 因为它实现了 `Copy` trait，非常适合作为 Props 在组件间传递。
#[derive(Clone, Copy)]
pub struct FormState {
    pub title: RwSignal<String>,
    pub author: RwSignal<String>,
    pub isbn: RwSignal<String>,
    pub description: RwSignal<String>,
    pub published_year: RwSignal<String>,

    /// 上一次提交的校验错误
    pub errors: RwSignal<ValidationErrors>,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            title: RwSignal::new(String::new()),
            author: RwSignal::new(String::new()),
            isbn: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            published_year: RwSignal::new(String::new()),
            errors: RwSignal::new(ValidationErrors::new()),
        }
    }

    /// 重置表单到初始状态
    pub fn reset(&self) {
        self.title.set(String::new());
        self.author.set(String::new());
        self.isbn.set(String::new());
        self.description.set(String::new());
        self.published_year.set(String::new());
        self.errors.set(ValidationErrors::new());
    }

    /// 读取当前输入
    pub fn to_draft(&self) -> BookDraft {
        BookDraft {
            title: self.title.get_untracked(),
            author: self.author.get_untracked(),
            isbn: self.isbn.get_untracked(),
            description: self.description.get_untracked(),
            published_year: self.published_year.get_untracked(),
        }
    }

    /// 某个字段的错误信息
    pub fn error(&self, field: &'static str) -> Signal<Option<String>> {
        let errors = self.errors;
        Signal::derive(move || errors.with(|e| e.get(field).map(str::to_string)))
    }
}
