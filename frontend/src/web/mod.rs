//! 浏览器原生 API 封装模块
//!
//! 把核心库中的抽象 (`HttpClient`、`KeyValueStorage`) 接到浏览器上，
//! 并集中管理对 window.history / window.location 的访问。

pub mod http;
pub mod router;
pub mod storage;

pub use http::FetchClient;
pub use storage::LocalStorage;
