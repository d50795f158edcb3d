//! HTTP 请求封装模块
//!
//! 基于 `gloo-net` 的 fetch 实现核心库的 `HttpClient`。

use bookify::request::{HttpClient, HttpRequest, HttpResponse, TransportError};
use bookify::shared::protocol::HttpMethod;
use gloo_net::http::Request;

/// 浏览器 fetch 客户端
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FetchClient;

#[async_trait::async_trait(?Send)]
impl HttpClient for FetchClient {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = match req.method {
            HttpMethod::Get => Request::get(&req.url),
            HttpMethod::Post => Request::post(&req.url),
        };
        for (key, value) in &req.headers {
            builder = builder.header(key, value);
        }

        let request = match req.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| TransportError::new(format!("请求构建失败: {}", e)))?;

        let response = request
            .send()
            .await
            .map_err(|e| TransportError::new(format!("网络错误: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::new(format!("响应读取失败: {}", e)))?;

        Ok(HttpResponse { status, body })
    }
}
