//! 核心中间件模块
//!
//! 请求依次经过：请求日志 → 鉴权 → 路由处理器。每个阶段要么调用
//! `next.run` 继续，要么直接返回响应短路后续处理。

use std::{any::Any, sync::Arc, time::Instant};

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, Method},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::{debug, info, warn};

use super::error::CoreError;

/// 请求日志中间件
///
/// 在任何其他处理之前记录方法和路径，从不拒绝请求。
pub async fn request_logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    info!("{} {}", method, uri);

    let response = next.run(req).await;

    debug!(
        "{} {} - {} - {}ms",
        method,
        uri,
        response.status(),
        start.elapsed().as_millis()
    );

    response
}

/// 静态共享密钥鉴权
#[derive(Clone)]
pub struct BearerAuth {
    expected: Arc<str>,
}

impl BearerAuth {
    pub fn new(token: &str) -> Self {
        Self {
            expected: format!("Bearer {}", token).into(),
        }
    }

    /// `Authorization` 头必须与 `Bearer <token>` 完全一致
    pub fn is_authorized(&self, header: Option<&str>) -> bool {
        header == Some(&*self.expected)
    }
}

/// 鉴权中间件
///
/// GET 请求直接放行，其余方法必须携带正确的 Bearer token。
pub async fn auth_middleware(
    State(auth): State<BearerAuth>,
    req: Request,
    next: Next,
) -> Result<Response, CoreError> {
    if req.method() == Method::GET {
        return Ok(next.run(req).await);
    }

    let header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    if !auth.is_authorized(header) {
        warn!("拒绝未授权请求: {} {}", req.method(), req.uri().path());
        return Err(CoreError::Unauthorized);
    }

    Ok(next.run(req).await)
}

/// `CatchPanicLayer` 的兜底处理：处理器 panic 时返回通用 500 响应
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };

    CoreError::InternalServerError(detail).into_response()
}
