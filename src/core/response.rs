//! 核心响应处理模块

use serde::{Deserialize, Serialize};

/// 只包含一条提示信息的响应体，错误响应与删除确认共用
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
