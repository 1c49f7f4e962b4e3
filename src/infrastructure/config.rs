//! 配置基础设施
//!
//! 配置只来自环境变量：`PORT`（默认 3000）、`HOST`（默认 0.0.0.0）。

use std::{
    env,
    net::{IpAddr, SocketAddr},
};

use anyhow::{Context, Result};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// 非 GET 请求所需的共享密钥
pub const DEFAULT_AUTH_TOKEN: &str = "mysecrettoken";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub auth_token: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: DEFAULT_PORT,
            auth_token: DEFAULT_AUTH_TOKEN.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 从任意键值来源读取配置，空值视为未设置
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT 不是有效端口: {}", raw))?,
            None => DEFAULT_PORT,
        };

        let host_raw = get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let host = host_raw
            .trim()
            .parse::<IpAddr>()
            .with_context(|| format!("HOST 不是有效地址: {}", host_raw))?;

        Ok(Self {
            host,
            port,
            ..Self::default()
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
