//! 凭证存储抽象 Trait

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::CoreResult;

/// Secret 数据中保存 API token 的键名
pub const API_KEY_FIELD: &str = "api-key";

/// 凭证存储 Trait
///
/// 平台实现:
/// - Kubernetes: Secret API（webhook 部署）
/// - 本地/测试: [`InMemoryCredentialStore`]
///
/// Store failures surface as errors; an absent secret or key is `Ok(None)`
/// so the caller can attach its own context.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// 读取指定 Secret 中某个键的值
    ///
    /// # Arguments
    /// * `namespace` - Secret 所在命名空间
    /// * `name` - Secret 名称
    /// * `key` - 数据键名（如 [`API_KEY_FIELD`]）
    ///
    /// # Returns
    /// * `Ok(Some(value))` - 键存在
    /// * `Ok(None)` - Secret 或键不存在
    async fn get_secret_value(
        &self,
        namespace: &str,
        name: &str,
        key: &str,
    ) -> CoreResult<Option<String>>;
}

/// In-memory credential store
///
/// Default implementation for tests and single-process deployments.
pub struct InMemoryCredentialStore {
    secrets: RwLock<HashMap<String, HashMap<String, String>>>,
}

impl InMemoryCredentialStore {
    /// 创建一个空的内存存储
    #[must_use]
    pub fn new() -> Self {
        Self {
            secrets: RwLock::new(HashMap::new()),
        }
    }

    /// 写入一个 Secret 键值
    pub async fn insert(&self, namespace: &str, name: &str, key: &str, value: &str) {
        self.secrets
            .write()
            .await
            .entry(secret_id(namespace, name))
            .or_default()
            .insert(key.to_string(), value.to_string());
    }
}

impl Default for InMemoryCredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn get_secret_value(
        &self,
        namespace: &str,
        name: &str,
        key: &str,
    ) -> CoreResult<Option<String>> {
        Ok(self
            .secrets
            .read()
            .await
            .get(&secret_id(namespace, name))
            .and_then(|data| data.get(key))
            .cloned())
    }
}

fn secret_id(namespace: &str, name: &str) -> String {
    format!("{namespace}/{name}")
}
