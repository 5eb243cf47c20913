//! 业务逻辑服务层

mod challenge_service;

pub use challenge_service::{ChallengeService, SOLVER_NAME, challenge_prefix};

use std::sync::Arc;

use ipv64_solver_provider::{RecordClient, create_client};

/// Record client 工厂 Trait
///
/// 每个 token 得到一个独立的客户端实例；不存在进程级共享客户端，
/// 后到的 token 也就不可能拿到为先前 token 构造的客户端。
pub trait RecordClientFactory: Send + Sync {
    /// 为给定 token 构造客户端
    fn create(&self, token: String) -> Arc<dyn RecordClient>;
}

/// Default factory producing real ipv64 clients.
pub struct Ipv64ClientFactory;

impl RecordClientFactory for Ipv64ClientFactory {
    fn create(&self, token: String) -> Arc<dyn RecordClient> {
        create_client(token)
    }
}
