//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::env;

use ipv64_solver_provider::Ipv64Client;

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(res.is_ok(), "{}: {res:?}", format_args!($($msg)+));
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 生成唯一的测试记录前缀
pub fn generate_test_prefix() -> String {
    let uuid = uuid::Uuid::new_v4();
    format!("_test-{}", &uuid.to_string()[..8])
}

/// 指向 stub 服务器的客户端
pub fn stub_client(server: &wiremock::MockServer, token: &str) -> Ipv64Client {
    Ipv64Client::with_endpoint(format!("{}/api.php", server.uri()), token.to_string())
}

/// 测试上下文 - 封装客户端与测试域名
pub struct TestContext {
    pub client: Ipv64Client,
    pub domain: String,
}

impl TestContext {
    /// 从环境变量创建 ipv64 测试上下文
    pub fn ipv64() -> Option<Self> {
        let token = env::var("IPV64_API_TOKEN").ok()?;
        let domain = env::var("IPV64_TEST_DOMAIN").ok()?;

        Some(Self {
            client: Ipv64Client::new(token),
            domain,
        })
    }
}
