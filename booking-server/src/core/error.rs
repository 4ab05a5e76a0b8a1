use thiserror::Error;

/// Errors that stop the server from starting or keep it from serving
///
/// Request-level failures never surface here; handlers answer with
/// `AppError` instead.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("配置错误: {0}")]
    Config(String),

    #[error("数据库初始化失败: {0}")]
    Database(String),

    #[error("I/O 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("内部服务器错误: {0}")]
    Internal(#[from] anyhow::Error),
}

/// 服务器启动流程的 Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;
