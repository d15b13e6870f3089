//! 日志系统设置

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// 初始化日志系统
///
/// 本库只通过 `tracing` 宏发出事件，自己不安装订阅者。应用程序如果没有
/// 自己的 `tracing` 订阅者，又想看到加载/写入日志，在程序启动时、第一次
/// 使用 [`crate::IniFile`] 之前调用一次即可；已经配置了订阅者的应用不需要调用。
/// 过滤规则取自 `RUST_LOG`，未设置时 debug 构建为 `simple_ini=debug`，
/// release 构建为 `simple_ini=info`。
///
/// 可以重复调用，已经安装过全局订阅者时直接返回。
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| {
            // 默认日志级别：debug模式下显示debug信息，release模式下显示info信息
            if cfg!(debug_assertions) {
                EnvFilter::new("simple_ini=debug,warn")
            } else {
                EnvFilter::new("simple_ini=info,warn")
            }
        });

    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .with(filter)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_twice() {
        init_logging();
        init_logging();
        tracing::debug!("logging initialised");
    }
}
