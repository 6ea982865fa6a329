//! 日志基础设施

use std::io;

use tracing_appender::{non_blocking, non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::LoggingConfig;

pub struct Logger;

impl Logger {
    /// 初始化日志系统
    ///
    /// `RUST_LOG` 优先于配置中的级别。设置了 `log_dir` 时额外按天写入日志文件，
    /// 返回的 guard 需要在进程生命周期内保持存活。
    pub fn init(config: &LoggingConfig) -> anyhow::Result<Option<WorkerGuard>> {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&config.level));

        let console = if config.json {
            fmt::layer().json().with_writer(io::stdout).boxed()
        } else {
            fmt::layer().compact().with_writer(io::stdout).boxed()
        };

        let (file, guard) = match &config.log_dir {
            Some(dir) => {
                std::fs::create_dir_all(dir)?;
                let appender = rolling::daily(dir, &config.file_prefix);
                let (writer, guard) = non_blocking(appender);
                let layer = fmt::layer()
                    .with_writer(writer)
                    .with_ansi(false)
                    .with_target(false)
                    .with_thread_names(true);
                (Some(layer), Some(guard))
            }
            None => (None, None),
        };

        tracing_subscriber::registry()
            .with(filter)
            .with(console)
            .with(file)
            .try_init()?;

        Ok(guard)
    }
}
