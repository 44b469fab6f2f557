use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::server::{
    config::{AppEnv, Config},
    error::{config::ConfigError, Error},
};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Installs the global tracing subscriber.
///
/// Logs always go to stdout. When `LOG_DIR` is set they are also written, without ANSI
/// colours, to a daily rolling `bubble.<date>.log` in that directory. `RUST_LOG` overrides
/// the default level of `info` in production and `debug` otherwise.
///
/// The returned guard flushes the file writer on drop and must be held until shutdown.
pub fn init_tracing(config: &Config) -> Result<Option<WorkerGuard>, Error> {
    let default_level = match config.app_env {
        AppEnv::Production => "info",
        AppEnv::Development | AppEnv::Test => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let (file_layer, guard) = match &config.log_dir {
        Some(dir) => {
            let appender = rolling::Builder::new()
                .rotation(rolling::Rotation::DAILY)
                .filename_prefix("bubble")
                .filename_suffix("log")
                .build(dir)
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var: "LOG_DIR".to_string(),
                    reason: e.to_string(),
                })?;
            let (writer, guard) = tracing_appender::non_blocking(appender);

            (
                Some(fmt::layer().with_writer(writer).with_ansi(false)),
                Some(guard),
            )
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(file_layer)
        .init();

    Ok(guard)
}
