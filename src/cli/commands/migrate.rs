use crate::cli::utils::output_success;
use crate::cli::OutputFormat;
use crate::config;
use crate::database::{self, PgExecutor};

pub async fn handle(output_format: OutputFormat) -> anyhow::Result<()> {
    let pool = database::manager::connect(&config::config().database).await?;
    let store = PgExecutor::new(pool);

    database::schema::ensure_schema(&store).await?;
    store.pool().close().await;

    output_success(&output_format, "Blog tables are in place", None)
}
