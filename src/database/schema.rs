use tracing::info;

use crate::database::executor::QueryExecutor;
use crate::database::manager::StoreError;

/// Tables backing the four blog resources. Column names keep the camelCase
/// spelling of the JSON fields so listed rows echo the request body keys.
/// No foreign keys: a comment's post and user are not checked.
pub const TABLES: &[(&str, &str)] = &[
    (
        "users",
        r#"CREATE TABLE IF NOT EXISTS users (
            id BIGSERIAL PRIMARY KEY,
            username TEXT NOT NULL,
            email TEXT NOT NULL,
            password TEXT NOT NULL,
            role_id BIGINT NOT NULL
        )"#,
    ),
    (
        "posts",
        r#"CREATE TABLE IF NOT EXISTS posts (
            id BIGSERIAL PRIMARY KEY,
            title TEXT NOT NULL,
            content TEXT NOT NULL,
            "userId" BIGINT
        )"#,
    ),
    (
        "comments",
        r#"CREATE TABLE IF NOT EXISTS comments (
            id BIGSERIAL PRIMARY KEY,
            comment TEXT NOT NULL,
            "postId" BIGINT,
            "userId" BIGINT
        )"#,
    ),
    (
        "categories",
        r#"CREATE TABLE IF NOT EXISTS categories (
            id BIGSERIAL PRIMARY KEY,
            "categoryName" TEXT NOT NULL
        )"#,
    ),
];

/// Create any missing blog table. Existing tables are left untouched.
pub async fn ensure_schema(store: &dyn QueryExecutor) -> Result<(), StoreError> {
    for (table, ddl) in TABLES {
        store.execute(ddl, &[]).await?;
        info!(table, "Ensured table");
    }
    Ok(())
}
