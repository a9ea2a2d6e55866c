use sqlx::AnyPool;
use sqlx::any::{AnyPoolOptions, install_default_drivers};

/// Creates an in-memory SQLite pool with a `users` table behind a `v_user` view
pub async fn create_test_pool() -> AnyPool {
    install_default_drivers();

    let pool = AnyPoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create test pool");

    sqlx::query(
        r#"
            CREATE TABLE users (
                username TEXT,
                email TEXT,
                firstname TEXT,
                lastname TEXT,
                password TEXT,
                role TEXT,
                enabled INTEGER NOT NULL DEFAULT 1
            )
        "#,
    )
    .execute(&pool)
    .await
    .expect("Failed to create users table");

    sqlx::query(
        r#"
            CREATE VIEW v_user AS
            SELECT username, email, firstname, lastname, password, role
            FROM users
            WHERE enabled = 1
        "#,
    )
    .execute(&pool)
    .await
    .expect("Failed to create v_user view");

    pool
}

/// Inserts one enabled account row
pub async fn insert_account(pool: &AnyPool, username: Option<&str>, email: &str, role: &str) {
    sqlx::query(
        "INSERT INTO users (username, email, firstname, lastname, password, role) VALUES (?, ?, 'First', 'Last', 'Pw123', ?)",
    )
    .bind(username)
    .bind(email)
    .bind(role)
    .execute(pool)
    .await
    .expect("Failed to insert account");
}
