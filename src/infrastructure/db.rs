use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr, Statement};

pub async fn init_db(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(database_url).await?;

    // Run migrations manually (simple SQL)
    run_migrations(&db).await?;

    Ok(db)
}

async fn run_migrations(db: &DatabaseConnection) -> Result<(), DbErr> {
    let statements = [
        r#"
        CREATE TABLE IF NOT EXISTS pet_store (
            pet_store_id INTEGER PRIMARY KEY AUTOINCREMENT,
            pet_store_name TEXT,
            pet_store_address TEXT,
            pet_store_city TEXT,
            pet_store_state TEXT,
            pet_store_zip_code TEXT,
            pet_store_phone_number TEXT
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS employee (
            employee_id INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_first_name TEXT,
            employee_last_name TEXT,
            employee_phone_number TEXT,
            employee_job_title TEXT,
            pet_store_id INTEGER NOT NULL,
            FOREIGN KEY (pet_store_id) REFERENCES pet_store(pet_store_id) ON DELETE CASCADE
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS customer (
            customer_id INTEGER PRIMARY KEY AUTOINCREMENT,
            customer_first_name TEXT,
            customer_last_name TEXT,
            customer_email TEXT
        )
        "#,
        // Join table: removing either side removes the association only
        r#"
        CREATE TABLE IF NOT EXISTS pet_store_customer (
            pet_store_id INTEGER NOT NULL,
            customer_id INTEGER NOT NULL,
            PRIMARY KEY (pet_store_id, customer_id),
            FOREIGN KEY (pet_store_id) REFERENCES pet_store(pet_store_id) ON DELETE CASCADE,
            FOREIGN KEY (customer_id) REFERENCES customer(customer_id) ON DELETE CASCADE
        )
        "#,
        "CREATE INDEX IF NOT EXISTS idx_employee_pet_store ON employee(pet_store_id)",
        "CREATE INDEX IF NOT EXISTS idx_pet_store_customer_customer ON pet_store_customer(customer_id)",
    ];

    for sql in statements {
        db.execute(Statement::from_string(
            db.get_database_backend(),
            sql.to_owned(),
        ))
        .await?;
    }

    tracing::debug!("Database schema is up to date");

    Ok(())
}
