use crate::{
    config::Config, data::user::UserRepository, error::AppError, service::token::TokenService,
};

/// Connects to the SQLite database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration,
/// then automatically runs all pending SeaORM migrations so the schema is
/// up-to-date before the application accesses the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Ensures the bootstrap user exists and logs a freshly minted API token for it.
///
/// Token-authenticated endpoints are unreachable on an empty database; when
/// `BOOTSTRAP_USER` is configured this creates the user on first run and mints
/// a token so the operator has a working credential. The key is only ever
/// printed to the server log.
///
/// # Arguments
/// - `db` - Database connection
/// - `config` - Application configuration with the optional bootstrap username
pub async fn bootstrap_api_token(
    db: &sea_orm::DatabaseConnection,
    config: &Config,
) -> Result<(), AppError> {
    let Some(ref username) = config.bootstrap_user else {
        return Ok(());
    };

    let repo = UserRepository::new(db);
    let user = repo.find_or_create(username).await?;

    let token = TokenService::new(db).mint(user.id).await?;
    tracing::info!("API token for {}: {}", username, token.key);

    Ok(())
}
