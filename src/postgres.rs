//! Shared `PostgreSQL` plumbing for the Diesel adapters.
//!
//! Diesel is synchronous, so every adapter offloads its work to the blocking
//! thread pool and borrows a pooled connection there.

use diesel::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PoolError, PooledConnection};

/// `PostgreSQL` connection pool type shared by all adapters.
pub type PgPool = Pool<ConnectionManager<PgConnection>>;

/// Pooled connection type handed to adapter closures.
pub type PooledConn = PooledConnection<ConnectionManager<PgConnection>>;

/// Builds a connection pool for `database_url`.
///
/// # Errors
///
/// Returns [`PoolError`] when the pool cannot establish its initial
/// connections.
pub fn build_pool(database_url: &str) -> Result<PgPool, PoolError> {
    Pool::builder().build(ConnectionManager::<PgConnection>::new(database_url))
}

/// Runs `f` with a pooled connection on the blocking thread pool.
///
/// Pool checkout failures and join failures are mapped into the caller's
/// error type with `map_pool` and `map_join`.
pub(crate) async fn run_blocking<F, T, E, P, J>(
    pool: &PgPool,
    f: F,
    map_pool: P,
    map_join: J,
) -> Result<T, E>
where
    F: FnOnce(&mut PgConnection) -> Result<T, E> + Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
    P: FnOnce(PoolError) -> E + Send + 'static,
    J: FnOnce(tokio::task::JoinError) -> E,
{
    let pool = pool.clone();
    tokio::task::spawn_blocking(move || {
        let mut connection = pool.get().map_err(map_pool)?;
        f(&mut connection)
    })
    .await
    .map_err(map_join)?
}
