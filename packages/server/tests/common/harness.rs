//! Test harnesses.
//!
//! `TestHarness` runs the core against the in-memory store and needs nothing
//! external. `PostgresHarness` uses a shared testcontainers PostgreSQL
//! instance; containers and migrations are initialized once on first use.

use anyhow::{Context, Result};
use server_core::common::Actor;
use server_core::domains::auth::JwtService;
use server_core::kernel::{InMemoryStore, ServerDeps};
use server_core::server::build_app;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use test_context::AsyncTestContext;
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;
use tokio::sync::OnceCell;

use super::ApiClient;

pub const TEST_JWT_SECRET: &str = "test_secret_key";
pub const TEST_JWT_ISSUER: &str = "event-planner-test";

fn init_tracing() {
    // Run tests with: RUST_LOG=debug cargo test -- --nocapture
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// ============================================================================
// In-memory harness
// ============================================================================

/// Core wired to `InMemoryStore`
///
/// ```ignore
/// use test_context::test_context;
///
/// #[test_context(TestHarness)]
/// #[tokio::test]
/// async fn my_test(ctx: &mut TestHarness) {
///     let alice = ctx.register("alice@example.com");
///     // ... test code
/// }
/// ```
pub struct TestHarness {
    pub store: Arc<InMemoryStore>,
    pub deps: ServerDeps,
    pub jwt: Arc<JwtService>,
}

impl AsyncTestContext for TestHarness {
    async fn setup() -> Self {
        Self::new()
    }

    async fn teardown(self) {}
}

impl TestHarness {
    pub fn new() -> Self {
        init_tracing();
        let store = InMemoryStore::new();
        let deps = store.deps();
        Self {
            store,
            deps,
            jwt: Arc::new(JwtService::new(TEST_JWT_SECRET, TEST_JWT_ISSUER.to_string())),
        }
    }

    /// Register a user in the directory and return them as an actor
    pub fn register(&self, email: &str) -> Actor {
        Actor::new(self.store.register_user(email), email)
    }

    pub fn token_for(&self, actor: &Actor) -> String {
        self.jwt
            .create_token(actor.user_id, &actor.email)
            .expect("Failed to mint test token")
    }

    /// HTTP client over the full router, middleware included
    pub fn api(&self) -> ApiClient {
        let router = build_app(
            self.deps.clone(),
            self.jwt.clone(),
            &["http://localhost:4200".to_string()],
            Duration::from_secs(5),
        );
        ApiClient::new(router)
    }
}

// ============================================================================
// PostgreSQL harness
// ============================================================================

/// Shared test infrastructure that persists across all tests.
struct SharedTestInfra {
    db_url: String,
    // Keep the container alive for the entire test run
    _postgres: ContainerAsync<Postgres>,
}

static SHARED_INFRA: OnceCell<SharedTestInfra> = OnceCell::const_new();

impl SharedTestInfra {
    async fn init() -> Result<Self> {
        init_tracing();

        let postgres = Postgres::default()
            .with_tag("16")
            .with_cmd(["-c", "max_connections=200"])
            .start()
            .await
            .context("Failed to start Postgres container")?;

        let pg_host = postgres.get_host().await?;
        let pg_port = postgres.get_host_port_ipv4(5432).await?;
        let db_url = format!(
            "postgresql://postgres:postgres@{}:{}/postgres",
            pg_host, pg_port
        );

        // Run migrations once on the shared database
        let pool = PgPool::connect(&db_url)
            .await
            .context("Failed to connect to Postgres for migrations")?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .context("Failed to run migrations")?;

        Ok(Self {
            db_url,
            _postgres: postgres,
        })
    }

    async fn get() -> &'static Self {
        SHARED_INFRA
            .get_or_init(|| async {
                Self::init()
                    .await
                    .expect("Failed to initialize shared test infrastructure")
            })
            .await
    }
}

/// Core wired to `PostgresStore` on the shared container.
///
/// Tests share one database, so every test creates its own users with
/// unique emails (see `unique_email`).
pub struct PostgresHarness {
    pub db_pool: PgPool,
    pub deps: ServerDeps,
}

impl AsyncTestContext for PostgresHarness {
    async fn setup() -> Self {
        Self::new().await.expect("Failed to create test harness")
    }

    async fn teardown(self) {
        // Database pool is automatically dropped
    }
}

impl PostgresHarness {
    pub async fn new() -> Result<Self> {
        let infra = SharedTestInfra::get().await;

        let db_pool = PgPool::connect(&infra.db_url)
            .await
            .context("Failed to connect to test database")?;

        Ok(Self {
            deps: ServerDeps::postgres(db_pool.clone()),
            db_pool,
        })
    }
}
