//! 지연 연결 셀
//!
//! 요청 핸들러마다 "연결이 없으면 연결한다"를 호출해도 프로세스 전체에서
//! 실제 연결은 최대 한 번만 수립되도록 보장합니다.
//!
//! ## 동작 규칙
//!
//! - 연결이 이미 있으면 즉시 같은 연결을 돌려줍니다.
//! - 첫 호출이 동시에 여러 개 들어오면 하나만 연결을 시도하고 나머지는 그 결과를 기다립니다.
//! - 연결 시도가 실패하면 그 시도를 기다리던 호출자 모두가 같은 에러를 받고,
//!   셀은 비어 있는 채로 남습니다. 실패 이후에 들어온 호출이 다시 연결을 시도합니다.
//! - 어떤 호출자도 초기화가 끝나지 않은 연결을 받지 않습니다.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use futures_util::future::{BoxFuture, FutureExt, Shared, TryFutureExt};
use tokio::sync::{Mutex, OnceCell};
use crate::config::DatabaseConfig;
use crate::db::Database;
use crate::errors::{AppError, AppResult};

type SharedAttempt<T, E> = Shared<BoxFuture<'static, Result<Arc<T>, E>>>;

/// 한 번만 수립되는 연결을 보관하는 셀
pub struct LazyConnection<T, E> {
    cell: OnceCell<Arc<T>>,
    in_flight: Mutex<Option<SharedAttempt<T, E>>>,
    attempts: AtomicUsize,
}

impl<T, E> Default for LazyConnection<T, E>
where
    T: Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> std::fmt::Debug for LazyConnection<T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LazyConnection")
            .field("connected", &self.cell.initialized())
            .field("attempts", &self.attempts.load(Ordering::SeqCst))
            .finish()
    }
}

impl<T, E> LazyConnection<T, E>
where
    T: Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            cell: OnceCell::new(),
            in_flight: Mutex::new(None),
            attempts: AtomicUsize::new(0),
        }
    }

    /// 수립된 연결을 반환하거나, 없으면 `connect`로 연결을 수립합니다.
    ///
    /// 진행 중인 시도가 있으면 `connect`를 실행하지 않고 그 시도의 결과를 함께 받습니다.
    pub async fn get_or_connect<F, Fut>(&self, connect: F) -> Result<Arc<T>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
    {
        if let Some(existing) = self.cell.get() {
            return Ok(existing.clone());
        }

        let attempt = {
            let mut in_flight = self.in_flight.lock().await;
            if let Some(existing) = self.cell.get() {
                return Ok(existing.clone());
            }

            match in_flight.as_ref() {
                Some(attempt) => attempt.clone(),
                None => {
                    let number = self.attempts.fetch_add(1, Ordering::SeqCst) + 1;
                    log::debug!("연결 시도 #{}", number);

                    let attempt = connect().map_ok(Arc::new).boxed().shared();
                    *in_flight = Some(attempt.clone());
                    attempt
                }
            }
        };

        let result = attempt.clone().await;

        let mut in_flight = self.in_flight.lock().await;
        if let Ok(connection) = &result {
            // 같은 시도를 기다린 다른 호출자가 먼저 채웠을 수 있습니다.
            let _ = self.cell.set(connection.clone());
        }
        if in_flight.as_ref().is_some_and(|current| current.ptr_eq(&attempt)) {
            *in_flight = None;
        }

        result
    }

    /// 연결이 수립되어 있는지 확인
    #[cfg(test)]
    pub(crate) fn is_connected(&self) -> bool {
        self.cell.initialized()
    }

    /// 지금까지 실행된 연결 시도 횟수 (성공 + 실패)
    #[cfg(test)]
    pub(crate) fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

/// MongoDB용 지연 연결기
///
/// 애플리케이션 상태로 한 번 만들어 리포지토리에 주입합니다.
#[derive(Debug)]
pub struct DbConnector {
    uri: String,
    database_name: String,
    connection: LazyConnection<Database, String>,
}

impl DbConnector {
    pub fn new(uri: impl Into<String>, database_name: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            database_name: database_name.into(),
            connection: LazyConnection::new(),
        }
    }

    /// `MONGODB_URI`, `DATABASE_NAME` 환경 변수로 연결기를 만듭니다.
    pub fn from_env() -> Self {
        Self::new(DatabaseConfig::uri(), DatabaseConfig::database_name())
    }

    /// 연결이 없으면 연결하고, 수립된 데이터베이스 핸들을 반환합니다.
    ///
    /// # Errors
    ///
    /// 연결 수립 실패 시 `AppError::DatabaseError`를 반환합니다.
    pub async fn database(&self) -> AppResult<Arc<Database>> {
        let uri = self.uri.clone();
        let database_name = self.database_name.clone();

        self.connection
            .get_or_connect(move || async move {
                Database::connect(&uri, &database_name)
                    .await
                    .map_err(|e| e.to_string())
            })
            .await
            .map_err(|e| {
                log::error!("MongoDB 연결 실패 ({}): {}", self.database_name, e);
                AppError::DatabaseError(format!("Failed to connect to database: {}", e))
            })
    }

    /// 연결이 수립되어 있는지 확인
    #[cfg(test)]
    pub(crate) fn is_connected(&self) -> bool {
        self.connection.is_connected()
    }

    /// 설정된 데이터베이스 이름
    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}
