use std::sync::Arc;
use crate::{
    db::DbConnector,
    errors::AppResult,
    repositories::users::{UserRepository, UserStore},
    services::{
        auth::{CredentialsService, SessionTokenService},
        email::{email_sender_from_env, EmailSender},
        messages::MessageService,
        users::UserService,
    },
};

/// 핸들러와 미들웨어가 공유하는 애플리케이션 상태
///
/// 모든 필드가 `Arc`이므로 워커마다 복제해도 같은 인스턴스를 가리킵니다.
#[derive(Clone)]
pub struct AppState {
    pub user_store: Arc<dyn UserStore>,
    pub credentials: Arc<CredentialsService>,
    pub users: Arc<UserService>,
    pub messages: Arc<MessageService>,
    pub tokens: Arc<SessionTokenService>,
}

impl AppState {
    /// 저장소, 메일 발송기, 토큰 서비스로 상태를 조립합니다.
    pub fn new(
        user_store: Arc<dyn UserStore>,
        email_sender: Arc<dyn EmailSender>,
        tokens: Arc<SessionTokenService>,
    ) -> Self {
        Self::with_user_service(
            user_store.clone(),
            Arc::new(UserService::new(user_store, email_sender)),
            tokens,
        )
    }

    /// 이미 만든 [`UserService`]로 상태를 조립합니다.
    pub fn with_user_service(
        user_store: Arc<dyn UserStore>,
        users: Arc<UserService>,
        tokens: Arc<SessionTokenService>,
    ) -> Self {
        Self {
            credentials: Arc::new(CredentialsService::new(user_store.clone())),
            messages: Arc::new(MessageService::new(user_store.clone())),
            users,
            user_store,
            tokens,
        }
    }

    /// 환경 변수로 운영용 상태를 만듭니다.
    ///
    /// 데이터베이스 연결은 여기서 수립하지 않고, 첫 요청 시점에 지연 연결됩니다.
    ///
    /// # Errors
    ///
    /// 프로덕션에서 `SESSION_SECRET`이 없으면 `AppError::InternalError`
    pub fn from_env(connector: Arc<DbConnector>) -> AppResult<Self> {
        let user_store: Arc<dyn UserStore> = Arc::new(UserRepository::new(connector));
        let tokens = Arc::new(SessionTokenService::from_env()?);

        Ok(Self::new(user_store, email_sender_from_env(), tokens))
    }
}
