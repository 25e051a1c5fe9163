use classroll_auth::create_access_token;
use classroll_config::JwtConfig;
use classroll_core::{AppError, hash_password, verify_password};
use classroll_db::SchoolStore;
use classroll_models::users::normalize_email;
use classroll_models::{AuthResponse, LoginRequest, NewUser, RegisterRequest};
use tracing::{info, instrument, warn};

const INVALID_CREDENTIALS: &str = "Invalid email or password";

pub struct AuthService;

impl AuthService {
    #[instrument(skip(store, jwt_config, dto), fields(email = %dto.email))]
    pub async fn register(
        store: &dyn SchoolStore,
        jwt_config: &JwtConfig,
        dto: RegisterRequest,
    ) -> Result<AuthResponse, AppError> {
        let role = dto.role();
        let password_hash = hash_password(&dto.password)?;

        let user = store
            .create_user(NewUser {
                email: normalize_email(&dto.email),
                password_hash,
                role,
                full_name: dto
                    .full_name
                    .as_deref()
                    .map(str::trim)
                    .unwrap_or_default()
                    .to_string(),
            })
            .await?;

        let token = create_access_token(user.id, &user.email, user.role, jwt_config)?;

        info!(user_id = user.id, role = %user.role, "User registered");
        Ok(AuthResponse { token, user })
    }

    #[instrument(skip(store, jwt_config, dto), fields(email = %dto.email))]
    pub async fn login(
        store: &dyn SchoolStore,
        jwt_config: &JwtConfig,
        dto: LoginRequest,
    ) -> Result<AuthResponse, AppError> {
        let credentials = store
            .find_credentials_by_email(&normalize_email(&dto.email))
            .await?;

        let Some(credentials) =
            credentials.filter(|c| verify_password(&dto.password, &c.password_hash))
        else {
            warn!("Login rejected");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        };

        let user = credentials.user;
        let token = create_access_token(user.id, &user.email, user.role, jwt_config)?;

        info!(user_id = user.id, "User logged in");
        Ok(AuthResponse { token, user })
    }
}
