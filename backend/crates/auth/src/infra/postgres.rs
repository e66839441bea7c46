//! PostgreSQL Repository Implementation

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;

use crate::domain::entity::user::{NewUser, PublicUser, User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    age::Age, email::Email, profile::Profile, user_id::UserId, user_name::UserName,
    user_password::UserPassword, user_role::UserRole,
};
use crate::error::{AuthError, AuthResult};

/// Unique constraint names from the `users` migration
const USERNAME_CONSTRAINT: &str = "users_username_key";
const EMAIL_CONSTRAINT: &str = "users_email_key";

/// PostgreSQL-backed credential store
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl UserRepository for PgUserRepository {
    async fn create(&self, user: &NewUser) -> AuthResult<PublicUser> {
        let row = sqlx::query_as::<_, PublicUserRow>(
            r#"
            INSERT INTO users (
                username,
                email,
                password,
                name,
                phone,
                address,
                age,
                date_of_birth
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, username, email, name, role
            "#,
        )
        .bind(user.username.as_str())
        .bind(user.email.as_str())
        .bind(user.password_hash.as_str())
        .bind(user.profile.name.as_deref())
        .bind(user.profile.phone.as_deref())
        .bind(user.profile.address.as_deref())
        .bind(user.profile.age.map(|a| a.years()))
        .bind(user.profile.date_of_birth)
        .fetch_one(&self.pool)
        .await
        .map_err(classify_insert_error)?;

        row.into_public_user()
    }

    async fn find_by_username(&self, username: &UserName) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                id,
                username,
                email,
                password,
                name,
                phone,
                address,
                age,
                date_of_birth,
                role,
                created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                id,
                username,
                email,
                password,
                name,
                phone,
                address,
                age,
                date_of_birth,
                role,
                created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }
}

/// Map a unique violation on insert to the matching duplicate error
fn classify_insert_error(err: sqlx::Error) -> AuthError {
    let duplicate = match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            duplicate_for_constraint(db_err.constraint())
        }
        _ => None,
    };
    duplicate.unwrap_or(AuthError::Database(err))
}

fn duplicate_for_constraint(constraint: Option<&str>) -> Option<AuthError> {
    match constraint? {
        USERNAME_CONSTRAINT => Some(AuthError::DuplicateUsername),
        EMAIL_CONSTRAINT => Some(AuthError::DuplicateEmail),
        _ => None,
    }
}

fn parse_role(code: &str) -> AuthResult<UserRole> {
    UserRole::from_code(code).ok_or_else(|| AuthError::Internal(format!("Invalid role: {}", code)))
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    username: String,
    email: String,
    password: String,
    name: Option<String>,
    phone: Option<String>,
    address: Option<String>,
    age: Option<i32>,
    date_of_birth: Option<NaiveDate>,
    role: String,
    created_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> AuthResult<User> {
        Ok(User {
            id: UserId::new(self.id),
            username: UserName::from_db(self.username),
            email: Email::from_db(self.email),
            password_hash: UserPassword::from_db(self.password)?,
            profile: Profile {
                name: self.name,
                phone: self.phone,
                address: self.address,
                age: self.age.map(Age::from_db),
                date_of_birth: self.date_of_birth,
            },
            role: parse_role(&self.role)?,
            created_at: self.created_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct PublicUserRow {
    id: i64,
    username: String,
    email: String,
    name: Option<String>,
    role: String,
}

impl PublicUserRow {
    fn into_public_user(self) -> AuthResult<PublicUser> {
        Ok(PublicUser {
            id: UserId::new(self.id),
            username: UserName::from_db(self.username),
            email: Email::from_db(self.email),
            name: self.name,
            role: parse_role(&self.role)?,
        })
    }
}
