//! End-to-end tests: `AuthClient` against the auth router on an ephemeral port

use std::sync::{Arc, Mutex};

use auth::{AuthConfig, InMemoryUserRepository, auth_router_generic};
use axum::Router;
use portal_client::{
    AuthClient, Credentials, FileStorage, MemoryStorage, Notifier, RegistrationData,
    SessionStorage,
};
use tokio::net::TcpListener;

#[derive(Default)]
struct RecordingNotifier {
    events: Mutex<Vec<(&'static str, String)>>,
}

impl RecordingNotifier {
    fn last(&self) -> Option<(&'static str, String)> {
        self.events.lock().unwrap().last().cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.events.lock().unwrap().push(("success", message.to_string()));
    }

    fn error(&self, message: &str) {
        self.events.lock().unwrap().push(("error", message.to_string()));
    }

    fn info(&self, message: &str) {
        self.events.lock().unwrap().push(("info", message.to_string()));
    }
}

async fn spawn_server() -> String {
    let config = AuthConfig::new(b"0123456789abcdef0123456789abcdef".to_vec());
    let app = Router::new().nest(
        "/api/auth",
        auth_router_generic(InMemoryUserRepository::new(), config),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

fn registration(username: &str, email: &str) -> RegistrationData {
    RegistrationData {
        name: "Alice Smith".into(),
        email: email.into(),
        username: username.into(),
        password: "Str0ng!Pass".into(),
        phone: "+1 555-0100".into(),
        address: "1 Main Street".into(),
        age: 29,
        date_of_birth: "1996-04-12".into(),
    }
}

fn credentials(username: &str, password: &str) -> Credentials {
    Credentials {
        username: username.into(),
        password: password.into(),
    }
}

fn client(
    url: &str,
    storage: Arc<dyn SessionStorage>,
) -> (AuthClient, Arc<RecordingNotifier>) {
    let notifier = Arc::new(RecordingNotifier::default());
    let client = AuthClient::new(url, storage, notifier.clone()).unwrap();
    (client, notifier)
}

#[tokio::test]
async fn test_register_reports_server_message() {
    let url = spawn_server().await;
    let (client, notifier) = client(&url, Arc::new(MemoryStorage::new()));

    assert!(client.register(&registration("alice", "a@x.com")).await);
    assert_eq!(
        notifier.last(),
        Some(("success", "Registration successful! Please log in.".into()))
    );

    assert!(!client.register(&registration("alice", "b@x.com")).await);
    assert_eq!(notifier.last(), Some(("error", "Username already exists".into())));

    assert!(!client.register(&registration("bob", "a@x.com")).await);
    assert_eq!(notifier.last(), Some(("error", "Email already exists".into())));
}

#[tokio::test]
async fn test_register_then_login_round_trip() {
    let url = spawn_server().await;
    let dir = tempfile::tempdir().unwrap();
    let storage: Arc<dyn SessionStorage> = Arc::new(FileStorage::new(dir.path()));
    let (mut client, notifier) = client(&url, storage.clone());

    assert!(client.register(&registration("alice", "a@x.com")).await);
    let user = client
        .login(&credentials("alice", "Str0ng!Pass"))
        .await
        .unwrap();

    assert_eq!(user.username, "alice");
    assert_eq!(user.email, "a@x.com");
    assert_eq!(user.role.as_deref(), Some("user"));
    assert_eq!(
        notifier.last(),
        Some(("success", "Welcome back, Alice Smith!".into()))
    );
    assert!(storage.get("token").is_some());

    // A fresh client picks the session up from disk
    let (restored, _) = self::client(&url, Arc::new(FileStorage::new(dir.path())));
    assert!(restored.is_logged_in());
    assert_eq!(restored.cached_user(), Some(&user));

    let me = restored.current_user().await.unwrap();
    assert_eq!(me.username, "alice");
    assert_eq!(me.age, Some(29));
    assert_eq!(me.date_of_birth.as_deref(), Some("1996-04-12"));
}

#[tokio::test]
async fn test_failed_login_keeps_existing_session() {
    let url = spawn_server().await;
    let (mut client, notifier) = client(&url, Arc::new(MemoryStorage::new()));
    client.register(&registration("alice", "a@x.com")).await;
    client.login(&credentials("alice", "Str0ng!Pass")).await.unwrap();
    let token = client.token().map(str::to_string);

    assert!(client.login(&credentials("alice", "Wr0ng!Pass")).await.is_none());
    assert_eq!(
        notifier.last(),
        Some(("error", "Invalid username or password".into()))
    );
    assert!(client.is_logged_in());
    assert_eq!(client.token().map(str::to_string), token);
}

#[tokio::test]
async fn test_logout_then_current_user_is_none() {
    let url = spawn_server().await;
    let storage: Arc<dyn SessionStorage> = Arc::new(MemoryStorage::new());
    let (mut client, notifier) = client(&url, storage.clone());
    client.register(&registration("alice", "a@x.com")).await;
    client.login(&credentials("alice", "Str0ng!Pass")).await.unwrap();
    assert!(client.current_user().await.is_some());

    client.logout();
    assert_eq!(notifier.last(), Some(("info", "You have been logged out".into())));
    assert!(client.current_user().await.is_none());
    assert_eq!(storage.get("user"), None);
    assert_eq!(storage.get("token"), None);

    // Idempotent
    client.logout();
    assert!(!client.is_logged_in());
}

#[tokio::test]
async fn test_invalid_stored_token_yields_none() {
    let url = spawn_server().await;
    let storage: Arc<dyn SessionStorage> = Arc::new(MemoryStorage::new());
    storage
        .set("user", r#"{"id":1,"username":"alice","email":"a@x.com","role":"user"}"#)
        .unwrap();
    storage.set("token", "forged.token.value").unwrap();

    let (client, _) = client(&url, storage);
    assert!(client.is_logged_in());
    assert!(client.current_user().await.is_none());
}

#[tokio::test]
async fn test_malformed_stored_session_is_discarded() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(dir.path());
    storage.set("user", "{not json").unwrap();
    storage.set("token", "abc").unwrap();

    let (client, _) = client("http://127.0.0.1:1", Arc::new(storage.clone()));
    assert!(!client.is_logged_in());
    assert!(client.current_user().await.is_none());
    assert!(!dir.path().join("user").exists());
    assert!(!dir.path().join("token").exists());
}

#[tokio::test]
async fn test_unreachable_server() {
    let (mut client, notifier) = client("http://127.0.0.1:1", Arc::new(MemoryStorage::new()));

    assert!(!client.register(&registration("alice", "a@x.com")).await);
    assert!(matches!(notifier.last(), Some(("error", _))));
    assert!(client.login(&credentials("alice", "Str0ng!Pass")).await.is_none());
}
