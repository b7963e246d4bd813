use reqwest::Client;
use tokio::sync::Mutex;

use crate::error::ResolveError;

// Some platforms serve stripped-down markup to clients they do not recognize,
// so page fetches identify as a desktop browser.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/96.0.4664.110 Safari/537.36";

/// Owner of the shared HTTP session.
///
/// The underlying [`Client`] is created lazily on first use and handed out as
/// a cheap clone; `reqwest` clients share their connection pool across clones
/// and are safe for concurrent requests. [`SessionManager::close`] drops the
/// session; the next [`SessionManager::get`] builds a fresh one.
pub struct SessionManager {
    client: Mutex<Option<Client>>,
}

impl SessionManager {
    pub fn new() -> Self {
        SessionManager {
            client: Mutex::new(None),
        }
    }

    /// Returns the shared session, creating it on first use.
    pub async fn get(&self) -> Result<Client, ResolveError> {
        let mut guard = self.client.lock().await;
        if let Some(client) = guard.as_ref() {
            return Ok(client.clone());
        }

        let client = Client::builder().user_agent(USER_AGENT).build()?;
        *guard = Some(client.clone());
        Ok(client)
    }

    /// Drops the session. Safe to call when none was ever created or when it
    /// was already closed; in-flight requests on existing clones complete.
    pub async fn close(&self) {
        self.client.lock().await.take();
    }

    pub async fn is_open(&self) -> bool {
        self.client.lock().await.is_some()
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        SessionManager::new()
    }
}
