use dioxus::prelude::*;

/// Client storage key holding the session token.
pub const TOKEN_KEY: &str = "legal_office_token";

/// Where the session token lives between page loads.
#[allow(async_fn_in_trait)]
pub trait TokenStore {
    async fn load(&self) -> Option<String>;

    async fn save(&self, token: &str);

    async fn clear(&self);
}

/// Browser `localStorage`, reached through `document::eval`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageTokenStore;

fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

impl TokenStore for LocalStorageTokenStore {
    async fn load(&self) -> Option<String> {
        let script = format!(
            "return window.localStorage.getItem({});",
            js_string(TOKEN_KEY)
        );
        match document::eval(&script).join::<Option<String>>().await {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                tracing::warn!(error = %e, "reading stored token failed");
                None
            }
        }
    }

    async fn save(&self, token: &str) {
        let script = format!(
            "window.localStorage.setItem({}, {}); return true;",
            js_string(TOKEN_KEY),
            js_string(token)
        );
        if let Err(e) = document::eval(&script).join::<bool>().await {
            tracing::warn!(error = %e, "storing token failed");
        }
    }

    async fn clear(&self) {
        let script = format!(
            "window.localStorage.removeItem({}); return true;",
            js_string(TOKEN_KEY)
        );
        if let Err(e) = document::eval(&script).join::<bool>().await {
            tracing::warn!(error = %e, "removing token failed");
        }
    }
}

/// Process-local store for exercising the session flow without a browser.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    token: std::rc::Rc<std::cell::RefCell<Option<String>>>,
}

#[cfg(test)]
impl MemoryTokenStore {
    pub fn with_token(token: &str) -> Self {
        Self {
            token: std::rc::Rc::new(std::cell::RefCell::new(Some(token.to_string()))),
        }
    }

    pub fn current(&self) -> Option<String> {
        self.token.borrow().clone()
    }
}

#[cfg(test)]
impl TokenStore for MemoryTokenStore {
    async fn load(&self) -> Option<String> {
        self.current()
    }

    async fn save(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    async fn clear(&self) {
        *self.token.borrow_mut() = None;
    }
}
