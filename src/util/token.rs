//! Session token storage.
//!
//! The token is an opaque credential written to `localStorage` by the login
//! flow and read/removed here. Requires a browser environment; on the server
//! every accessor reports an absent token.

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "token";

/// Read the stored session token, if any.
pub fn read() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage.get_item(STORAGE_KEY).ok()?
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Remove the stored session token. Used on logout and when the backend
/// explicitly rejects the session.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(STORAGE_KEY);
            }
        }
    }
}
