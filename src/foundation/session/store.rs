use sled::Db;
use std::io;

/// Key under which the raw session token is persisted.
const TOKEN_KEY: &[u8] = b"auth_token";

/// Opens the session store at the specified path.
///
/// This function creates a new store or opens an existing one at the given
/// path. It's a friendly wrapper around `sled::open` that converts the error
/// to a standard IO error for easier error handling.
pub fn open_session_store(path: &str) -> io::Result<Db> {
    sled::open(path).map_err(|e| io::Error::new(io::ErrorKind::Other, e))
}

/// An authenticated session against the CMS API.
///
/// The session owns its lifecycle explicitly: `load` reads any previously
/// persisted token, `store` persists a freshly issued one, and `clear`
/// removes it from both memory and the store. The token's presence is what
/// gates the dashboard view against the login view.
pub struct Session {
    db: Db,
    token: Option<String>,
}

impl Session {
    /// Initializes a session from the store, picking up a persisted token
    /// from a previous run if one exists.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use cmsctl::foundation::session::{open_session_store, Session};
    ///
    /// let db = open_session_store("/path/to/session_db").unwrap();
    /// let session = Session::load(db).unwrap();
    /// if session.token().is_some() {
    ///     println!("already logged in");
    /// }
    /// ```
    pub fn load(db: Db) -> io::Result<Self> {
        let token = db
            .get(TOKEN_KEY)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?
            .map(|ivec| String::from_utf8_lossy(&ivec).into_owned());

        Ok(Self { db, token })
    }

    /// The active token, if the session is authenticated.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Persists a freshly issued token and makes it the active credential.
    pub fn store(&mut self, token: &str) -> io::Result<()> {
        self.db
            .insert(TOKEN_KEY, token.as_bytes())
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
        self.token = Some(token.to_string());
        Ok(())
    }

    /// Clears the credential from memory and the store.
    ///
    /// Any request made after this call carries no auth header.
    pub fn clear(&mut self) -> io::Result<()> {
        self.db
            .remove(TOKEN_KEY)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
        self.token = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn open_test_session() -> Session {
        let db = sled::Config::new().temporary(true).open().unwrap();
        Session::load(db).unwrap()
    }

    #[test]
    fn test_fresh_store_has_no_token() {
        let session = open_test_session();
        assert!(session.token().is_none());
    }

    #[test]
    fn test_store_and_reload_token() {
        let temp_dir = tempdir().unwrap();
        let binding = temp_dir.path().join("session_db");
        let db_path = binding.to_str().unwrap();

        {
            let db = open_session_store(db_path).unwrap();
            let mut session = Session::load(db).unwrap();
            session.store("abc").unwrap();
            assert_eq!(session.token(), Some("abc"));
        }

        // A new session picks the persisted token back up.
        let db = open_session_store(db_path).unwrap();
        let session = Session::load(db).unwrap();
        assert_eq!(session.token(), Some("abc"));
    }

    #[test]
    fn test_clear_removes_token_from_store() {
        let temp_dir = tempdir().unwrap();
        let binding = temp_dir.path().join("session_db");
        let db_path = binding.to_str().unwrap();

        {
            let db = open_session_store(db_path).unwrap();
            let mut session = Session::load(db).unwrap();
            session.store("abc").unwrap();
            session.clear().unwrap();
            assert!(session.token().is_none());
        }

        let db = open_session_store(db_path).unwrap();
        let session = Session::load(db).unwrap();
        assert!(session.token().is_none());
    }

    #[test]
    fn test_store_overwrites_previous_token() {
        let mut session = open_test_session();
        session.store("first").unwrap();
        session.store("second").unwrap();
        assert_eq!(session.token(), Some("second"));
    }
}
