mod store;

pub use store::{open_session_store, Session};
