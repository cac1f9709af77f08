use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("not logged in, run `unip auth login`")]
    NotAuthenticated,

    #[error("session store error: {0}")]
    Store(String),

    #[error("session document is corrupt: {0}")]
    Corrupt(String),

    #[error("token error: {0}")]
    Token(String),
}
