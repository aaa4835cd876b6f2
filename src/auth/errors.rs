use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Username not found")]
    UnknownUser,
    #[error("Invalid password")]
    WrongPassword,
    #[error("Username already exists")]
    DuplicateUsername,
    #[error("Password hashing error: {0}")]
    PasswordHashing(#[from] bcrypt::BcryptError),
    #[error("Credential store error: {0}")]
    Store(#[from] anyhow::Error),
}
