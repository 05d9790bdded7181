pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown view id: {id}")]
    UnknownView { id: String },

    #[error("view registry has no entries")]
    EmptyRegistry,
}
