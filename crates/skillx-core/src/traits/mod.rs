mod repositories;

pub use repositories::{ConnectionRepository, MessageRepository, RepoResult, UserRepository};
