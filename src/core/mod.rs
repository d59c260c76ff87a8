pub mod archive;
pub mod repository;

pub use crate::domain::model::ClientRecord;
pub use crate::domain::ports::{ClientStore, ConfigProvider};
pub use crate::utils::error::Result;
pub use archive::ClientFileArchive;
pub use repository::ClientRepository;
