pub mod list;
pub mod stacks;

pub use crate::domain::model::{Service, Stack};
pub use crate::domain::ports::{ConfigProvider, ServiceLister};
pub use crate::utils::error::Result;
