use crate::domain::filters::Filters;
use crate::domain::model::Service;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;

pub trait ConfigProvider: Send + Sync {
    fn host(&self) -> &str;
    fn api_version(&self) -> &str;
    fn timeout_seconds(&self) -> Option<u64>;
    fn headers(&self) -> &HashMap<String, String>;
}

#[async_trait]
pub trait ServiceLister: Send + Sync {
    async fn list_services(&self, filters: &Filters) -> Result<Vec<Service>>;
}
