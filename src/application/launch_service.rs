// Launch service - Use case for listing launches
use crate::domain::launch::{Launch, LaunchCatalog};

#[derive(Clone)]
pub struct LaunchService {
    catalog: LaunchCatalog,
}

impl LaunchService {
    pub fn new(catalog: LaunchCatalog) -> Self {
        Self { catalog }
    }

    /// Catalog entries in catalog order; drives both launch selectors.
    pub fn list_launches(&self) -> Vec<Launch> {
        self.catalog.launches().to_vec()
    }
}
