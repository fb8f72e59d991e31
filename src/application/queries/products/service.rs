use std::sync::Arc;

use crate::application::ports::images::ProductImageInventory;
use crate::domain::product::ProductReadRepository;

pub struct ProductQueryService {
    pub(super) read_repo: Arc<dyn ProductReadRepository>,
    pub(super) images: Arc<dyn ProductImageInventory>,
}

impl ProductQueryService {
    pub fn new(
        read_repo: Arc<dyn ProductReadRepository>,
        images: Arc<dyn ProductImageInventory>,
    ) -> Self {
        Self { read_repo, images }
    }
}
