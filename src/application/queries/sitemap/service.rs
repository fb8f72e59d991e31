use std::sync::Arc;

use crate::application::ports::time::Clock;
use crate::domain::product::ProductReadRepository;

pub struct SitemapQueryService {
    pub(super) read_repo: Arc<dyn ProductReadRepository>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) base_url: String,
}

impl SitemapQueryService {
    /// `base_url` is the public site origin; a trailing `/` is dropped.
    pub fn new(
        read_repo: Arc<dyn ProductReadRepository>,
        clock: Arc<dyn Clock>,
        base_url: impl Into<String>,
    ) -> Self {
        let base_url: String = base_url.into();
        Self {
            read_repo,
            clock,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}
