use async_trait::async_trait;

use crate::modules::parking::application::domain::entities::LotSummary;
use crate::modules::parking::application::ports::incoming::use_cases::{
    SearchLotsError, SearchLotsUseCase,
};
use crate::modules::parking::application::ports::outgoing::{LotQuery, LotSearch};

pub struct SearchLotsService<Q>
where
    Q: LotQuery,
{
    query: Q,
}

impl<Q> SearchLotsService<Q>
where
    Q: LotQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> SearchLotsUseCase for SearchLotsService<Q>
where
    Q: LotQuery + Send + Sync,
{
    async fn execute(&self, search: LotSearch) -> Result<Vec<LotSummary>, SearchLotsError> {
        // Blank text means no text filter; anything else is matched verbatim.
        let search = LotSearch {
            text: search.text.filter(|t| !t.trim().is_empty()),
            ..search
        };

        Ok(self.query.search(search).await?)
    }
}
