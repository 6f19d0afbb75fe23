use async_trait::async_trait;

use crate::modules::parking::application::domain::entities::LotDetail;
use crate::modules::parking::application::ports::incoming::use_cases::{
    GetLotDetailError, GetLotDetailUseCase,
};
use crate::modules::parking::application::ports::outgoing::LotQuery;

pub struct GetLotDetailService<Q>
where
    Q: LotQuery,
{
    query: Q,
}

impl<Q> GetLotDetailService<Q>
where
    Q: LotQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetLotDetailUseCase for GetLotDetailService<Q>
where
    Q: LotQuery + Send + Sync,
{
    async fn execute(&self, lot_id: i32) -> Result<LotDetail, GetLotDetailError> {
        let lot = self.query.get_summary(lot_id).await?;
        let spots = self.query.list_spots(lot_id).await?;

        Ok(LotDetail { lot, spots })
    }
}
