use async_trait::async_trait;
use chrono::NaiveDate;
use mockall::mock;

use crate::modules::admin::application::ports::outgoing::{
    UserAdminRepository, UserAdminRepositoryError,
};
use crate::modules::auth::application::domain::entities::{User, UserId};
use crate::modules::auth::application::ports::outgoing::{
    HashError, NewUser, PasswordHasher, ProfileChanges, UserQuery, UserQueryError,
    UserRepository, UserRepositoryError,
};
use crate::modules::parking::application::domain::entities::{LotSummary, ParkingSpot};
use crate::modules::parking::application::ports::outgoing::{LotQuery, LotQueryError, LotSearch};
use crate::modules::reservation::application::domain::entities::ReservationView;
use crate::modules::reservation::application::ports::outgoing::{
    HistoryOrder, ReservationQuery, ReservationQueryError,
};

mock! {
    pub UserQueryMock {}
    #[async_trait]
    impl UserQuery for UserQueryMock {
        async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>, UserQueryError>;
        async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserQueryError>;
        async fn list_non_admin(&self) -> Result<Vec<User>, UserQueryError>;
    }
}

mock! {
    pub UserRepositoryMock {}
    #[async_trait]
    impl UserRepository for UserRepositoryMock {
        async fn create_user(&self, user: NewUser) -> Result<User, UserRepositoryError>;
        async fn update_profile(
            &self,
            user_id: UserId,
            changes: ProfileChanges,
        ) -> Result<User, UserRepositoryError>;
    }
}

mock! {
    pub PasswordHasherMock {}
    #[async_trait]
    impl PasswordHasher for PasswordHasherMock {
        async fn hash_password(&self, password: &str) -> Result<String, HashError>;
        async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
    }
}

mock! {
    pub LotQueryMock {}
    #[async_trait]
    impl LotQuery for LotQueryMock {
        async fn search(&self, search: LotSearch) -> Result<Vec<LotSummary>, LotQueryError>;
        async fn get_summary(&self, lot_id: i32) -> Result<LotSummary, LotQueryError>;
        async fn list_spots(&self, lot_id: i32) -> Result<Vec<ParkingSpot>, LotQueryError>;
    }
}

mock! {
    pub ReservationQueryMock {}
    #[async_trait]
    impl ReservationQuery for ReservationQueryMock {
        async fn find_active_for_user(
            &self,
            user_id: UserId,
        ) -> Result<Option<ReservationView>, ReservationQueryError>;
        async fn list_for_user(
            &self,
            user_id: UserId,
            order: HistoryOrder,
        ) -> Result<Vec<ReservationView>, ReservationQueryError>;
        async fn list_all(&self) -> Result<Vec<ReservationView>, ReservationQueryError>;
        async fn list_active(&self) -> Result<Vec<ReservationView>, ReservationQueryError>;
        async fn count_bookings_per_day(
            &self,
        ) -> Result<Vec<(NaiveDate, u64)>, ReservationQueryError>;
    }
}

mock! {
    pub UserAdminRepositoryMock {}
    #[async_trait]
    impl UserAdminRepository for UserAdminRepositoryMock {
        async fn delete_user_with_reservations(
            &self,
            user_id: UserId,
        ) -> Result<u64, UserAdminRepositoryError>;
    }
}
