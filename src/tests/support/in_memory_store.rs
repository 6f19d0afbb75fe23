//! Every outgoing port over one shared in-memory state, so scenario tests can
//! wire the real services together without a database.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

use crate::modules::admin::application::ports::outgoing::{
    UserAdminRepository, UserAdminRepositoryError,
};
use crate::modules::auth::application::domain::entities::{User, UserId};
use crate::modules::auth::application::ports::outgoing::{
    NewUser, ProfileChanges, UserQuery, UserQueryError, UserRepository, UserRepositoryError,
};
use crate::modules::parking::application::domain::entities::{
    LotSummary, ParkingLot, ParkingSpot, SpotStatus,
};
use crate::modules::parking::application::ports::outgoing::{
    LotData, LotQuery, LotQueryError, LotRepository, LotRepositoryError, LotSearch,
};
use crate::modules::reservation::application::domain::entities::{Reservation, ReservationView};
use crate::modules::reservation::application::ports::outgoing::{
    HistoryOrder, ReservationQuery, ReservationQueryError, ReservationRepository,
    ReservationRepositoryError,
};

#[derive(Default)]
struct State {
    users: Vec<User>,
    lots: Vec<ParkingLot>,
    spots: Vec<ParkingSpot>,
    reservations: Vec<Reservation>,
    next_id: i32,
}

impl State {
    fn next_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }

    fn summary(&self, lot: &ParkingLot) -> LotSummary {
        let count = |status: SpotStatus| {
            self.spots
                .iter()
                .filter(|s| s.lot_id == lot.id && s.status == status)
                .count() as i64
        };
        LotSummary {
            id: lot.id,
            prime_location_name: lot.prime_location_name.clone(),
            price_per_hour: lot.price_per_hour,
            address: lot.address.clone(),
            pin_code: lot.pin_code.clone(),
            maximum_number_of_spots: lot.maximum_number_of_spots,
            available_spots: count(SpotStatus::Available),
            occupied_spots: count(SpotStatus::Occupied),
        }
    }

    fn view(&self, r: &Reservation) -> ReservationView {
        let lot_id = self
            .spots
            .iter()
            .find(|s| s.id == r.spot_id)
            .map(|s| s.lot_id)
            .unwrap_or_default();
        let lot_name = self
            .lots
            .iter()
            .find(|l| l.id == lot_id)
            .map(|l| l.prime_location_name.clone())
            .unwrap_or_default();
        let username = self
            .users
            .iter()
            .find(|u| u.id == r.user_id)
            .map(|u| u.username.clone())
            .unwrap_or_default();

        ReservationView {
            id: r.id,
            spot_id: r.spot_id,
            lot_id,
            lot_name,
            user_id: r.user_id,
            username,
            parking_time: r.parking_time,
            leaving_time: r.leaving_time,
            cost_per_hour: r.cost_per_hour,
            total_cost: r.total_cost(),
        }
    }

    fn set_spot(&mut self, spot_id: i32, status: SpotStatus) {
        if let Some(spot) = self.spots.iter_mut().find(|s| s.id == spot_id) {
            spot.status = status;
        }
    }

    fn close(&mut self, index: usize, at: DateTime<Utc>) -> Reservation {
        self.reservations[index].leaving_time = Some(at);
        let closed = self.reservations[index].clone();
        self.set_spot(closed.spot_id, SpotStatus::Available);
        closed
    }
}

#[derive(Clone, Default)]
pub struct InMemoryStore {
    state: Arc<Mutex<State>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().expect("store lock poisoned")
    }

    pub fn spots(&self, lot_id: i32) -> Vec<ParkingSpot> {
        self.lock()
            .spots
            .iter()
            .filter(|s| s.lot_id == lot_id)
            .cloned()
            .collect()
    }

    pub fn reservations(&self) -> Vec<Reservation> {
        self.lock().reservations.clone()
    }

    /// Moves the start of a reservation, for deterministic costs.
    pub fn backdate(&self, reservation_id: i32, parking_time: DateTime<Utc>) {
        if let Some(r) = self
            .lock()
            .reservations
            .iter_mut()
            .find(|r| r.id == reservation_id)
        {
            r.parking_time = parking_time;
        }
    }

    /// Panics unless every occupied spot has exactly one open reservation,
    /// every available spot has none, and no user holds two.
    pub fn assert_consistent(&self) {
        let state = self.lock();
        for spot in &state.spots {
            let open = state
                .reservations
                .iter()
                .filter(|r| r.spot_id == spot.id && r.is_active())
                .count();
            match spot.status {
                SpotStatus::Occupied => assert_eq!(open, 1, "spot {} occupied", spot.id),
                SpotStatus::Available => assert_eq!(open, 0, "spot {} available", spot.id),
            }
        }
        for user in &state.users {
            let open = state
                .reservations
                .iter()
                .filter(|r| r.user_id == user.id && r.is_active())
                .count();
            assert!(open <= 1, "user {} holds {open} open reservations", user.id);
        }
    }
}

#[async_trait]
impl UserQuery for InMemoryStore {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>, UserQueryError> {
        Ok(self.lock().users.iter().find(|u| u.id == user_id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserQueryError> {
        Ok(self
            .lock()
            .users
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn list_non_admin(&self) -> Result<Vec<User>, UserQueryError> {
        Ok(self
            .lock()
            .users
            .iter()
            .filter(|u| !u.is_admin)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create_user(&self, user: NewUser) -> Result<User, UserRepositoryError> {
        let mut state = self.lock();
        if state.users.iter().any(|u| u.username == user.username) {
            return Err(UserRepositoryError::UsernameTaken);
        }
        let created = User {
            id: UserId::from(state.next_id()),
            username: user.username,
            password_hash: user.password_hash,
            is_admin: user.is_admin,
        };
        state.users.push(created.clone());
        Ok(created)
    }

    async fn update_profile(
        &self,
        user_id: UserId,
        changes: ProfileChanges,
    ) -> Result<User, UserRepositoryError> {
        let mut state = self.lock();
        if let Some(name) = &changes.username {
            if state
                .users
                .iter()
                .any(|u| &u.username == name && u.id != user_id)
            {
                return Err(UserRepositoryError::UsernameTaken);
            }
        }
        let user = state
            .users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or(UserRepositoryError::NotFound)?;
        if let Some(name) = changes.username {
            user.username = name;
        }
        if let Some(hash) = changes.password_hash {
            user.password_hash = hash;
        }
        Ok(user.clone())
    }
}

#[async_trait]
impl LotQuery for InMemoryStore {
    async fn search(&self, search: LotSearch) -> Result<Vec<LotSummary>, LotQueryError> {
        let state = self.lock();
        let needle = search.text.map(|t| t.to_lowercase());
        Ok(state
            .lots
            .iter()
            .filter(|lot| match &needle {
                Some(n) => {
                    lot.prime_location_name.to_lowercase().contains(n)
                        || lot.pin_code.to_lowercase().contains(n)
                }
                None => true,
            })
            .map(|lot| state.summary(lot))
            .filter(|s| !search.available_only || s.available_spots > 0)
            .collect())
    }

    async fn get_summary(&self, lot_id: i32) -> Result<LotSummary, LotQueryError> {
        let state = self.lock();
        state
            .lots
            .iter()
            .find(|l| l.id == lot_id)
            .map(|l| state.summary(l))
            .ok_or(LotQueryError::NotFound)
    }

    async fn list_spots(&self, lot_id: i32) -> Result<Vec<ParkingSpot>, LotQueryError> {
        Ok(self.spots(lot_id))
    }
}

#[async_trait]
impl LotRepository for InMemoryStore {
    async fn create_lot(&self, data: LotData) -> Result<ParkingLot, LotRepositoryError> {
        let mut state = self.lock();
        let lot = ParkingLot {
            id: state.next_id(),
            prime_location_name: data.prime_location_name,
            price_per_hour: data.price_per_hour,
            address: data.address,
            pin_code: data.pin_code,
            maximum_number_of_spots: data.maximum_number_of_spots,
        };
        for _ in 0..data.maximum_number_of_spots {
            let id = state.next_id();
            state.spots.push(ParkingSpot {
                id,
                lot_id: lot.id,
                status: SpotStatus::Available,
            });
        }
        state.lots.push(lot.clone());
        Ok(lot)
    }

    async fn update_lot(
        &self,
        lot_id: i32,
        data: LotData,
    ) -> Result<ParkingLot, LotRepositoryError> {
        let mut state = self.lock();
        let lot = state
            .lots
            .iter_mut()
            .find(|l| l.id == lot_id)
            .ok_or(LotRepositoryError::NotFound)?;
        lot.prime_location_name = data.prime_location_name;
        lot.price_per_hour = data.price_per_hour;
        lot.address = data.address;
        lot.pin_code = data.pin_code;
        lot.maximum_number_of_spots = data.maximum_number_of_spots;
        Ok(lot.clone())
    }

    async fn delete_lot(&self, lot_id: i32) -> Result<(), LotRepositoryError> {
        let mut state = self.lock();
        if !state.lots.iter().any(|l| l.id == lot_id) {
            return Err(LotRepositoryError::NotFound);
        }
        let occupied = state
            .spots
            .iter()
            .filter(|s| s.lot_id == lot_id && s.status == SpotStatus::Occupied)
            .count() as u64;
        if occupied > 0 {
            return Err(LotRepositoryError::OccupiedSpots(occupied));
        }

        let spot_ids: Vec<i32> = state
            .spots
            .iter()
            .filter(|s| s.lot_id == lot_id)
            .map(|s| s.id)
            .collect();
        state.reservations.retain(|r| !spot_ids.contains(&r.spot_id));
        state.spots.retain(|s| s.lot_id != lot_id);
        state.lots.retain(|l| l.id != lot_id);
        Ok(())
    }
}

#[async_trait]
impl ReservationRepository for InMemoryStore {
    async fn book_spot(
        &self,
        user_id: UserId,
        lot_id: i32,
        at: DateTime<Utc>,
    ) -> Result<Reservation, ReservationRepositoryError> {
        let mut state = self.lock();
        let price = state
            .lots
            .iter()
            .find(|l| l.id == lot_id)
            .map(|l| l.price_per_hour)
            .ok_or(ReservationRepositoryError::LotNotFound)?;
        if state
            .reservations
            .iter()
            .any(|r| r.user_id == user_id && r.is_active())
        {
            return Err(ReservationRepositoryError::AlreadyActive);
        }
        let spot_id = state
            .spots
            .iter()
            .filter(|s| s.lot_id == lot_id && s.status == SpotStatus::Available)
            .map(|s| s.id)
            .min()
            .ok_or(ReservationRepositoryError::NoAvailability)?;

        state.set_spot(spot_id, SpotStatus::Occupied);
        let reservation = Reservation {
            id: state.next_id(),
            spot_id,
            user_id,
            parking_time: at,
            leaving_time: None,
            cost_per_hour: price,
        };
        state.reservations.push(reservation.clone());
        Ok(reservation)
    }

    async fn release_active(
        &self,
        user_id: UserId,
        at: DateTime<Utc>,
    ) -> Result<Reservation, ReservationRepositoryError> {
        let mut state = self.lock();
        let index = state
            .reservations
            .iter()
            .position(|r| r.user_id == user_id && r.is_active())
            .ok_or(ReservationRepositoryError::NoActiveReservation)?;
        Ok(state.close(index, at))
    }

    async fn force_release(
        &self,
        reservation_id: i32,
        at: DateTime<Utc>,
    ) -> Result<Reservation, ReservationRepositoryError> {
        let mut state = self.lock();
        let index = state
            .reservations
            .iter()
            .position(|r| r.id == reservation_id)
            .ok_or(ReservationRepositoryError::NotFound)?;
        if !state.reservations[index].is_active() {
            return Err(ReservationRepositoryError::AlreadyClosed);
        }
        Ok(state.close(index, at))
    }
}

#[async_trait]
impl ReservationQuery for InMemoryStore {
    async fn find_active_for_user(
        &self,
        user_id: UserId,
    ) -> Result<Option<ReservationView>, ReservationQueryError> {
        let state = self.lock();
        Ok(state
            .reservations
            .iter()
            .find(|r| r.user_id == user_id && r.is_active())
            .map(|r| state.view(r)))
    }

    async fn list_for_user(
        &self,
        user_id: UserId,
        order: HistoryOrder,
    ) -> Result<Vec<ReservationView>, ReservationQueryError> {
        let state = self.lock();
        let mut views: Vec<ReservationView> = state
            .reservations
            .iter()
            .filter(|r| r.user_id == user_id)
            .map(|r| state.view(r))
            .collect();
        if order == HistoryOrder::NewestFirst {
            views.sort_by(|a, b| {
                b.parking_time
                    .cmp(&a.parking_time)
                    .then_with(|| b.id.cmp(&a.id))
            });
        }
        Ok(views)
    }

    async fn list_all(&self) -> Result<Vec<ReservationView>, ReservationQueryError> {
        let state = self.lock();
        Ok(state.reservations.iter().map(|r| state.view(r)).collect())
    }

    async fn list_active(&self) -> Result<Vec<ReservationView>, ReservationQueryError> {
        let state = self.lock();
        Ok(state
            .reservations
            .iter()
            .filter(|r| r.is_active())
            .map(|r| state.view(r))
            .collect())
    }

    async fn count_bookings_per_day(
        &self,
    ) -> Result<Vec<(NaiveDate, u64)>, ReservationQueryError> {
        let mut days: BTreeMap<NaiveDate, u64> = BTreeMap::new();
        for r in &self.lock().reservations {
            *days.entry(r.parking_time.date_naive()).or_default() += 1;
        }
        Ok(days.into_iter().collect())
    }
}

#[async_trait]
impl UserAdminRepository for InMemoryStore {
    async fn delete_user_with_reservations(
        &self,
        user_id: UserId,
    ) -> Result<u64, UserAdminRepositoryError> {
        let mut state = self.lock();
        let user = state
            .users
            .iter()
            .find(|u| u.id == user_id)
            .ok_or(UserAdminRepositoryError::NotFound)?;
        if user.is_admin {
            return Err(UserAdminRepositoryError::ProtectedAdmin);
        }

        let open_spots: Vec<i32> = state
            .reservations
            .iter()
            .filter(|r| r.user_id == user_id && r.is_active())
            .map(|r| r.spot_id)
            .collect();
        for spot_id in open_spots {
            state.set_spot(spot_id, SpotStatus::Available);
        }

        let before = state.reservations.len();
        state.reservations.retain(|r| r.user_id != user_id);
        let removed = (before - state.reservations.len()) as u64;
        state.users.retain(|u| u.id != user_id);
        Ok(removed)
    }
}
