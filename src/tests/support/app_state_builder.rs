use std::sync::Arc;

use actix_web::web;

use crate::modules::admin::application::admin_use_cases::AdminUseCases;
use crate::modules::admin::application::service::{
    DeleteUserService, GetDashboardService, GetUserHistoryService,
};
use crate::modules::auth::adapter::outgoing::security::{Argon2Hasher, Argon2Settings};
use crate::modules::admin::application::ports::incoming::use_cases::{
    DeleteUserUseCase, GetDashboardUseCase, GetUserHistoryUseCase,
};
use crate::modules::auth::application::auth_use_cases::AuthUseCases;
use crate::modules::auth::application::helpers::PrincipalResolver;
use crate::modules::auth::application::ports::incoming::use_cases::{
    LoginUserUseCase, RegisterUserUseCase, UpdateProfileUseCase,
};
use crate::modules::auth::application::ports::outgoing::UserQuery;
use crate::modules::auth::application::service::{
    BasicCredentialPolicy, LoginUserService, RegisterUserService, UpdateProfileService,
};
use crate::modules::parking::application::parking_use_cases::ParkingUseCases;
use crate::modules::parking::application::ports::incoming::use_cases::{
    CreateLotUseCase, DeleteLotUseCase, EditLotUseCase, GetLotDetailUseCase, SearchLotsUseCase,
};
use crate::modules::parking::application::service::{
    CreateLotService, DeleteLotService, EditLotService, GetLotDetailService, SearchLotsService,
};
use crate::modules::reservation::application::ports::incoming::use_cases::{
    BookSpotUseCase, ForceReleaseUseCase, GetActiveReservationUseCase, GetHistoryUseCase,
    ListReservationsUseCase, ReleaseSpotUseCase,
};
use crate::modules::reservation::application::reservation_use_cases::ReservationUseCases;
use crate::modules::reservation::application::service::{
    BookSpotService, ForceReleaseService, GetActiveReservationService, GetHistoryService,
    ListReservationsService, ReleaseSpotService,
};
use crate::tests::support::in_memory_store::InMemoryStore;
use crate::tests::support::stubs::{StubUserQuery, UnusedUseCase};
use crate::AppState;

/// Builds an [`AppState`] where every use case not explicitly replaced is an
/// [`UnusedUseCase`] and no user exists.
pub struct TestAppStateBuilder {
    auth: AuthUseCases,
    parking: ParkingUseCases,
    reservation: ReservationUseCases,
    admin: AdminUseCases,
    principal_resolver: PrincipalResolver,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        let unused = Arc::new(UnusedUseCase);
        Self {
            auth: AuthUseCases {
                register: unused.clone(),
                login: unused.clone(),
                update_profile: unused.clone(),
            },
            parking: ParkingUseCases {
                create: unused.clone(),
                edit: unused.clone(),
                delete: unused.clone(),
                search: unused.clone(),
                detail: unused.clone(),
            },
            reservation: ReservationUseCases {
                book: unused.clone(),
                release: unused.clone(),
                force_release: unused.clone(),
                history: unused.clone(),
                list_all: unused.clone(),
                active: unused.clone(),
            },
            admin: AdminUseCases {
                dashboard: unused.clone(),
                delete_user: unused.clone(),
                user_history: unused,
            },
            principal_resolver: PrincipalResolver::new(Arc::new(StubUserQuery::default())),
        }
    }
}

impl TestAppStateBuilder {
    /// Backs session resolution.
    pub fn with_user_query(mut self, query: impl UserQuery + Send + Sync + 'static) -> Self {
        self.principal_resolver = PrincipalResolver::new(Arc::new(query));
        self
    }

    pub fn with_register_user(
        mut self,
        uc: impl RegisterUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.auth.register = Arc::new(uc);
        self
    }

    pub fn with_login_user(mut self, uc: impl LoginUserUseCase + Send + Sync + 'static) -> Self {
        self.auth.login = Arc::new(uc);
        self
    }

    pub fn with_update_profile(
        mut self,
        uc: impl UpdateProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.auth.update_profile = Arc::new(uc);
        self
    }

    pub fn with_create_lot(mut self, uc: impl CreateLotUseCase + Send + Sync + 'static) -> Self {
        self.parking.create = Arc::new(uc);
        self
    }

    pub fn with_edit_lot(mut self, uc: impl EditLotUseCase + Send + Sync + 'static) -> Self {
        self.parking.edit = Arc::new(uc);
        self
    }

    pub fn with_delete_lot(mut self, uc: impl DeleteLotUseCase + Send + Sync + 'static) -> Self {
        self.parking.delete = Arc::new(uc);
        self
    }

    pub fn with_search_lots(mut self, uc: impl SearchLotsUseCase + Send + Sync + 'static) -> Self {
        self.parking.search = Arc::new(uc);
        self
    }

    pub fn with_lot_detail(
        mut self,
        uc: impl GetLotDetailUseCase + Send + Sync + 'static,
    ) -> Self {
        self.parking.detail = Arc::new(uc);
        self
    }

    pub fn with_book_spot(mut self, uc: impl BookSpotUseCase + Send + Sync + 'static) -> Self {
        self.reservation.book = Arc::new(uc);
        self
    }

    pub fn with_release_spot(
        mut self,
        uc: impl ReleaseSpotUseCase + Send + Sync + 'static,
    ) -> Self {
        self.reservation.release = Arc::new(uc);
        self
    }

    pub fn with_force_release(
        mut self,
        uc: impl ForceReleaseUseCase + Send + Sync + 'static,
    ) -> Self {
        self.reservation.force_release = Arc::new(uc);
        self
    }

    pub fn with_history(mut self, uc: impl GetHistoryUseCase + Send + Sync + 'static) -> Self {
        self.reservation.history = Arc::new(uc);
        self
    }

    pub fn with_list_reservations(
        mut self,
        uc: impl ListReservationsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.reservation.list_all = Arc::new(uc);
        self
    }

    pub fn with_active_reservation(
        mut self,
        uc: impl GetActiveReservationUseCase + Send + Sync + 'static,
    ) -> Self {
        self.reservation.active = Arc::new(uc);
        self
    }

    pub fn with_dashboard(mut self, uc: impl GetDashboardUseCase + Send + Sync + 'static) -> Self {
        self.admin.dashboard = Arc::new(uc);
        self
    }

    pub fn with_delete_user(mut self, uc: impl DeleteUserUseCase + Send + Sync + 'static) -> Self {
        self.admin.delete_user = Arc::new(uc);
        self
    }

    pub fn with_user_history(
        mut self,
        uc: impl GetUserHistoryUseCase + Send + Sync + 'static,
    ) -> Self {
        self.admin.user_history = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            auth: self.auth,
            parking: self.parking,
            reservation: self.reservation,
            admin: self.admin,
            principal_resolver: self.principal_resolver,
        })
    }
}

/// The production service graph over a shared [`InMemoryStore`].
pub fn wired_state(store: &InMemoryStore) -> web::Data<AppState> {
    let hasher = Argon2Hasher::new(Argon2Settings::default()).expect("valid argon2 settings");

    web::Data::new(AppState {
        auth: AuthUseCases {
            register: Arc::new(RegisterUserService::new(
                store.clone(),
                store.clone(),
                hasher.clone(),
                BasicCredentialPolicy,
            )),
            login: Arc::new(LoginUserService::new(store.clone(), hasher.clone())),
            update_profile: Arc::new(UpdateProfileService::new(
                store.clone(),
                store.clone(),
                hasher,
                BasicCredentialPolicy,
            )),
        },
        parking: ParkingUseCases {
            create: Arc::new(CreateLotService::new(store.clone())),
            edit: Arc::new(EditLotService::new(store.clone())),
            delete: Arc::new(DeleteLotService::new(store.clone())),
            search: Arc::new(SearchLotsService::new(store.clone())),
            detail: Arc::new(GetLotDetailService::new(store.clone())),
        },
        reservation: ReservationUseCases {
            book: Arc::new(BookSpotService::new(store.clone())),
            release: Arc::new(ReleaseSpotService::new(store.clone())),
            force_release: Arc::new(ForceReleaseService::new(store.clone())),
            history: Arc::new(GetHistoryService::new(store.clone())),
            list_all: Arc::new(ListReservationsService::new(store.clone())),
            active: Arc::new(GetActiveReservationService::new(store.clone())),
        },
        admin: AdminUseCases {
            dashboard: Arc::new(GetDashboardService::new(
                store.clone(),
                store.clone(),
                store.clone(),
            )),
            delete_user: Arc::new(DeleteUserService::new(store.clone())),
            user_history: Arc::new(GetUserHistoryService::new(store.clone(), store.clone())),
        },
        principal_resolver: PrincipalResolver::new(Arc::new(store.clone())),
    })
}
