//! Booking rules for the condominium court.

use std::sync::Arc;

use chrono::{Duration, NaiveDate};
use chrono_tz::Tz;
use serde_json::json;

use crate::error::AppError;
use crate::models::availability::{AvailabilityQuery, DayAvailability};
use crate::models::reservation::{CreateReservation, NewReservation, Reservation};
use crate::models::user::{User, UserRole};
use crate::repositories::{
    AuditLogRepository, BlackoutRepository, CourtRepository, DailyLimit, ReservationRepository,
    UserRepository,
};
use crate::services::{audit, availability, policy};
use crate::types::ReservationId;
use crate::utils::time::{day_bounds, is_adult, local_date, today_in};

/// Longest single booking, and the most a resident may hold on one day.
pub const MAX_BOOKING_SECONDS: i64 = 2 * 60 * 60;

fn max_booking() -> Duration {
    Duration::seconds(MAX_BOOKING_SECONDS)
}

#[derive(Clone)]
pub struct ReservationService {
    reservations: Arc<dyn ReservationRepository>,
    users: Arc<dyn UserRepository>,
    courts: Arc<dyn CourtRepository>,
    blackouts: Arc<dyn BlackoutRepository>,
    audit: Arc<dyn AuditLogRepository>,
    tz: Tz,
}

impl ReservationService {
    pub fn new(
        reservations: Arc<dyn ReservationRepository>,
        users: Arc<dyn UserRepository>,
        courts: Arc<dyn CourtRepository>,
        blackouts: Arc<dyn BlackoutRepository>,
        audit: Arc<dyn AuditLogRepository>,
        tz: Tz,
    ) -> Self {
        Self {
            reservations,
            users,
            courts,
            blackouts,
            audit,
            tz,
        }
    }

    pub async fn list(&self, date_str: Option<&str>) -> Result<Vec<Reservation>, AppError> {
        let window = match date_str {
            Some(raw) => Some(day_bounds(parse_day(raw)?, self.tz)),
            None => None,
        };
        self.reservations.list_active(window).await
    }

    pub async fn list_mine(&self, actor: &User) -> Result<Vec<Reservation>, AppError> {
        self.reservations.list_for_user(actor.id).await
    }

    pub async fn create(
        &self,
        actor: &User,
        payload: CreateReservation,
    ) -> Result<Reservation, AppError> {
        if payload.reserved_for_user_id.is_some() && actor.role == UserRole::Morador {
            return Err(AppError::Forbidden(
                "Morador can only reserve for themselves.".into(),
            ));
        }

        let target = match payload.reserved_for_user_id {
            Some(id) if id != actor.id => self
                .users
                .find_by_id(id)
                .await?
                .ok_or_else(|| AppError::NotFound("Target user not found".into()))?,
            _ => actor.clone(),
        };
        if !target.is_active() {
            return Err(AppError::Forbidden("Target user is not active".into()));
        }
        if !is_adult(target.birth_date, today_in(self.tz)) {
            return Err(AppError::Forbidden("Only 18+ can reserve the court".into()));
        }
        if actor.role.is_tower_scoped() {
            policy::ensure_same_tower(actor, target.tower_id)?;
        }

        let duration = validate_window(&payload)?;

        let court = self
            .courts
            .find_court(payload.court_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Court not found".into()))?;
        if !court.is_active {
            return Err(AppError::BadRequest("Court is not active".into()));
        }

        let (day_start, day_end) = day_bounds(local_date(payload.start_time, self.tz), self.tz);
        let booked = self
            .reservations
            .booked_seconds(target.id, day_start, day_end)
            .await?;
        if Duration::seconds(booked) + duration > max_booking() {
            return Err(AppError::BadRequest("Daily limit exceeded (max 2h/day)".into()));
        }

        let clashes = self
            .reservations
            .list_overlapping(court.id, payload.start_time, payload.end_time)
            .await?;
        if !clashes.is_empty() {
            return Err(AppError::Conflict("Time slot already reserved".into()));
        }

        let blackouts = self
            .blackouts
            .list_overlapping(payload.start_time, payload.end_time)
            .await?;
        if !blackouts.is_empty() {
            return Err(AppError::Conflict(
                "Court unavailable during blackout window".into(),
            ));
        }

        let reservation = self
            .reservations
            .insert(
                &NewReservation {
                    court_id: court.id,
                    user_id: target.id,
                    created_by_user_id: actor.id,
                    start_time: payload.start_time,
                    end_time: payload.end_time,
                    notes: payload.notes,
                },
                DailyLimit {
                    from: day_start,
                    to: day_end,
                    max_seconds: MAX_BOOKING_SECONDS,
                },
            )
            .await?;
        tracing::info!(
            reservation_id = %reservation.id,
            user_id = %target.id,
            created_by = %actor.id,
            "Reservation created"
        );
        Ok(reservation)
    }

    pub async fn cancel(&self, actor: &User, id: ReservationId) -> Result<Reservation, AppError> {
        let reservation = self
            .reservations
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reservation not found".into()))?;
        policy::ensure_can_cancel(actor, &reservation)?;
        if reservation.is_cancelled() {
            return Err(AppError::Conflict("Reservation already cancelled".into()));
        }

        let cancelled = self.reservations.cancel(id, actor.id).await?;
        audit::record(
            self.audit.as_ref(),
            actor.id,
            "reservation.cancel",
            "reservation",
            cancelled.id,
            json!({ "owner": cancelled.user_id }),
        )
        .await;
        Ok(cancelled)
    }

    pub async fn availability(
        &self,
        query: &AvailabilityQuery,
    ) -> Result<Vec<DayAvailability>, AppError> {
        let days = query.days.unwrap_or(availability::DEFAULT_DAYS);
        if !(1..=availability::MAX_DAYS).contains(&days) {
            return Err(AppError::BadRequest(format!(
                "days must be between 1 and {}",
                availability::MAX_DAYS
            )));
        }
        let start = match query.start.as_deref() {
            Some(raw) => parse_day(raw)?,
            None => today_in(self.tz),
        };

        let court_id = match query.court_id {
            Some(id) => id,
            None => self
                .courts
                .list_courts()
                .await?
                .into_iter()
                .next()
                .map(|court| court.id)
                .ok_or_else(|| AppError::NotFound("No active court".into()))?,
        };

        let (from, to) = availability::window_bounds(start, days, self.tz);
        let mut busy: Vec<availability::Interval> = self
            .reservations
            .list_overlapping(court_id, from, to)
            .await?
            .into_iter()
            .map(|r| (r.start_time, r.end_time))
            .collect();
        busy.extend(
            self.blackouts
                .list_overlapping(from, to)
                .await?
                .into_iter()
                .map(|b| (b.start_time, b.end_time)),
        );

        Ok(availability::build_availability(start, days, self.tz, &busy))
    }
}

pub fn parse_day(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| AppError::BadRequest("Invalid date format, use YYYY-MM-DD".into()))
}

fn validate_window(payload: &CreateReservation) -> Result<Duration, AppError> {
    if payload.end_time <= payload.start_time {
        return Err(AppError::BadRequest(
            "end_time must be after start_time".into(),
        ));
    }
    let duration = payload.end_time - payload.start_time;
    if duration > max_booking() {
        return Err(AppError::BadRequest(
            "Invalid duration (max 2h per reservation)".into(),
        ));
    }
    Ok(duration)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::blackout::BlackoutWindow;
    use crate::models::court::Court;
    use crate::models::reservation::ReservationStatus;
    use crate::repositories::audit_log::MockAuditLogRepository;
    use crate::repositories::blackout::MockBlackoutRepository;
    use crate::repositories::court::MockCourtRepository;
    use crate::repositories::reservation::MockReservationRepository;
    use crate::repositories::user::MockUserRepository;
    use crate::test_support::{sample_reservation, sample_user};
    use crate::types::{BlackoutWindowId, CourtId, TowerId, UserId};
    use chrono::{DateTime, TimeZone, Utc};
    use chrono_tz::America::Sao_Paulo;

    struct Mocks {
        reservations: MockReservationRepository,
        users: MockUserRepository,
        courts: MockCourtRepository,
        blackouts: MockBlackoutRepository,
        audit: MockAuditLogRepository,
    }

    impl Mocks {
        fn new() -> Self {
            Self {
                reservations: MockReservationRepository::new(),
                users: MockUserRepository::new(),
                courts: MockCourtRepository::new(),
                blackouts: MockBlackoutRepository::new(),
                audit: MockAuditLogRepository::new(),
            }
        }

        fn with_active_court(mut self, court_id: CourtId) -> Self {
            self.courts.expect_find_court().returning(move |id| {
                Ok(Some(Court {
                    id,
                    name: "Quadra Poliesportiva".into(),
                    is_active: id == court_id,
                }))
            });
            self
        }

        fn into_service(self) -> ReservationService {
            ReservationService::new(
                Arc::new(self.reservations),
                Arc::new(self.users),
                Arc::new(self.courts),
                Arc::new(self.blackouts),
                Arc::new(self.audit),
                Sao_Paulo,
            )
        }
    }

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Sao_Paulo
            .with_ymd_and_hms(2030, 4, 14, h, m, 0)
            .unwrap()
            .with_timezone(&Utc)
    }

    fn payload(court_id: CourtId, start: DateTime<Utc>, end: DateTime<Utc>) -> CreateReservation {
        CreateReservation {
            court_id,
            start_time: start,
            end_time: end,
            notes: None,
            reserved_for_user_id: None,
        }
    }

    #[tokio::test]
    async fn creates_confirmed_reservation_when_slot_is_free() {
        let court_id = CourtId::new();
        let actor = sample_user(UserRole::Morador);
        let actor_id = actor.id;
        let mut mocks = Mocks::new().with_active_court(court_id);
        mocks
            .reservations
            .expect_booked_seconds()
            .returning(|_, _, _| Ok(1800));
        mocks
            .reservations
            .expect_list_overlapping()
            .returning(|_, _, _| Ok(vec![]));
        mocks
            .blackouts
            .expect_list_overlapping()
            .returning(|_, _| Ok(vec![]));
        mocks
            .reservations
            .expect_insert()
            .withf(move |new, limit| {
                new.user_id == actor_id
                    && new.created_by_user_id == actor_id
                    && limit.from == at(0, 0)
                    && limit.to - limit.from == Duration::days(1)
                    && limit.max_seconds == MAX_BOOKING_SECONDS
            })
            .times(1)
            .returning(|new, _| {
                let mut row = sample_reservation(new.user_id);
                row.court_id = new.court_id;
                row.start_time = new.start_time;
                row.end_time = new.end_time;
                Ok(row)
            });

        let service = mocks.into_service();
        let created = service
            .create(&actor, payload(court_id, at(18, 0), at(19, 30)))
            .await
            .expect("reservation");
        assert_eq!(created.user_id, actor.id);
        assert_eq!(created.status, ReservationStatus::Confirmed);
    }

    #[tokio::test]
    async fn morador_cannot_book_for_someone_else() {
        let actor = sample_user(UserRole::Morador);
        let service = Mocks::new().into_service();
        let mut body = payload(CourtId::new(), at(9, 0), at(10, 0));
        body.reserved_for_user_id = Some(UserId::new());
        let err = service.create(&actor, body).await.unwrap_err();
        assert!(matches!(err, AppError::Forbidden(msg) if msg == "Morador can only reserve for themselves."));
    }

    #[tokio::test]
    async fn minors_and_inactive_users_are_rejected() {
        let service = Mocks::new().into_service();

        let mut minor = sample_user(UserRole::Morador);
        minor.birth_date = NaiveDate::from_ymd_opt(2020, 1, 1);
        let err = service
            .create(&minor, payload(CourtId::new(), at(9, 0), at(10, 0)))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Forbidden(msg) if msg == "Only 18+ can reserve the court"));

        let mut pending = sample_user(UserRole::Morador);
        pending.status = crate::models::user::UserStatus::Pending;
        let err = service
            .create(&pending, payload(CourtId::new(), at(9, 0), at(10, 0)))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
    }

    #[tokio::test]
    async fn porteiro_books_only_within_own_tower() {
        let tower = TowerId::new();
        let mut porteiro = sample_user(UserRole::Porteiro);
        porteiro.tower_id = Some(tower);
        let mut resident = sample_user(UserRole::Morador);
        resident.tower_id = Some(TowerId::new());
        let resident_id = resident.id;

        let mut mocks = Mocks::new();
        mocks
            .users
            .expect_find_by_id()
            .returning(move |_| Ok(Some(resident.clone())));
        let service = mocks.into_service();

        let mut body = payload(CourtId::new(), at(9, 0), at(10, 0));
        body.reserved_for_user_id = Some(resident_id);
        let err = service.create(&porteiro, body).await.unwrap_err();
        assert!(matches!(err, AppError::Forbidden(msg) if msg == "Tower scope violation."));
    }

    #[tokio::test]
    async fn rejects_inverted_and_long_windows() {
        let actor = sample_user(UserRole::Morador);
        let service = Mocks::new().into_service();

        let err = service
            .create(&actor, payload(CourtId::new(), at(10, 0), at(10, 0)))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(msg) if msg == "end_time must be after start_time"));

        let err = service
            .create(&actor, payload(CourtId::new(), at(10, 0), at(12, 1)))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(msg) if msg == "Invalid duration (max 2h per reservation)"));
    }

    #[tokio::test]
    async fn inactive_court_is_bad_request() {
        let actor = sample_user(UserRole::Morador);
        let service = Mocks::new().with_active_court(CourtId::new()).into_service();
        let err = service
            .create(&actor, payload(CourtId::new(), at(10, 0), at(11, 0)))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(msg) if msg == "Court is not active"));
    }

    #[tokio::test]
    async fn daily_limit_counts_existing_bookings() {
        let court_id = CourtId::new();
        let actor = sample_user(UserRole::Morador);
        let mut mocks = Mocks::new().with_active_court(court_id);
        let (expected_start, expected_end) =
            day_bounds(NaiveDate::from_ymd_opt(2030, 4, 14).unwrap(), Sao_Paulo);
        mocks
            .reservations
            .expect_booked_seconds()
            .withf(move |_, from, to| *from == expected_start && *to == expected_end)
            .returning(|_, _, _| Ok(3600));
        let service = mocks.into_service();

        let err = service
            .create(&actor, payload(court_id, at(22, 0), at(23, 30)))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(msg) if msg == "Daily limit exceeded (max 2h/day)"));
    }

    #[tokio::test]
    async fn overlapping_reservation_and_blackout_conflict() {
        let court_id = CourtId::new();
        let actor = sample_user(UserRole::Morador);
        let owner = UserId::new();

        let mut mocks = Mocks::new().with_active_court(court_id);
        mocks
            .reservations
            .expect_booked_seconds()
            .returning(|_, _, _| Ok(0));
        mocks
            .reservations
            .expect_list_overlapping()
            .returning(move |_, _, _| Ok(vec![sample_reservation(owner)]));
        let err = mocks
            .into_service()
            .create(&actor, payload(court_id, at(10, 0), at(11, 0)))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(msg) if msg == "Time slot already reserved"));

        let mut mocks = Mocks::new().with_active_court(court_id);
        mocks
            .reservations
            .expect_booked_seconds()
            .returning(|_, _, _| Ok(0));
        mocks
            .reservations
            .expect_list_overlapping()
            .returning(|_, _, _| Ok(vec![]));
        mocks.blackouts.expect_list_overlapping().returning(move |from, to| {
            Ok(vec![BlackoutWindow {
                id: BlackoutWindowId::new(),
                start_time: from,
                end_time: to,
                reason: "Pintura".into(),
                created_by: owner,
            }])
        });
        let err = mocks
            .into_service()
            .create(&actor, payload(court_id, at(10, 0), at(11, 0)))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(msg) if msg == "Court unavailable during blackout window"));
    }

    #[tokio::test]
    async fn cancel_checks_ownership_and_state() {
        let owner = sample_user(UserRole::Morador);
        let owner_id = owner.id;
        let mut mocks = Mocks::new();
        mocks
            .reservations
            .expect_find_by_id()
            .returning(move |_| Ok(Some(sample_reservation(owner_id))));
        mocks
            .reservations
            .expect_cancel()
            .times(1)
            .returning(|_, by| {
                let mut row = sample_reservation(UserId::new());
                row.status = ReservationStatus::Cancelled;
                row.cancelled_by = Some(by);
                Ok(row)
            });
        mocks.audit.expect_insert().times(1).returning(|_| Ok(()));
        let service = mocks.into_service();

        let stranger = sample_user(UserRole::Porteiro);
        let err = service
            .cancel(&stranger, ReservationId::new())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));

        let cancelled = service.cancel(&owner, ReservationId::new()).await.unwrap();
        assert_eq!(cancelled.cancelled_by, Some(owner.id));
    }

    #[tokio::test]
    async fn cancelling_twice_is_conflict() {
        let owner = sample_user(UserRole::Morador);
        let owner_id = owner.id;
        let mut mocks = Mocks::new();
        mocks.reservations.expect_find_by_id().returning(move |_| {
            let mut row = sample_reservation(owner_id);
            row.status = ReservationStatus::Cancelled;
            Ok(Some(row))
        });
        mocks.reservations.expect_cancel().never();
        let err = mocks
            .into_service()
            .cancel(&owner, ReservationId::new())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn list_rejects_malformed_day() {
        let service = Mocks::new().into_service();
        let err = service.list(Some("14/04/2030")).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(msg) if msg == "Invalid date format, use YYYY-MM-DD"));
    }

    #[tokio::test]
    async fn availability_validates_day_count() {
        let service = Mocks::new().into_service();
        let query = AvailabilityQuery {
            court_id: Some(CourtId::new()),
            start: Some("2030-04-14".into()),
            days: Some(0),
        };
        assert!(matches!(
            service.availability(&query).await,
            Err(AppError::BadRequest(_))
        ));
    }

    #[tokio::test]
    async fn availability_merges_bookings_and_blackouts() {
        let mut mocks = Mocks::new();
        mocks
            .reservations
            .expect_list_overlapping()
            .returning(|_, _, _| {
                let mut row = sample_reservation(UserId::new());
                row.start_time = at(7, 0);
                row.end_time = at(8, 0);
                Ok(vec![row])
            });
        mocks.blackouts.expect_list_overlapping().returning(|_, _| {
            Ok(vec![BlackoutWindow {
                id: BlackoutWindowId::new(),
                start_time: at(18, 0),
                end_time: at(23, 0),
                reason: "Evento".into(),
                created_by: UserId::new(),
            }])
        });
        let report = mocks
            .into_service()
            .availability(&AvailabilityQuery {
                court_id: Some(CourtId::new()),
                start: Some("2030-04-14".into()),
                days: Some(2),
            })
            .await
            .unwrap();

        use crate::models::availability::SlotStatus::*;
        let first: Vec<_> = report[0].periods.iter().map(|p| p.status).collect();
        assert_eq!(first, vec![Partial, Free, Full]);
        let second: Vec<_> = report[1].periods.iter().map(|p| p.status).collect();
        assert_eq!(second, vec![Free, Free, Free]);
    }

    #[tokio::test]
    async fn availability_defaults_to_first_active_court() {
        let court_id = CourtId::new();
        let mut mocks = Mocks::new();
        mocks.courts.expect_list_courts().times(1).returning(move || {
            Ok(vec![Court {
                id: court_id,
                name: "Quadra Poliesportiva".into(),
                is_active: true,
            }])
        });
        mocks
            .reservations
            .expect_list_overlapping()
            .withf(move |id, _, _| *id == court_id)
            .times(1)
            .returning(|_, _, _| Ok(vec![]));
        mocks
            .blackouts
            .expect_list_overlapping()
            .returning(|_, _| Ok(vec![]));

        let report = mocks
            .into_service()
            .availability(&AvailabilityQuery {
                court_id: None,
                start: Some("2030-04-14".into()),
                days: Some(7),
            })
            .await
            .unwrap();
        assert_eq!(report.len(), 7);
    }

    #[tokio::test]
    async fn availability_without_any_court_is_not_found() {
        let mut mocks = Mocks::new();
        mocks.courts.expect_list_courts().returning(|| Ok(vec![]));
        let err = mocks
            .into_service()
            .availability(&AvailabilityQuery {
                court_id: None,
                start: None,
                days: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(msg) if msg == "No active court"));
    }
}
