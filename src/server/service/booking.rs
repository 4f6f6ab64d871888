//! Booking lifecycle: validation against inventory, ownership rules, and
//! metrics upkeep.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{booking::BookingRepository, hotel::HotelRepository},
    error::{auth::AuthError, validation::ValidationError, AppError},
    model::{
        booking::{Booking, CreateBookingParams, UpdateBookingParams},
        user::User,
    },
    service::{availability::AvailabilityService, metrics::MetricsService},
};

pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a booking for the acting user after checking that the room
    /// belongs to the hotel and has enough free units over the window.
    /// Recomputes the hotel's metrics afterwards.
    pub async fn create(&self, params: CreateBookingParams) -> Result<Booking, AppError> {
        let mut report = ValidationError::new();
        if params.check_out <= params.check_in {
            report.push("check_in, check_out", "check_out must be after check_in");
        }
        if params.rooms_booked < 1 {
            report.push("rooms_booked", "must be at least 1");
        }
        report.into_result()?;

        let hotel_repo = HotelRepository::new(self.db);
        hotel_repo
            .get_by_id(params.hotel_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Hotel {} not found", params.hotel_id)))?;

        let room = hotel_repo
            .get_room(params.room_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Room {} not found", params.room_id)))?;

        if room.hotel_id != params.hotel_id {
            let mut report = ValidationError::new();
            report.push("room_id", "room does not belong to the given hotel");
            return Err(report.into());
        }

        let available = AvailabilityService::new(self.db)
            .available_units(&room, params.check_in, params.check_out, None)
            .await?;

        if params.rooms_booked > available {
            let mut report = ValidationError::new();
            report.push(
                "rooms_booked",
                format!("only {} unit(s) available for these dates", available.max(0)),
            );
            return Err(report.into());
        }

        let booking = BookingRepository::new(self.db).create(params).await?;

        MetricsService::new(self.db)
            .recompute(booking.hotel_id)
            .await?;

        Ok(booking)
    }

    /// Lists the acting user's own bookings.
    pub async fn list_own(&self, user: &User) -> Result<Vec<Booking>, AppError> {
        BookingRepository::new(self.db)
            .list_for_user(&user.id)
            .await
            .map_err(AppError::from)
    }

    /// Gets one booking. Non-owners get a NotFound rather than a Forbidden so
    /// booking ids are not probeable; admins see everything.
    pub async fn get(&self, booking_id: i32, acting: &User) -> Result<Booking, AppError> {
        let booking = BookingRepository::new(self.db)
            .get_by_id(booking_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Booking {} not found", booking_id)))?;

        if booking.user_id != acting.id && !acting.role.is_admin() {
            return Err(AppError::NotFound(format!(
                "Booking {} not found",
                booking_id
            )));
        }

        Ok(booking)
    }

    /// Updates dates, room, or unit count. The merged result is re-validated
    /// as if it were a new booking, not counting the booking being moved.
    pub async fn update(
        &self,
        booking_id: i32,
        acting: &User,
        params: UpdateBookingParams,
    ) -> Result<Booking, AppError> {
        let repo = BookingRepository::new(self.db);
        let current = repo
            .get_by_id(booking_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Booking {} not found", booking_id)))?;

        self.ensure_owner_or_admin(&current, acting, "update booking")?;

        let check_in = params.check_in.unwrap_or(current.check_in);
        let check_out = params.check_out.unwrap_or(current.check_out);
        let rooms_booked = params.rooms_booked.unwrap_or(current.rooms_booked);
        let room_id = params.room_id.unwrap_or(current.room_id);

        let mut report = ValidationError::new();
        if check_out <= check_in {
            report.push("check_in, check_out", "check_out must be after check_in");
        }
        if rooms_booked < 1 {
            report.push("rooms_booked", "must be at least 1");
        }
        report.into_result()?;

        let room = HotelRepository::new(self.db)
            .get_room(room_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Room {} not found", room_id)))?;

        if room.hotel_id != current.hotel_id {
            let mut report = ValidationError::new();
            report.push("room_id", "room does not belong to the booked hotel");
            return Err(report.into());
        }

        let available = AvailabilityService::new(self.db)
            .available_units(&room, check_in, check_out, Some(booking_id))
            .await?;

        if rooms_booked > available {
            let mut report = ValidationError::new();
            report.push(
                "rooms_booked",
                format!("only {} unit(s) available for these dates", available.max(0)),
            );
            return Err(report.into());
        }

        repo.update(booking_id, params).await.map_err(AppError::from)
    }

    /// Deletes a booking and recomputes the hotel's metrics.
    pub async fn delete(&self, booking_id: i32, acting: &User) -> Result<(), AppError> {
        let repo = BookingRepository::new(self.db);
        let booking = repo
            .get_by_id(booking_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Booking {} not found", booking_id)))?;

        self.ensure_owner_or_admin(&booking, acting, "delete booking")?;

        repo.delete(booking_id).await?;

        MetricsService::new(self.db)
            .recompute(booking.hotel_id)
            .await?;

        Ok(())
    }

    fn ensure_owner_or_admin(
        &self,
        booking: &Booking,
        acting: &User,
        action: &str,
    ) -> Result<(), AppError> {
        if booking.user_id == acting.id || acting.role.is_admin() {
            Ok(())
        } else {
            Err(AuthError::AccessDenied {
                user_id: acting.id.clone(),
                action: format!("{} {} owned by another user", action, booking.id),
            }
            .into())
        }
    }
}
