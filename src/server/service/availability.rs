//! Room availability over half-open stay windows.
//!
//! A stay `[check_in, check_out)` occupies every night from check-in up to
//! but not including check-out, so back-to-back stays never collide. Prices
//! are computed fresh on every query; nothing here caches or locks.

use std::collections::HashMap;

use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{booking::BookingRepository, hotel::HotelRepository},
    error::AppError,
    model::{booking::Booking, hotel::Room},
};

/// Sums booked units per room over a set of bookings that already overlap
/// the queried window.
pub fn booked_units_by_room(bookings: &[Booking]) -> HashMap<i32, i32> {
    let mut booked = HashMap::new();
    for booking in bookings {
        *booked.entry(booking.room_id).or_insert(0) += booking.rooms_booked;
    }
    booked
}

/// Minimum base price over rooms with at least one unit free after
/// subtracting overlapping bookings. `None` when no room qualifies.
pub fn min_available_price(rooms: &[Room], booked_by_room: &HashMap<i32, i32>) -> Option<f64> {
    min_price(rooms.iter().filter(|room| {
        let booked = booked_by_room.get(&room.id).copied().unwrap_or(0);
        room.total_units - booked > 0
    }))
}

/// Minimum base price over rooms that have any inventory at all, ignoring
/// dates. `None` when the hotel has no sellable room.
pub fn min_general_price(rooms: &[Room]) -> Option<f64> {
    min_price(rooms.iter().filter(|room| room.total_units > 0))
}

fn min_price<'r>(rooms: impl Iterator<Item = &'r Room>) -> Option<f64> {
    rooms.map(|room| room.base_price).fold(None, |acc, price| {
        Some(match acc {
            None => price,
            Some(current) => current.min(price),
        })
    })
}

/// Date-aware availability queries for a single hotel or room.
pub struct AvailabilityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AvailabilityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Minimum available price for one hotel over a stay window.
    pub async fn min_available_price(
        &self,
        hotel_id: i32,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<Option<f64>, AppError> {
        let rooms = HotelRepository::new(self.db).list_rooms(hotel_id).await?;
        let bookings = BookingRepository::new(self.db)
            .list_overlapping_for_hotel(hotel_id, check_in, check_out, None)
            .await?;

        let booked = booked_units_by_room(&bookings);
        Ok(min_available_price(&rooms, &booked))
    }

    /// Units of one room still free over a stay window, optionally ignoring
    /// one existing booking (when that booking is itself being moved).
    pub async fn available_units(
        &self,
        room: &Room,
        check_in: NaiveDate,
        check_out: NaiveDate,
        exclude_booking: Option<i32>,
    ) -> Result<i32, AppError> {
        let bookings = BookingRepository::new(self.db)
            .list_overlapping_for_hotel(room.hotel_id, check_in, check_out, exclude_booking)
            .await?;

        let booked: i32 = bookings
            .iter()
            .filter(|booking| booking.room_id == room.id)
            .map(|booking| booking.rooms_booked)
            .sum();

        Ok(room.total_units - booked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn room(id: i32, base_price: f64, total_units: i32) -> Room {
        Room {
            id,
            hotel_id: 1,
            name: format!("Room {}", id),
            room_type: "double".to_string(),
            capacity: 2,
            base_price,
            total_units,
        }
    }

    fn booking(room_id: i32, rooms_booked: i32) -> Booking {
        Booking {
            id: 0,
            user_id: "user-1".to_string(),
            hotel_id: 1,
            room_id,
            check_in: date(2024, 1, 1),
            check_out: date(2024, 1, 5),
            rooms_booked,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn booked_units_accumulate_per_room() {
        let bookings = vec![booking(1, 2), booking(1, 1), booking(2, 3)];
        let booked = booked_units_by_room(&bookings);
        assert_eq!(booked.get(&1), Some(&3));
        assert_eq!(booked.get(&2), Some(&3));
    }

    #[test]
    fn min_available_price_skips_sold_out_rooms() {
        let rooms = vec![room(1, 80.0, 2), room(2, 120.0, 1)];
        let mut booked = HashMap::new();
        booked.insert(1, 2); // cheapest room fully booked

        assert_eq!(min_available_price(&rooms, &booked), Some(120.0));
    }

    #[test]
    fn min_available_price_is_none_when_everything_is_booked() {
        let rooms = vec![room(1, 80.0, 1)];
        let mut booked = HashMap::new();
        booked.insert(1, 1);

        assert_eq!(min_available_price(&rooms, &booked), None);
    }

    #[test]
    fn min_general_price_ignores_bookings_but_not_zero_inventory() {
        let rooms = vec![room(1, 80.0, 0), room(2, 120.0, 1)];
        assert_eq!(min_general_price(&rooms), Some(120.0));
        assert_eq!(min_general_price(&[]), None);
    }
}
