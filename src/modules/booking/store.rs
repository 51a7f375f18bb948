//! In-memory room and booking store.
//!
//! Bookings live in one map keyed by id; the per-room index only holds ids.
//! Writers take the lock exclusively for the whole check-then-insert.

use std::collections::BTreeMap;

use thiserror::Error;
use tokio::sync::RwLock;

use super::models::{
    Booking, BookingId, CreateBooking, CreateRoom, CustomerBookingView, CustomerHistory,
    CustomerHistoryEntry, Room, RoomBookingView, RoomId, RoomStatus, RoomView,
};
use super::schedule::TimeSlot;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BookingError {
    #[error("room {0} not found")]
    RoomNotFound(RoomId),
    #[error("no bookings found for customer '{0}'")]
    CustomerNotFound(String),
    #[error("room {room_id} is already booked during this time")]
    Conflict {
        room_id: RoomId,
        existing: BookingId,
    },
    #[error("end time must be after start time")]
    InvalidTimeRange,
}

#[derive(Default)]
struct Inner {
    rooms: BTreeMap<RoomId, Room>,
    bookings: BTreeMap<BookingId, Booking>,
    room_bookings: BTreeMap<RoomId, Vec<BookingId>>,
    last_room_id: RoomId,
    last_booking_id: BookingId,
}

impl Inner {
    fn bookings_for(&self, room_id: RoomId) -> impl Iterator<Item = &Booking> {
        self.room_bookings
            .get(&room_id)
            .into_iter()
            .flatten()
            .filter_map(move |id| self.bookings.get(id))
    }
}

#[derive(Default)]
pub struct BookingStore {
    inner: RwLock<Inner>,
}

impl BookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create_room(&self, request: CreateRoom) -> Room {
        let mut inner = self.inner.write().await;
        inner.last_room_id += 1;

        let room = Room {
            room_id: inner.last_room_id,
            number_of_seats: request.number_of_seats,
            amenities: request.amenities,
            price_per_hour: request.price_per_hour,
        };
        inner.rooms.insert(room.room_id, room.clone());
        inner.room_bookings.insert(room.room_id, Vec::new());

        tracing::info!(
            room_id = room.room_id,
            seats = room.number_of_seats,
            "room created"
        );
        room
    }

    /// Rooms in creation order with their status and bookings.
    pub async fn list_rooms(&self) -> Vec<RoomView> {
        let inner = self.inner.read().await;
        inner
            .rooms
            .values()
            .map(|room| {
                let bookings: Vec<RoomBookingView> = inner
                    .bookings_for(room.room_id)
                    .map(RoomBookingView::from)
                    .collect();
                RoomView {
                    room_name: super::models::room_name(room.room_id),
                    booked_status: if bookings.is_empty() {
                        RoomStatus::Available
                    } else {
                        RoomStatus::Booked
                    },
                    bookings,
                }
            })
            .collect()
    }

    /// Book a room, rejecting unknown rooms and overlapping slots on the same day.
    pub async fn book_room(&self, request: CreateBooking) -> Result<Booking, BookingError> {
        let slot = TimeSlot::new(request.start_time, request.end_time)
            .ok_or(BookingError::InvalidTimeRange)?;

        let mut inner = self.inner.write().await;

        if !inner.rooms.contains_key(&request.room_id) {
            tracing::debug!(room_id = request.room_id, "booking rejected: unknown room");
            return Err(BookingError::RoomNotFound(request.room_id));
        }

        let clash = inner
            .bookings_for(request.room_id)
            .filter(|existing| existing.date == request.date)
            .find(|existing| {
                TimeSlot {
                    start: existing.start_time,
                    end: existing.end_time,
                }
                .overlaps(&slot)
            })
            .map(|existing| existing.booking_id);

        if let Some(existing) = clash {
            tracing::warn!(
                room_id = request.room_id,
                existing_booking = existing,
                date = %request.date,
                start = %request.start_time,
                end = %request.end_time,
                "booking rejected: time conflict"
            );
            return Err(BookingError::Conflict {
                room_id: request.room_id,
                existing,
            });
        }

        inner.last_booking_id += 1;
        let booking = Booking {
            booking_id: inner.last_booking_id,
            customer_name: request.customer_name,
            date: request.date,
            start_time: request.start_time,
            end_time: request.end_time,
            room_id: request.room_id,
        };

        inner.bookings.insert(booking.booking_id, booking.clone());
        inner
            .room_bookings
            .entry(booking.room_id)
            .or_default()
            .push(booking.booking_id);

        tracing::info!(
            booking_id = booking.booking_id,
            room_id = booking.room_id,
            date = %booking.date,
            "room booked"
        );
        Ok(booking)
    }

    /// Every booking as a customer-facing row, oldest first.
    pub async fn list_customer_bookings(&self) -> Vec<CustomerBookingView> {
        self.inner
            .read()
            .await
            .bookings
            .values()
            .map(CustomerBookingView::from)
            .collect()
    }

    /// Bookings made under exactly `name` (case-sensitive).
    pub async fn customer_history(&self, name: &str) -> Result<CustomerHistory, BookingError> {
        let inner = self.inner.read().await;
        let bookings: Vec<CustomerHistoryEntry> = inner
            .bookings
            .values()
            .filter(|booking| booking.customer_name == name)
            .map(CustomerHistoryEntry::from)
            .collect();

        if bookings.is_empty() {
            return Err(BookingError::CustomerNotFound(name.to_string()));
        }

        Ok(CustomerHistory {
            customer_name: name.to_string(),
            total_bookings: bookings.len(),
            bookings,
        })
    }

    pub async fn room_count(&self) -> usize {
        self.inner.read().await.rooms.len()
    }

    pub async fn booking_count(&self) -> usize {
        self.inner.read().await.bookings.len()
    }
}
