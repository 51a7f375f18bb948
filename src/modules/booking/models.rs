use serde::{Deserialize, Serialize};

use super::schedule::{BookingDate, ClockTime};

pub type RoomId = u64;
pub type BookingId = u64;

/// Display name shared by every view that references a room.
pub fn room_name(room_id: RoomId) -> String {
    format!("Room {}", room_id)
}

/// A bookable room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    /// Sequential id, starting at 1
    pub room_id: RoomId,
    /// Seating capacity
    pub number_of_seats: u32,
    /// Free-form amenity labels, e.g. "projector"
    pub amenities: Vec<String>,
    /// Hourly rate; stored as given, never used in calculations
    pub price_per_hour: f64,
}

/// A reservation of one room for one customer on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// Sequential id, starting at 1
    pub booking_id: BookingId,
    /// Name the booking was made under; matched case-sensitively
    pub customer_name: String,
    /// Day of the booking
    pub date: BookingDate,
    /// Inclusive start of the slot
    pub start_time: ClockTime,
    /// Exclusive end of the slot
    pub end_time: ClockTime,
    /// Room the booking holds
    pub room_id: RoomId,
}

/// Request model for creating a room.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoom {
    /// Seating capacity
    pub number_of_seats: u32,
    /// Amenity labels; empty when omitted
    #[serde(default)]
    pub amenities: Vec<String>,
    /// Hourly rate
    pub price_per_hour: f64,
}

/// Request model for booking a room.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBooking {
    /// Customer making the booking
    pub customer_name: String,
    /// Day of the booking, `YYYY-MM-DD`
    pub date: BookingDate,
    /// Slot start, `HH:MM`
    pub start_time: ClockTime,
    /// Slot end, `HH:MM`; must be after `start_time`, `24:00` allowed
    pub end_time: ClockTime,
    /// Room to book
    pub room_id: RoomId,
}

/// A room together with its bookings, as returned on creation.
#[derive(Debug, Clone, Serialize)]
pub struct RoomDetail {
    #[serde(flatten)]
    pub room: Room,
    pub bookings: Vec<Booking>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoomCreated {
    pub message: &'static str,
    pub room: RoomDetail,
}

#[derive(Debug, Clone, Serialize)]
pub struct BookingCreated {
    pub message: &'static str,
    pub booking: Booking,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RoomStatus {
    Available,
    Booked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BookingStatus {
    Confirmed,
}

/// Booking as listed under its room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomBookingView {
    pub customer_name: String,
    pub date: BookingDate,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomView {
    pub room_name: String,
    pub booked_status: RoomStatus,
    pub bookings: Vec<RoomBookingView>,
}

/// One row of the all-customers listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerBookingView {
    pub customer_name: String,
    pub room_name: String,
    pub date: BookingDate,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
}

/// One booking in a single customer's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerHistoryEntry {
    pub room_name: String,
    pub date: BookingDate,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
    pub booking_id: BookingId,
    pub booking_date: BookingDate,
    pub booking_status: BookingStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerHistory {
    pub customer_name: String,
    pub total_bookings: usize,
    pub bookings: Vec<CustomerHistoryEntry>,
}

impl From<&Booking> for RoomBookingView {
    fn from(booking: &Booking) -> Self {
        Self {
            customer_name: booking.customer_name.clone(),
            date: booking.date,
            start_time: booking.start_time,
            end_time: booking.end_time,
        }
    }
}

impl From<&Booking> for CustomerBookingView {
    fn from(booking: &Booking) -> Self {
        Self {
            customer_name: booking.customer_name.clone(),
            room_name: room_name(booking.room_id),
            date: booking.date,
            start_time: booking.start_time,
            end_time: booking.end_time,
        }
    }
}

impl From<&Booking> for CustomerHistoryEntry {
    fn from(booking: &Booking) -> Self {
        Self {
            room_name: room_name(booking.room_id),
            date: booking.date,
            start_time: booking.start_time,
            end_time: booking.end_time,
            booking_id: booking.booking_id,
            booking_date: booking.date,
            booking_status: BookingStatus::Confirmed,
        }
    }
}
