//! HTTP handlers for rooms, bookings and customer views.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use hall_http::error::AppError;
use serde_json::json;

use super::models::{
    BookingCreated, CreateBooking, CreateRoom, CustomerBookingView, CustomerHistory, RoomCreated,
    RoomDetail, RoomView,
};
use super::store::{BookingError, BookingStore};

pub const WELCOME: &str = "Welcome to the Hall Booking API!";

impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::RoomNotFound(_) => AppError::not_found("Room not found"),
            BookingError::CustomerNotFound(_) => {
                AppError::not_found("No bookings found for this customer")
            }
            BookingError::Conflict { .. } => {
                AppError::bad_request("Room is already booked during this time")
                    .with_code("booking_conflict")
            }
            BookingError::InvalidTimeRange => AppError::validation(
                vec![json!({ "field": "endTime", "error": "must be after startTime" })],
                "End time must be after start time",
            ),
        }
    }
}

pub fn router(store: Arc<BookingStore>) -> Router {
    Router::new()
        .route("/", get(welcome))
        .route("/rooms", post(create_room).get(list_rooms))
        .route("/book", post(book_room))
        .route("/customers", get(list_customers))
        .route("/customers/{name}/bookings", get(customer_bookings))
        .with_state(store)
}

async fn welcome() -> &'static str {
    WELCOME
}

async fn create_room(
    State(store): State<Arc<BookingStore>>,
    payload: Result<Json<CreateRoom>, JsonRejection>,
) -> Result<(StatusCode, Json<RoomCreated>), AppError> {
    let Json(request) = payload?;
    let room = store.create_room(request).await;

    Ok((
        StatusCode::CREATED,
        Json(RoomCreated {
            message: "Room created successfully",
            room: RoomDetail {
                room,
                bookings: Vec::new(),
            },
        }),
    ))
}

async fn book_room(
    State(store): State<Arc<BookingStore>>,
    payload: Result<Json<CreateBooking>, JsonRejection>,
) -> Result<(StatusCode, Json<BookingCreated>), AppError> {
    let Json(request) = payload?;
    let booking = store.book_room(request).await?;

    Ok((
        StatusCode::CREATED,
        Json(BookingCreated {
            message: "Room booked successfully",
            booking,
        }),
    ))
}

async fn list_rooms(State(store): State<Arc<BookingStore>>) -> Json<Vec<RoomView>> {
    Json(store.list_rooms().await)
}

async fn list_customers(State(store): State<Arc<BookingStore>>) -> Json<Vec<CustomerBookingView>> {
    Json(store.list_customer_bookings().await)
}

async fn customer_bookings(
    State(store): State<Arc<BookingStore>>,
    Path(name): Path<String>,
) -> Result<Json<CustomerHistory>, AppError> {
    Ok(Json(store.customer_history(&name).await?))
}
