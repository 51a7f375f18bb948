pub mod models;
pub mod routes;
pub mod schedule;
pub mod store;

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use hall_kernel::{InitCtx, Module};
use serde_json::json;

use store::BookingStore;

/// Room and booking endpoints, served from the root of the API.
pub struct BookingModule {
    store: Arc<BookingStore>,
}

impl BookingModule {
    pub fn new(store: Arc<BookingStore>) -> Self {
        Self { store }
    }
}

impl Default for BookingModule {
    fn default() -> Self {
        Self::new(Arc::new(BookingStore::new()))
    }
}

#[async_trait]
impl Module for BookingModule {
    fn name(&self) -> &'static str {
        "booking"
    }

    fn base_path(&self) -> String {
        String::new()
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            "booking module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        routes::router(self.store.clone())
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        Some(openapi_fragment())
    }

    async fn stop(&self) -> anyhow::Result<()> {
        let rooms = self.store.room_count().await;
        let bookings = self.store.booking_count().await;
        tracing::info!(
            module = self.name(),
            rooms,
            bookings,
            "booking module stopped; in-memory state discarded"
        );
        Ok(())
    }
}

fn error_response(description: &str) -> serde_json::Value {
    json!({
        "description": description,
        "content": {
            "application/json": {
                "schema": { "$ref": "#/components/schemas/ErrorResponse" }
            }
        }
    })
}

fn json_response(description: &str, schema: serde_json::Value) -> serde_json::Value {
    json!({
        "description": description,
        "content": { "application/json": { "schema": schema } }
    })
}

fn schema_ref(name: &str) -> serde_json::Value {
    json!({ "$ref": format!("#/components/schemas/{}", name) })
}

fn array_of(name: &str) -> serde_json::Value {
    json!({ "type": "array", "items": schema_ref(name) })
}

fn request_body(name: &str) -> serde_json::Value {
    json!({
        "required": true,
        "content": { "application/json": { "schema": schema_ref(name) } }
    })
}

fn openapi_fragment() -> serde_json::Value {
    json!({
        "paths": openapi_paths(),
        "components": { "schemas": openapi_schemas() }
    })
}

fn openapi_paths() -> serde_json::Value {
    json!({
        "/": {
            "get": {
                "summary": "Welcome message",
                "tags": ["Booking"],
                "responses": {
                    "200": {
                        "description": "OK",
                        "content": { "text/plain": { "schema": { "type": "string" } } }
                    }
                }
            }
        },
        "/rooms": {
            "post": {
                "summary": "Create a room",
                "tags": ["Rooms"],
                "requestBody": request_body("CreateRoom"),
                "responses": {
                    "201": json_response("Room created", schema_ref("RoomCreated")),
                    "422": error_response("Malformed request body")
                }
            },
            "get": {
                "summary": "List rooms with their bookings",
                "tags": ["Rooms"],
                "responses": {
                    "200": json_response("Rooms in creation order", array_of("RoomView"))
                }
            }
        },
        "/book": {
            "post": {
                "summary": "Book a room",
                "tags": ["Bookings"],
                "requestBody": request_body("CreateBooking"),
                "responses": {
                    "201": json_response("Room booked", schema_ref("BookingCreated")),
                    "400": error_response("Room is already booked during this time"),
                    "404": error_response("Room not found"),
                    "422": error_response("Malformed request body or empty time range")
                }
            }
        },
        "/customers": {
            "get": {
                "summary": "List every booking by customer",
                "tags": ["Customers"],
                "responses": {
                    "200": json_response("All bookings", array_of("CustomerBooking"))
                }
            }
        },
        "/customers/{name}/bookings": {
            "get": {
                "summary": "Booking history of one customer",
                "tags": ["Customers"],
                "parameters": [{
                    "name": "name",
                    "in": "path",
                    "required": true,
                    "schema": { "type": "string" }
                }],
                "responses": {
                    "200": json_response("Customer history", schema_ref("CustomerHistory")),
                    "404": error_response("No bookings found for this customer")
                }
            }
        }
    })
}

fn openapi_schemas() -> serde_json::Value {
    let date = json!({ "type": "string", "format": "date", "example": "2024-01-01" });
    let clock = json!({
        "type": "string",
        "pattern": "^([01][0-9]|2[0-3]):[0-5][0-9]$|^24:00$",
        "example": "09:00"
    });

    json!({
        "CreateRoom": {
            "type": "object",
            "properties": {
                "numberOfSeats": { "type": "integer", "minimum": 0 },
                "amenities": { "type": "array", "items": { "type": "string" } },
                "pricePerHour": { "type": "number" }
            },
            "required": ["numberOfSeats", "pricePerHour"]
        },
        "Room": {
            "type": "object",
            "properties": {
                "roomId": { "type": "integer" },
                "numberOfSeats": { "type": "integer" },
                "amenities": { "type": "array", "items": { "type": "string" } },
                "pricePerHour": { "type": "number" },
                "bookings": array_of("Booking")
            },
            "required": ["roomId", "numberOfSeats", "amenities", "pricePerHour", "bookings"]
        },
        "RoomCreated": {
            "type": "object",
            "properties": {
                "message": { "type": "string" },
                "room": schema_ref("Room")
            },
            "required": ["message", "room"]
        },
        "CreateBooking": {
            "type": "object",
            "properties": {
                "customerName": { "type": "string" },
                "date": date,
                "startTime": clock,
                "endTime": clock,
                "roomId": { "type": "integer" }
            },
            "required": ["customerName", "date", "startTime", "endTime", "roomId"]
        },
        "Booking": {
            "type": "object",
            "properties": {
                "bookingId": { "type": "integer" },
                "customerName": { "type": "string" },
                "date": date,
                "startTime": clock,
                "endTime": clock,
                "roomId": { "type": "integer" }
            },
            "required": ["bookingId", "customerName", "date", "startTime", "endTime", "roomId"]
        },
        "BookingCreated": {
            "type": "object",
            "properties": {
                "message": { "type": "string" },
                "booking": schema_ref("Booking")
            },
            "required": ["message", "booking"]
        },
        "RoomView": {
            "type": "object",
            "properties": {
                "roomName": { "type": "string", "example": "Room 1" },
                "bookedStatus": { "type": "string", "enum": ["Available", "Booked"] },
                "bookings": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "customerName": { "type": "string" },
                            "date": date,
                            "startTime": clock,
                            "endTime": clock
                        }
                    }
                }
            },
            "required": ["roomName", "bookedStatus", "bookings"]
        },
        "CustomerBooking": {
            "type": "object",
            "properties": {
                "customerName": { "type": "string" },
                "roomName": { "type": "string" },
                "date": date,
                "startTime": clock,
                "endTime": clock
            },
            "required": ["customerName", "roomName", "date", "startTime", "endTime"]
        },
        "CustomerHistory": {
            "type": "object",
            "properties": {
                "customerName": { "type": "string" },
                "totalBookings": { "type": "integer" },
                "bookings": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "roomName": { "type": "string" },
                            "date": date,
                            "startTime": clock,
                            "endTime": clock,
                            "bookingId": { "type": "integer" },
                            "bookingDate": date,
                            "bookingStatus": { "type": "string", "enum": ["Confirmed"] }
                        }
                    }
                }
            },
            "required": ["customerName", "totalBookings", "bookings"]
        }
    })
}

/// Create a booking module backed by a fresh, empty store
pub fn create_module() -> Arc<dyn Module> {
    Arc::new(BookingModule::default())
}
