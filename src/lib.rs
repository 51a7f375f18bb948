//! Hall booking service
//!
//! Rooms and bookings are kept in memory for the lifetime of the process.
//! The [`run`] entrypoint wires the booking module into the shared HTTP
//! server and drives module lifecycle around it.

pub mod modules;

use anyhow::Context;
use hall_kernel::{settings::Settings, InitCtx, ModuleRegistry};

pub use modules::booking::{store::BookingStore, BookingModule};

/// Build a registry holding every application module.
pub fn build_registry() -> anyhow::Result<ModuleRegistry> {
    let mut registry = ModuleRegistry::new();
    modules::register_all(&mut registry)?;
    Ok(registry)
}

/// Initialize modules, serve HTTP until shutdown, then stop modules.
pub async fn run(settings: Settings) -> anyhow::Result<()> {
    let registry = build_registry()?;
    let ctx = InitCtx {
        settings: &settings,
    };

    registry.init_all(&ctx).await?;
    registry.start_all(&ctx).await?;

    let served = hall_http::start_server(&registry, &settings)
        .await
        .with_context(|| "HTTP server terminated with an error");

    registry.stop_all().await?;
    served
}
