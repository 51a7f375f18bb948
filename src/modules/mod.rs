pub mod booking;

use hall_kernel::ModuleRegistry;

/// Register all application modules with the registry
pub fn register_all(registry: &mut ModuleRegistry) -> anyhow::Result<()> {
    registry.register(booking::create_module())?;
    Ok(())
}
