//! Global Tokio runtime for async HTTP operations
//!
//! egui renders on the main thread and never awaits, while reqwest needs a tokio
//! runtime. Work is spawned here and results flow back through facade state or the
//! app's event channel; the UI picks them up on the next frame.
//!
//! ```rust,ignore
//! use crate::utils::runtime;
//!
//! runtime::spawn(async move {
//!     let _ = facade.load().await;
//! });
//! ```

use std::future::Future;

use once_cell::sync::Lazy;
use tokio::runtime::{Handle, Runtime};
use tokio::task::JoinHandle;

pub static TOKIO_RT: Lazy<Runtime> = Lazy::new(|| {
    Runtime::new().expect("Failed to create Tokio runtime for async HTTP operations")
});

/// Spawn onto the current runtime when called from inside one (tests), otherwise
/// onto the global runtime.
pub fn spawn<F>(future: F) -> JoinHandle<F::Output>
where
    F: Future + Send + 'static,
    F::Output: Send + 'static,
{
    match Handle::try_current() {
        Ok(handle) => handle.spawn(future),
        Err(_) => TOKIO_RT.spawn(future),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_outside_runtime_uses_global() {
        let handle = spawn(async { 21 * 2 });
        assert_eq!(TOKIO_RT.block_on(handle).unwrap(), 42);
    }

    #[tokio::test]
    async fn test_spawn_inside_runtime() {
        assert_eq!(spawn(async { "ok" }).await.unwrap(), "ok");
    }
}
