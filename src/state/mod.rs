/// Wall-clock sources used to stamp player changes.
pub mod clock;

use std::sync::Arc;

use crate::dao::player_store::PlayerStore;

pub use self::clock::{Clock, FixedClock, SystemClock};

/// Reference-counted handle to [`AppState`] passed to every handler.
pub type SharedState = Arc<AppState>;

/// Central application state holding the player store and runtime collaborators.
pub struct AppState {
    player_store: Arc<dyn PlayerStore>,
    clock: Arc<dyn Clock>,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be cloned cheaply.
    pub fn new(player_store: Arc<dyn PlayerStore>, clock: Arc<dyn Clock>) -> SharedState {
        Arc::new(Self {
            player_store,
            clock,
        })
    }

    /// Handle to the installed player store.
    pub fn player_store(&self) -> Arc<dyn PlayerStore> {
        Arc::clone(&self.player_store)
    }

    /// Source of wall-clock time for creation and update stamps.
    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }
}
