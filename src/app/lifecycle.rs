//! Application lifecycle - initialization.

use super::DragBoard;
use crate::board::BoardStore;
use crate::settings::Settings;
use tracing::info;

impl DragBoard {
    pub fn new(settings: Settings) -> Self {
        info!(
            width = settings.container_width,
            height = settings.container_height,
            "Board ready"
        );
        Self {
            store: BoardStore::with_thread_rng(),
            settings,
            container_bounds: None,
        }
    }
}
