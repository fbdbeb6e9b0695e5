//! Drop catalog view-model
//!
//! Loads the full drop list once per view activation and exposes a pure
//! filter over the cached list by status tab. The detail view loads one drop
//! with its stocks. A fetch failure surfaces a single error toast and leaves
//! the previous (commonly empty) state; there is no retry loop.

use std::sync::Arc;

use tracing::debug;

use fors_client::ClientResult;
use shared::models::{DropEvent, DropStatus};

use crate::context::AppContext;
use crate::util::parse_id;

/// Status tab over the cached drop list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropTab {
    #[default]
    All,
    Live,
    Scheduled,
    Ended,
}

impl DropTab {
    fn matches(self, status: DropStatus) -> bool {
        match self {
            DropTab::All => true,
            DropTab::Live => status == DropStatus::Live,
            DropTab::Scheduled => status == DropStatus::Scheduled,
            DropTab::Ended => status == DropStatus::Ended,
        }
    }
}

/// Catalog view-model
pub struct Catalog {
    ctx: Arc<AppContext>,
    drops: Vec<DropEvent>,
    detail: Option<DropEvent>,
    epoch: u64,
}

impl Catalog {
    pub fn new(ctx: Arc<AppContext>) -> Self {
        Self {
            ctx,
            drops: Vec::new(),
            detail: None,
            epoch: 0,
        }
    }

    /// Start a fresh load cycle; responses tagged with an older epoch are
    /// stale (the view was re-activated meanwhile) and must be discarded.
    pub fn begin_load(&mut self) -> u64 {
        self.epoch += 1;
        self.epoch
    }

    /// Apply a list response for the given epoch
    pub fn apply_list(&mut self, epoch: u64, result: ClientResult<Vec<DropEvent>>) {
        if epoch != self.epoch {
            debug!(epoch, current = self.epoch, "discarding stale drop list");
            return;
        }
        match result {
            Ok(drops) => self.drops = drops,
            Err(err) => {
                debug!(%err, "drop list fetch failed");
                self.ctx.notifier().error("Failed to load drops");
            }
        }
    }

    /// Fetch the drop list for the current activation
    pub async fn load(&mut self) {
        let epoch = self.begin_load();
        let result = self.ctx.api().list_drops().await;
        self.apply_list(epoch, result);
    }

    /// All cached drops, in server order
    pub fn drops(&self) -> &[DropEvent] {
        &self.drops
    }

    /// Pure, order-preserving filter by status tab
    pub fn filtered(&self, tab: DropTab) -> Vec<&DropEvent> {
        self.drops.iter().filter(|d| tab.matches(d.status)).collect()
    }

    /// Loaded detail drop, if any
    pub fn detail(&self) -> Option<&DropEvent> {
        self.detail.as_ref()
    }

    /// Load one drop by the raw id from the route. A non-numeric id is
    /// rejected locally before any request is made.
    pub async fn load_detail(&mut self, raw_id: &str) {
        let Some(id) = parse_id(raw_id) else {
            self.ctx.notifier().error("Invalid drop id");
            return;
        };

        let epoch = self.begin_load();
        let result = self.ctx.api().get_drop(id).await;
        if epoch != self.epoch {
            debug!(epoch, "discarding stale drop detail");
            return;
        }
        match result {
            Ok(drop) => self.detail = Some(drop),
            Err(err) => {
                debug!(%err, id, "drop detail fetch failed");
                self.ctx.notifier().error("Failed to load drop");
            }
        }
    }
}
