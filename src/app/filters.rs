//! Search filtering

use super::board::PlanBoard;

impl PlanBoard {
    /// Recompute the visible plan ids. Call after the search text or the plan list changes.
    pub fn apply_filters(&mut self) {
        self.filtered_ids = self.planner.filtered_ids(&self.search_query);
    }
}
