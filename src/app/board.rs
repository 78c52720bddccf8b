//! Plans, the form draft and the search-filtered view, kept in step

use crate::planner::{PlanDraft, Planner};
use crate::types::PlanId;
use tracing::{debug, info};

#[derive(Debug, Default)]
pub struct PlanBoard {
    pub(crate) planner: Planner,
    pub(crate) draft: PlanDraft,
    pub(crate) search_query: String,
    pub(crate) filtered_ids: Vec<PlanId>,
}

impl PlanBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit the form. Incomplete drafts are ignored.
    pub fn submit_plan(&mut self) -> Option<PlanId> {
        match self.planner.add_plan(&mut self.draft) {
            Ok(id) => {
                info!(%id, total = self.planner.len(), "Plan added");
                self.apply_filters();
                Some(id)
            }
            Err(e) => {
                debug!(error = %e, "Plan not added");
                None
            }
        }
    }

    pub fn delete_plan(&mut self, id: PlanId) -> bool {
        if !self.planner.delete_plan(id) {
            return false;
        }
        info!(%id, total = self.planner.len(), "Plan deleted");
        self.apply_filters();
        true
    }

    pub fn clear_search(&mut self) {
        self.search_query.clear();
        self.apply_filters();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn fill_draft(board: &mut PlanBoard, destination: &str) {
        board.draft.destination = destination.to_string();
        board.draft.start_date = NaiveDate::from_ymd_opt(2025, 9, 1);
        board.draft.end_date = NaiveDate::from_ymd_opt(2025, 9, 8);
        board.draft.budget = "800".to_string();
    }

    #[test]
    fn submitted_plan_shows_up_in_view() {
        let mut board = PlanBoard::new();
        fill_draft(&mut board, "Madrid");

        let id = board.submit_plan().unwrap();

        assert_eq!(board.filtered_ids, vec![id]);
    }

    #[test]
    fn submit_respects_active_search() {
        let mut board = PlanBoard::new();
        board.search_query = "mad".to_string();

        fill_draft(&mut board, "Madrid");
        let madrid = board.submit_plan().unwrap();
        fill_draft(&mut board, "Porto");
        board.submit_plan().unwrap();

        assert_eq!(board.filtered_ids, vec![madrid]);
    }

    #[test]
    fn rejected_submit_leaves_view_alone() {
        let mut board = PlanBoard::new();
        fill_draft(&mut board, "Nice");
        board.draft.budget.clear();

        assert!(board.submit_plan().is_none());
        assert!(board.filtered_ids.is_empty());
        assert_eq!(board.draft.destination, "Nice");
    }

    #[test]
    fn deleted_plan_leaves_view() {
        let mut board = PlanBoard::new();
        fill_draft(&mut board, "Athens");
        let athens = board.submit_plan().unwrap();
        fill_draft(&mut board, "Sofia");
        let sofia = board.submit_plan().unwrap();

        assert!(board.delete_plan(athens));
        assert_eq!(board.filtered_ids, vec![sofia]);
        assert!(!board.delete_plan(athens));
    }

    #[test]
    fn clearing_search_shows_all_plans() {
        let mut board = PlanBoard::new();
        fill_draft(&mut board, "Tallinn");
        let tallinn = board.submit_plan().unwrap();
        fill_draft(&mut board, "Riga");
        let riga = board.submit_plan().unwrap();

        board.search_query = "riga".to_string();
        board.apply_filters();
        assert_eq!(board.filtered_ids, vec![riga]);

        board.clear_search();
        assert!(board.search_query.is_empty());
        assert_eq!(board.filtered_ids, vec![tallinn, riga]);
    }
}
