//! Plan bookkeeping: the add-plan draft and the in-memory plan list

use crate::types::*;
use chrono::NaiveDate;
use std::fmt;
use uuid::Uuid;

// =============================================================================
// ERRORS
// =============================================================================

/// Required form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Destination,
    StartDate,
    EndDate,
    Budget,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Destination => "destination",
            Field::StartDate => "start date",
            Field::EndDate => "end date",
            Field::Budget => "budget",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlanError {
    #[error("missing required field: {0}")]
    MissingField(Field),
}

// =============================================================================
// DRAFT
// =============================================================================

/// Contents of the "add plan" form
#[derive(Debug, Clone, Default)]
pub struct PlanDraft {
    pub destination: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub notes: String,
    pub budget: String,
    pub category: Category,
    pub priority: Priority,
    pub packing_input: String,
    pub packing_list: Vec<PackingItem>,
}

impl PlanDraft {
    /// Move the packing input onto the draft list. Blank input is ignored.
    pub fn add_packing_item(&mut self) -> bool {
        if self.packing_input.trim().is_empty() {
            return false;
        }
        let item = std::mem::take(&mut self.packing_input);
        self.packing_list.push(PackingItem::new(item));
        true
    }

    pub fn remove_packing_item(&mut self, id: ItemId) -> bool {
        let before = self.packing_list.len();
        self.packing_list.retain(|item| item.id != id);
        self.packing_list.len() != before
    }

    /// Clear the form after a submit. Packing text typed but not yet added is kept.
    pub fn reset(&mut self) {
        let packing_input = std::mem::take(&mut self.packing_input);
        *self = Self {
            packing_input,
            ..Self::default()
        };
    }

    /// Drop characters a number field would not accept
    pub fn sanitize_budget(&mut self) {
        self.budget
            .retain(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'));
    }

    /// Budget as a number. Text that does not parse counts as empty.
    pub fn parsed_budget(&self) -> Option<f64> {
        self.budget
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|b| b.is_finite())
    }

    fn validate(&self) -> Result<(NaiveDate, NaiveDate, f64), PlanError> {
        if self.destination.is_empty() {
            return Err(PlanError::MissingField(Field::Destination));
        }
        let start = self
            .start_date
            .ok_or(PlanError::MissingField(Field::StartDate))?;
        let end = self
            .end_date
            .ok_or(PlanError::MissingField(Field::EndDate))?;
        let budget = self
            .parsed_budget()
            .ok_or(PlanError::MissingField(Field::Budget))?;
        Ok((start, end, budget))
    }
}

// =============================================================================
// PLANNER
// =============================================================================

/// All plans for this session plus the currently expanded one
#[derive(Debug, Default)]
pub struct Planner {
    plans: Vec<TravelPlan>,
    selected: Option<PlanId>,
}

impl Planner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn get(&self, id: PlanId) -> Option<&TravelPlan> {
        self.plans.iter().find(|p| p.id == id)
    }

    pub fn is_selected(&self, id: PlanId) -> bool {
        self.selected == Some(id)
    }

    /// Turn the draft into a plan. On success the draft is reset; on error it is left untouched.
    pub fn add_plan(&mut self, draft: &mut PlanDraft) -> Result<PlanId, PlanError> {
        let (start_date, end_date, budget) = draft.validate()?;

        let id = Uuid::new_v4();
        self.plans.push(TravelPlan {
            id,
            destination: std::mem::take(&mut draft.destination),
            start_date,
            end_date,
            notes: std::mem::take(&mut draft.notes),
            budget,
            category: draft.category,
            priority: draft.priority,
            packing_list: std::mem::take(&mut draft.packing_list),
        });
        draft.reset();
        Ok(id)
    }

    pub fn delete_plan(&mut self, id: PlanId) -> bool {
        let before = self.plans.len();
        self.plans.retain(|p| p.id != id);
        if self.selected == Some(id) {
            self.selected = None;
        }
        self.plans.len() != before
    }

    pub fn toggle_packed(&mut self, plan_id: PlanId, item_id: ItemId) -> bool {
        let Some(item) = self
            .plans
            .iter_mut()
            .find(|p| p.id == plan_id)
            .and_then(|p| p.packing_list.iter_mut().find(|i| i.id == item_id))
        else {
            return false;
        };
        item.packed = !item.packed;
        true
    }

    /// Expand a plan, or collapse it if it is already expanded
    pub fn toggle_selected(&mut self, id: PlanId) {
        self.selected = if self.selected == Some(id) { None } else { Some(id) };
    }

    /// Plans whose destination contains `query`, ignoring case, in insertion order
    pub fn filtered<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a TravelPlan> + 'a {
        let query = query.to_lowercase();
        self.plans
            .iter()
            .filter(move |p| p.destination.to_lowercase().contains(&query))
    }

    pub fn filtered_ids(&self, query: &str) -> Vec<PlanId> {
        self.filtered(query).map(|p| p.id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn filled_draft(destination: &str) -> PlanDraft {
        PlanDraft {
            destination: destination.to_string(),
            start_date: Some(date(2025, 6, 1)),
            end_date: Some(date(2025, 6, 14)),
            budget: "2500".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn add_plan_with_all_fields_appends_and_resets_draft() {
        let mut planner = Planner::new();
        let mut draft = filled_draft("Lisbon");
        draft.notes = "window seat".to_string();
        draft.category = Category::Leisure;
        draft.priority = Priority::High;
        draft.packing_input = "Sunscreen".to_string();
        assert!(draft.add_packing_item());

        let id = planner.add_plan(&mut draft).unwrap();

        assert_eq!(planner.len(), 1);
        let plan = planner.get(id).unwrap();
        assert_eq!(plan.destination, "Lisbon");
        assert_eq!(plan.notes, "window seat");
        assert!((plan.budget - 2500.0).abs() < f64::EPSILON);
        assert_eq!(plan.category, Category::Leisure);
        assert_eq!(plan.priority, Priority::High);
        assert_eq!(plan.packing_list.len(), 1);
        assert_eq!(plan.packing_list[0].item, "Sunscreen");
        assert!(!plan.packing_list[0].packed);

        assert!(draft.destination.is_empty());
        assert!(draft.start_date.is_none());
        assert!(draft.end_date.is_none());
        assert!(draft.budget.is_empty());
        assert!(draft.notes.is_empty());
        assert!(draft.packing_list.is_empty());
        assert_eq!(draft.category, Category::Business);
        assert_eq!(draft.priority, Priority::Medium);
    }

    #[test]
    fn unadded_packing_text_survives_submit() {
        let mut planner = Planner::new();
        let mut draft = filled_draft("Dublin");
        draft.packing_input = "Umbrella".to_string();

        planner.add_plan(&mut draft).unwrap();

        assert_eq!(draft.packing_input, "Umbrella");
        assert!(draft.destination.is_empty());
        assert!(draft.packing_list.is_empty());
    }

    #[test]
    fn budget_accepts_exponent_notation() {
        let mut draft = filled_draft("Perth");
        draft.budget = "1e3 $".to_string();
        draft.sanitize_budget();
        assert_eq!(draft.budget, "1e3");
        assert_eq!(draft.parsed_budget(), Some(1000.0));

        draft.budget = "2.5E+2abc".to_string();
        draft.sanitize_budget();
        assert_eq!(draft.budget, "2.5E+2");
        assert_eq!(draft.parsed_budget(), Some(250.0));
    }

    #[test]
    fn add_plan_with_empty_destination_adds_nothing() {
        let mut planner = Planner::new();
        let mut draft = filled_draft("");
        let err = planner.add_plan(&mut draft).unwrap_err();
        assert_eq!(err, PlanError::MissingField(Field::Destination));
        assert_eq!(planner.len(), 0);
        assert_eq!(draft.budget, "2500");
    }

    #[test]
    fn add_plan_requires_dates_and_budget() {
        let mut planner = Planner::new();

        let mut draft = filled_draft("Oslo");
        draft.start_date = None;
        assert_eq!(
            planner.add_plan(&mut draft),
            Err(PlanError::MissingField(Field::StartDate))
        );

        let mut draft = filled_draft("Oslo");
        draft.end_date = None;
        assert_eq!(
            planner.add_plan(&mut draft),
            Err(PlanError::MissingField(Field::EndDate))
        );

        let mut draft = filled_draft("Oslo");
        draft.budget.clear();
        assert_eq!(
            planner.add_plan(&mut draft),
            Err(PlanError::MissingField(Field::Budget))
        );
        assert_eq!(planner.len(), 0);
    }

    #[test]
    fn unparseable_budget_counts_as_missing() {
        let mut draft = filled_draft("Rome");
        draft.budget = "lots".to_string();
        assert_eq!(draft.parsed_budget(), None);
        assert!(Planner::new().add_plan(&mut draft).is_err());

        draft.budget = " 1200.50 ".to_string();
        assert_eq!(draft.parsed_budget(), Some(1200.5));
    }

    #[test]
    fn notes_are_optional() {
        let mut planner = Planner::new();
        let mut draft = filled_draft("Kyoto");
        let id = planner.add_plan(&mut draft).unwrap();
        assert!(planner.get(id).unwrap().notes.is_empty());
    }

    #[test]
    fn blank_packing_input_is_ignored() {
        let mut draft = PlanDraft::default();
        draft.packing_input = "   ".to_string();
        assert!(!draft.add_packing_item());
        assert!(draft.packing_list.is_empty());
        assert_eq!(draft.packing_input, "   ");
    }

    #[test]
    fn packing_item_keeps_untrimmed_text_and_clears_input() {
        let mut draft = PlanDraft::default();
        draft.packing_input = " Passport ".to_string();
        assert!(draft.add_packing_item());
        assert_eq!(draft.packing_list[0].item, " Passport ");
        assert!(draft.packing_input.is_empty());
    }

    #[test]
    fn remove_packing_item_by_id() {
        let mut draft = PlanDraft::default();
        for item in ["Charger", "Socks"] {
            draft.packing_input = item.to_string();
            draft.add_packing_item();
        }
        let charger = draft.packing_list[0].id;

        assert!(draft.remove_packing_item(charger));
        assert_eq!(draft.packing_list.len(), 1);
        assert_eq!(draft.packing_list[0].item, "Socks");
        assert!(!draft.remove_packing_item(charger));
    }

    #[test]
    fn search_is_case_insensitive_on_destination() {
        let mut planner = Planner::new();
        for dest in ["New York", "Newcastle", "Paris"] {
            planner.add_plan(&mut filled_draft(dest)).unwrap();
        }
        let mut notes_only = filled_draft("Berlin");
        notes_only.notes = "new year trip".to_string();
        planner.add_plan(&mut notes_only).unwrap();

        let names: Vec<&str> = planner
            .filtered("NEW")
            .map(|p| p.destination.as_str())
            .collect();
        assert_eq!(names, vec!["New York", "Newcastle"]);

        assert_eq!(planner.filtered_ids("").len(), 4);
        assert!(planner.filtered_ids("tokyo").is_empty());
    }

    #[test]
    fn deleting_expanded_plan_clears_selection() {
        let mut planner = Planner::new();
        let a = planner.add_plan(&mut filled_draft("Cairo")).unwrap();
        let b = planner.add_plan(&mut filled_draft("Lima")).unwrap();

        planner.toggle_selected(a);
        assert!(planner.delete_plan(b));
        assert!(planner.is_selected(a));

        assert!(planner.delete_plan(a));
        assert!(!planner.is_selected(a));
        assert_eq!(planner.len(), 0);
        assert!(!planner.delete_plan(a));
    }

    #[test]
    fn toggle_selected_expands_and_collapses() {
        let mut planner = Planner::new();
        let a = planner.add_plan(&mut filled_draft("Hanoi")).unwrap();
        let b = planner.add_plan(&mut filled_draft("Seoul")).unwrap();

        planner.toggle_selected(a);
        assert!(planner.is_selected(a));
        planner.toggle_selected(b);
        assert!(planner.is_selected(b));
        assert!(!planner.is_selected(a));
        planner.toggle_selected(b);
        assert!(!planner.is_selected(a));
        assert!(!planner.is_selected(b));
    }

    #[test]
    fn toggle_packed_flips_only_the_target_item() {
        let mut planner = Planner::new();
        let mut draft = filled_draft("Reykjavik");
        for item in ["Parka", "Boots"] {
            draft.packing_input = item.to_string();
            draft.add_packing_item();
        }
        let plan_id = planner.add_plan(&mut draft).unwrap();
        let other_id = planner.add_plan(&mut filled_draft("Quito")).unwrap();
        let parka = planner.get(plan_id).unwrap().packing_list[0].id;

        assert!(planner.toggle_packed(plan_id, parka));
        let plan = planner.get(plan_id).unwrap();
        assert!(plan.packing_list[0].packed);
        assert!(!plan.packing_list[1].packed);

        assert!(planner.toggle_packed(plan_id, parka));
        assert!(!planner.get(plan_id).unwrap().packing_list[0].packed);

        assert!(!planner.toggle_packed(other_id, parka));
        assert!(!planner.toggle_packed(Uuid::new_v4(), parka));
    }
}
