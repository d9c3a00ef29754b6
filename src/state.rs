// View-model state for the equipment board.
//
// Search term, selected category and the fetched list live here instead of
// in scattered UI globals. Updates are pure: each consumes the state and
// returns the next one, so the rendering layer can diff snapshots.
use crate::categories;
use crate::filter;
use crate::model::Equipment;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct ViewState {
    equipment: Vec<Equipment>,
    loading: bool,
    search_term: String,
    selected_category: Option<String>,
    fetched_at: Option<DateTime<Utc>>,
}

impl ViewState {
    /// Fresh state for a newly mounted view: loading, nothing fetched yet.
    pub fn new() -> Self {
        Self {
            equipment: Vec::new(),
            loading: true,
            search_term: String::new(),
            selected_category: None,
            fetched_at: None,
        }
    }

    pub fn set_search(mut self, term: &str) -> Self {
        self.search_term = term.to_string();
        self
    }

    pub fn select_category(mut self, id: &str) -> Self {
        self.selected_category = Some(id.to_string());
        self
    }

    pub fn clear_category(mut self) -> Self {
        self.selected_category = None;
        self
    }

    /// Transition out of loading with whatever the fetch produced.
    /// A failed fetch hands in an empty list; the state does not care.
    pub fn receive_records(mut self, records: Vec<Equipment>) -> Self {
        self.equipment = records;
        self.loading = false;
        self.fetched_at = Some(Utc::now());
        self
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn equipment(&self) -> &[Equipment] {
        &self.equipment
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn selected_category(&self) -> Option<&str> {
        self.selected_category.as_deref()
    }

    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.fetched_at
    }

    /// Records passing the current search and category selection, in
    /// fetch order. Recomputed on every call; the list is small.
    pub fn visible(&self) -> Vec<&Equipment> {
        filter::filter_equipment(
            &self.equipment,
            &self.search_term,
            self.selected_category.as_deref(),
        )
    }

    pub fn category_count(&self, category_id: &str) -> usize {
        categories::count_for_category(&self.equipment, category_id)
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}
