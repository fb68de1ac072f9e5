use ck_core::{EditOutcome, EntryId};
use tracing::{info, warn};

use crate::history::SharedHistory;

pub struct EditTextEntry {
    history: SharedHistory,
}

impl EditTextEntry {
    pub fn new(history: SharedHistory) -> Self {
        Self { history }
    }

    #[tracing::instrument(name = "usecase.edit_text_entry.execute", skip(self, new_text), fields(entry_id = %entry_id))]
    pub async fn execute(&self, entry_id: &EntryId, new_text: String) -> EditOutcome {
        let outcome = self.history.write().await.edit_text(entry_id, new_text);
        match outcome {
            EditOutcome::Applied => info!("entry text updated"),
            other => warn!(outcome = ?other, "edit rejected"),
        }
        outcome
    }
}
