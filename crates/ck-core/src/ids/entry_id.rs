use super::id_macro::impl_id;

/// Stable identity of a history entry. Survives edits and reordering.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntryId(String);

impl_id!(EntryId);
