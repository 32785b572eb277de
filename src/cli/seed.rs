//! Seeding the in-memory store from a JSON file
//!
//! The file holds an array of drafts. Each draft goes through the same
//! validation as the form; rejected drafts are reported and skipped. The file
//! is only ever read.

use std::path::Path;

use tracing::{info, warn};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{CategoryRegistry, ExpenseDraft};
use crate::services::{validate_expense, ExpenseStore, ValidationErrors};

/// Read a JSON array of expense drafts
pub fn load_drafts(path: &Path) -> ExpenseResult<Vec<ExpenseDraft>> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        ExpenseError::Io(format!("Failed to read {}: {}", path.display(), e))
    })?;

    serde_json::from_str(&contents).map_err(|e| {
        ExpenseError::Json(format!("Failed to parse {}: {}", path.display(), e))
    })
}

/// Outcome of seeding a store
#[derive(Debug, Default)]
pub struct SeedReport {
    /// Number of drafts appended to the store
    pub added: usize,

    /// Rejected drafts by 1-based position in the file
    pub skipped: Vec<(usize, ValidationErrors)>,
}

impl SeedReport {
    /// `Skipping entry N: ...` lines for each rejected draft
    pub fn skipped_lines(&self) -> Vec<String> {
        self.skipped
            .iter()
            .map(|(entry, errors)| format!("Skipping entry {}: {}", entry, errors))
            .collect()
    }
}

/// Validate each draft and append the valid ones, in file order
pub fn seed_store(
    store: &mut ExpenseStore,
    drafts: &[ExpenseDraft],
    registry: &CategoryRegistry,
) -> SeedReport {
    let mut report = SeedReport::default();

    for (index, draft) in drafts.iter().enumerate() {
        match validate_expense(draft, registry) {
            Ok(new) => {
                store.append(new);
                report.added += 1;
            }
            Err(errors) => {
                warn!(entry = index + 1, %errors, "draft rejected");
                report.skipped.push((index + 1, errors));
            }
        }
    }

    info!(
        added = report.added,
        skipped = report.skipped.len(),
        "store seeded"
    );
    report
}

/// Build the store a session starts with, seeded from `from` when given
pub fn session_store(
    from: Option<&Path>,
    registry: &CategoryRegistry,
) -> ExpenseResult<(ExpenseStore, SeedReport)> {
    let mut store = ExpenseStore::new();
    let report = match from {
        Some(path) => seed_store(&mut store, &load_drafts(path)?, registry),
        None => SeedReport::default(),
    };
    Ok((store, report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::Field;
    use tempfile::TempDir;

    #[test]
    fn test_load_drafts_accepts_numbers_and_strings() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        std::fs::write(
            &path,
            r#"[
                {"description": "Milk", "amount": 10, "category": "Groceries"},
                {"description": "Power", "amount": "20.5", "category": "Utilities"},
                {"description": "Nothing"}
            ]"#,
        )
        .unwrap();

        let drafts = load_drafts(&path).unwrap();
        assert_eq!(drafts.len(), 3);
        assert_eq!(drafts[0].amount, "10");
        assert_eq!(drafts[1].amount, "20.5");
        assert_eq!(drafts[2].amount, "");
        assert_eq!(drafts[2].category, "");
    }

    #[test]
    fn test_load_drafts_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = load_drafts(&temp_dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, ExpenseError::Io(_)));
    }

    #[test]
    fn test_load_drafts_bad_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = load_drafts(&path).unwrap_err();
        assert!(matches!(err, ExpenseError::Json(_)));
    }

    #[test]
    fn test_session_store_without_file_is_empty() {
        let (store, report) = session_store(None, &CategoryRegistry::default()).unwrap();
        assert!(store.is_empty());
        assert_eq!(report.added, 0);
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn test_session_store_uses_given_registry() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        std::fs::write(
            &path,
            r#"[
                {"description": "Train ticket", "amount": 12, "category": "Travel"},
                {"description": "Milk", "amount": 10, "category": "Groceries"}
            ]"#,
        )
        .unwrap();

        let registry = CategoryRegistry::new(["Travel", "Food"]).unwrap();
        let (store, report) = session_store(Some(&path), &registry).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.all()[0].category, "Travel");
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].0, 2);
    }

    #[test]
    fn test_seed_skips_invalid_entries() {
        let registry = CategoryRegistry::default();
        let drafts = vec![
            ExpenseDraft::new("Milk", "10", "Groceries"),
            ExpenseDraft::new("Ab", "10", "Groceries"),
            ExpenseDraft::new("Power", "20", "Utilities"),
        ];

        let mut store = ExpenseStore::new();
        let report = seed_store(&mut store, &drafts, &registry);

        assert_eq!(report.added, 2);
        assert_eq!(store.len(), 2);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].0, 2);
        assert!(report.skipped[0].1.get(Field::Description).is_some());
        assert_eq!(
            report.skipped_lines(),
            vec!["Skipping entry 2: description: Description should be atleast 3 characters"]
        );

        // Valid entries keep consecutive ids
        let ids: Vec<u64> = store.iter().map(|e| e.id.value()).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}
