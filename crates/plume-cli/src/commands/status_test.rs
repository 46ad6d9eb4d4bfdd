use super::*;
use chrono::TimeZone;

fn entry(id: i32, filename: &str) -> LedgerEntry {
    LedgerEntry {
        id,
        filename: filename.to_string(),
        executed_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
    }
}

#[test]
fn joins_ledger_rows_in_file_order() {
    let names = vec![
        "001_auth_schema.sql".to_string(),
        "002_add_tokens.sql".to_string(),
        "003_add_sessions.sql".to_string(),
    ];
    let entries = vec![entry(1, "001_auth_schema.sql"), entry(2, "002_add_tokens.sql")];

    let statuses = unit_statuses(&names, entries);

    assert_eq!(statuses.len(), 3);
    assert_eq!(statuses[0].filename, "001_auth_schema.sql");
    assert_eq!(statuses[0].status, "applied");
    assert!(statuses[0].executed_at.is_some());
    assert_eq!(statuses[2].filename, "003_add_sessions.sql");
    assert_eq!(statuses[2].status, "pending");
    assert!(statuses[2].executed_at.is_none());
}

#[test]
fn ledger_rows_without_files_are_not_reported() {
    let names = vec!["002_add_tokens.sql".to_string()];
    let entries = vec![entry(1, "001_renamed_away.sql"), entry(2, "002_add_tokens.sql")];

    let statuses = unit_statuses(&names, entries);

    assert_eq!(statuses.len(), 1);
    assert_eq!(statuses[0].filename, "002_add_tokens.sql");
}

#[test]
fn pending_units_serialize_without_a_timestamp() {
    let names = vec!["001_auth_schema.sql".to_string()];
    let statuses = unit_statuses(&names, Vec::new());

    let json = serde_json::to_string(&statuses).unwrap();
    assert!(json.contains("\"status\":\"pending\""));
    assert!(!json.contains("executed_at"));
}
