//! Integration tests for the OtpVault vault store.

use std::fs;

use otpvault::errors::OtpVaultError;
use otpvault::vault::VaultStore;
use tempfile::TempDir;

const PASSWORD: &str = "test-password";

/// Helper: create a temporary vault file path inside a fresh temp dir.
fn vault_path() -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("vault.json");
    (dir, path)
}

/// Helper: a vault with the password set and persisted.
fn initialized_vault() -> (TempDir, std::path::PathBuf, VaultStore) {
    let (dir, path) = vault_path();
    let mut store = VaultStore::load(&path).expect("load fresh vault");
    store.setup_password(PASSWORD).expect("setup password");
    (dir, path, store)
}

// ---------------------------------------------------------------------------
// Fresh vault and first-run setup
// ---------------------------------------------------------------------------

#[test]
fn missing_file_loads_as_empty_vault() {
    let (_dir, path) = vault_path();

    let store = VaultStore::load(&path).expect("load missing file");
    assert!(!store.is_initialized());
    assert_eq!(store.secret_count(), 0);
    // Loading must not create the file.
    assert!(!path.exists());
}

#[test]
fn setup_password_persists_and_gates() {
    let (_dir, path, _store) = initialized_vault();

    let reopened = VaultStore::load(&path).expect("reopen vault");
    assert!(reopened.is_initialized());
    assert!(reopened.verify_gate(PASSWORD).is_ok());
    assert!(matches!(
        reopened.verify_gate("wrong-password"),
        Err(OtpVaultError::AuthFailure)
    ));
}

#[test]
fn setup_twice_fails() {
    let (_dir, _path, mut store) = initialized_vault();
    assert!(store.setup_password("another-password").is_err());
}

// ---------------------------------------------------------------------------
// Create and re-open round-trip
// ---------------------------------------------------------------------------

#[test]
fn create_secret_and_reopen() {
    let (_dir, path, mut store) = initialized_vault();

    store
        .create_secret("github", "GEZDGNBVGY3TQOJQ")
        .expect("create secret");

    let reopened = VaultStore::load(&path).expect("reopen vault");
    assert_eq!(reopened.secret_count(), 1);
    assert_eq!(reopened.get_secret("github").unwrap(), "GEZDGNBVGY3TQOJQ");
}

#[test]
fn create_duplicate_name_fails() {
    let (_dir, _path, mut store) = initialized_vault();

    store.create_secret("github", "GEZDGNBVGY3TQOJQ").unwrap();
    let result = store.create_secret("github", "MFRGGZDF");
    assert!(matches!(result, Err(OtpVaultError::DuplicateName(_))));

    // The original value survives.
    assert_eq!(store.get_secret("github").unwrap(), "GEZDGNBVGY3TQOJQ");
}

#[test]
fn create_invalid_base32_is_a_noop() {
    let (_dir, path, mut store) = initialized_vault();
    store.create_secret("keep", "MFRGGZDF").unwrap();
    let before = fs::read(&path).unwrap();

    let result = store.create_secret("bad", "not base32!");
    assert!(matches!(result, Err(OtpVaultError::InvalidSecret)));

    // Neither the in-memory list nor the file changed.
    assert_eq!(store.list_secrets(), vec!["keep".to_string()]);
    assert_eq!(fs::read(&path).unwrap(), before);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[test]
fn update_rename_and_value_is_one_write() {
    let (_dir, path, mut store) = initialized_vault();
    store.create_secret("old", "GEZDGNBVGY3TQOJQ").unwrap();

    store
        .update_secret("old", Some("new"), Some("MFRGGZDF"))
        .expect("update");

    assert!(store.get_secret("old").is_err());
    assert_eq!(store.get_secret("new").unwrap(), "MFRGGZDF");

    // The durable state reflects both changes together.
    let reopened = VaultStore::load(&path).unwrap();
    assert!(reopened.get_secret("old").is_err());
    assert_eq!(reopened.get_secret("new").unwrap(), "MFRGGZDF");
}

#[test]
fn update_rename_only_keeps_value() {
    let (_dir, _path, mut store) = initialized_vault();
    store.create_secret("old", "GEZDGNBVGY3TQOJQ").unwrap();

    store.update_secret("old", Some("new"), None).unwrap();
    assert_eq!(store.get_secret("new").unwrap(), "GEZDGNBVGY3TQOJQ");
}

#[test]
fn update_with_no_changes_fails() {
    let (_dir, _path, mut store) = initialized_vault();
    store.create_secret("name", "MFRGGZDF").unwrap();

    let result = store.update_secret("name", None, None);
    assert!(matches!(result, Err(OtpVaultError::NothingToUpdate)));
}

#[test]
fn update_missing_secret_fails() {
    let (_dir, _path, mut store) = initialized_vault();
    let result = store.update_secret("ghost", Some("new"), None);
    assert!(matches!(result, Err(OtpVaultError::SecretNotFound(_))));
}

#[test]
fn update_invalid_value_mutates_nothing() {
    let (_dir, path, mut store) = initialized_vault();
    store.create_secret("name", "GEZDGNBVGY3TQOJQ").unwrap();
    let before = fs::read(&path).unwrap();

    // Even though the rename alone would be fine, the invalid value
    // aborts the whole operation.
    let result = store.update_secret("name", Some("other"), Some("lowercase"));
    assert!(matches!(result, Err(OtpVaultError::InvalidSecret)));

    assert_eq!(store.get_secret("name").unwrap(), "GEZDGNBVGY3TQOJQ");
    assert!(store.get_secret("other").is_err());
    assert_eq!(fs::read(&path).unwrap(), before);
}

#[test]
fn rename_onto_existing_name_fails() {
    let (_dir, _path, mut store) = initialized_vault();
    store.create_secret("a", "MFRGGZDF").unwrap();
    store.create_secret("b", "GEZDGNBVGY3TQOJQ").unwrap();

    let result = store.update_secret("a", Some("b"), None);
    assert!(matches!(result, Err(OtpVaultError::DuplicateName(_))));
    assert_eq!(store.secret_count(), 2);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[test]
fn delete_secret_removes_it() {
    let (_dir, path, mut store) = initialized_vault();
    store.create_secret("to-delete", "MFRGGZDF").unwrap();
    store.create_secret("to-keep", "GEZDGNBVGY3TQOJQ").unwrap();

    store.delete_secret("to-delete").unwrap();
    assert_eq!(store.secret_count(), 1);
    assert!(store.get_secret("to-delete").is_err());

    let reopened = VaultStore::load(&path).unwrap();
    assert_eq!(reopened.list_secrets(), vec!["to-keep".to_string()]);
}

#[test]
fn delete_missing_secret_does_not_rewrite() {
    let (_dir, path, mut store) = initialized_vault();
    store.create_secret("name", "MFRGGZDF").unwrap();
    let before = fs::read(&path).unwrap();

    let result = store.delete_secret("ghost");
    assert!(matches!(result, Err(OtpVaultError::SecretNotFound(_))));
    assert_eq!(fs::read(&path).unwrap(), before);
}

// ---------------------------------------------------------------------------
// Persistence round-trip
// ---------------------------------------------------------------------------

#[test]
fn save_load_save_is_byte_idempotent() {
    let (_dir, path, mut store) = initialized_vault();
    store.create_secret("zebra", "MFRGGZDF").unwrap();
    store.create_secret("alpha", "GEZDGNBVGY3TQOJQ").unwrap();
    let first = fs::read(&path).unwrap();

    let reopened = VaultStore::load(&path).unwrap();
    reopened.save().unwrap();
    let second = fs::read(&path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn list_is_sorted() {
    let (_dir, _path, mut store) = initialized_vault();
    store.create_secret("zebra", "MFRGGZDF").unwrap();
    store.create_secret("alpha", "MFRGGZDF").unwrap();
    store.create_secret("middle", "MFRGGZDF").unwrap();

    assert_eq!(
        store.list_secrets(),
        vec![
            "alpha".to_string(),
            "middle".to_string(),
            "zebra".to_string()
        ]
    );
}

// ---------------------------------------------------------------------------
// Corrupt file handling
// ---------------------------------------------------------------------------

#[test]
fn corrupt_file_fails_loudly() {
    let (_dir, path) = vault_path();
    fs::write(&path, b"{ this is not json").unwrap();

    let result = VaultStore::load(&path);
    assert!(matches!(result, Err(OtpVaultError::CorruptVault(_))));
}

#[test]
fn non_json_garbage_is_corrupt_not_empty() {
    let (_dir, path) = vault_path();
    fs::write(&path, [0xff, 0xfe, 0x00, 0x01]).unwrap();

    // Must never be silently swallowed into an empty vault.
    assert!(VaultStore::load(&path).is_err());
}

// ---------------------------------------------------------------------------
// Password change
// ---------------------------------------------------------------------------

#[test]
fn change_password_replaces_digest() {
    let (_dir, path, mut store) = initialized_vault();

    store
        .change_password(PASSWORD, "new-password-42")
        .expect("change password");

    let reopened = VaultStore::load(&path).unwrap();
    assert!(reopened.verify_gate("new-password-42").is_ok());
    assert!(reopened.verify_gate(PASSWORD).is_err());
}

#[test]
fn change_password_with_wrong_current_is_a_noop() {
    let (_dir, path, mut store) = initialized_vault();
    store.create_secret("name", "MFRGGZDF").unwrap();
    let before = fs::read(&path).unwrap();

    let result = store.change_password("wrong-password", "new-password-42");
    assert!(matches!(
        result,
        Err(OtpVaultError::InvalidCurrentPassword)
    ));

    // Digest unchanged in memory and on disk.
    assert!(store.verify_gate(PASSWORD).is_ok());
    assert_eq!(fs::read(&path).unwrap(), before);
}
