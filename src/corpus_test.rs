use super::*;
use tempfile::TempDir;

fn txt_extensions() -> Vec<String> {
    vec!["txt".to_string(), "md".to_string()]
}

#[test]
fn test_read_document_extracts_text() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("notes.txt");
    fs::write(&path, "acute myocardial infarction").unwrap();

    let document = read_document(&path, &txt_extensions()).unwrap();

    assert_eq!(document.text, "acute myocardial infarction");
    assert_eq!(document.path, path);
}

#[test]
fn test_read_document_extension_is_case_insensitive() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("NOTES.TXT");
    fs::write(&path, "stenosis").unwrap();

    assert!(read_document(&path, &txt_extensions()).is_ok());
}

#[test]
fn test_read_document_rejects_unsupported_format() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("scan.pdf");
    fs::write(&path, "%PDF-1.4").unwrap();

    let result = read_document(&path, &txt_extensions());

    assert!(matches!(result, Err(LexivoxError::UnsupportedDocument(_))));
}

#[test]
fn test_read_document_rejects_no_extension() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("README");
    fs::write(&path, "text").unwrap();

    let result = read_document(&path, &txt_extensions());

    assert!(matches!(result, Err(LexivoxError::UnsupportedDocument(_))));
}

#[test]
fn test_read_document_replaces_invalid_utf8() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("latin1.txt");
    fs::write(&path, b"caf\xe9 dose").unwrap();

    let document = read_document(&path, &txt_extensions()).unwrap();

    assert!(document.text.contains("dose"));
}

#[test]
fn test_collect_documents_skips_unsupported_files() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("a.txt"), "alpha").unwrap();
    fs::write(temp_dir.path().join("b.pdf"), "beta").unwrap();
    fs::write(temp_dir.path().join("c.md"), "gamma").unwrap();

    let documents = collect_documents(temp_dir.path(), &txt_extensions()).unwrap();

    assert_eq!(documents.len(), 2);
}

#[test]
fn test_collect_documents_sorted_order() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("b.txt"), "second").unwrap();
    fs::write(temp_dir.path().join("a.txt"), "first").unwrap();

    let documents = collect_documents(temp_dir.path(), &txt_extensions()).unwrap();

    assert_eq!(documents[0].text, "first");
    assert_eq!(documents[1].text, "second");
}

#[test]
fn test_collect_documents_empty_folder() {
    let temp_dir = TempDir::new().unwrap();

    let documents = collect_documents(temp_dir.path(), &txt_extensions()).unwrap();

    assert!(documents.is_empty());
}

#[test]
fn test_collect_documents_ignores_subdirectories() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("nested.txt")).unwrap();
    fs::write(temp_dir.path().join("a.txt"), "alpha").unwrap();

    let documents = collect_documents(temp_dir.path(), &txt_extensions()).unwrap();

    assert_eq!(documents.len(), 1);
}

#[test]
fn test_collect_documents_missing_folder_errors() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nope");

    assert!(collect_documents(&missing, &txt_extensions()).is_err());
}
