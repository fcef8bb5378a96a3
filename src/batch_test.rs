use super::*;
use tempfile::TempDir;

fn batch_config() -> BatchConfig {
    BatchConfig::default()
}

#[test]
fn test_build_queue_enumerates_folder_by_extension() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("a.wav"), b"x").unwrap();
    fs::write(temp_dir.path().join("b.mp3"), b"x").unwrap();
    fs::write(temp_dir.path().join("c.wav"), b"x").unwrap();

    let queue = build_queue(&[temp_dir.path().to_path_buf()], &batch_config()).unwrap();

    assert_eq!(queue.len(), 2);
    assert!(queue.iter().all(|p| p.extension().unwrap() == "wav"));
}

#[test]
fn test_build_queue_folder_is_sorted() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("b.wav"), b"x").unwrap();
    fs::write(temp_dir.path().join("a.wav"), b"x").unwrap();

    let queue = build_queue(&[temp_dir.path().to_path_buf()], &batch_config()).unwrap();

    assert!(queue[0].ends_with("a.wav"));
    assert!(queue[1].ends_with("b.wav"));
}

#[test]
fn test_build_queue_accepts_explicit_files() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("recording.wav");
    fs::write(&path, b"x").unwrap();

    let queue = build_queue(&[path.clone()], &batch_config()).unwrap();

    assert_eq!(queue, vec![path]);
}

#[test]
fn test_build_queue_skips_duplicates() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("recording.wav");
    fs::write(&path, b"x").unwrap();

    let queue = build_queue(
        &[path.clone(), path.clone(), temp_dir.path().to_path_buf()],
        &batch_config(),
    )
    .unwrap();

    assert_eq!(queue.len(), 1);
}

#[test]
fn test_build_queue_skips_oversized_files() {
    let temp_dir = TempDir::new().unwrap();
    let small = temp_dir.path().join("small.wav");
    let large = temp_dir.path().join("large.wav");
    fs::write(&small, b"x").unwrap();
    fs::write(&large, vec![0u8; 2 * 1024 * 1024]).unwrap();

    let config = BatchConfig {
        max_file_size_mb: 1,
        ..BatchConfig::default()
    };
    let queue = build_queue(&[temp_dir.path().to_path_buf()], &config).unwrap();

    assert_eq!(queue, vec![small]);
}

#[test]
fn test_build_queue_missing_input_is_skipped() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nope.wav");

    let queue = build_queue(&[missing], &batch_config()).unwrap();

    assert!(queue.is_empty());
}

#[test]
fn test_default_output_dir_uses_prefix() {
    let dir = default_output_dir("lexivox_output");
    let name = dir.to_string_lossy();

    assert!(name.starts_with("lexivox_output_"));
    // Timestamp suffix: YYYYMMDD_HHMMSS
    assert_eq!(name.len(), "lexivox_output_".len() + 15);
}

#[test]
fn test_write_transcript_contains_header_and_text() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("visit_001.txt");

    write_transcript(
        &output,
        Path::new("/recordings/visit_001.wav"),
        "Patient is stable.",
    )
    .unwrap();

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.starts_with("LEXIVOX TRANSCRIPT\n"));
    assert!(content.contains("Source: visit_001.wav"));
    assert!(content.contains("Patient is stable."));
}
