use super::*;
use tempfile::TempDir;

#[test]
fn test_engine_starts_uninitialized() {
    let config = Config::default();
    let engine = Engine::new(config).unwrap();
    assert!(!engine.is_initialized());
}

#[test]
fn test_transcribe_file_requires_initialization() {
    let temp = TempDir::new().unwrap();
    let config = Config::default();
    let mut engine =
        Engine::with_model_manager(config, crate::models::ModelManager::with_dir(temp.path()));

    let result = engine.transcribe_file(Path::new("missing.wav"));

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("not initialized"));
}

#[test]
fn test_language_hint_auto_means_autodetect() {
    let config = Config::default();
    assert_eq!(language_hint(&config), None);
}

#[test]
fn test_language_hint_specific_language() {
    let mut config = Config::default();
    config.model.language = "en".to_string();
    assert_eq!(language_hint(&config), Some("en".to_string()));
}
