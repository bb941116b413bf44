//! Tests for YAML document loading and config record materialization

#[cfg(test)]
mod tests {
    use crate::support::must;
    use lithoprep::io::configuration::ConfigurationManager;
    use lithoprep::io::error::PipelineError;
    use std::fs;
    use std::path::{Path, PathBuf};

    fn write_documents(
        dir: &Path,
        clahe_clip: &str,
        denoise_strength: &str,
        classes: &str,
    ) -> (PathBuf, PathBuf) {
        let root = dir.display();
        let config = format!(
            "artifacts_root: {root}/artifacts
data_ingestion:
  root_dir: {root}/artifacts/data_ingestion
  source_URL: https://example.com/kidney-stone-xray.zip
  local_data_file: {root}/artifacts/data_ingestion/data.zip
  unzip_dir: {root}/artifacts/data_ingestion
prepare_base_model:
  root_dir: {root}/artifacts/prepare_base_model
  base_model_path: {root}/artifacts/prepare_base_model/base_model.yaml
  updated_base_model_path: {root}/artifacts/prepare_base_model/base_model_updated.yaml
preprocessing:
  root_dir: {root}/artifacts/data_ingestion/kidney-stone-xray
  processed_data_path: {root}/artifacts/preprocessing/processed
"
        );
        let params = format!(
            "IMAGE_SIZE: 224
LEARNING_RATE: 0.01
INCLUDE_TOP: false
WEIGHTS: imagenet
CLASSES: {classes}
CLAHE_CLIP: {clahe_clip}
DENOISE_STRENGTH: {denoise_strength}
INTENSITY_RESCALE: true
"
        );

        let config_path = dir.join("config.yaml");
        let params_path = dir.join("params.yaml");
        must(fs::write(&config_path, config));
        must(fs::write(&params_path, params));
        (config_path, params_path)
    }

    // Tests both documents resolve into typed records with directories created
    #[test]
    fn test_documents_resolve_into_records() {
        let dir = must(tempfile::tempdir());
        let (config_path, params_path) = write_documents(dir.path(), "2.0", "10.0", "2");

        let manager = must(ConfigurationManager::from_files(&config_path, &params_path));
        assert!(dir.path().join("artifacts").is_dir());

        let preprocessing = must(manager.preprocessing_config());
        assert!((preprocessing.clahe_clip - 2.0).abs() < f64::EPSILON);
        assert!((preprocessing.denoise_strength - 10.0).abs() < f64::EPSILON);
        assert!(preprocessing.intensity_rescale);
        assert!(preprocessing.root_dir.is_dir());

        let base_model = must(manager.prepare_base_model_config());
        assert_eq!(base_model.image_size, 224);
        assert_eq!(base_model.classes, 2);
        assert_eq!(base_model.weights, "imagenet");
        assert!(!base_model.include_top);

        let ingestion = must(manager.data_ingestion_config());
        assert_eq!(
            ingestion.source_url,
            "https://example.com/kidney-stone-xray.zip"
        );
        assert!(ingestion.root_dir.is_dir());
    }

    // Tests a missing document maps to the read error
    #[test]
    fn test_missing_document_is_config_read() {
        let dir = must(tempfile::tempdir());
        let (_, params_path) = write_documents(dir.path(), "2.0", "10.0", "2");

        let result =
            ConfigurationManager::from_files(&dir.path().join("absent.yaml"), &params_path);

        assert!(matches!(result, Err(PipelineError::ConfigRead { .. })));
    }

    // Tests a document missing required fields maps to the parse error
    #[test]
    fn test_malformed_document_is_config_parse() {
        let dir = must(tempfile::tempdir());
        let (_, params_path) = write_documents(dir.path(), "2.0", "10.0", "2");

        let broken_path = dir.path().join("broken.yaml");
        must(fs::write(&broken_path, "unexpected: document"));

        let result = ConfigurationManager::from_files(&broken_path, &params_path);

        assert!(matches!(result, Err(PipelineError::ConfigParse { .. })));
    }

    // A zero clip limit would degenerate the enhancement and is rejected
    #[test]
    fn test_zero_clahe_clip_rejected() {
        let dir = must(tempfile::tempdir());
        let (config_path, params_path) = write_documents(dir.path(), "0.0", "10.0", "2");

        let manager = must(ConfigurationManager::from_files(&config_path, &params_path));
        let result = manager.preprocessing_config();

        assert!(matches!(
            result,
            Err(PipelineError::InvalidParameter {
                parameter: "CLAHE_CLIP",
                ..
            })
        ));
    }

    // Tests negative denoise strength is rejected
    #[test]
    fn test_negative_denoise_strength_rejected() {
        let dir = must(tempfile::tempdir());
        let (config_path, params_path) = write_documents(dir.path(), "2.0", "-3.5", "2");

        let manager = must(ConfigurationManager::from_files(&config_path, &params_path));
        let result = manager.preprocessing_config();

        assert!(matches!(
            result,
            Err(PipelineError::InvalidParameter {
                parameter: "DENOISE_STRENGTH",
                ..
            })
        ));
    }

    // Tests a single-class configuration is rejected for the model stage
    #[test]
    fn test_single_class_rejected() {
        let dir = must(tempfile::tempdir());
        let (config_path, params_path) = write_documents(dir.path(), "2.0", "10.0", "1");

        let manager = must(ConfigurationManager::from_files(&config_path, &params_path));
        let result = manager.prepare_base_model_config();

        assert!(matches!(
            result,
            Err(PipelineError::InvalidParameter {
                parameter: "CLASSES",
                ..
            })
        ));
    }
}
