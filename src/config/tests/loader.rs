//! 文档加载单元测试

use crate::config::{
    ConfigError, DocumentFormat, load_descriptor_from_path, load_descriptor_from_reader,
    load_descriptor_from_str,
};
use crate::nn::NetworkDescriptor;

const YAML_NETWORK: &str = "\
input_size: 128
layers:
  - kernel_size: 3
  - {kernel_size: 3, stride: 2}
  - {k: 3, p: valid}
  - type: pool
    kernel_size: 2
";

const JSON_LAYERS: &str = r#"[{"kernel_size": 3}, {"type": "pool", "kernel_size": 2, "stride": 2}]"#;

#[test]
fn test_format_from_path() {
    assert_eq!(DocumentFormat::from_path("net.yaml"), DocumentFormat::Yaml);
    assert_eq!(DocumentFormat::from_path("net.YML"), DocumentFormat::Yaml);
    assert_eq!(DocumentFormat::from_path("dir/net.json"), DocumentFormat::Json);
    assert_eq!(DocumentFormat::from_path("net.txt"), DocumentFormat::Auto);
    assert_eq!(DocumentFormat::from_path("-"), DocumentFormat::Auto);
}

#[test]
fn test_load_yaml() -> Result<(), ConfigError> {
    let descriptor = load_descriptor_from_str(YAML_NETWORK, DocumentFormat::Yaml)?;

    assert_eq!(descriptor.input_size(), Some(128));
    assert_eq!(descriptor.layers().len(), 4);
    assert_eq!(descriptor.layers()[1].stride, Some(2));
    assert_eq!(descriptor.layers()[2].padding.as_deref(), Some("valid"));
    assert_eq!(descriptor.layers()[3].layer_type.as_deref(), Some("pool"));
    Ok(())
}

#[test]
fn test_load_json() -> Result<(), ConfigError> {
    let descriptor = load_descriptor_from_str(JSON_LAYERS, DocumentFormat::Json)?;

    assert!(matches!(descriptor, NetworkDescriptor::Layers(ref layers) if layers.len() == 2));
    Ok(())
}

#[test]
fn test_auto_accepts_both_formats() -> Result<(), ConfigError> {
    let from_yaml = load_descriptor_from_str(YAML_NETWORK, DocumentFormat::Auto)?;
    let from_json = load_descriptor_from_str(JSON_LAYERS, DocumentFormat::Auto)?;

    assert_eq!(from_yaml, load_descriptor_from_str(YAML_NETWORK, DocumentFormat::Yaml)?);
    assert_eq!(from_json, load_descriptor_from_str(JSON_LAYERS, DocumentFormat::Json)?);
    Ok(())
}

#[test]
fn test_parse_errors() {
    assert!(matches!(
        load_descriptor_from_str(YAML_NETWORK, DocumentFormat::Json),
        Err(ConfigError::JsonError(_))
    ));
    assert!(matches!(
        load_descriptor_from_str("layers: [", DocumentFormat::Yaml),
        Err(ConfigError::YamlError(_))
    ));
    // 两种格式都失败时报告 JSON 错误
    assert!(matches!(
        load_descriptor_from_str("layers: [", DocumentFormat::Auto),
        Err(ConfigError::JsonError(_))
    ));
}

#[test]
fn test_load_from_reader() -> Result<(), ConfigError> {
    let descriptor = load_descriptor_from_reader("- k: 5\n- k: 3\n".as_bytes(), DocumentFormat::Auto)?;

    assert_eq!(descriptor.layers().len(), 2);
    assert_eq!(descriptor.layers()[0].kernel_size, Some(5));
    Ok(())
}

#[test]
fn test_load_from_path() -> Result<(), ConfigError> {
    let path = std::env::temp_dir().join(format!("cnn_calc_loader_{}.json", std::process::id()));
    std::fs::write(&path, JSON_LAYERS)?;

    let descriptor = load_descriptor_from_path(&path);
    std::fs::remove_file(&path)?;

    assert_eq!(descriptor?.layers().len(), 2);
    Ok(())
}

#[test]
fn test_missing_file() {
    let path = std::env::temp_dir().join("cnn_calc_definitely_missing.yaml");

    assert!(matches!(
        load_descriptor_from_path(&path),
        Err(ConfigError::FileNotFound(p)) if p == path
    ));
}

#[test]
fn test_yaml_abbreviation_precedence() -> Result<(), ConfigError> {
    let descriptor = load_descriptor_from_str("- {kernel_size: 3, k: 5}\n", DocumentFormat::Yaml)?;

    assert_eq!(descriptor.layers()[0].kernel_size, Some(3));
    Ok(())
}

#[test]
fn test_yaml_layer_error_message() {
    let error = load_descriptor_from_str("- {kernel_size: abc}\n", DocumentFormat::Yaml).unwrap_err();
    let message = error.to_string();

    assert!(matches!(error, ConfigError::YamlError(_)));
    assert!(message.contains("abc"), "{message}");
    assert!(!message.contains("untagged"), "{message}");
}
