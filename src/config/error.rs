//! 配置加载错误类型定义

use crate::errors::CalcError;
use std::path::PathBuf;
use thiserror::Error;

/// 读取、解析网络文档以及确定输入尺寸时的错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 文件未找到
    #[error("文件未找到: {0}")]
    FileNotFound(PathBuf),

    /// IO 错误
    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML 解析错误
    #[error("YAML 解析错误: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// JSON 解析错误
    #[error("JSON 解析错误: {0}")]
    JsonError(#[from] serde_json::Error),

    /// 命令行与文档都没有给出输入尺寸
    #[error("未指定输入尺寸：请使用 --input-size 或在文档顶层提供 input_size")]
    MissingInputSize,

    /// 文档内容违反结构约束
    #[error(transparent)]
    Spec(#[from] CalcError),
}
