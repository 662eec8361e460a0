//! 网络文档加载模块
//!
//! 负责把 YAML/JSON 文档读成 [`NetworkDescriptor`]，并在边界处一次性确定输入尺寸，
//! 得到交给传播计算的 [`NetworkSpec`]。
//!
//! # 格式选择
//!
//! - `.yaml` / `.yml` → YAML
//! - `.json` → JSON
//! - 其他扩展名或标准输入 → 先按 YAML 解析，失败再按 JSON 解析
//!
//! # 输入尺寸优先级
//!
//! 命令行 `--input-size` > 文档顶层 `input_size`，两者都缺失时报错。
//!
//! # 使用示例
//!
//! ```
//! use cnn_calc::config::{DocumentFormat, load_descriptor_from_str, resolve_network};
//!
//! let descriptor = load_descriptor_from_str(
//!     "input_size: 128\nlayers:\n  - kernel_size: 3\n",
//!     DocumentFormat::Yaml,
//! )
//! .unwrap();
//! let network = resolve_network(&descriptor, None).unwrap();
//! assert_eq!(network.input_size, 128);
//! ```

pub mod error;

pub use error::ConfigError;

use crate::errors::{CalcError, SpecLocation};
use crate::nn::{NetworkDescriptor, NetworkSpec, positive};
use log::{debug, warn};
use std::io::Read;
use std::path::Path;

/// 文档格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentFormat {
    Yaml,
    Json,
    /// 先试 YAML，再试 JSON
    #[default]
    Auto,
}

impl DocumentFormat {
    /// 按文件扩展名推断格式
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        match path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .as_deref()
        {
            Some("yaml" | "yml") => Self::Yaml,
            Some("json") => Self::Json,
            _ => Self::Auto,
        }
    }
}

/// 从字符串解析网络文档
pub fn load_descriptor_from_str(
    content: &str,
    format: DocumentFormat,
) -> Result<NetworkDescriptor, ConfigError> {
    match format {
        DocumentFormat::Yaml => Ok(serde_yaml::from_str(content)?),
        DocumentFormat::Json => Ok(NetworkDescriptor::from_json(content)?),
        DocumentFormat::Auto => match serde_yaml::from_str(content) {
            Ok(descriptor) => Ok(descriptor),
            Err(yaml_error) => {
                debug!("按 YAML 解析失败（{yaml_error}），改按 JSON 解析");
                Ok(NetworkDescriptor::from_json(content)?)
            }
        },
    }
}

/// 从任意读取源（如标准输入）解析网络文档
pub fn load_descriptor_from_reader<R: Read>(
    mut reader: R,
    format: DocumentFormat,
) -> Result<NetworkDescriptor, ConfigError> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    load_descriptor_from_str(&content, format)
}

/// 从文件解析网络文档，格式按扩展名推断
pub fn load_descriptor_from_path<P: AsRef<Path>>(path: P) -> Result<NetworkDescriptor, ConfigError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }
    let format = DocumentFormat::from_path(path);
    debug!("读取网络文档 {}（{format:?}）", path.display());
    let content = std::fs::read_to_string(path)?;
    load_descriptor_from_str(&content, format)
}

/// 确定输入尺寸并转换所有层，得到唯一明确的 `NetworkSpec`
///
/// 命令行给出的 `cli_input_size` 优先于文档中的 `input_size`
pub fn resolve_network(
    descriptor: &NetworkDescriptor,
    cli_input_size: Option<usize>,
) -> Result<NetworkSpec, ConfigError> {
    let input_size = match (cli_input_size, descriptor.input_size()) {
        (Some(cli), Some(embedded)) => {
            if i64::try_from(cli).ok() != Some(embedded) {
                warn!("--input-size={cli} 覆盖文档中的 input_size={embedded}");
            }
            cli
        }
        (Some(cli), None) => cli,
        (None, Some(embedded)) => positive(SpecLocation::Input, "input_size", embedded)
            .map_err(CalcError::from)?,
        (None, None) => return Err(ConfigError::MissingInputSize),
    };

    let layers = descriptor.layer_specs()?;
    let network = NetworkSpec::new(input_size, layers);
    network.validate()?;
    debug!(
        "网络描述：input_size={}，共{}层",
        network.input_size,
        network.layers.len()
    );
    Ok(network)
}

#[cfg(test)]
mod tests;
