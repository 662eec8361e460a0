/*
 * @Date         : 2026-10-19
 * @Description  : 网络文档描述符（Network Descriptor）
 *                 YAML/JSON 文档与内存中 NetworkSpec 之间的中间表示
 *
 * 文档的顶层可以是：
 * - 层列表：`[{kernel_size: 3}, {type: pool, k: 2}]`
 * - 映射：`{input_size: 128, layers: [...]}`
 *
 * 这里的字段保持文档原样（字符串、有符号整数），
 * 默认值与合法性在 `to_spec` 中统一处理。
 */

use super::layer::{LayerSpec, LayerType, Padding};
use crate::errors::{CalcError, SpecLocation, SpecViolation};
use serde::de::value::{MapAccessDeserializer, SeqAccessDeserializer};
use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// 整份文档
///
/// 反序列化时按顶层是序列还是映射直接分派，内层错误（字段名、取值）原样上报。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NetworkDescriptor {
    /// 只有层列表，输入尺寸须由命令行给出
    Layers(Vec<LayerDescriptor>),
    /// 带可选 `input_size` 的映射
    Network {
        #[serde(skip_serializing_if = "Option::is_none")]
        input_size: Option<i64>,
        layers: Vec<LayerDescriptor>,
    },
}

/// 映射形式的顶层文档
#[derive(Deserialize)]
struct NetworkMapping {
    #[serde(default)]
    input_size: Option<i64>,
    #[serde(default)]
    layers: Vec<LayerDescriptor>,
}

struct NetworkDescriptorVisitor;

impl<'de> Visitor<'de> for NetworkDescriptorVisitor {
    type Value = NetworkDescriptor;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("层列表，或含 layers（及可选 input_size）的映射")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, seq: A) -> Result<Self::Value, A::Error> {
        Vec::<LayerDescriptor>::deserialize(SeqAccessDeserializer::new(seq))
            .map(NetworkDescriptor::Layers)
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
        let NetworkMapping { input_size, layers } =
            NetworkMapping::deserialize(MapAccessDeserializer::new(map))?;
        Ok(NetworkDescriptor::Network { input_size, layers })
    }
}

impl<'de> Deserialize<'de> for NetworkDescriptor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(NetworkDescriptorVisitor)
    }
}

/// 单层描述
///
/// 支持缩写键，同时出现时按全称优先：
/// `kernel_size` > `kernel` > `k`，`stride` > `s`，`padding` > `p`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawLayerDescriptor")]
pub struct LayerDescriptor {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub layer_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kernel_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stride: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// 文档中层的原始键，全称与缩写各占一个字段
#[derive(Deserialize)]
struct RawLayerDescriptor {
    #[serde(rename = "type", default)]
    layer_type: Option<String>,
    #[serde(default)]
    padding: Option<String>,
    #[serde(default)]
    p: Option<String>,
    #[serde(default)]
    kernel_size: Option<i64>,
    #[serde(default)]
    kernel: Option<i64>,
    #[serde(default)]
    k: Option<i64>,
    #[serde(default)]
    stride: Option<i64>,
    #[serde(default)]
    s: Option<i64>,
    #[serde(default)]
    name: Option<String>,
}

impl From<RawLayerDescriptor> for LayerDescriptor {
    fn from(raw: RawLayerDescriptor) -> Self {
        Self {
            layer_type: raw.layer_type,
            padding: raw.padding.or(raw.p),
            kernel_size: raw.kernel_size.or(raw.kernel).or(raw.k),
            stride: raw.stride.or(raw.s),
            name: raw.name,
        }
    }
}

impl NetworkDescriptor {
    /// 文档中内嵌的输入尺寸（若有）
    pub const fn input_size(&self) -> Option<i64> {
        match self {
            Self::Layers(_) => None,
            Self::Network { input_size, .. } => *input_size,
        }
    }

    pub fn layers(&self) -> &[LayerDescriptor] {
        match self {
            Self::Layers(layers) | Self::Network { layers, .. } => layers,
        }
    }

    /// 将所有层转换为经过校验的 `LayerSpec`
    pub fn layer_specs(&self) -> Result<Vec<LayerSpec>, CalcError> {
        self.layers()
            .iter()
            .enumerate()
            .map(|(index, layer)| layer.to_spec(index))
            .collect()
    }

    /// 转换为 JSON 字符串
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// 从 JSON 字符串解析
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl LayerDescriptor {
    /// 填充默认值并校验，`index` 用于错误定位
    ///
    /// - `type` 缺省为 conv，`padding` 缺省为 same，`stride` 缺省为1
    /// - `kernel_size` 必填
    pub fn to_spec(&self, index: usize) -> Result<LayerSpec, CalcError> {
        let location = SpecLocation::Layer(index);

        let layer_type = match &self.layer_type {
            None => LayerType::default(),
            Some(value) => value
                .parse::<LayerType>()
                .map_err(|value| SpecViolation::UnknownVariant {
                    location,
                    value_name: "type",
                    value,
                    expected: LayerType::VARIANTS,
                })?,
        };

        let padding = match &self.padding {
            None => Padding::default(),
            Some(value) => value
                .parse::<Padding>()
                .map_err(|value| SpecViolation::UnknownVariant {
                    location,
                    value_name: "padding",
                    value,
                    expected: Padding::VARIANTS,
                })?,
        };

        let kernel_size = self.kernel_size.ok_or(SpecViolation::MissingField {
            location,
            value_name: "kernel_size",
        })?;
        let kernel_size = positive(location, "kernel_size", kernel_size)?;
        let stride = positive(location, "stride", self.stride.unwrap_or(1))?;

        Ok(LayerSpec {
            layer_type,
            padding,
            kernel_size,
            stride,
            name: self.name.clone(),
        })
    }
}

/// 文档中的有符号整数 -> 正的 `usize`
pub(crate) fn positive(
    location: SpecLocation,
    value_name: &'static str,
    value: i64,
) -> Result<usize, SpecViolation> {
    match usize::try_from(value) {
        Ok(value) if value >= 1 => Ok(value),
        _ => Err(SpecViolation::must_be_positive(location, value_name, value)),
    }
}
