/*
 * @Author       : 老董
 * @Date         : 2026-10-16
 * @Description  : 网络描述符（Net Descriptor）
 *                 由外部模型加载器给出、已经校验过的层列表；本库只读不改
 */

use crate::errors::DrawError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 网络的可序列化描述
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetDescriptor {
    /// 网络名称（用作 DOT 图名）
    #[serde(default)]
    pub name: String,
    /// 按定义顺序排列的层
    #[serde(default, rename = "layer", alias = "layers")]
    pub layers: Vec<LayerRecord>,
}

/// 单个层的记录
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayerRecord {
    /// 层名（网络内唯一）
    pub name: String,
    /// 类型标签，如 "Convolution"、"Pooling"、"ReLU"
    #[serde(rename = "type")]
    pub layer_type: String,
    /// 输入 blob 名（有序，可重复）
    #[serde(default)]
    pub bottom: Vec<String>,
    /// 输出 blob 名（有序）
    #[serde(default)]
    pub top: Vec<String>,
    /// 参数槽位，名字非空的槽位参与参数共享
    #[serde(default)]
    pub param: Vec<ParamSpec>,

    #[serde(default)]
    pub convolution_param: ConvolutionParam,
    #[serde(default)]
    pub pooling_param: PoolingParam,
    #[serde(default)]
    pub inner_product_param: InnerProductParam,
    #[serde(default)]
    pub data_param: DataParam,
}

/// 参数槽位描述
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamSpec {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvolutionParam {
    pub num_output: u32,
    pub kernel_size: u32,
    pub stride: u32,
    pub pad: u32,
}

impl Default for ConvolutionParam {
    fn default() -> Self {
        Self {
            num_output: 0,
            kernel_size: 0,
            stride: 1,
            pad: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolingParam {
    /// 池化方法编号（0=MAX，1=AVE，2=STOCHASTIC），具体名称见`PoolMethod`
    pub pool: i32,
    pub kernel_size: u32,
    pub stride: u32,
    pub pad: u32,
}

impl Default for PoolingParam {
    fn default() -> Self {
        Self {
            pool: 0,
            kernel_size: 0,
            stride: 1,
            pad: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InnerProductParam {
    pub num_output: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataParam {
    pub batch_size: u32,
}

impl NetDescriptor {
    /// 创建空的网络描述
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            layers: Vec::new(),
        }
    }

    /// 追加一层
    pub fn add_layer(&mut self, layer: LayerRecord) {
        self.layers.push(layer);
    }

    /// 链式追加一层
    pub fn with_layer(mut self, layer: LayerRecord) -> Self {
        self.layers.push(layer);
        self
    }

    /// 转换为 JSON 字符串
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// 从 JSON 字符串解析
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// 从 JSON 文件读取
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, DrawError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Ok(Self::from_json(&content)?)
    }
}

impl LayerRecord {
    /// 创建只有名字和类型的层，其余字段取默认值
    pub fn new(name: &str, layer_type: &str) -> Self {
        Self {
            name: name.to_string(),
            layer_type: layer_type.to_string(),
            ..Default::default()
        }
    }

    pub fn with_bottoms(mut self, bottoms: &[&str]) -> Self {
        self.bottom = bottoms.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_tops(mut self, tops: &[&str]) -> Self {
        self.top = tops.iter().map(|s| s.to_string()).collect();
        self
    }

    /// 设置参数槽位名，空字符串表示该槽位不共享
    pub fn with_params(mut self, names: &[&str]) -> Self {
        self.param = names
            .iter()
            .map(|s| ParamSpec {
                name: s.to_string(),
            })
            .collect();
        self
    }

    pub fn with_convolution(
        mut self,
        num_output: u32,
        kernel_size: u32,
        stride: u32,
        pad: u32,
    ) -> Self {
        self.convolution_param = ConvolutionParam {
            num_output,
            kernel_size,
            stride,
            pad,
        };
        self
    }

    pub fn with_pooling(mut self, pool: i32, kernel_size: u32, stride: u32, pad: u32) -> Self {
        self.pooling_param = PoolingParam {
            pool,
            kernel_size,
            stride,
            pad,
        };
        self
    }

    pub fn with_inner_product(mut self, num_output: u32) -> Self {
        self.inner_product_param = InnerProductParam { num_output };
        self
    }

    pub fn with_data(mut self, batch_size: u32) -> Self {
        self.data_param = DataParam { batch_size };
        self
    }

    /// 是否为原地（in-place）层：唯一的输入 blob 与唯一的输出 blob 同名
    pub fn is_in_place(&self) -> bool {
        matches!((self.bottom.as_slice(), self.top.as_slice()), ([b], [t]) if b == t)
    }
}
