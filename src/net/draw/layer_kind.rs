/*
 * @Author       : 老董
 * @Date         : 2026-10-16
 * @Description  : 按层类型分派的绘制规则
 *                 新增一种层类型 = LayerKind 加一个变体 + 实现一个规则结构体
 */

use super::style::DEFAULT_LAYER_COLOR;
use crate::errors::DrawError;
use crate::net::LayerRecord;
use enum_dispatch::enum_dispatch;
use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

/// 池化方法（编号与 PoolingParameter.PoolMethod 一致）
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive)]
pub enum PoolMethod {
    Max = 0,
    Ave = 1,
    Stochastic = 2,
}

impl PoolMethod {
    /// 按编号查表，查不到返回 None
    pub fn from_code(code: i32) -> Option<Self> {
        Self::from_i32(code)
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Max => "MAX",
            Self::Ave => "AVE",
            Self::Stochastic => "STOCHASTIC",
        }
    }
}

#[enum_dispatch]
pub(super) enum LayerKind {
    Convolution(ConvolutionRule),
    Pooling(PoolingRule),
    InnerProduct(InnerProductRule),
    Data(DataRule),
    Generic(GenericRule),
}

impl LayerKind {
    pub(super) fn from_tag(tag: &str) -> Self {
        match tag {
            "Convolution" => ConvolutionRule.into(),
            "Pooling" => PoolingRule.into(),
            "InnerProduct" => InnerProductRule.into(),
            "Data" => DataRule.into(),
            _ => GenericRule.into(),
        }
    }
}

#[enum_dispatch(LayerKind)]
pub(super) trait LayerDrawRule {
    /// 节点标签，`sep`为单词分隔符（空格或换行）
    fn node_label(&self, layer: &LayerRecord, sep: &str) -> Result<String, DrawError> {
        Ok(format!("{}{sep}({})", layer.name, layer.layer_type))
    }

    /// 输出边（层 -> blob）的标签，空串表示不标注
    fn edge_label(&self, _layer: &LayerRecord) -> String {
        String::new()
    }

    /// 普通（非原地）层节点的填充色
    fn fill_color(&self) -> &'static str {
        DEFAULT_LAYER_COLOR
    }
}

pub(super) struct ConvolutionRule;
pub(super) struct PoolingRule;
pub(super) struct InnerProductRule;
pub(super) struct DataRule;
pub(super) struct GenericRule;

impl LayerDrawRule for ConvolutionRule {
    fn node_label(&self, layer: &LayerRecord, sep: &str) -> Result<String, DrawError> {
        let p = &layer.convolution_param;
        Ok(format!(
            "{}{sep}({}){sep}kernel size: {}{sep}stride: {}{sep}pad: {}",
            layer.name, layer.layer_type, p.kernel_size, p.stride, p.pad
        ))
    }

    fn edge_label(&self, layer: &LayerRecord) -> String {
        layer.convolution_param.num_output.to_string()
    }

    fn fill_color(&self) -> &'static str {
        "#FF5050"
    }
}

impl LayerDrawRule for PoolingRule {
    fn node_label(&self, layer: &LayerRecord, sep: &str) -> Result<String, DrawError> {
        let p = &layer.pooling_param;
        let method = PoolMethod::from_code(p.pool).ok_or_else(|| DrawError::UnknownEnumValue {
            enum_name: "PoolMethod",
            value: i64::from(p.pool),
            layer: layer.name.clone(),
        })?;
        Ok(format!(
            "{}{sep}({} {}){sep}kernel size: {}{sep}stride: {}{sep}pad: {}",
            layer.name,
            method.name(),
            layer.layer_type,
            p.kernel_size,
            p.stride,
            p.pad
        ))
    }

    fn fill_color(&self) -> &'static str {
        "#FF9900"
    }
}

impl LayerDrawRule for InnerProductRule {
    fn edge_label(&self, layer: &LayerRecord) -> String {
        layer.inner_product_param.num_output.to_string()
    }

    fn fill_color(&self) -> &'static str {
        "#CC33FF"
    }
}

impl LayerDrawRule for DataRule {
    fn edge_label(&self, layer: &LayerRecord) -> String {
        format!("Batch {}", layer.data_param.batch_size)
    }
}

impl LayerDrawRule for GenericRule {}
