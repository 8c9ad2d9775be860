/*
 * @Author       : 老董
 * @Date         : 2026-10-16
 * @Description  : 节点样式与共享参数边的配色
 */

/// 普通层的默认填充色（未单独配色的层类型共用）
pub(super) const DEFAULT_LAYER_COLOR: &str = "#6495ED";
const NEURON_LAYER_COLOR: &str = "#90EE90";
const BLOB_COLOR: &str = "#E0E0E0";

/// 节点的显示样式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeStyle {
    /// 普通层：record 形状，填充色由层类型决定
    Layer { fillcolor: &'static str },
    /// 原地（in-place）层：record 形状，浅绿色
    Neuron,
    /// 数据块：八边形，浅灰色
    Blob,
}

impl NodeStyle {
    pub const fn shape(&self) -> &'static str {
        match self {
            Self::Layer { .. } | Self::Neuron => "record",
            Self::Blob => "octagon",
        }
    }

    pub const fn fillcolor(&self) -> &'static str {
        match self {
            Self::Layer { fillcolor } => *fillcolor,
            Self::Neuron => NEURON_LAYER_COLOR,
            Self::Blob => BLOB_COLOR,
        }
    }

    pub const fn style(&self) -> &'static str {
        "filled"
    }

    pub const fn is_record(&self) -> bool {
        matches!(self, Self::Layer { .. } | Self::Neuron)
    }
}

/// 共享参数边的颜色：按参数槽位编号取色，6 及以上一律灰色
pub(super) fn param_color(slot: usize) -> &'static str {
    const COLORS: &[&str] = &[
        "#F49AC2", // 粉
        "#77DD77", // 绿
        "#779ECB", // 蓝
        "#AEC6CF", // 灰蓝
        "#DEA5A4", // 浅红
        "#CFCFC4", // 浅灰
    ];
    COLORS.get(slot).copied().unwrap_or("gray")
}
