/*
 * @Author       : 老董
 * @Date         : 2026-10-16
 * @Description  : 绘制选项和输出格式
 */

use crate::errors::DrawError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::path::PathBuf;
use std::str::FromStr;

/// 图的方向（Graphviz `rankdir`）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RankDir {
    /// 从左到右（默认）
    #[default]
    #[serde(rename = "LR")]
    LeftRight,
    #[serde(rename = "RL")]
    RightLeft,
    #[serde(rename = "TB")]
    TopBottom,
    #[serde(rename = "BT")]
    BottomTop,
}

impl RankDir {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::LeftRight => "LR",
            Self::RightLeft => "RL",
            Self::TopBottom => "TB",
            Self::BottomTop => "BT",
        }
    }

    /// 节点标签里的单词分隔符
    ///
    /// 纵向布局横向空间富余，用空格；横向布局纵向空间富余，用换行。
    pub const fn label_separator(&self) -> &'static str {
        match self {
            Self::TopBottom | Self::BottomTop => " ",
            Self::LeftRight | Self::RightLeft => "\n",
        }
    }
}

impl Display for RankDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RankDir {
    type Err = DrawError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "LR" => Ok(Self::LeftRight),
            "RL" => Ok(Self::RightLeft),
            "TB" => Ok(Self::TopBottom),
            "BT" => Ok(Self::BottomTop),
            _ => Err(DrawError::UnknownRankDir(s.to_string())),
        }
    }
}

/// 绘制选项
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawOptions {
    /// 图方向，只影响标签排版
    pub rankdir: RankDir,
    /// 输出边是否带按层类型计算的标签
    pub label_edges: bool,
    /// 是否为共享参数的层额外连边
    pub param_edges: bool,
}

impl Default for DrawOptions {
    fn default() -> Self {
        Self {
            rankdir: RankDir::default(),
            label_edges: true,
            param_edges: true,
        }
    }
}

impl DrawOptions {
    pub fn new(rankdir: RankDir, label_edges: bool, param_edges: bool) -> Self {
        Self {
            rankdir,
            label_edges,
            param_edges,
        }
    }
}

// ========== 输出格式 ==========

/// 输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// PNG 格式（默认）
    #[default]
    Png,
    /// SVG 矢量格式
    Svg,
    Pdf,
    Jpg,
    Gif,
    Ps,
    /// DOT 原始文本，可手动交给 Graphviz 处理，不经过渲染后端
    Raw,
}

impl OutputFormat {
    /// 获取文件扩展名（不含点号）
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
            Self::Pdf => "pdf",
            Self::Jpg => "jpg",
            Self::Gif => "gif",
            Self::Ps => "ps",
            Self::Raw => "raw",
        }
    }

    /// 从扩展名解析格式（不区分大小写）
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "png" => Some(Self::Png),
            "svg" => Some(Self::Svg),
            "pdf" => Some(Self::Pdf),
            "jpg" | "jpeg" => Some(Self::Jpg),
            "gif" => Some(Self::Gif),
            "ps" => Some(Self::Ps),
            "raw" | "dot" | "gv" => Some(Self::Raw),
            _ => None,
        }
    }

    /// 是否为纯文本格式（无需渲染后端）
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Raw)
    }
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// `save_visualization` 的输出结果
#[derive(Debug)]
pub struct VisualizationOutput {
    /// DOT 文件路径（始终生成）
    pub dot_path: PathBuf,
    /// 图像文件路径（仅当成功生成时才有）
    pub image_path: Option<PathBuf>,
    /// 出图前探测到的后端是否可用；文本格式不探测后端，恒为`false`
    pub graphviz_available: bool,
    /// 如果没能生成图像，给出原因或安装提示
    pub graphviz_hint: Option<String>,
}
