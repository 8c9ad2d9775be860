/*
 * @Author       : 老董
 * @Date         : 2026-10-16
 * @Description  : 由网络描述构建拓扑图（NetGraph）
 */

use super::layer_kind::{LayerDrawRule, LayerKind};
use super::options::{DrawOptions, RankDir};
use super::style::{NodeStyle, param_color};
use crate::errors::DrawError;
use crate::net::NetDescriptor;
use std::collections::HashMap;
use std::fmt::{self, Display};

/// 节点键
///
/// 层和 blob 分属两个变体，同名也不会冲突。
/// 文本形式沿用`{层名}_{类型}`和`{blob名}_blob`的后缀约定。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeKey {
    Layer { name: String, layer_type: String },
    Blob(String),
}

impl NodeKey {
    pub fn layer(name: &str, layer_type: &str) -> Self {
        Self::Layer {
            name: name.to_string(),
            layer_type: layer_type.to_string(),
        }
    }

    pub fn blob(name: &str) -> Self {
        Self::Blob(name.to_string())
    }

    pub const fn is_layer(&self) -> bool {
        matches!(self, Self::Layer { .. })
    }
}

impl Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Layer { name, layer_type } => write!(f, "{name}_{layer_type}"),
            Self::Blob(name) => write!(f, "{name}_blob"),
        }
    }
}

/// 图中的一个节点（层或 blob）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphNode {
    pub key: NodeKey,
    pub label: String,
    pub style: NodeStyle,
}

/// 数据流边：blob -> 层 或 层 -> blob
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowEdge {
    pub src: NodeKey,
    pub dst: NodeKey,
    /// 空串表示无标签
    pub label: String,
}

/// 共享参数边：连接共享同名参数的两个相邻层，无方向，不参与布局约束
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamEdge {
    /// 共享的参数名
    pub param: String,
    pub src: NodeKey,
    pub dst: NodeKey,
    /// (src 层的参数槽位, dst 层的参数槽位)
    pub slots: (usize, usize),
}

impl ParamEdge {
    /// 边的颜色列表，形如`#F49AC2;#77DD77`
    pub fn color(&self) -> String {
        format!("{};{}", param_color(self.slots.0), param_color(self.slots.1))
    }
}

/// 渲染结果：节点按首次出现的顺序排列，边按生成顺序排列
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetGraph {
    name: String,
    rankdir: RankDir,
    nodes: Vec<GraphNode>,
    index: HashMap<NodeKey, usize>,
    flow_edges: Vec<FlowEdge>,
    param_edges: Vec<ParamEdge>,
}

impl NetGraph {
    fn new(name: &str, rankdir: RankDir) -> Self {
        Self {
            name: name.to_string(),
            rankdir,
            nodes: Vec::new(),
            index: HashMap::new(),
            flow_edges: Vec::new(),
            param_edges: Vec::new(),
        }
    }

    /// 插入节点；键已存在时原位替换（保持首次出现的位置）
    fn upsert_node(&mut self, node: GraphNode) {
        match self.index.get(&node.key) {
            Some(&i) => self.nodes[i] = node,
            None => {
                self.index.insert(node.key.clone(), self.nodes.len());
                self.nodes.push(node);
            }
        }
    }

    /// 确保 blob 节点存在（幂等），返回其键
    fn ensure_blob(&mut self, name: &str) -> NodeKey {
        let key = NodeKey::blob(name);
        if !self.index.contains_key(&key) {
            self.index.insert(key.clone(), self.nodes.len());
            self.nodes.push(GraphNode {
                key: key.clone(),
                label: name.to_string(),
                style: NodeStyle::Blob,
            });
        }
        key
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn rankdir(&self) -> RankDir {
        self.rankdir
    }

    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    pub fn flow_edges(&self) -> &[FlowEdge] {
        &self.flow_edges
    }

    pub fn param_edges(&self) -> &[ParamEdge] {
        &self.param_edges
    }

    pub fn node(&self, key: &NodeKey) -> Option<&GraphNode> {
        self.index.get(key).map(|&i| &self.nodes[i])
    }

    /// 节点在输出顺序中的位置
    pub fn node_index(&self, key: &NodeKey) -> Option<usize> {
        self.index.get(key).copied()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// 边总数（数据流边 + 共享参数边）
    pub fn edge_count(&self) -> usize {
        self.flow_edges.len() + self.param_edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edge_count() == 0
    }
}

/// 把网络描述渲染成拓扑图
///
/// 纯函数：相同的输入和选项总是得到节点、边、标签及顺序都相同的结果。
/// 空网络得到空图。
///
/// # 错误
/// - 池化层的池化方法编号未定义时返回`DrawError::UnknownEnumValue`
pub fn render(net: &NetDescriptor, options: &DrawOptions) -> Result<NetGraph, DrawError> {
    let sep = options.rankdir.label_separator();
    let mut graph = NetGraph::new(&net.name, options.rankdir);

    // 参数名 -> [(层键, 参数槽位)]，按参数名首次出现的顺序
    let mut shared: Vec<(String, Vec<(NodeKey, usize)>)> = Vec::new();
    let mut shared_index: HashMap<String, usize> = HashMap::new();

    for layer in &net.layers {
        let kind = LayerKind::from_tag(&layer.layer_type);
        let layer_key = NodeKey::layer(&layer.name, &layer.layer_type);

        let style = if layer.is_in_place() {
            NodeStyle::Neuron
        } else {
            NodeStyle::Layer {
                fillcolor: kind.fill_color(),
            }
        };
        graph.upsert_node(GraphNode {
            key: layer_key.clone(),
            label: kind.node_label(layer, sep)?,
            style,
        });

        for bottom in &layer.bottom {
            let blob = graph.ensure_blob(bottom);
            graph.flow_edges.push(FlowEdge {
                src: blob,
                dst: layer_key.clone(),
                label: String::new(),
            });
        }

        for top in &layer.top {
            let blob = graph.ensure_blob(top);
            let label = if options.label_edges {
                kind.edge_label(layer)
            } else {
                String::new()
            };
            graph.flow_edges.push(FlowEdge {
                src: layer_key.clone(),
                dst: blob,
                label,
            });
        }

        for (slot, param) in layer.param.iter().enumerate() {
            if param.name.is_empty() {
                continue;
            }
            let i = *shared_index.entry(param.name.clone()).or_insert_with(|| {
                shared.push((param.name.clone(), Vec::new()));
                shared.len() - 1
            });
            shared[i].1.push((layer_key.clone(), slot));
        }
    }

    if options.param_edges {
        for (param, users) in shared.iter().filter(|(_, users)| users.len() > 1) {
            for pair in users.windows(2) {
                let ((src, src_slot), (dst, dst_slot)) = (&pair[0], &pair[1]);
                graph.param_edges.push(ParamEdge {
                    param: param.clone(),
                    src: src.clone(),
                    dst: dst.clone(),
                    slots: (*src_slot, *dst_slot),
                });
            }
        }
    }

    log::debug!(
        "渲染网络`{}`: {} 个节点, {} 条数据流边, {} 条共享参数边",
        graph.name,
        graph.nodes.len(),
        graph.flow_edges.len(),
        graph.param_edges.len()
    );

    Ok(graph)
}
