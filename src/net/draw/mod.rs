/*
 * @Author       : 老董
 * @Date         : 2026-10-16
 * @Description  : 网络拓扑图的渲染
 *
 * 各部分分散在子模块中：
 * - options.rs: 图方向、绘制选项、输出格式
 * - layer_kind.rs: 按层类型分派的标签/边标签/颜色规则
 * - style.rs: 节点样式与共享参数边的调色板
 * - graph.rs: render，构建 NetGraph
 * - dot.rs: NetGraph -> DOT 文本
 * - backend.rs: 渲染后端（Graphviz）
 * - output.rs: draw_net / draw_net_to_file / save_visualization
 */

mod backend;
mod dot;
mod graph;
mod layer_kind;
mod options;
mod output;
mod style;

pub use backend::{GraphvizCli, RenderBackend};
pub use graph::{FlowEdge, GraphNode, NetGraph, NodeKey, ParamEdge, render};
pub use layer_kind::PoolMethod;
pub use options::{DrawOptions, OutputFormat, RankDir, VisualizationOutput};
pub use output::{
    draw_net, draw_net_to_file, draw_net_to_file_with, draw_net_with, save_visualization,
    save_visualization_with,
};
pub use style::NodeStyle;
