/*
 * @Author       : 老董
 * @Date         : 2026-10-16
 * @Description  : 网络描述及其拓扑图渲染
 *
 * 公开 API：
 * - `NetDescriptor` / `LayerRecord`: 已反序列化的网络描述
 * - `render`: 网络描述 -> `NetGraph`（纯函数）
 * - `NetGraph::to_dot`: 输出 Graphviz DOT 文本
 * - `draw_net` / `draw_net_to_file` / `save_visualization`: 借助渲染后端输出图像
 */

mod descriptor;
mod draw;

pub use descriptor::{
    ConvolutionParam, DataParam, InnerProductParam, LayerRecord, NetDescriptor, ParamSpec,
    PoolingParam,
};
pub use draw::{
    DrawOptions, FlowEdge, GraphNode, GraphvizCli, NetGraph, NodeKey, NodeStyle, OutputFormat,
    ParamEdge, PoolMethod, RankDir, RenderBackend, VisualizationOutput, draw_net, draw_net_to_file,
    draw_net_to_file_with, draw_net_with, render, save_visualization, save_visualization_with,
};

#[cfg(test)]
mod tests;
