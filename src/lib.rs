//! # Net Draw
//!
//! `net_draw`负责把一个已经反序列化好的网络描述（按顺序排列的层记录）渲染成
//! [Graphviz](https://graphviz.org) 拓扑图：层和数据块（blob）是节点，数据流是有向边，
//! 共享参数的层之间还可以额外连上无向的辅助边。
//!
//! 张量计算、训练以及模型二进制格式的解析都不在本库范围内。
//!

pub mod errors;
pub mod net;
