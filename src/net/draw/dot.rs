/*
 * @Author       : 老董
 * @Date         : 2026-10-16
 * @Description  : NetGraph -> Graphviz DOT 文本
 */

use super::graph::NetGraph;

impl NetGraph {
    // ========== Graphviz DOT 可视化 ==========

    /// 生成 Graphviz DOT 格式的图描述字符串
    ///
    /// 返回的字符串可用于：
    /// - 在线预览：<https://dreampuf.github.io/GraphvizOnline/>
    /// - 手动交给 `dot` 命令渲染
    ///
    /// 节点按首次出现的顺序编号为`n0`、`n1`…，所以层和 blob 即使同名也不会合并。
    ///
    /// # 节点样式
    /// - **普通层**: record，按层类型着色
    /// - **原地层**: record，浅绿色
    /// - **blob**: 八边形，浅灰色
    pub fn to_dot(&self) -> String {
        let mut dot = String::new();
        let name = if self.name().is_empty() { "Net" } else { self.name() };

        // 图头部
        dot.push_str(&format!("digraph \"{}\" {{\n", escape_dot(name)));
        dot.push_str(&format!("    rankdir={};\n", self.rankdir()));
        dot.push('\n');

        for (i, node) in self.nodes().iter().enumerate() {
            let label = if node.style.is_record() {
                escape_record(&node.label)
            } else {
                escape_dot(&node.label)
            };
            dot.push_str(&format!(
                "    n{i} [label=\"{}\" shape={} style={} fillcolor=\"{}\"];\n",
                label,
                node.style.shape(),
                node.style.style(),
                node.style.fillcolor()
            ));
        }
        dot.push('\n');

        // 数据流边
        for edge in self.flow_edges() {
            let (Some(src), Some(dst)) = (self.node_index(&edge.src), self.node_index(&edge.dst))
            else {
                continue;
            };
            if edge.label.is_empty() {
                dot.push_str(&format!("    n{src} -> n{dst};\n"));
            } else {
                dot.push_str(&format!(
                    "    n{src} -> n{dst} [label=\"{}\"];\n",
                    escape_dot(&edge.label)
                ));
            }
        }

        // 共享参数边
        for edge in self.param_edges() {
            let (Some(src), Some(dst)) = (self.node_index(&edge.src), self.node_index(&edge.dst))
            else {
                continue;
            };
            dot.push_str(&format!(
                "    n{src} -> n{dst} [dir=none splines=curved constraint=false color=\"{}\"];\n",
                edge.color()
            ));
        }

        dot.push_str("}\n");
        dot
    }
}

/// 转义为 DOT 双引号字符串的内容，换行写成`\n`
fn escape_dot(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out
}

/// record 形状的标签还需转义字段分隔符
fn escape_record(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in escape_dot(s).chars() {
        if matches!(c, '{' | '}' | '|' | '<' | '>') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
