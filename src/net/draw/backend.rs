/*
 * @Author       : 老董
 * @Date         : 2026-10-16
 * @Description  : 渲染后端：把 DOT 文本变成图像字节
 */

use super::options::OutputFormat;
use crate::errors::DrawError;
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

pub(super) const GRAPHVIZ_INSTALL_HINT: &str = "找不到 Graphviz 的 `dot` 程序，无法生成图像。\n\
     装好 Graphviz（如 `apt install graphviz`、`brew install graphviz`、`winget install graphviz`）\n\
     或用 GraphvizCli::with_program 指定可执行文件路径；\n\
     已生成的 .dot 文本也可以贴到 https://dreampuf.github.io/GraphvizOnline/ 预览。";

/// 渲染后端
pub trait RenderBackend {
    /// 后端当前是否可用
    fn is_available(&self) -> bool {
        true
    }

    /// 把 DOT 文本渲染为指定格式的字节；失败原样返回，不重试
    fn render(&self, dot: &str, format: OutputFormat) -> Result<Vec<u8>, DrawError>;
}

/// 调用 Graphviz 命令行（默认`dot`）的后端
#[derive(Debug, Clone)]
pub struct GraphvizCli {
    program: PathBuf,
}

impl Default for GraphvizCli {
    fn default() -> Self {
        Self {
            program: PathBuf::from("dot"),
        }
    }
}

impl GraphvizCli {
    /// 指定 Graphviz 可执行文件（如`neato`或绝对路径）
    pub fn with_program<P: AsRef<Path>>(program: P) -> Self {
        Self {
            program: program.as_ref().to_path_buf(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl RenderBackend for GraphvizCli {
    fn is_available(&self) -> bool {
        Command::new(&self.program)
            .arg("-V")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }

    fn render(&self, dot: &str, format: OutputFormat) -> Result<Vec<u8>, DrawError> {
        if format.is_text() {
            return Ok(dot.as_bytes().to_vec());
        }

        let mut child = Command::new(&self.program)
            .arg(format!("-T{}", format.extension()))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => DrawError::GraphvizNotFound(GRAPHVIZ_INSTALL_HINT.to_string()),
                _ => DrawError::Io(e),
            })?;

        let Some(mut stdin) = child.stdin.take() else {
            return Err(DrawError::BackendRender {
                format: format.to_string(),
                message: "无法打开 Graphviz 的标准输入".to_string(),
            });
        };

        // 另开线程喂 stdin，同时收集 stdout/stderr；
        // 后端提前退出时写入会失败（BrokenPipe），此时以退出状态和 stderr 为准
        let (output, written) = std::thread::scope(|s| {
            let writer = s.spawn(move || stdin.write_all(dot.as_bytes()));
            let output = child.wait_with_output();
            let written = writer
                .join()
                .unwrap_or_else(|_| Err(io::Error::other("写入 Graphviz 标准输入的线程崩溃")));
            (output, written)
        });

        let output = output?;
        if !output.status.success() {
            return Err(DrawError::BackendRender {
                format: format.to_string(),
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        written?;
        Ok(output.stdout)
    }
}
