/*
 * @Author       : 老董
 * @Date         : 2026-10-16
 * @Description  : 渲染结果的输出：内存字节、单个文件、DOT + 图像
 */

use super::backend::{GRAPHVIZ_INSTALL_HINT, GraphvizCli, RenderBackend};
use super::graph::render;
use super::options::{DrawOptions, OutputFormat, VisualizationOutput};
use crate::errors::DrawError;
use crate::net::NetDescriptor;
use std::path::Path;

/// 渲染网络并返回指定格式的字节（使用默认的 Graphviz 后端）
///
/// `OutputFormat::Raw` 直接返回 DOT 文本，不调用 Graphviz。
pub fn draw_net(
    net: &NetDescriptor,
    options: &DrawOptions,
    format: OutputFormat,
) -> Result<Vec<u8>, DrawError> {
    draw_net_with(net, options, format, &GraphvizCli::default())
}

/// 同`draw_net`，但使用调用方给定的渲染后端
pub fn draw_net_with<B: RenderBackend + ?Sized>(
    net: &NetDescriptor,
    options: &DrawOptions,
    format: OutputFormat,
    backend: &B,
) -> Result<Vec<u8>, DrawError> {
    let dot = render(net, options)?.to_dot();
    if format.is_text() {
        return Ok(dot.into_bytes());
    }
    backend.render(&dot, format)
}

/// 渲染网络并写入文件，输出格式由文件扩展名决定
///
/// 用`.raw`（或`.dot`、`.gv`）扩展名可得到 DOT 原始文本，便于之后手动交给 Graphviz。
///
/// # 错误
/// - 扩展名缺失或不受支持：`DrawError::UnsupportedFormat`
/// - 渲染失败时不会创建文件
pub fn draw_net_to_file<P: AsRef<Path>>(
    net: &NetDescriptor,
    path: P,
    options: &DrawOptions,
) -> Result<(), DrawError> {
    draw_net_to_file_with(net, path, options, &GraphvizCli::default())
}

/// 同`draw_net_to_file`，但使用调用方给定的渲染后端
pub fn draw_net_to_file_with<P: AsRef<Path>, B: RenderBackend + ?Sized>(
    net: &NetDescriptor,
    path: P,
    options: &DrawOptions,
    backend: &B,
) -> Result<(), DrawError> {
    let path = path.as_ref();
    let format = format_from_path(path)?;
    let bytes = draw_net_with(net, options, format, backend)?;
    std::fs::write(path, bytes)?;
    log::info!("网络`{}`的拓扑图已写入 {}", net.name, path.display());
    Ok(())
}

fn format_from_path(path: &Path) -> Result<OutputFormat, DrawError> {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .ok_or_else(|| {
            DrawError::UnsupportedFormat(format!("路径`{}`缺少扩展名", path.display()))
        })?;
    OutputFormat::from_extension(&ext).ok_or(DrawError::UnsupportedFormat(ext))
}

/// 把网络拓扑落盘：先写 DOT 文本，再视情况交给后端出图
///
/// `base_path` 只给主干名（如`"outputs/lenet"`），后缀由本函数补上；
/// `format`缺省为 PNG。
///
/// 产物：
/// - `{base_path}.dot` 总会写出
/// - 文本格式（`Raw`）到此为止，不会去探测后端
/// - 其余格式在后端可用时写出 `{base_path}.{ext}`；后端缺失或出图失败时不报错，
///   原因放进返回值的`graphviz_hint`
///
/// `base_path`带后缀会得到`DrawError::InvalidPath`；层里的池化方法编号未定义时
/// 得到`DrawError::UnknownEnumValue`，这两种情况都不会写任何文件。
pub fn save_visualization<P: AsRef<Path>>(
    net: &NetDescriptor,
    base_path: P,
    format: Option<OutputFormat>,
    options: &DrawOptions,
) -> Result<VisualizationOutput, DrawError> {
    save_visualization_with(net, base_path, format, options, &GraphvizCli::default())
}

/// 同`save_visualization`，但使用调用方给定的渲染后端
pub fn save_visualization_with<P: AsRef<Path>, B: RenderBackend + ?Sized>(
    net: &NetDescriptor,
    base_path: P,
    format: Option<OutputFormat>,
    options: &DrawOptions,
    backend: &B,
) -> Result<VisualizationOutput, DrawError> {
    let path = base_path.as_ref();

    // 基础路径不能带后缀
    if let Some(ext) = path.extension() {
        let ext_str = ext.to_string_lossy();
        let hint = if OutputFormat::from_extension(&ext_str).is_some() {
            format!(
                "`.{ext_str}` 会由库自动补上，请传入不含后缀的基础路径，\
                 比如 \"outputs/lenet\"（不要写成 \"outputs/lenet.{ext_str}\"）。"
            )
        } else {
            format!(
                "未知后缀 `.{ext_str}`：请传入不含后缀的基础路径（如 \"outputs/lenet\"），\
                 图像格式通过 format 参数选择（png/svg/pdf/jpg/gif/ps）。"
            )
        };
        return Err(DrawError::InvalidPath(hint));
    }

    let dot = render(net, options)?.to_dot();
    let dot_path = path.with_extension("dot");
    std::fs::write(&dot_path, &dot)?;
    log::info!("DOT 文件已写入 {}", dot_path.display());

    let format = format.unwrap_or_default();
    if format.is_text() {
        return Ok(VisualizationOutput {
            dot_path,
            image_path: None,
            graphviz_available: false,
            graphviz_hint: None,
        });
    }

    let graphviz_available = backend.is_available();
    if !graphviz_available {
        log::warn!("渲染后端不可用，跳过 {} 图像", format.extension());
        return Ok(VisualizationOutput {
            dot_path,
            image_path: None,
            graphviz_available,
            graphviz_hint: Some(GRAPHVIZ_INSTALL_HINT.to_string()),
        });
    }

    let image_path = path.with_extension(format.extension());
    let (image_path, graphviz_hint) = match backend.render(&dot, format) {
        Ok(bytes) => {
            std::fs::write(&image_path, bytes)?;
            log::info!("图像已写入 {}", image_path.display());
            (Some(image_path), None)
        }
        Err(e) => {
            log::warn!("{} 图像未生成: {e}", format.extension());
            (None, Some(format!("图像未生成：{e}")))
        }
    };

    Ok(VisualizationOutput {
        dot_path,
        image_path,
        graphviz_available,
        graphviz_hint,
    })
}
