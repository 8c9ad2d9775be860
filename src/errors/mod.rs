/*
 * @Author       : 老董
 * @Date         : 2026-10-16
 * @Description  : 网络可视化相关的错误类型
 */

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DrawError {
    // 静态枚举表里查不到的编号（目前只有池化方法会触发）
    #[error("层`{layer}`的{enum_name}编号{value}没有对应的名称")]
    UnknownEnumValue {
        enum_name: &'static str,
        value: i64,
        layer: String,
    },

    // 渲染后端（Graphviz）原样返回的错误，不做重试
    #[error("Graphviz 渲染 {format} 失败: {message}")]
    BackendRender { format: String, message: String },
    #[error("{0}")]
    GraphvizNotFound(String),

    #[error("不支持的输出格式: {0}")]
    UnsupportedFormat(String),
    #[error("未知的图方向`{0}`，可选值为 LR、RL、TB、BT")]
    UnknownRankDir(String),
    #[error("{0}")]
    InvalidPath(String),

    #[error("读写文件失败: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON（反）序列化失败: {0}")]
    Json(#[from] serde_json::Error),
}
