/*
 * @Author       : 老董
 * @Date         : 2026-10-16
 * @Description  : 图方向、绘制选项、输出格式测试
 */

use crate::errors::DrawError;
use crate::net::{DrawOptions, OutputFormat, RankDir};

#[test]
fn test_rankdir_parse_and_display() {
    assert_eq!("LR".parse::<RankDir>().unwrap(), RankDir::LeftRight);
    assert_eq!("tb".parse::<RankDir>().unwrap(), RankDir::TopBottom);
    assert_eq!(RankDir::BottomTop.to_string(), "BT");
    assert_eq!(RankDir::default(), RankDir::LeftRight);

    let err = "XY".parse::<RankDir>().unwrap_err();
    assert!(matches!(err, DrawError::UnknownRankDir(ref s) if s == "XY"));
}

#[test]
fn test_rankdir_label_separator() {
    assert_eq!(RankDir::TopBottom.label_separator(), " ");
    assert_eq!(RankDir::BottomTop.label_separator(), " ");
    assert_eq!(RankDir::LeftRight.label_separator(), "\n");
    assert_eq!(RankDir::RightLeft.label_separator(), "\n");
}

#[test]
fn test_draw_options_default_and_json() {
    let options = DrawOptions::default();
    assert_eq!(options.rankdir, RankDir::LeftRight);
    assert!(options.label_edges);
    assert!(options.param_edges);

    // 缺省字段取默认值
    let parsed: DrawOptions = serde_json::from_str(r#"{"rankdir": "BT", "param_edges": false}"#)
        .expect("解析失败");
    assert_eq!(parsed, DrawOptions::new(RankDir::BottomTop, true, false));
}

#[test]
fn test_output_format_from_extension() {
    assert_eq!(OutputFormat::from_extension("PNG"), Some(OutputFormat::Png));
    assert_eq!(OutputFormat::from_extension("jpeg"), Some(OutputFormat::Jpg));
    assert_eq!(OutputFormat::from_extension("dot"), Some(OutputFormat::Raw));
    assert_eq!(OutputFormat::from_extension("raw"), Some(OutputFormat::Raw));
    assert_eq!(OutputFormat::from_extension("xyz"), None);

    assert_eq!(OutputFormat::default(), OutputFormat::Png);
    assert_eq!(OutputFormat::Svg.extension(), "svg");
    assert!(OutputFormat::Raw.is_text());
    assert!(!OutputFormat::Pdf.is_text());
}
