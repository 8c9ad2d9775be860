/*
 * @Author       : 老董
 * @Date         : 2026-10-16
 * @Description  : 网络描述符测试
 */

use crate::errors::DrawError;
use crate::net::{ConvolutionParam, LayerRecord, NetDescriptor, PoolingParam};

#[test]
fn test_from_json_defaults() {
    let json = r#"{
        "name": "Demo",
        "layer": [
            {"name": "conv1", "type": "Convolution", "bottom": ["data"], "top": ["conv1"],
             "convolution_param": {"num_output": 32, "kernel_size": 3}},
            {"name": "pool1", "type": "Pooling", "bottom": ["conv1"], "top": ["pool1"]}
        ]
    }"#;
    let net = NetDescriptor::from_json(json).expect("解析失败");

    assert_eq!(net.name, "Demo");
    assert_eq!(net.layers.len(), 2);
    assert_eq!(net.layers[0].layer_type, "Convolution");
    // 未给出的字段取默认值：stride=1, pad=0
    assert_eq!(
        net.layers[0].convolution_param,
        ConvolutionParam {
            num_output: 32,
            kernel_size: 3,
            stride: 1,
            pad: 0,
        }
    );
    // 整个 pooling_param 缺失时池化方法为 MAX(0)
    assert_eq!(net.layers[1].pooling_param, PoolingParam::default());
    assert_eq!(net.layers[1].pooling_param.pool, 0);
    assert!(net.layers[1].param.is_empty());
}

#[test]
fn test_from_json_accepts_layers_alias() {
    let json = r#"{"layers": [{"name": "x", "type": "Input"}]}"#;
    let net = NetDescriptor::from_json(json).unwrap();
    assert_eq!(net.name, "");
    assert_eq!(net.layers[0].name, "x");
    assert!(net.layers[0].bottom.is_empty());
}

#[test]
fn test_json_roundtrip() {
    let net = NetDescriptor::new("rt").with_layer(
        LayerRecord::new("ip", "InnerProduct")
            .with_bottoms(&["x"])
            .with_tops(&["y"])
            .with_params(&["w", ""])
            .with_inner_product(7),
    );
    let json = net.to_json().expect("序列化失败");
    assert!(json.contains("\"type\": \"InnerProduct\""));

    let net2 = NetDescriptor::from_json(&json).expect("反序列化失败");
    assert_eq!(net, net2);
}

#[test]
fn test_from_json_file_not_found() {
    let result = NetDescriptor::from_json_file("no_such_net_description.json");
    assert!(matches!(result, Err(DrawError::Io(_))));
}

#[test]
fn test_from_json_file_invalid_json() {
    let path = "test_from_json_file_invalid_json.json";
    std::fs::write(path, "{ not json").unwrap();

    let result = NetDescriptor::from_json_file(path);
    assert!(matches!(result, Err(DrawError::Json(_))));

    std::fs::remove_file(path).ok();
}

#[test]
fn test_is_in_place() {
    let relu = LayerRecord::new("relu", "ReLU")
        .with_bottoms(&["x"])
        .with_tops(&["x"]);
    assert!(relu.is_in_place());

    let renamed = LayerRecord::new("relu", "ReLU")
        .with_bottoms(&["x"])
        .with_tops(&["y"]);
    assert!(!renamed.is_in_place());

    // 多个输入/输出时即使名字重合也不算原地
    let multi = LayerRecord::new("split", "Split")
        .with_bottoms(&["x"])
        .with_tops(&["x", "x2"]);
    assert!(!multi.is_in_place());

    assert!(!LayerRecord::new("empty", "Silence").is_in_place());
}
