mod descriptor;
mod options;

use crate::net::{LayerRecord, NetDescriptor};

/// Data(batch=10) -> data -> Convolution(20, k3 s1 p0) -> conv1
fn data_conv_net() -> NetDescriptor {
    NetDescriptor::new("tiny")
        .with_layer(LayerRecord::new("input", "Data").with_tops(&["data"]).with_data(10))
        .with_layer(
            LayerRecord::new("conv", "Convolution")
                .with_bottoms(&["data"])
                .with_tops(&["conv1"])
                .with_convolution(20, 3, 1, 0),
        )
}

/// 类 LeNet 网络，含一个原地 ReLU
fn lenet() -> NetDescriptor {
    NetDescriptor::new("LeNet")
        .with_layer(
            LayerRecord::new("mnist", "Data")
                .with_tops(&["data", "label"])
                .with_data(64),
        )
        .with_layer(
            LayerRecord::new("conv1", "Convolution")
                .with_bottoms(&["data"])
                .with_tops(&["conv1"])
                .with_convolution(20, 5, 1, 0),
        )
        .with_layer(
            LayerRecord::new("pool1", "Pooling")
                .with_bottoms(&["conv1"])
                .with_tops(&["pool1"])
                .with_pooling(0, 2, 2, 0),
        )
        .with_layer(
            LayerRecord::new("ip1", "InnerProduct")
                .with_bottoms(&["pool1"])
                .with_tops(&["ip1"])
                .with_inner_product(500),
        )
        .with_layer(
            LayerRecord::new("relu1", "ReLU")
                .with_bottoms(&["ip1"])
                .with_tops(&["ip1"]),
        )
        .with_layer(
            LayerRecord::new("ip2", "InnerProduct")
                .with_bottoms(&["ip1"])
                .with_tops(&["ip2"])
                .with_inner_product(10),
        )
        .with_layer(
            LayerRecord::new("loss", "SoftmaxWithLoss")
                .with_bottoms(&["ip2", "label"])
                .with_tops(&["loss"]),
        )
}
