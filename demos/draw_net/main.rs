/*
 * @Author       : 老董
 * @Date         : 2026-10-16
 * @Description  : 把 JSON 格式的网络描述画成图
 *                 用法: cargo run --example draw_net -- <net.json> <输出文件.png|svg|raw> [LR|RL|TB|BT]
 *                 设置 RUST_LOG=debug 可看到渲染统计
 */

use net_draw::errors::DrawError;
use net_draw::net::{DrawOptions, NetDescriptor, RankDir, draw_net_to_file};

fn main() -> Result<(), DrawError> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        eprintln!(
            "用法: {} <net.json> <输出文件> [LR|RL|TB|BT]",
            args.first().map(String::as_str).unwrap_or("draw_net")
        );
        std::process::exit(2);
    }

    let net = NetDescriptor::from_json_file(&args[1])?;
    let rankdir = match args.get(3) {
        Some(s) => s.parse::<RankDir>()?,
        None => RankDir::default(),
    };
    let options = DrawOptions {
        rankdir,
        ..Default::default()
    };

    println!("正在绘制网络`{}`（共 {} 层）...", net.name, net.layers.len());
    draw_net_to_file(&net, &args[2], &options)?;
    println!("已保存到 {}", args[2]);

    Ok(())
}
