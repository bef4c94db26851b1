use std::env;
use std::fs;

use anyhow::{bail, Context};
use log::info;

use ez_bencode::Decoder;

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    // 获取命令行参数
    let args: Vec<String> = env::args().collect();

    // 检查是否提供了文件路径作为参数
    if args.len() < 2 {
        bail!("Usage: {} <file_path>", args[0]);
    }

    // 获取文件路径
    let file_path = &args[1];
    let buffer = fs::read(file_path).with_context(|| format!("Failed to read {file_path}"))?;
    info!("read {} bytes from {}", buffer.len(), file_path);

    let nodes = Decoder::new(buffer)
        .decode_all()
        .with_context(|| format!("Failed to decode {file_path}"))?;

    for node in &nodes {
        println!("{}", node.to_json_pretty());
    }

    Ok(())
}
