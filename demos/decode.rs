use ez_bencode::{encode_to_bytes, BencodeNode, Decoder};

fn main() {
    let buf = "d 2:k1 2:v1 2:k2 l i1e i2e e 3:k03 i3e 2:k4 d 2:k5 i5e 2:k6 i6e e e".replace(" ", "");

    let root_node = Decoder::new(buf).decode_one().unwrap();
    println!("{}", root_node.to_json());

    let k2_node = root_node.dict_find(b"k2").unwrap();
    println!("{}", k2_node.to_json());

    for (i, item) in k2_node.as_list().unwrap().iter().enumerate() {
        println!("item_{} = {}", i, item.as_int().unwrap())
    }

    let mut k4 = root_node.dict_find_as_dict(b"k4").unwrap().clone();
    k4.insert("k0".into(), BencodeNode::Int(0));
    let encoded = encode_to_bytes(&BencodeNode::Dict(k4));
    println!("{}", String::from_utf8_lossy(&encoded));
}
