fn main() {
    println!("Proquint Codec Check");
    println!("====================");

    // Canonical IP-address vectors, network byte order
    println!("\n1. Known vectors:");
    let vectors = vec![
        ("127.0.0.1", 0x7F00_0001u32, "lusab-babad"),
        ("63.84.220.193", 0x3F54_DCC1, "gutih-tugad"),
        ("63.118.7.35", 0x3F76_0723, "gutuk-bisog"),
        ("216.68.232.21", 0xD844_E815, "todah-vobij"),
        ("192.168.1.1", 0xC0A8_0101, "safom-bahad"),
    ];

    for (address, value, expected) in vectors {
        let encoded = proquint::encode_u32(value, Some('-'));
        let mark = if encoded == expected { "✓" } else { "✗" };
        println!("  {:>15} → {} {}", address, encoded, mark);
    }

    // Boundary values
    println!("\n2. Boundary values:");
    for value in [0u32, 1, u32::MAX, 0x8000_0000] {
        let encoded = proquint::encode_u32(value, Some('-'));
        let decoded = proquint::decode_quint(&encoded, Some('-'));
        let mark = if decoded == Ok(value) { "✓" } else { "✗" };
        println!("  0x{:08x} → {} → {:?} {}", value, encoded, decoded, mark);
    }

    // Malformed input is rejected with a typed error
    println!("\n3. Malformed input:");
    for bad in ["lusab", "lusab-babe1", "lusa-bbabad"] {
        match proquint::decode_quint(bad, Some('-')) {
            Ok(_) => println!("  {:?} ✗ unexpectedly accepted", bad),
            Err(e) => println!("  {:?} ✓ rejected: {}", bad, e),
        }
    }

    // Random identifiers from the thread-local generator
    println!("\n4. Random identifiers:");
    let mut rng = rand::rng();
    for _ in 0..3 {
        let quint = proquint::Quint::random(&mut rng);
        println!("  {} (0x{:08x})", quint, quint.to_u32());
    }
}
