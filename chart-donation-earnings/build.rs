use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest = Path::new(&out_dir).join("donator.json");

    // Bundled snapshot used when ./data.json cannot be fetched
    let fixture = Path::new("../fixtures/donator.json");
    if fixture.exists() {
        fs::copy(fixture, &dest).unwrap();
    } else {
        fs::write(
            &dest,
            r#"{"nickname":"","finance":{"periods":[{"graph":{"year":{},"half_year":{},"month":{}}}]}}"#,
        )
        .unwrap();
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../fixtures/donator.json");
}
