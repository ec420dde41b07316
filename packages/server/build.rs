fn main() {
    // Rebuild when the embedded frontend output changes
    // (run `dx build --release` in packages/web first)
    println!("cargo:rerun-if-changed=../web/dist");
}
