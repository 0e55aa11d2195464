fn main() {
    // Compile Slint UI files
    slint_build::compile("ui/main.slint").unwrap();

    // Rebuild when the bundled catalog changes (embedded with include_str!)
    println!("cargo:rerun-if-changed=data/catalog.json");
}
