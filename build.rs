fn main() {
    // BUILD_DATE feeds LONG_VERSION in src/cli.rs (`fingerbox --version`)
    let build_date = chrono::Utc::now()
        .format("%Y-%m-%d %H:%M")
        .to_string();
    println!("cargo:rustc-env=BUILD_DATE={}", build_date);
    println!("cargo:rerun-if-changed=build.rs");
}
