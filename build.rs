fn main() {
    // Date stamp shown in the footer
    let build_time = chrono::Utc::now().format("%Y-%m-%d").to_string();
    println!("cargo:rustc-env=BUILD_TIME={build_time}");

    // Rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
