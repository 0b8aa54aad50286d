use std::env;
use std::fs;
use std::path::Path;

/// Кладёт config.toml из корня воркспейса рядом с бинарником,
/// чтобы `cargo run` видел тот же конфиг, что и продакшен-раскладка.
fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");

    // OUT_DIR выглядит как target/{profile}/build/backend-xxx/out,
    // поднимаемся до target/{profile}.
    let out_dir = env::var("OUT_DIR").unwrap();
    let profile = env::var("PROFILE").unwrap();
    let target_dir = Path::new(&out_dir)
        .ancestors()
        .find(|p| p.ends_with(&profile))
        .expect("Could not find target profile directory");

    let workspace_root = Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(|p| p.parent())
        .expect("Could not find workspace root");

    let source_config = workspace_root.join("config.toml");
    if source_config.exists() {
        let dest_config = target_dir.join("config.toml");
        fs::copy(&source_config, &dest_config)
            .unwrap_or_else(|e| panic!("Failed to copy config.toml: {}", e));
        println!("cargo:warning=Copied config.toml to {:?}", dest_config);
    } else {
        // Без файла сервер поднимется на встроенных значениях по умолчанию.
        println!(
            "cargo:warning=config.toml not found at {:?}, using default config",
            source_config
        );
    }
}
