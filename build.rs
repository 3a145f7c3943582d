use std::fs;

fn main() {
    // Validate default config at compile time
    let config_path = "src/default_config.toml";
    println!("cargo:rerun-if-changed={}", config_path);

    let content = fs::read_to_string(config_path).expect("Failed to read default_config.toml");

    if let Err(e) = content.parse::<toml::Table>() {
        panic!("Invalid default_config.toml: {}", e);
    }

    // The bundled template must carry both placeholders
    let template_path = "src/default_template.html";
    println!("cargo:rerun-if-changed={}", template_path);

    let template =
        fs::read_to_string(template_path).expect("Failed to read default_template.html");
    for placeholder in ["{{ Title }}", "{{ Content }}"] {
        if !template.contains(placeholder) {
            panic!("default_template.html is missing {}", placeholder);
        }
    }
}
