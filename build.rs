// build.rs

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Common argument: UI directory
fn dir_arg() -> Arg {
    Arg::new("dir")
        .short('C')
        .long("dir")
        .value_name("PATH")
        .default_value(".")
        .global(true)
        .help("UI directory holding CMakeLists.txt / CMakeLists.txt.squareline")
}

fn build_cli() -> Command {
    Command::new("squareline-idf")
        .version(env!("CARGO_PKG_VERSION"))
        .author("squareline-idf Contributors")
        .about("Convert a SquareLine Studio UI export into an ESP-IDF component")
        .subcommand_required(false)
        .arg(dir_arg())
        .arg(
            Arg::new("json")
                .long("json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Print a JSON run summary on stdout"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .global(true)
                .action(ArgAction::SetTrue)
                .conflicts_with("verbose")
                .help("Only report warnings and errors"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Enable debug logging"),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert the export and fix LVGL includes (the default)"),
        )
        .subcommand(
            Command::new("detect")
                .about("Report whether a descriptor is a SquareLine export or not")
                .arg(Arg::new("file").required(true).help("Descriptor file to inspect")),
        )
        .subcommand(
            Command::new("fix-includes")
                .about("Only rewrite lvgl/lvgl.h includes in .c/.h files"),
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completion scripts")
                .arg(
                    Arg::new("shell")
                        .required(true)
                        .value_parser(["bash", "elvish", "fish", "powershell", "zsh"])
                        .help("Shell to generate completions for"),
                ),
        )
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // CARGO_MANIFEST_DIR is always set by cargo
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(e) => {
            println!("cargo:warning=CARGO_MANIFEST_DIR not set: {}", e);
            return;
        }
    };
    let man_dir = manifest_dir.join("man");

    if let Err(e) = fs::create_dir_all(&man_dir) {
        println!("cargo:warning=Failed to create man directory: {}", e);
        return;
    }

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();

    if let Err(e) = man.render(&mut buffer) {
        println!("cargo:warning=Failed to render man page: {}", e);
        return;
    }

    let man_path = man_dir.join("squareline-idf.1");
    if let Err(e) = fs::write(&man_path, buffer) {
        println!("cargo:warning=Failed to write man page: {}", e);
    }
}
