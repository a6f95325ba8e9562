//! Build script for amalgam-cli.
//!
//! This script generates a man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs and
/// src/commands/expand.rs.
fn build_cli() -> Command {
    Command::new("amalgamate")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Amalgamate included headers into a single file")
        .long_about(
            "Flatten a tree of #include'd headers into one file. Local includes are \
             inlined once each; system includes are kept as written.",
        )
        .arg(
            Arg::new("root")
                .value_name("ROOT")
                .help("Root file to expand"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("PATH")
                .help("Write output to PATH instead of standard output"),
        )
        .arg(
            Arg::new("header")
                .short('H')
                .long("header")
                .value_name("PATH")
                .help("Replace the root file's header block with the contents of PATH"),
        )
        .arg(
            Arg::new("exclude")
                .short('e')
                .long("exclude")
                .value_name("PATH")
                .num_args(0..)
                .action(ArgAction::Append)
                .help("Treat PATH as already included"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("PATH")
                .help("Read run settings from a YAML file"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .action(ArgAction::SetTrue),
        )
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("amalgamate.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
