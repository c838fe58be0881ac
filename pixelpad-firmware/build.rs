//! Build script for pixelpad-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates display.toml at compile time
//! - Converts assets/splash.png into the raw RGB565 splash image

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use pixelpad_core::config::DisplayConfig;
use pixelpad_core::{PANEL_HEIGHT, PANEL_WIDTH};

fn main() {
    setup_linker();
    validate_config();
    convert_splash();
}

/// Set up linker search paths and scripts
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate display.toml at compile time
///
/// The firmware parses the same file at boot with its own parser; checking
/// here turns a typo into a build error instead of a silent fallback.
fn validate_config() {
    println!("cargo:rerun-if-changed=display.toml");

    let config_path = Path::new("display.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: display.toml not found!                                  ║\n\
            ║                                                                  ║\n\
            ║  The firmware embeds display.toml as its configuration.          ║\n\
            ║  Please create one in the pixelpad-firmware directory.           ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read display.toml                              ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: DisplayConfig = match toml::from_str(&config_content) {
        Ok(config) => config,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid display.toml                                     ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&e.to_string())
            );
        }
    };

    if let Err(e) = config.validate() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: display.toml failed validation                           ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            format_error_lines(&e.to_string())
        );
    }

    println!("cargo:warning=display.toml validated successfully");
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Convert the splash PNG to the panel's raw stream format
///
/// The output holds 128x128 big-endian RGB565 pixels stored column-major
/// (byte offset `(x * H + y) * 2`), laid out so the image appears upright
/// when streamed in the unrotated orientation. A missing PNG produces an
/// empty file; the firmware then skips the splash.
fn convert_splash() {
    println!("cargo:rerun-if-changed=assets/splash.png");

    let out_path = PathBuf::from(env::var("OUT_DIR").unwrap()).join("splash.bin");
    let png_path = Path::new("assets/splash.png");

    if !png_path.exists() {
        println!("cargo:warning=assets/splash.png not found, building without a splash image");
        fs::write(&out_path, b"").unwrap();
        return;
    }

    let img = match image::open(png_path) {
        Ok(img) => img,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to decode assets/splash.png                       ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                {}\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&e.to_string())
            );
        }
    };

    let (w, h) = (PANEL_WIDTH as u32, PANEL_HEIGHT as u32);
    let rgb = img.resize_exact(w, h, FilterType::Triangle).to_rgb8();

    let mut bytes = Vec::with_capacity(PANEL_WIDTH * PANEL_HEIGHT * 2);
    for x in 0..w {
        for y in 0..h {
            let px = rgb.get_pixel(w - 1 - y, h - 1 - x);
            bytes.extend_from_slice(&rgb565(px[0], px[1], px[2]).to_be_bytes());
        }
    }

    fs::write(&out_path, &bytes).unwrap();
}

/// Pack 8-bit channels into RGB565
fn rgb565(r: u8, g: u8, b: u8) -> u16 {
    (u16::from(r >> 3) << 11) | (u16::from(g >> 2) << 5) | u16::from(b >> 3)
}
