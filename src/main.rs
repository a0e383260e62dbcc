use std::io;

use anyhow::Result;
use crossterm::style::Stylize;

use phone_cli::config::Config;
use phone_cli::session::Session;

fn print_help(use_color: bool) {
    if use_color {
        println!("{}", "phone-cli - Interactive phone book".blue().bold());
        println!();
        println!("{}", "Usage:".yellow());
        println!("  phone-cli [OPTIONS]");
        println!();
        println!("{}", "Options:".yellow());
        println!(
            "  {} - Generate config file with defaults",
            "--generate-config".green()
        );
        println!("  {}            - Show this help", "--help".green());
    } else {
        println!("phone-cli - Interactive phone book");
        println!();
        println!("Usage:");
        println!("  phone-cli [OPTIONS]");
        println!();
        println!("Options:");
        println!("  --generate-config - Generate config file with defaults");
        println!("  --help            - Show this help");
    }
    println!();
    println!("Commands (at the prompt):");
    println!("  1 - Search for a contact by name");
    println!("  2 - Add a contact (overwrites an existing name)");
    println!("  anything else - Quit");
    println!();
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    // Check for config file generation
    if args.contains(&"--generate-config".to_string()) {
        let path = phone_cli::app_paths::AppPaths::config_file()?;
        std::fs::write(&path, Config::create_default_with_comments())?;
        println!("Configuration file created at: {:?}", path);
        println!("Edit this file to customize phone-cli.");
        return Ok(());
    }

    let config = Config::load().unwrap_or_default();

    if args.contains(&"--help".to_string()) {
        print_help(config.display.use_color);
        return Ok(());
    }

    if config.behavior.log_to_file {
        match phone_cli::logging::init_file_logging() {
            Ok(log_path) => {
                eprintln!("Debug logs will be written to:");
                eprintln!("   {}", log_path.display());
                eprintln!("   Tail with: tail -f {}", log_path.display());
                eprintln!();
            }
            Err(e) => eprintln!("Warning: file logging disabled: {}", e),
        }
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock());
    session.run()?;

    Ok(())
}
