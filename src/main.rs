use anyhow::Result;
use env_logger::Builder;
use log::LevelFilter;
use std::io::Write;
use std::path::PathBuf;
use swift_mock_generator::{analyze, generate_mocks};

// Simple CLI without clap
fn main() -> Result<()> {
    // Initialize logger
    Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] - {}",
                std::time::SystemTime::now()
                    .duration_since(std::time::UNIX_EPOCH)
                    .unwrap()
                    .as_secs(),
                record.level(),
                record.args()
            )
        })
        .filter(None, LevelFilter::Info)
        .init();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();

    // Check for --version command
    if args.len() > 1 && (args[1] == "--version" || args[1] == "-v") {
        println!("Swift Mock Generator v{}", swift_mock_generator::VERSION);
        return Ok(());
    }

    if args.len() < 2 {
        println!("Swift Mock Generator v{}", swift_mock_generator::VERSION);
        println!("\nUsage:");
        println!("  {} <INPUT> [--output PATH] [--json]", args[0]);
        println!("  {} --version", args[0]);
        println!("\nArguments:");
        println!("  INPUT                A file with one Swift function signature per line");
        println!("\nOptions:");
        println!("  --output, -o PATH    Save generated mocks to the specified file path");
        println!("  --json               Print the parsed model as JSON instead of mock text");
        println!("  --version, -v        Show version information");
        return Ok(());
    }

    let input_path = PathBuf::from(&args[1]);

    // Parse optional arguments
    let mut output_path = None;
    let mut json = false;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--output" | "-o" => {
                if i + 1 < args.len() {
                    output_path = Some(PathBuf::from(&args[i + 1]));
                    i += 2;
                } else {
                    println!("Error: Missing value for --output");
                    return Ok(());
                }
            }
            "--json" => {
                json = true;
                i += 1;
            }
            _ => {
                println!("Unknown argument: {}", args[i]);
                i += 1;
            }
        }
    }

    if json {
        // Analyze only, and dump the models instead of rendering mock text
        let content = std::fs::read_to_string(&input_path)?;
        let models = content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(analyze)
            .collect::<Result<Vec<_>, _>>()?;
        println!("{}", serde_json::to_string_pretty(&models)?);
        return Ok(());
    }

    let result = generate_mocks(&input_path, output_path.as_deref())?;

    // Print mocks if no output path specified
    if output_path.is_none() {
        println!("{}", result);
    } else {
        println!(
            "Generated mocks saved to: {}",
            output_path.unwrap().display()
        );
    }

    Ok(())
}
