use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::Level;
use wand_icon::{generate_icons, sizes, GeneratorConfig};

#[derive(Debug, Parser)]
#[clap(
    name = "wand-icon",
    about = "Render the magic-wand app icon at every iOS icon size"
)]
struct Args {
    /// Output directory.
    #[clap(short, long, value_name = "DIR", default_value = "AppIcon")]
    output: PathBuf,

    /// Custom PNG icon sizes to generate. When set, only these sizes are generated.
    #[clap(short, long, value_delimiter = ',', value_name = "SIZES")]
    png: Option<Vec<u32>>,

    /// Also write an Xcode Contents.json for the AppIcon set
    #[clap(long)]
    contents_json: bool,

    /// Print debug diagnostics to stderr
    #[clap(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            Level::DEBUG
        } else {
            Level::WARN
        })
        .with_writer(std::io::stderr)
        .init();

    let entries = match &args.png {
        Some(custom) => sizes::custom_sizes(custom),
        None => sizes::default_sizes(),
    };

    let config = GeneratorConfig {
        output: args.output,
        entries,
        write_contents_json: args.contents_json,
    };

    println!("Generating WishKit app icons...");
    let report = generate_icons(&config)?;

    println!(
        "\n✅ All icons generated in {}/ directory",
        config.output.display()
    );
    tracing::debug!(
        files = report.files.len(),
        rendered = report.rendered,
        "generation finished"
    );

    println!("\nTo use:");
    println!("1. Open WishKit.xcodeproj in Xcode");
    println!("2. Select Assets.xcassets in the navigator");
    println!("3. Click on AppIcon");
    if config.write_contents_json {
        println!("4. Replace the AppIcon.appiconset contents with the generated directory");
    } else {
        println!("4. Drag and drop the generated icons to their respective slots");
    }

    Ok(())
}
