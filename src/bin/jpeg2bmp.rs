//! jpeg2bmp CLI - decode a baseline JPEG file to a 24-bit BMP.

use clap::Parser;
use std::fs;
use std::path::PathBuf;

use jpeg2bmp::decoder::JpegDecoder;
use jpeg2bmp::stream_reader::Header;
use jpeg2bmp::JpegError;

/// Decode a baseline sequential JPEG image to a 24-bit BMP
#[derive(Parser)]
#[command(name = "jpeg2bmp")]
#[command(version)]
#[command(about = "Decode a baseline JPEG image to a 24-bit BMP", long_about = None)]
#[command(after_help = "EXAMPLES:
    jpeg2bmp photo.jpg
    jpeg2bmp photo.jpg -o out/photo.bmp
    jpeg2bmp --info photo.jpg

Without -o, the output path is the input path with its extension replaced
by .bmp.")]
struct Cli {
    /// Input JPEG file
    input: PathBuf,

    /// Output BMP path (defaults to the input path with a .bmp extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the parsed header instead of writing a BMP
    #[arg(long)]
    info: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(error) = run(&cli) {
        println!("Error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), JpegError> {
    let data = fs::read(&cli.input)?;
    let decoder = JpegDecoder::new(&data);

    if cli.info {
        let header = decoder.read_header()?;
        print_header(&header);
        return Ok(());
    }

    let image = decoder.decode()?;
    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| cli.input.with_extension("bmp"));
    fs::write(&output, image.to_bmp())?;

    println!(
        "Decoded {}x{} image to {}",
        image.frame_info.width,
        image.frame_info.height,
        output.display()
    );
    Ok(())
}

/// Dumps the parsed header: tables, geometry, and scan parameters.
fn print_header(header: &Header) {
    println!("DQT=============");
    for (id, table) in header.quantization_tables.iter().enumerate() {
        if let Some(table) = table {
            println!("Table ID: {id}");
            println!("Table Data:");
            for row in table.values.chunks(8) {
                let cells: Vec<String> = row.iter().map(|v| v.to_string()).collect();
                println!("{}", cells.join(" "));
            }
        }
    }

    println!("SOF=============");
    println!("Frame Type: Baseline DCT (SOF0)");
    println!("Height: {}", header.frame_info.height);
    println!("Width: {}", header.frame_info.width);

    println!("DHT=============");
    for (label, tables) in [
        ("DC Tables:", &header.huffman_dc_tables),
        ("AC Tables:", &header.huffman_ac_tables),
    ] {
        println!("{label}");
        for (id, table) in tables.iter().enumerate() {
            if let Some(table) = table {
                println!("Table ID: {id}");
                println!("Symbols:");
                for length in 0..16 {
                    let start = table.offsets[length] as usize;
                    let end = table.offsets[length + 1] as usize;
                    let symbols: Vec<String> = table.symbols[start..end]
                        .iter()
                        .map(|s| s.to_string())
                        .collect();
                    println!("{}: {}", length + 1, symbols.join(" "));
                }
            }
        }
    }

    println!("SOS=============");
    println!("Start of Selection: {}", header.start_of_selection);
    println!("End of Selection: {}", header.end_of_selection);
    println!(
        "Successive Approximation High: {}",
        header.successive_approximation_high
    );
    println!(
        "Successive Approximation Low: {}",
        header.successive_approximation_low
    );
    println!("Restart Interval: {}", header.restart_interval);
    println!("Color Components:");
    for (index, component) in header.components[..header.frame_info.component_count as usize]
        .iter()
        .enumerate()
    {
        println!("Component ID: {}", index + 1);
        println!(
            "Horizontal Sampling Factor: {}",
            component.horizontal_sampling_factor
        );
        println!(
            "Vertical Sampling Factor: {}",
            component.vertical_sampling_factor
        );
        println!("Quantization Table ID: {}", component.quantization_table_id);
        println!("Huffman DC Table ID: {}", component.dc_table_id);
        println!("Huffman AC Table ID: {}", component.ac_table_id);
    }
    println!("Length of Huffman Data: {}", header.huffman_data.len());
}
