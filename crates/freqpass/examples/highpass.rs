use std::error::Error;

use image::ImageReader;

use freqpass::{
    apply_high_pass_with_spectrum, FilterKind, HighPassConfig, IdealRegion, IntensityGrid,
};

fn parse_kind(name: &str, order: u32) -> Option<FilterKind> {
    match name {
        "ideal" => Some(FilterKind::Ideal {
            region: IdealRegion::Square,
        }),
        "ideal-disk" => Some(FilterKind::Ideal {
            region: IdealRegion::Disk,
        }),
        "gaussian" => Some(FilterKind::Gaussian),
        "butterworth" => Some(FilterKind::Butterworth { order }),
        _ => None,
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 4 {
        eprintln!(
            "Usage: {} <input.png> <output.png> <ideal|ideal-disk|gaussian|butterworth> [d0] [order] [spectrum.png]",
            args[0]
        );
        std::process::exit(2);
    }

    let cutoff: f64 = args.get(4).map_or(Ok(30.0), |s| s.parse())?;
    let order: u32 = args.get(5).map_or(Ok(2), |s| s.parse())?;
    let Some(kind) = parse_kind(&args[3], order) else {
        eprintln!("Unknown filter kind: {}", args[3]);
        std::process::exit(2);
    };

    let gray = ImageReader::open(&args[1])?.decode()?.to_luma8();
    let input = IntensityGrid::from_gray(&gray);

    let config = HighPassConfig::new(kind, cutoff);
    let output = apply_high_pass_with_spectrum(&input, &config)?;

    output.image.to_gray().save(&args[2])?;
    println!(
        "Filtered {}x{} image with {:?}, D0 = {}.",
        input.cols(),
        input.rows(),
        kind,
        cutoff
    );

    if let Some(spectrum_path) = args.get(6) {
        output.spectrum.to_gray().save(spectrum_path)?;
        println!("Wrote spectrum to {spectrum_path}");
    }
    Ok(())
}
