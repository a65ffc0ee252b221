use clap::Parser;
use image::ImageReader;
use std::path::PathBuf;

use handsign::classify::postprocess;
use handsign::{Prediction, SignClassifier};

#[derive(Parser)]
#[command(name = "handsign")]
#[command(about = "Classify ASL hand signs from a still image or camera capture")]
struct Cli {
    /// Path to input image file (omit to launch the GUI)
    #[arg(value_name = "IMAGE")]
    image_path: Option<PathBuf>,

    /// Capture one frame from the camera instead of reading a file
    #[arg(long)]
    camera: bool,

    /// Camera device to capture from
    #[arg(long, value_name = "DEV", default_value = "/dev/video0")]
    device: String,

    /// Path to the classification model
    #[arg(long, value_name = "FILE", default_value = "models/asl.rten")]
    model: PathBuf,

    /// Path to the newline-delimited label list
    #[arg(long, value_name = "FILE", default_value = "models/labels.txt")]
    labels: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Print the prediction as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    // No input means interactive mode
    if args.image_path.is_none() && !args.camera {
        #[cfg(feature = "gui")]
        {
            return handsign::gui::run(handsign::gui::GuiOptions {
                model_path: args.model,
                labels_path: args.labels,
                device_path: args.device,
            })
            .map_err(|e| anyhow::anyhow!("GUI exited with an error: {}", e));
        }
        #[cfg(not(feature = "gui"))]
        anyhow::bail!("No input given. Pass an IMAGE path or --camera.");
    }

    if args.verbose {
        println!("Loading model: {:?}", args.model);
    }
    let classifier = SignClassifier::load(&args.model, &args.labels)?.with_verbose(args.verbose);

    let prediction = if let Some(path) = &args.image_path {
        if args.verbose {
            println!("Loading image: {:?}", path);
        }
        let img = ImageReader::open(path)?
            .decode()
            .map_err(|e| anyhow::anyhow!("Failed to decode image: {}", e))?;
        if args.verbose {
            println!("Image loaded: {}x{}\n", img.width(), img.height());
        }
        classifier.classify(&img)?
    } else {
        capture_and_classify(classifier, &args.device, args.verbose)?
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&prediction)?);
    } else {
        println!("Label: {}", prediction.label);
        println!(
            "Confidence: {}",
            postprocess::format_confidence(prediction.score)
        );
    }

    Ok(())
}

#[cfg(target_os = "linux")]
fn capture_and_classify(
    classifier: SignClassifier,
    device: &str,
    verbose: bool,
) -> anyhow::Result<Prediction> {
    use handsign::camera::{FrameSource, V4l2Source};
    use handsign::classify_in_background;
    use std::sync::Arc;

    if verbose {
        println!("Capturing still frame from {}...", device);
    }
    let frame = V4l2Source::new(device).capture_still()?;
    if verbose {
        println!("Captured {}x{} frame\n", frame.width, frame.height);
    }
    let img = frame.to_image()?;

    // Inference runs on its own thread; block until the result comes back
    classify_in_background(Arc::new(classifier), img).wait()
}

#[cfg(not(target_os = "linux"))]
fn capture_and_classify(
    _classifier: SignClassifier,
    _device: &str,
    _verbose: bool,
) -> anyhow::Result<Prediction> {
    anyhow::bail!("Camera capture is only supported on Linux")
}
