use std::path::PathBuf;
use std::process;

use clap::Parser;

use maskguard_core::classification::infrastructure::face_preprocessor::FacePreprocessor;
use maskguard_core::classification::infrastructure::onnx_mask_classifier::OnnxMaskClassifier;
use maskguard_core::detection::infrastructure::onnx_ssd_detector::OnnxSsdDetector;
use maskguard_core::imaging::infrastructure::image_file_reader::ImageFileReader;
use maskguard_core::imaging::infrastructure::window_display::WindowDisplay;
use maskguard_core::pipeline::classify_masks_use_case::ClassifyMasksUseCase;
use maskguard_core::pipeline::mask_config::MaskConfig;
use maskguard_core::pipeline::pipeline_logger::LogPipelineLogger;
use maskguard_core::rendering::infrastructure::cpu_frame_annotator::CpuFrameAnnotator;
use maskguard_core::shared::constants::{
    DEFAULT_CLASSIFIER_MODEL, DEFAULT_FACE_DIR, WINDOW_TITLE,
};

/// Face mask detection for a single image.
#[derive(Parser)]
#[command(name = "maskguard")]
struct Cli {
    /// Path to the input image.
    #[arg(short, long)]
    image: PathBuf,

    /// Directory containing the face detector model.
    #[arg(short, long, default_value = DEFAULT_FACE_DIR)]
    face: PathBuf,

    /// Path to the trained face mask classifier.
    #[arg(short, long, default_value = DEFAULT_CLASSIFIER_MODEL)]
    model: PathBuf,

    /// Minimum probability to keep a face detection (0.0-1.0).
    #[arg(short, long, default_value = "0.5")]
    confidence: f64,
}

impl Cli {
    fn into_config(self) -> MaskConfig {
        MaskConfig {
            image: self.image,
            face_dir: self.face,
            model: self.model,
            confidence: self.confidence,
        }
    }
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = Cli::parse().into_config();
    config.validate()?;

    let detector = OnnxSsdDetector::from_dir(&config.face_dir)?;
    let classifier = OnnxMaskClassifier::new(config.classifier_model_path())?;

    let mut use_case = ClassifyMasksUseCase::new(
        Box::new(ImageFileReader::new()),
        Box::new(detector),
        FacePreprocessor::default(),
        Box::new(classifier),
        Box::new(CpuFrameAnnotator::default()),
        Box::new(WindowDisplay::new(WINDOW_TITLE)),
        Box::new(LogPipelineLogger::new()),
        config.confidence,
    );

    let report = use_case.execute(&config.image)?;
    log::info!(
        "Classified {} of {} candidate face(s)",
        report.faces.len(),
        report.candidates
    );
    Ok(())
}
