use std::path::Path;
use std::time::Instant;

use crate::classification::domain::mask_classifier::MaskClassifier;
use crate::classification::infrastructure::face_preprocessor::FacePreprocessor;
use crate::detection::domain::face_detector::FaceDetector;
use crate::imaging::domain::frame_display::FrameDisplay;
use crate::imaging::domain::image_reader::ImageReader;
use crate::pipeline::mask_report::MaskReport;
use crate::pipeline::pipeline_logger::PipelineLogger;
use crate::pipeline::region_filter::filter_detections;
use crate::rendering::domain::face_annotation::FaceAnnotation;
use crate::rendering::domain::frame_annotator::FrameAnnotator;
use crate::shared::error::MaskError;
use crate::shared::frame::Frame;

/// Single-image mask pipeline: read → detect → filter → crop → classify →
/// annotate → display.
pub struct ClassifyMasksUseCase {
    reader: Box<dyn ImageReader>,
    detector: Box<dyn FaceDetector>,
    preprocessor: FacePreprocessor,
    classifier: Box<dyn MaskClassifier>,
    annotator: Box<dyn FrameAnnotator>,
    display: Box<dyn FrameDisplay>,
    logger: Box<dyn PipelineLogger>,
    confidence: f64,
}

impl ClassifyMasksUseCase {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        reader: Box<dyn ImageReader>,
        detector: Box<dyn FaceDetector>,
        preprocessor: FacePreprocessor,
        classifier: Box<dyn MaskClassifier>,
        annotator: Box<dyn FrameAnnotator>,
        display: Box<dyn FrameDisplay>,
        logger: Box<dyn PipelineLogger>,
        confidence: f64,
    ) -> Self {
        Self {
            reader,
            detector,
            preprocessor,
            classifier,
            annotator,
            display,
            logger,
            confidence,
        }
    }

    /// Reads the image, annotates every classified face, and shows the
    /// result. Returns once the display is dismissed.
    pub fn execute(&mut self, image_path: &Path) -> Result<MaskReport, MaskError> {
        let start = Instant::now();
        let frame = self.reader.read(image_path)?;
        self.logger.timing("load", elapsed_ms(start));
        self.logger.info(&format!(
            "Loaded {} ({}x{})",
            image_path.display(),
            frame.width(),
            frame.height()
        ));

        let (annotated, report) = self.annotate(&frame)?;
        for line in report.lines() {
            self.logger.info(&line);
        }
        self.logger.summary();

        self.display.show(&annotated)?;
        Ok(report)
    }

    /// Runs detection and classification on `frame` and returns an annotated
    /// copy. `frame` itself is left untouched.
    pub fn annotate(&mut self, frame: &Frame) -> Result<(Frame, MaskReport), MaskError> {
        let start = Instant::now();
        let detections = self.detector.detect(frame)?;
        self.logger.timing("detect", elapsed_ms(start));

        let filtered =
            filter_detections(&detections, self.confidence, frame.width(), frame.height());
        let mut report = MaskReport {
            candidates: detections.len(),
            below_threshold: filtered.below_threshold,
            degenerate: filtered.degenerate,
            ..MaskReport::default()
        };

        let mut output = frame.clone();
        for face in &filtered.kept {
            let crop = match self.preprocessor.preprocess(frame, &face.bbox) {
                Ok(crop) => crop,
                Err(e) if e.is_recoverable() => {
                    log::warn!("{e}; skipping face");
                    report.skipped_crops += 1;
                    continue;
                }
                Err(e) => return Err(e),
            };

            let start = Instant::now();
            let prediction = self.classifier.classify(&crop)?;
            self.logger.timing("classify", elapsed_ms(start));

            let annotation = FaceAnnotation {
                bbox: face.bbox,
                detection_confidence: face.confidence,
                prediction,
            };
            self.annotator.annotate(&mut output, &annotation);
            report.faces.push(annotation);
        }

        self.logger.metric("candidates", report.candidates as f64);
        self.logger.metric("faces", report.faces.len() as f64);
        Ok((output, report))
    }
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
