/// Detector graph expected inside the `--face` directory.
pub const DETECTOR_MODEL_NAME: &str = "res10_300x300_ssd_iter_140000.onnx";

pub const DEFAULT_FACE_DIR: &str = "face_detector";
pub const DEFAULT_CLASSIFIER_MODEL: &str = "mask_detector.model";
pub const DEFAULT_CONFIDENCE: f64 = 0.5;

/// SSD input resolution (square).
pub const DETECTOR_INPUT_SIZE: u32 = 300;

/// Per-channel means subtracted from the detector blob, in B, G, R order.
pub const DETECTOR_MEAN_BGR: [f32; 3] = [104.0, 177.0, 123.0];

/// Values per SSD output row: batch, class, confidence, x1, y1, x2, y2.
pub const DETECTION_ROW_LEN: usize = 7;

/// MobileNetV2 classifier input resolution (square).
pub const CLASSIFIER_INPUT_SIZE: u32 = 224;

pub const WITH_MASK_COLOR: [u8; 3] = [0, 190, 0];
pub const NO_MASK_COLOR: [u8; 3] = [255, 0, 0];

/// Vertical gap between the label baseline and the top of the box.
pub const LABEL_OFFSET: i32 = 10;

pub const BOX_THICKNESS: u32 = 2;

pub const WINDOW_TITLE: &str = "Output";
