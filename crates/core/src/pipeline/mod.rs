pub mod classify_masks_use_case;
pub mod mask_config;
pub mod mask_report;
pub mod pipeline_logger;
pub mod region_filter;
