pub mod emojify_file_use_case;
pub mod emojify_image_use_case;
pub mod pipeline_logger;
