use std::path::Path;

use crate::imaging::domain::image_reader::ImageReader;
use crate::imaging::domain::image_writer::ImageWriter;
use crate::pipeline::emojify_image_use_case::{EmojifyImageUseCase, EmojifyOutcome};
use crate::shared::error::EmojifyError;

/// Single-file pipeline: read → emojify → write.
///
/// The output is written even when no faces were found, in which case it
/// is a copy of the input.
pub struct EmojifyFileUseCase {
    reader: Box<dyn ImageReader>,
    writer: Box<dyn ImageWriter>,
    emojify: EmojifyImageUseCase,
}

impl EmojifyFileUseCase {
    pub fn new(
        reader: Box<dyn ImageReader>,
        writer: Box<dyn ImageWriter>,
        emojify: EmojifyImageUseCase,
    ) -> Self {
        Self {
            reader,
            writer,
            emojify,
        }
    }

    pub fn execute(
        &mut self,
        input_path: &Path,
        output_path: &Path,
    ) -> Result<EmojifyOutcome, EmojifyError> {
        let frame = self.reader.read(input_path)?;
        let outcome = self.emojify.process(&frame)?;
        self.writer.write(output_path, &outcome.image)?;
        Ok(outcome)
    }

    pub fn image_use_case(&self) -> &EmojifyImageUseCase {
        &self.emojify
    }
}
