use std::time::Instant;

use serde::Serialize;

use crate::compositing::domain::overlay_compositor::OverlayCompositor;
use crate::compositing::infrastructure::cpu_overlay_compositor::CpuOverlayCompositor;
use crate::detection::domain::detector_session::DetectorSession;
use crate::detection::domain::face_detector::FaceDetector;
use crate::expression::domain::expression_category::ExpressionCategory;
use crate::expression::domain::expression_classifier::ExpressionClassifier;
use crate::expression::domain::face_signals::FaceSignals;
use crate::overlay::domain::overlay_resolver::OverlayResolver;
use crate::pipeline::pipeline_logger::{NullPipelineLogger, PipelineLogger};
use crate::shared::error::EmojifyError;
use crate::shared::frame::Frame;
use crate::shared::settings::EmojifySettings;

/// One processed face and the category chosen for it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ClassifiedFace {
    #[serde(flatten)]
    pub signals: FaceSignals,
    pub category: ExpressionCategory,
}

/// Result of emojifying one image.
#[derive(Clone, Debug)]
pub struct EmojifyOutcome {
    pub image: Frame,
    pub faces: Vec<ClassifiedFace>,
}

impl EmojifyOutcome {
    /// False when the detector reported no faces; `image` is then the input unchanged.
    pub fn faces_found(&self) -> bool {
        !self.faces.is_empty()
    }
}

/// Per-image pipeline: detect → classify → resolve → composite, per face.
///
/// Faces are handled in detector order and every overlay is drawn into one
/// accumulating output, so where overlays overlap the later face wins.
pub struct EmojifyImageUseCase {
    detector: Box<dyn FaceDetector>,
    resolver: Box<dyn OverlayResolver>,
    classifier: ExpressionClassifier,
    compositor: Box<dyn OverlayCompositor>,
    logger: Box<dyn PipelineLogger>,
}

impl EmojifyImageUseCase {
    pub fn new(
        detector: Box<dyn FaceDetector>,
        resolver: Box<dyn OverlayResolver>,
        classifier: ExpressionClassifier,
        compositor: Box<dyn OverlayCompositor>,
    ) -> Self {
        Self {
            detector,
            resolver,
            classifier,
            compositor,
            logger: Box::new(NullPipelineLogger),
        }
    }

    /// Builds the classifier and CPU compositor from validated settings.
    pub fn from_settings(
        detector: Box<dyn FaceDetector>,
        resolver: Box<dyn OverlayResolver>,
        settings: &EmojifySettings,
    ) -> Result<Self, EmojifyError> {
        settings.validate()?;
        Ok(Self::new(
            detector,
            resolver,
            ExpressionClassifier::new(settings.thresholds()),
            Box::new(CpuOverlayCompositor::new(settings.scale_factor)?),
        ))
    }

    pub fn with_logger(mut self, logger: Box<dyn PipelineLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn logger(&self) -> &dyn PipelineLogger {
        self.logger.as_ref()
    }

    /// Emojifies every detected face in `frame`. The input is never modified.
    pub fn process(&mut self, frame: &Frame) -> Result<EmojifyOutcome, EmojifyError> {
        // Released on every exit path when the session drops.
        let mut session = DetectorSession::open(self.detector.as_mut());

        let started = Instant::now();
        let detected = session.detect(frame)?;
        self.logger.timing("detect", elapsed_ms(started));
        self.logger.metric("faces", detected.len() as f64);
        log::debug!("Detected {} faces", detected.len());

        if detected.is_empty() {
            self.logger.info("No faces found");
            log::warn!("No faces found");
            return Ok(EmojifyOutcome {
                image: frame.clone(),
                faces: Vec::new(),
            });
        }

        let mut output = frame.clone();
        let mut faces: Vec<ClassifiedFace> = Vec::with_capacity(detected.len());
        for (i, signals) in detected.into_iter().enumerate() {
            let started = Instant::now();
            let category = self.classifier.classify(&signals);
            self.logger.timing("classify", elapsed_ms(started));

            let started = Instant::now();
            let overlay = self.resolver.resolve(category)?;
            self.logger.timing("resolve", elapsed_ms(started));

            if faces
                .iter()
                .any(|earlier| earlier.signals.region.iou(&signals.region) > 0.0)
            {
                log::debug!("Face {i} overlaps an earlier face; its overlay is drawn on top");
            }

            let started = Instant::now();
            output = self
                .compositor
                .composite(&output, &overlay, &signals.region)?;
            self.logger.timing("composite", elapsed_ms(started));

            log::debug!("Face {i}: {category}");
            faces.push(ClassifiedFace { signals, category });
        }

        log::info!("Overlaid emoji on {} faces", faces.len());
        Ok(EmojifyOutcome {
            image: output,
            faces,
        })
    }
}

fn elapsed_ms(started: Instant) -> f64 {
    started.elapsed().as_secs_f64() * 1000.0
}
