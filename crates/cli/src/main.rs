use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use serde::Serialize;

use emojify_core::detection::infrastructure::json_face_detector::JsonFaceDetector;
use emojify_core::imaging::infrastructure::image_file_reader::ImageFileReader;
use emojify_core::imaging::infrastructure::image_file_writer::ImageFileWriter;
use emojify_core::overlay::infrastructure::directory_overlay_resolver::DirectoryOverlayResolver;
use emojify_core::pipeline::emojify_file_use_case::EmojifyFileUseCase;
use emojify_core::pipeline::emojify_image_use_case::{
    ClassifiedFace, EmojifyImageUseCase, EmojifyOutcome,
};
use emojify_core::pipeline::pipeline_logger::LogPipelineLogger;
use emojify_core::shared::constants::IMAGE_EXTENSIONS;
use emojify_core::shared::settings::EmojifySettings;

/// Overlay expression emoji onto the faces in a photo.
#[derive(Parser)]
#[command(name = "emojify")]
struct Cli {
    /// Input image file.
    input: PathBuf,

    /// Output image file.
    output: PathBuf,

    /// Face records exported by a detector (defaults to <input>.faces.json).
    #[arg(long)]
    faces: Option<PathBuf>,

    /// Directory holding the emoji overlays (smile.png, frown.png, ...).
    #[arg(long)]
    assets: PathBuf,

    /// Settings file (defaults to the per-user config location).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Eye-open probability threshold (0.0-1.0).
    #[arg(long)]
    eye_open_threshold: Option<f64>,

    /// Smiling probability threshold (0.0-1.0).
    #[arg(long)]
    smiling_threshold: Option<f64>,

    /// Overlay width relative to face width.
    #[arg(long)]
    scale_factor: Option<f64>,

    /// Write a JSON report of the classified faces to this path.
    #[arg(long)]
    report: Option<PathBuf>,
}

#[derive(Serialize)]
struct Report<'a> {
    faces_found: bool,
    faces: &'a [ClassifiedFace],
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;
    let settings = resolve_settings(&cli)?;

    let faces_path = cli
        .faces
        .clone()
        .unwrap_or_else(|| JsonFaceDetector::sidecar_path(&cli.input));
    log::info!("Reading face records from {}", faces_path.display());

    let resolver = DirectoryOverlayResolver::new(&cli.assets);
    let missing = resolver.missing_assets();
    if !missing.is_empty() {
        log::warn!("Missing overlay assets for: {missing:?}");
    }

    let emojify = EmojifyImageUseCase::from_settings(
        Box::new(JsonFaceDetector::new(faces_path)),
        Box::new(resolver),
        &settings,
    )?
    .with_logger(Box::new(LogPipelineLogger::new()));

    let mut use_case = EmojifyFileUseCase::new(
        Box::new(ImageFileReader::new()),
        Box::new(ImageFileWriter::new()),
        emojify,
    );
    let outcome = use_case.execute(&cli.input, &cli.output)?;
    use_case.image_use_case().logger().summary();

    if outcome.faces_found() {
        for (i, face) in outcome.faces.iter().enumerate() {
            log::info!("Face {i}: {}", face.category);
        }
    } else {
        eprintln!("No faces found");
    }

    if let Some(report_path) = &cli.report {
        write_report(report_path, &outcome)?;
        log::info!("Report written to {}", report_path.display());
    }

    log::info!("Output written to {}", cli.output.display());
    Ok(())
}

fn resolve_settings(cli: &Cli) -> Result<EmojifySettings, Box<dyn std::error::Error>> {
    let mut settings = match &cli.config {
        Some(path) => EmojifySettings::load_from(path)?,
        None => EmojifySettings::load()?,
    };
    if let Some(t) = cli.eye_open_threshold {
        settings.eye_open_threshold = t;
    }
    if let Some(t) = cli.smiling_threshold {
        settings.smiling_threshold = t;
    }
    if let Some(s) = cli.scale_factor {
        settings.scale_factor = s;
    }
    settings.validate()?;
    Ok(settings)
}

fn write_report(path: &Path, outcome: &EmojifyOutcome) -> Result<(), Box<dyn std::error::Error>> {
    let report = Report {
        faces_found: outcome.faces_found(),
        faces: &outcome.faces,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(&report)?)?;
    Ok(())
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.input.exists() {
        return Err(format!("Input file not found: {}", cli.input.display()).into());
    }
    if !is_image(&cli.input) {
        return Err(format!(
            "Unsupported input extension: {} (expected one of {})",
            cli.input.display(),
            IMAGE_EXTENSIONS.join(", ")
        )
        .into());
    }
    if !cli.assets.is_dir() {
        return Err(format!("Assets directory not found: {}", cli.assets.display()).into());
    }
    Ok(())
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        let mut full = vec!["emojify"];
        full.extend_from_slice(args);
        Cli::parse_from(full)
    }

    #[test]
    fn test_is_image() {
        assert!(is_image(Path::new("photo.JPG")));
        assert!(is_image(Path::new("a/b.webp")));
        assert!(!is_image(Path::new("clip.mp4")));
        assert!(!is_image(Path::new("noext")));
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("settings.json");
        fs::write(&config, r#"{ "eye_open_threshold": 0.3, "smiling_threshold": 0.4 }"#).unwrap();
        let config = config.to_str().unwrap().to_string();

        let parsed = cli(&[
            "in.png",
            "out.png",
            "--assets",
            "assets",
            "--config",
            &config,
            "--smiling-threshold",
            "0.8",
        ]);
        let settings = resolve_settings(&parsed).unwrap();

        assert_eq!(settings.eye_open_threshold, 0.3);
        assert_eq!(settings.smiling_threshold, 0.8);
        assert_eq!(settings.scale_factor, 0.9);
    }

    #[test]
    fn test_out_of_range_flag_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("settings.json");
        fs::write(&config, "{}").unwrap();
        let config = config.to_str().unwrap().to_string();

        let parsed = cli(&[
            "in.png",
            "out.png",
            "--assets",
            "assets",
            "--config",
            &config,
            "--eye-open-threshold",
            "2.0",
        ]);
        assert!(resolve_settings(&parsed).is_err());
    }

    #[test]
    fn test_validate_missing_input() {
        let parsed = cli(&["/nonexistent/in.png", "out.png", "--assets", "."]);
        let err = validate(&parsed).unwrap_err();
        assert!(err.to_string().contains("Input file not found"));
    }

    #[test]
    fn test_report_lists_faces() {
        use emojify_core::expression::domain::expression_category::ExpressionCategory;
        use emojify_core::expression::domain::face_signals::FaceSignals;
        use emojify_core::shared::frame::Frame;
        use emojify_core::shared::region::FaceRegion;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        let outcome = EmojifyOutcome {
            image: Frame::filled(1, 1, &[0, 0, 0]),
            faces: vec![ClassifiedFace {
                signals: FaceSignals::new(0.9, 0.9, 0.9, FaceRegion::new(1, 2, 3, 4)),
                category: ExpressionCategory::Smiling,
            }],
        };

        write_report(&path, &outcome).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["faces_found"], true);
        assert_eq!(json["faces"][0]["category"], "smiling");
        assert_eq!(json["faces"][0]["width"], 3);
    }
}
