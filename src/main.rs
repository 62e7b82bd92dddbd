use anyhow::Context;
use shapekit::{build_canvas, init_logging, Config, DragScript, Point, Vector, BUILD_DATE, VERSION};
use tracing::{info, warn};

/// Number of template shapes placed on the demo canvas.
const DEMO_SHAPES: usize = 3;

fn load_config() -> Config {
    let path = match Config::default_path() {
        Ok(path) => path,
        Err(e) => {
            warn!("Using default settings: {}", e);
            return Config::default();
        }
    };

    if !path.exists() {
        info!("No config at {}, using defaults", path.display());
        return Config::default();
    }

    match Config::load_from_file(&path) {
        Ok(config) => config,
        Err(e) => {
            warn!("Ignoring {}: {}", path.display(), e);
            Config::default()
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_logging()?;
    info!("ShapeKit {} (built {})", VERSION, BUILD_DATE);

    let config = load_config();
    let mut rng = rand::thread_rng();
    let mut canvas =
        build_canvas(&config, &mut rng, DEMO_SHAPES).context("Failed to populate canvas")?;

    // Pick up the middle shape and move it down.
    let translate = DragScript::new(Point::ZERO)
        .step(Vector::new(0.0, 10.0))
        .step(Vector::new(0.0, 25.0));
    let report = translate.run(&mut canvas, &config);
    for change in &report.changes {
        info!("{:?} {:?}", change.phase, change.kind);
    }

    // Drag the first anchor of the now selected shape, then cancel.
    let selected = canvas
        .model()
        .selected_shape()
        .cloned()
        .context("Translation did not select a shape")?;
    if let Some(anchor) = selected.path.commands().first().and_then(|c| c.end_point()) {
        let edit = DragScript::new(anchor + selected.origin.to_vector())
            .step(Vector::new(-8.0, -8.0))
            .cancelled();
        let report = edit.run(&mut canvas, &config);
        let path = canvas
            .model()
            .selected_shape()
            .map(|shape| shape.path.to_string())
            .unwrap_or_default();
        info!(
            "Anchor edit produced {} changes, path now {}",
            report.changes.len(),
            path
        );
    }

    Ok(())
}
