//! Lumen command line renderer.
//!
//! Builds one of the preset scenes, renders it and writes the image.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use lumen_core::presets;
use lumen_renderer::{render, RenderConfig};

#[derive(Parser, Debug)]
#[command(name = "lumen", version, about = "Recursive ray tracer")]
struct Args {
    /// Preset scene to render (1, 2 or 3). Scenes 1 and 3 read
    /// `textures/space.jpg` and `models/rocket.obj` from `--assets`
    #[arg(short, long, default_value_t = 2, value_parser = parse_scene_id)]
    scene: u32,

    /// Output image; the format follows the extension [default: Scene_<id>.bmp]
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Worker threads (0 = one per core)
    #[arg(short = 'j', long)]
    threads: Option<usize>,

    #[arg(long)]
    width: Option<u32>,

    #[arg(long)]
    height: Option<u32>,

    /// Maximum reflection/refraction depth
    #[arg(short, long)]
    depth: Option<u32>,

    /// Override the preset camera's field of view (degrees)
    #[arg(long)]
    fov: Option<f32>,

    /// Directory holding `textures/` and `models/`
    #[arg(long, default_value = "assets")]
    assets: PathBuf,

    /// JSON render config; flags given on the command line take precedence
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl Args {
    /// Merge the config file (if any) with the command line flags.
    fn render_config(&self) -> Result<RenderConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => RenderConfig::default(),
        };

        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(depth) = self.depth {
            config.max_depth = depth;
        }
        if let Some(threads) = self.threads {
            config.threads = threads;
        }

        config.validate()?;
        Ok(config)
    }

    fn output_path(&self) -> PathBuf {
        self.out
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("Scene_{}.bmp", self.scene)))
    }
}

fn parse_scene_id(value: &str) -> Result<u32, String> {
    let id: u32 = value
        .parse()
        .map_err(|_| format!("`{value}` is not a scene id"))?;
    if presets::SCENE_IDS.contains(&id) {
        Ok(id)
    } else {
        Err(format!(
            "no scene {id}, expected one of {:?}",
            presets::SCENE_IDS
        ))
    }
}

fn load_config(path: &Path) -> Result<RenderConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse config {}", path.display()))?;
    log::debug!("Loaded render config from {}", path.display());
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .init();

    let args = Args::parse();
    let config = args.render_config()?;

    let mut preset = presets::build(args.scene, &args.assets)
        .with_context(|| format!("Failed to build scene {}", args.scene))?;
    if let Some(fov) = args.fov {
        preset.camera = preset.camera.with_fov(fov);
    }

    let frame = render(&preset.scene, &preset.camera, &config)?;

    let out = args.output_path();
    frame
        .save(&out)
        .with_context(|| format!("Failed to write {}", out.display()))?;

    log::info!("Done.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["lumen"]).unwrap();
        assert_eq!(args.scene, 2);
        assert_eq!(args.output_path(), PathBuf::from("Scene_2.bmp"));
        assert_eq!(args.render_config().unwrap(), RenderConfig::default());
    }

    #[test]
    fn test_flags_override() {
        let args = Args::try_parse_from([
            "lumen", "--scene", "3", "-j", "4", "--width", "320", "--height", "200", "-d", "5",
            "-o", "room.png",
        ])
        .unwrap();
        let config = args.render_config().unwrap();

        assert_eq!(args.output_path(), PathBuf::from("room.png"));
        assert_eq!(config.width, 320);
        assert_eq!(config.height, 200);
        assert_eq!(config.max_depth, 5);
        assert_eq!(config.threads, 4);
    }

    #[test]
    fn test_config_file_then_flags() {
        let dir = std::env::temp_dir().join(format!("lumen_cli_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("render.json");
        std::fs::write(&path, r#"{ "width": 640, "height": 480, "max_depth": 2 }"#).unwrap();

        let args = Args::try_parse_from([
            "lumen",
            "--config",
            path.to_str().unwrap(),
            "--height",
            "360",
        ])
        .unwrap();
        let config = args.render_config().unwrap();

        assert_eq!(config.width, 640);
        assert_eq!(config.height, 360);
        assert_eq!(config.max_depth, 2);
        assert_eq!(config.threads, 0);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_bad_config_is_error() {
        let args = Args::try_parse_from(["lumen", "-c", "/nonexistent/render.json"]).unwrap();
        assert!(args.render_config().is_err());

        let args = Args::try_parse_from(["lumen", "--width", "0"]).unwrap();
        assert!(args.render_config().is_err());
    }
    #[test]
    fn test_scene_id_must_exist() {
        for id in presets::SCENE_IDS {
            let args = Args::try_parse_from(["lumen", "--scene", &id.to_string()]).unwrap();
            assert_eq!(args.output_path(), PathBuf::from(format!("Scene_{id}.bmp")));
        }

        assert!(Args::try_parse_from(["lumen", "--scene", "9"]).is_err());
        assert!(Args::try_parse_from(["lumen", "--scene", "0"]).is_err());
        assert!(Args::try_parse_from(["lumen", "-s", "two"]).is_err());
    }
}
